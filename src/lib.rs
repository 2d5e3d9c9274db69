// NB declare the public modules.
pub mod chain;
pub mod error;
pub mod marginal;
pub mod potential;
pub mod sum_product;
pub mod utils;

pub use chain::{chain_potential, CHAIN_LEN, TARGET};
pub use error::{MarginalError, PotentialError};
pub use marginal::{exact_marginals, marginal_x2, unnormalized_marginal, ExactMarginals};
pub use potential::{checked_pairwise_potential, pairwise_potential, Binary};
