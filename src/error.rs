use thiserror::Error;

/// Errors raised when evaluating a pairwise potential from raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PotentialError {
    #[error("value {value} is outside the binary domain {{0, 1}}")]
    OutOfDomain { value: usize },
}

/// Errors raised while normalizing marginals.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MarginalError {
    #[error("partition function is zero; cannot normalize {masses:?}")]
    DegeneratePartition { masses: [f64; 2] },
    #[error("no variable at chain position {index} (chain has {len})")]
    NoSuchVariable { index: usize, len: usize },
}
