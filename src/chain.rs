use crate::potential::Binary;

/// Number of variables in the chain x1 - x2 - x3 - x4 - x5.
pub const CHAIN_LEN: usize = 5;

/// Zero-based position of x2, the variable whose marginal is reported.
pub const TARGET: usize = 1;

pub type Assignment = [Binary; CHAIN_LEN];

/// Adjacent pairs (i, i + 1); one pairwise factor per edge.
pub fn edges() -> impl Iterator<Item = (usize, usize)> {
    (0..CHAIN_LEN - 1).map(|i| (i, i + 1))
}

/// Unnormalized joint potential: product of the pairwise potentials along the chain.
pub fn chain_potential(x: &Assignment) -> f64 {
    edges().map(|(u, v)| x[u].potential(x[v])).product()
}
