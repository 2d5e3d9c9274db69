use log::debug;

use crate::chain::{chain_potential, Assignment, CHAIN_LEN, TARGET};
use crate::error::MarginalError;
use crate::potential::Binary;
use crate::utils::{normalize, BinaryAssignments};

/// Sum of the chain potential over every assignment with `x[index] == value`.
pub fn unnormalized_marginal_at(index: usize, value: Binary) -> Result<f64, MarginalError> {
    if index >= CHAIN_LEN {
        return Err(MarginalError::NoSuchVariable {
            index,
            len: CHAIN_LEN,
        });
    }

    // NB 2^(N-1) terms, nuisance variables in nested order (first outer, last inner).
    let acc: f64 = BinaryAssignments::<CHAIN_LEN>::pinned(index, value)
        .map(|x| chain_potential(&x))
        .sum();

    debug!("Unnormalized marginal x{}={}: {}", index + 1, value.index(), acc);
    Ok(acc)
}

/// Unnormalized marginal of x2, summing out x1, x3, x4 and x5.
pub fn unnormalized_marginal(x2: Binary) -> f64 {
    let mut acc = 0.0;
    for x in BinaryAssignments::<CHAIN_LEN>::pinned(TARGET, x2) {
        acc += chain_potential(&x);
    }
    acc
}

/// [P(x2=0), P(x2=1)].
pub fn marginal_x2() -> Result<[f64; 2], MarginalError> {
    let z0 = unnormalized_marginal(Binary::Zero);
    let z1 = unnormalized_marginal(Binary::One);

    debug!("Unnormalized x2 marginal: z0={z0}, z1={z1}, Z={}", z0 + z1);

    normalize([z0, z1])
}

/// Unnormalized per-variable masses and the partition function from a single
/// exhaustive pass over the joint.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactMarginals {
    pub masses: [[f64; 2]; CHAIN_LEN],
    pub partition: f64,
}

impl ExactMarginals {
    pub fn normalized(&self) -> Result<[[f64; 2]; CHAIN_LEN], MarginalError> {
        let mut out = [[0.0; 2]; CHAIN_LEN];
        for (dst, &mass) in out.iter_mut().zip(self.masses.iter()) {
            *dst = normalize(mass)?;
        }
        Ok(out)
    }

    pub fn marginal(&self, index: usize) -> Result<[f64; 2], MarginalError> {
        let mass = self.masses.get(index).ok_or(MarginalError::NoSuchVariable {
            index,
            len: CHAIN_LEN,
        })?;
        normalize(*mass)
    }
}

/// Brute-force marginals for every variable in the chain.
pub fn exact_marginals() -> ExactMarginals {
    let mut masses = [[0.0; 2]; CHAIN_LEN];
    let mut partition = 0.0;

    // NB warning: exponential in CHAIN_LEN.
    for config in BinaryAssignments::<CHAIN_LEN>::new() {
        let weight = chain_potential(&config);
        partition += weight;

        for (mass, state) in masses.iter_mut().zip(config.iter()) {
            mass[state.index()] += weight;
        }
    }

    debug!("Partition function Z={partition}");
    ExactMarginals { masses, partition }
}

/// Sums the chain potential over `configs` in whatever order they arrive.
pub fn sum_over<I>(configs: I) -> f64
where
    I: IntoIterator<Item = Assignment>,
{
    configs.into_iter().map(|x| chain_potential(&x)).sum()
}
