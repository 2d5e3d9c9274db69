use crate::error::PotentialError;

/// Weight of a (1, 1) edge.
pub const ONE_ONE: f64 = 3.0;
/// Weight of a (0, 0) edge.
pub const ZERO_ZERO: f64 = 2.0;
/// Weight of a disagreeing edge.
pub const MIXED: f64 = 1.0;

/// Domain of every variable in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Binary {
    Zero,
    One,
}

impl Binary {
    pub const ALL: [Binary; 2] = [Binary::Zero, Binary::One];

    pub fn index(self) -> usize {
        match self {
            Binary::Zero => 0,
            Binary::One => 1,
        }
    }

    /// Pairwise potential with `other`; total on the binary domain.
    pub fn potential(self, other: Binary) -> f64 {
        match (self, other) {
            (Binary::One, Binary::One) => ONE_ONE,
            (Binary::Zero, Binary::Zero) => ZERO_ZERO,
            _ => MIXED,
        }
    }
}

impl TryFrom<usize> for Binary {
    type Error = PotentialError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Binary::Zero),
            1 => Ok(Binary::One),
            _ => Err(PotentialError::OutOfDomain { value }),
        }
    }
}

impl From<Binary> for usize {
    fn from(b: Binary) -> usize {
        b.index()
    }
}

/// Pairwise potential on raw integers.
///
/// NB inputs outside {0, 1} weigh 0.0 rather than failing, which keeps
/// parity with fixtures generated from the integer form. Use
/// [`checked_pairwise_potential`] to reject them instead.
pub fn pairwise_potential(a: usize, b: usize) -> f64 {
    checked_pairwise_potential(a, b).unwrap_or(0.0)
}

pub fn checked_pairwise_potential(a: usize, b: usize) -> Result<f64, PotentialError> {
    let a = Binary::try_from(a)?;
    let b = Binary::try_from(b)?;
    Ok(a.potential(b))
}

/// Row-major 2x2 table of the pairwise potential, indexed by `a * 2 + b`.
pub fn potential_table() -> [f64; 4] {
    let mut table = [0.0; 4];
    for a in Binary::ALL {
        for b in Binary::ALL {
            table[a.index() * 2 + b.index()] = a.potential(b);
        }
    }
    table
}
