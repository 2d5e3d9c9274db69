use crate::error::MarginalError;
use crate::potential::Binary;

/// Advances `assignment` to the next binary configuration in row-major order
/// (last position fastest), leaving position `skip` fixed. Returns false once
/// every configuration has been visited.
pub fn next_assignment(assignment: &mut [Binary], skip: Option<usize>) -> bool {
    for (j, val) in assignment.iter_mut().enumerate().rev() {
        if Some(j) == skip {
            continue;
        }
        match *val {
            Binary::Zero => {
                *val = Binary::One;
                return true;
            }
            Binary::One => *val = Binary::Zero,
        }
    }
    false
}

/// Cartesian product of `N` binary digits, with optionally one position pinned.
///
/// Yields `2^N` assignments (or `2^(N-1)` when pinned), each exactly once.
pub struct BinaryAssignments<const N: usize> {
    current: [Binary; N],
    skip: Option<usize>,
    done: bool,
}

impl<const N: usize> BinaryAssignments<N> {
    pub fn new() -> Self {
        Self {
            current: [Binary::Zero; N],
            skip: None,
            done: false,
        }
    }

    /// Enumerate with `current[index] == value` held fixed.
    ///
    /// An `index` past the end pins nothing.
    pub fn pinned(index: usize, value: Binary) -> Self {
        let mut current = [Binary::Zero; N];
        let skip = if index < N {
            current[index] = value;
            Some(index)
        } else {
            None
        };
        Self {
            current,
            skip,
            done: false,
        }
    }
}

impl<const N: usize> Default for BinaryAssignments<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Iterator for BinaryAssignments<N> {
    type Item = [Binary; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current;
        self.done = !next_assignment(&mut self.current, self.skip);
        Some(out)
    }
}

/// Divides a pair of unnormalized masses by their sum.
pub fn normalize(masses: [f64; 2]) -> Result<[f64; 2], MarginalError> {
    let norm = masses[0] + masses[1];
    if norm == 0.0 {
        return Err(MarginalError::DegeneratePartition { masses });
    }
    Ok([masses[0] / norm, masses[1] / norm])
}
