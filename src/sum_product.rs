use crate::chain::CHAIN_LEN;
use crate::error::MarginalError;
use crate::potential::potential_table;
use crate::utils::normalize;

/// Forward messages; alpha[t] is the (normalized) message arriving at x_{t+1} from the left.
pub fn forward(table: &[f64; 4]) -> Result<[[f64; 2]; CHAIN_LEN], MarginalError> {
    let mut alpha = [[0.0; 2]; CHAIN_LEN];
    alpha[0] = normalize([1.0, 1.0])?;

    for t in 1..CHAIN_LEN {
        let mut next = [0.0; 2];
        for (j, p) in next.iter_mut().enumerate() {
            for i in 0..2 {
                *p += alpha[t - 1][i] * table[i * 2 + j];
            }
        }
        alpha[t] = normalize(next)?;
    }
    Ok(alpha)
}

/// Backward messages; beta[t] is the (normalized) message arriving at x_{t+1} from the right.
pub fn backward(table: &[f64; 4]) -> Result<[[f64; 2]; CHAIN_LEN], MarginalError> {
    let mut beta = [[0.0; 2]; CHAIN_LEN];
    beta[CHAIN_LEN - 1] = normalize([1.0, 1.0])?;

    for t in (0..CHAIN_LEN - 1).rev() {
        let mut prev = [0.0; 2];
        for (i, p) in prev.iter_mut().enumerate() {
            for j in 0..2 {
                *p += table[i * 2 + j] * beta[t + 1][j];
            }
        }
        beta[t] = normalize(prev)?;
    }
    Ok(beta)
}

/// Marginals of every chain variable by sum-product message passing.
pub fn sum_product_marginals() -> Result<[[f64; 2]; CHAIN_LEN], MarginalError> {
    let table = potential_table();
    let alpha = forward(&table)?;
    let beta = backward(&table)?;

    let mut marginals = [[0.0; 2]; CHAIN_LEN];
    for t in 0..CHAIN_LEN {
        marginals[t] = normalize([alpha[t][0] * beta[t][0], alpha[t][1] * beta[t][1]])?;
    }
    Ok(marginals)
}
