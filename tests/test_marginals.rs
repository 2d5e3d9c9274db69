use chain_mrf::marginal::sum_over;
use chain_mrf::sum_product::sum_product_marginals;
use chain_mrf::utils::BinaryAssignments;
use chain_mrf::{exact_marginals, marginal_x2, unnormalized_marginal, Binary, CHAIN_LEN, TARGET};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::process::Command;

#[test]
fn test_marginal_x2_end_to_end() {
    let p = marginal_x2().unwrap();

    assert!((p[0] + p[1] - 1.0).abs() < 1e-9, "Marginal sums to {}", p[0] + p[1]);
    for v in p {
        assert!(v > 0.0 && v < 1.0, "Probability {} outside (0, 1)", v);
    }
}

#[test]
fn test_deterministic_across_runs() {
    let first = marginal_x2().unwrap();
    for _ in 0..10 {
        assert_eq!(marginal_x2().unwrap(), first);
    }
}

#[test]
fn test_accumulators_partition() {
    let z0 = unnormalized_marginal(Binary::Zero);
    let z1 = unnormalized_marginal(Binary::One);
    assert_eq!(z0 + z1, exact_marginals().partition);
}

#[test]
fn test_summation_order_invariant() {
    // NB seed for determinism.
    let mut rng = StdRng::seed_from_u64(42);

    for v in Binary::ALL {
        let nested: Vec<_> = BinaryAssignments::<CHAIN_LEN>::pinned(TARGET, v).collect();
        let expected = sum_over(nested.iter().copied());

        for _ in 0..8 {
            let mut shuffled = nested.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(sum_over(shuffled), expected);
        }
        assert_eq!(expected, unnormalized_marginal(v));
    }
}

#[test]
fn test_brute_force_agrees_with_sum_product() {
    let exact = exact_marginals().normalized().unwrap();
    let bp = sum_product_marginals().unwrap();

    let max_diff = exact
        .iter()
        .zip(bp.iter())
        .flat_map(|(e, b)| e.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()))
        .fold(0.0, f64::max);

    println!("Max discrepancy in marginals: {}", max_diff);
    assert!(max_diff < 1e-12);
}

#[test]
fn test_binary_prints_marginal() {
    let output = Command::new(env!("CARGO_BIN_EXE_chain-mrf"))
        .output()
        .expect("failed to run chain-mrf");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.trim();
    assert!(line.starts_with('[') && line.ends_with(']'), "Unexpected output: {}", line);

    let values: Vec<f64> = line[1..line.len() - 1]
        .split(',')
        .map(|s| s.trim().parse().unwrap())
        .collect();
    assert_eq!(values, marginal_x2().unwrap().to_vec());
}
