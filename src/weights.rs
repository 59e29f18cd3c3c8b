//! Divisor and weight computation for payout epochs.
//!
//! σ(n), the sum of divisors of `n`, is computed from the prime
//! factorization of `n`: a prime p dividing n with multiplicity k
//! contributes the geometric series 1 + p + p² + … + p^k, and σ(n) is the
//! product of those contributions over all distinct primes. This runs in
//! O(√n) arithmetic steps, versus O(n) for summing divisors directly.

use crate::error::{Error, Result};
use crate::types::{DivisorWeight, Epoch};

/// Sum of all positive divisors of `n`, including 1 and `n` itself.
///
/// Accumulates in u128: σ(n) exceeds u64 for some highly composite inputs.
/// σ(1) = 1 (the empty product).
pub fn sum_of_divisors(n: Epoch) -> u128 {
    let mut rem = n as u128;
    let mut sigma: u128 = 1;

    let mut p: u128 = 2;
    while p * p <= rem {
        if rem % p == 0 {
            let mut term: u128 = 1;
            let mut series: u128 = 1;
            while rem % p == 0 {
                rem /= p;
                term *= p;
                series += term;
            }
            sigma *= series;
        }
        p += 1;
    }

    // Anything left above 1 is a single prime factor larger than √n: all
    // smaller primes have already been divided out.
    if rem > 1 {
        sigma *= rem + 1;
    }

    sigma
}

/// All positive divisors of `n` in ascending order.
///
/// Walks candidates up to √n and pairs each hit `d` with `n / d`, so the
/// enumeration is O(√n) while preserving ascending output order.
pub fn divisors(n: Epoch) -> Vec<Epoch> {
    let mut low = Vec::new();
    let mut high = Vec::new();

    let mut d: Epoch = 1;
    while d <= n / d {
        if n % d == 0 {
            low.push(d);
            let paired = n / d;
            if paired != d {
                high.push(paired);
            }
        }
        d += 1;
    }

    high.reverse();
    low.extend(high);
    low
}

/// Payout weights for `epoch`: every divisor `d` of the epoch number paired
/// with `d / σ(epoch)`, ordered ascending by divisor.
///
/// The weights always sum to 1 since the divisors sum to σ(epoch). Fails
/// with [`Error::InvalidEpoch`] when `epoch < 1`; a silent empty result
/// would mask caller bugs.
pub fn compute_weights(epoch: i64) -> Result<Vec<DivisorWeight>> {
    if epoch < 1 {
        return Err(Error::invalid_epoch(format!(
            "epoch must be a positive integer, got {}",
            epoch
        )));
    }
    let n = epoch as Epoch;

    // Factorization above works on its own copy; divisor enumeration must
    // see the original n.
    let sigma = sum_of_divisors(n) as f64;

    Ok(divisors(n)
        .into_iter()
        .map(|token| DivisorWeight {
            token,
            weight: token as f64 / sigma,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference σ by naive trial-division summation.
    fn sigma_naive(n: u64) -> u128 {
        (1..=n).filter(|d| n % d == 0).map(|d| d as u128).sum()
    }

    #[test]
    fn sigma_matches_naive_summation() {
        for n in 1..=10_000u64 {
            assert_eq!(
                sum_of_divisors(n),
                sigma_naive(n),
                "sigma mismatch at n={}",
                n
            );
        }
    }

    #[test]
    fn divisors_are_exact_and_ascending() {
        for n in 1..=2_000u64 {
            let found = divisors(n);
            let expected: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(found, expected, "divisor mismatch at n={}", n);
        }
    }

    #[test]
    fn weights_sum_to_one() {
        for epoch in [1i64, 2, 6, 12, 13, 36, 97, 360, 5040, 999_983] {
            let total: f64 = compute_weights(epoch)
                .unwrap()
                .iter()
                .map(|w| w.weight)
                .sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "weights for epoch {} sum to {}",
                epoch,
                total
            );
        }
    }

    #[test]
    fn epoch_one_pays_everything_to_token_one() {
        let weights = compute_weights(1).unwrap();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].token, 1);
        assert_eq!(weights[0].weight, 1.0);
    }

    #[test]
    fn epoch_six_splits_over_twelve() {
        let weights = compute_weights(6).unwrap();
        let tokens: Vec<u64> = weights.iter().map(|w| w.token).collect();
        assert_eq!(tokens, vec![1, 2, 3, 6]);

        let expected = [1.0 / 12.0, 2.0 / 12.0, 3.0 / 12.0, 6.0 / 12.0];
        for (got, want) in weights.iter().zip(expected) {
            assert!((got.weight - want).abs() < 1e-12);
        }
    }

    #[test]
    fn epoch_twelve_sigma_from_factorization() {
        // σ(12) = (1 + 2 + 4)(1 + 3) = 28
        assert_eq!(sum_of_divisors(12), 28);

        let weights = compute_weights(12).unwrap();
        let tokens: Vec<u64> = weights.iter().map(|w| w.token).collect();
        assert_eq!(tokens, vec![1, 2, 3, 4, 6, 12]);
        assert!((weights[5].weight - 12.0 / 28.0).abs() < 1e-12);
    }

    #[test]
    fn prime_epoch_has_two_tokens() {
        assert_eq!(sum_of_divisors(13), 14);

        let weights = compute_weights(13).unwrap();
        let tokens: Vec<u64> = weights.iter().map(|w| w.token).collect();
        assert_eq!(tokens, vec![1, 13]);
        assert!((weights[0].weight - 1.0 / 14.0).abs() < 1e-12);
        assert!((weights[1].weight - 13.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn leftover_prime_factor_above_sqrt() {
        // n = 2p with p prime and p > √n: the trailing factor must be
        // recognized as prime after trial division stops at √n.
        let n = 2 * 1_000_003u64;
        assert_eq!(sum_of_divisors(n), 3 * (1 + 1_000_003u128));
    }

    #[test]
    fn non_positive_epochs_are_rejected() {
        assert!(matches!(compute_weights(0), Err(Error::InvalidEpoch(_))));
        assert!(matches!(compute_weights(-5), Err(Error::InvalidEpoch(_))));
    }
}
