//! Epochpay - payout weight service
//!
//! Given an epoch number `n`, epochpay returns every divisor of `n` (the
//! "tokens" paid out in that epoch) paired with a normalized weight
//! `d / σ(n)`, where σ(n) is the sum of all divisors of `n` computed from
//! its prime factorization. Because the divisors of `n` sum to σ(n) by
//! definition, the weights of an epoch always sum to 1.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod weights;

pub use error::{Error, Result};
