//! Core types for epochpay

use serde::{Deserialize, Serialize};

/// Epoch identifier type
pub type Epoch = u64;

/// A single payout entry: a token (divisor of the epoch number) and the
/// share of the epoch's payout allotted to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisorWeight {
    pub token: Epoch,
    pub weight: f64,
}
