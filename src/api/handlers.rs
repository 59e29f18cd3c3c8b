//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::time::Instant;

use crate::api::AppState;
use crate::error::Error;
use crate::types::DivisorWeight;
use crate::weights::compute_weights;

/// Health check with build metadata
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_epoch: state.max_epoch,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub max_epoch: i64,
}

/// Payout weights for a single epoch
///
/// Responds with a JSON array of `{token, weight}` pairs ordered ascending
/// by token; the weights sum to 1.
pub async fn payouts(
    State(state): State<AppState>,
    Path(epoch): Path<i64>,
) -> Result<Json<Vec<DivisorWeight>>, (StatusCode, String)> {
    if epoch > state.max_epoch {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "epoch {} exceeds the configured maximum {}",
                epoch, state.max_epoch
            ),
        ));
    }

    let start = Instant::now();

    let weights = compute_weights(epoch).map_err(|e| match e {
        Error::InvalidEpoch(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    })?;

    tracing::debug!(
        epoch,
        tokens = weights.len(),
        took_us = start.elapsed().as_micros() as u64,
        "Computed payout weights"
    );

    Ok(Json(weights))
}
