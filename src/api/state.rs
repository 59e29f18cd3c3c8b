//! API server state

/// API server state
///
/// The service is stateless per request; the only shared state is the
/// configured epoch limit.
#[derive(Clone)]
pub struct AppState {
    /// Largest epoch accepted by the payouts endpoint
    pub max_epoch: i64,
}

impl AppState {
    pub fn new(max_epoch: i64) -> Self {
        Self { max_epoch }
    }
}
