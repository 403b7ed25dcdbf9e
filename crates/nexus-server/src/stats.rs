//! Read-only stats endpoint for polling clients.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use nexus_types::StatsSnapshot;

use crate::state::AppState;

/// Serve the current orchestration snapshot.
///
/// Takes a single read-guard acquisition, so the counter values and the
/// log belong to the same point in the mutation history. No side effects;
/// always succeeds.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsSnapshot> {
    let snapshot = state.orchestration.read().await.snapshot_all();
    Json(snapshot.to_stats())
}
