//! Axum router construction for the control-plane API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::actions;
use crate::dashboard;
use crate::state::AppState;
use crate::stats;

/// Build the complete Axum router for the control-plane server.
///
/// The router includes:
/// - `GET /` -- dashboard page
/// - `GET /api/stats` -- polling snapshot of counters + event log
/// - `POST /batch-onboard` -- batch onboarding trigger
/// - `POST /book-lunch` -- lunch booking trigger
/// - `POST /create-identity` -- identity creation trigger
/// - `POST /request-approval` -- budget approval trigger
/// - `POST /order-device` -- device procurement trigger
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Polling snapshot
        .route("/api/stats", get(stats::get_stats))
        // Workflow triggers
        .route("/batch-onboard", post(actions::batch_onboard))
        .route("/book-lunch", post(actions::book_lunch))
        .route("/create-identity", post(actions::create_identity))
        .route("/request-approval", post(actions::request_approval))
        .route("/order-device", post(actions::order_device))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
