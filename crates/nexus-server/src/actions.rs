//! Workflow trigger handlers.
//!
//! Each handler validates its typed request body, performs its domain
//! decision, and mutates the shared orchestration state. Counter bumps and
//! their companion log lines run inside one write-guard critical section,
//! so the stats reader never observes one without the other.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/batch-onboard` | Onboard a batch of candidates |
//! | `POST` | `/book-lunch` | Book a welcome lunch slot |
//! | `POST` | `/create-identity` | Request a single user credential |
//! | `POST` | `/request-approval` | Escalate an over-budget purchase |
//! | `POST` | `/order-device` | Order hardware for a new hire |

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use nexus_types::{
    BatchOnboardRequest, BatchOnboardResponse, BookLunchRequest, BookLunchResponse, CounterKind,
    CreateIdentityRequest, CreateIdentityResponse, OnboardResult, OrderDeviceRequest,
    OrderDeviceResponse, OrderId, RequestApprovalRequest, RequestApprovalResponse,
};
use rand::Rng;
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Estimated prompt tokens saved per candidate folded into a batch call.
const TOKENS_SAVED_PER_CANDIDATE: u64 = 150;

// ---------------------------------------------------------------------------
// POST /batch-onboard
// ---------------------------------------------------------------------------

/// Onboard a batch of candidates in one call.
///
/// Bumps the call counter and the token-savings estimate, then logs the
/// two-phase progression (trigger, then success after a simulated
/// processing delay). The delay suspends without holding the state lock,
/// so concurrent handlers and readers are never blocked by it.
pub async fn batch_onboard(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BatchOnboardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let count = body.candidates.len();
    let count_u64 = u64::try_from(count).unwrap_or(u64::MAX);
    let tokens_saved = TOKENS_SAVED_PER_CANDIDATE.saturating_mul(count_u64);

    info!(count, department = %body.department, "batch onboarding triggered");

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.bump_counter(CounterKind::TotalCalls, 1);
        orchestration.bump_counter(CounterKind::TokensSaved, tokens_saved);
        orchestration.record_event(format!(
            "BATCH TRIGGER: Onboarding {count} candidates for {}",
            body.department
        ));
    }

    // Two-phase progression for the dashboard. The write guard above is
    // already dropped; nothing holds the lock across this suspension.
    tokio::time::sleep(state.batch_latency).await;

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.record_event(format!(
            "SUCCESS: Identity & Slack provisioning complete for {}",
            body.candidates.join(", ")
        ));
    }

    let results = body
        .candidates
        .iter()
        .map(|name| OnboardResult::onboarded(name.clone()))
        .collect();

    Ok(Json(BatchOnboardResponse::completed(results)))
}

// ---------------------------------------------------------------------------
// POST /book-lunch
// ---------------------------------------------------------------------------

/// Book a welcome lunch for a new hire.
///
/// Any date containing "monday" (case-insensitive) hits the conflict
/// path: the manager is busy and an alternative slot is suggested. The
/// conflict is a business outcome carried in an HTTP 200 response, not a
/// transport error.
pub async fn book_lunch(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookLunchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let conflict = body.date.to_lowercase().contains("monday");

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.bump_counter(CounterKind::TotalCalls, 1);
        orchestration.record_event(format!(
            "CALENDAR: Requesting slot for {} on {}",
            body.new_hire_name, body.date
        ));

        if conflict {
            orchestration.record_event(
                "CONFLICT: Manager busy on Monday. Sending suggestion: Tuesday.",
            );
        } else {
            orchestration.record_event(format!(
                "BOOKED: Lunch confirmed for {} at 12:00 PM",
                body.date
            ));
        }
    }

    if conflict {
        info!(manager = %body.manager_email, date = %body.date, "lunch slot conflict");
        Ok(Json(BookLunchResponse::manager_busy()))
    } else {
        Ok(Json(BookLunchResponse::confirmed()))
    }
}

// ---------------------------------------------------------------------------
// POST /create-identity
// ---------------------------------------------------------------------------

/// Request a single user credential.
pub async fn create_identity(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateIdentityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    info!(employee = %body.employee_name, "identity creation requested");

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.bump_counter(CounterKind::TotalCalls, 1);
        orchestration.record_event("IDENTITY: Single user credential generation requested.");
    }

    Ok(Json(CreateIdentityResponse::ok()))
}

// ---------------------------------------------------------------------------
// POST /request-approval
// ---------------------------------------------------------------------------

/// Escalate an over-budget purchase to governance.
pub async fn request_approval(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RequestApprovalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    info!(amount = %body.amount, reason = %body.reason, "approval requested");

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.bump_counter(CounterKind::TotalCalls, 1);
        orchestration.record_event(format!(
            "GOVERNANCE: Budget exceeded ({}). Ticket #992 sent to CFO.",
            body.amount
        ));
    }

    Ok(Json(RequestApprovalResponse::pending()))
}

// ---------------------------------------------------------------------------
// POST /order-device
// ---------------------------------------------------------------------------

/// Order hardware for a new hire.
pub async fn order_device(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OrderDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let order_id = OrderId::new(rand::rng().random_range(1000..=9999));

    info!(employee = %body.employee_email, device = %body.device_type, %order_id, "device ordered");

    {
        let mut orchestration = state.orchestration.write().await;
        orchestration.bump_counter(CounterKind::TotalCalls, 1);
        orchestration.record_event(format!(
            "PROCUREMENT: Ordering {} for {}",
            body.device_type, body.employee_email
        ));
    }

    Ok(Json(OrderDeviceResponse::ordered(order_id)))
}
