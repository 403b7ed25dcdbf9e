//! Integration tests for the control-plane API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

// Tests use expect/unwrap extensively for clarity -- panicking on failure
// is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use nexus_server::build_router;
use nexus_server::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Fresh (unseeded) state with no batch delay.
fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Duration::ZERO))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn fetch_stats(router: axum::Router) -> Value {
    let response = router
        .oneshot(Request::get("/api/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// =========================================================================
// Dashboard + stats
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_stats_on_fresh_state() {
    let router = build_router(test_state());

    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 0);
    assert_eq!(stats["tokens_saved"], 0);
    assert_eq!(stats["active_agents"], 1);
    assert_eq!(stats["logs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_stats_on_seeded_demo_state() {
    let state = Arc::new(AppState::seeded(Duration::ZERO));
    let router = build_router(state);

    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 142);
    assert_eq!(stats["tokens_saved"], 4500);
    assert_eq!(stats["active_agents"], 1);
    assert_eq!(stats["logs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_stats_log_times_are_formatted_to_seconds() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/create-identity",
            &json!({"employee_name": "Ada Lovelace"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats = fetch_stats(router).await;
    let time = stats["logs"][0]["time"].as_str().unwrap();
    assert_eq!(time.len(), 8);
    assert_eq!(&time[2..3], ":");
    assert_eq!(&time[5..6], ":");
}

// =========================================================================
// Batch onboarding
// =========================================================================

#[tokio::test]
async fn test_batch_onboard_completes_all_candidates() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/batch-onboard",
            &json!({
                "candidates": ["John", "Sarah", "Mike"],
                "department": "Engineering",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "completed");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    for (result, name) in results.iter().zip(["John", "Sarah", "Mike"]) {
        assert_eq!(result["name"], name);
        assert_eq!(result["status"], "onboarded");
    }

    // 3 candidates in one call saves 3 * 150 tokens.
    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 1);
    assert_eq!(stats["tokens_saved"], 450);
    let logs = stats["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[0]["msg"].as_str().unwrap().starts_with("BATCH TRIGGER"));
    assert!(logs[1]["msg"].as_str().unwrap().contains("John, Sarah, Mike"));
}

#[tokio::test]
async fn test_batch_onboard_rejects_empty_candidate_list() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/batch-onboard",
            &json!({"candidates": [], "department": "Engineering"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("candidates"));

    // The rejected request must leave no trace in the shared state.
    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 0);
    assert_eq!(stats["logs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_batch_onboard_rejects_blank_department() {
    let router = build_router(test_state());

    let response = router
        .oneshot(post_json(
            "/batch-onboard",
            &json!({"candidates": ["Ada"], "department": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =========================================================================
// Lunch booking
// =========================================================================

#[tokio::test]
async fn test_book_lunch_monday_hits_the_conflict_path() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/book-lunch",
            &json!({
                "manager_email": "manager@example.com",
                "new_hire_name": "Ada",
                "date": "Monday",
            }),
        ))
        .await
        .unwrap();

    // Business failure, not a transport error: still HTTP 200.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "failed");
    assert_eq!(body["error"], "Manager busy");
    assert_eq!(body["suggested_alternative"], "Tuesday at 12:30 PM");

    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 1);
    let logs = stats["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[0]["msg"].as_str().unwrap().starts_with("CALENDAR"));
    assert!(logs[1]["msg"].as_str().unwrap().starts_with("CONFLICT"));
}

#[tokio::test]
async fn test_book_lunch_wednesday_confirms() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/book-lunch",
            &json!({
                "manager_email": "manager@example.com",
                "new_hire_name": "Ada",
                "date": "Wednesday",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["time"], "12:00 PM");

    let stats = fetch_stats(router).await;
    let logs = stats["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs[1]["msg"].as_str().unwrap().starts_with("BOOKED"));
}

#[tokio::test]
async fn test_book_lunch_conflict_detection_is_case_insensitive() {
    let router = build_router(test_state());

    let response = router
        .oneshot(post_json(
            "/book-lunch",
            &json!({
                "manager_email": "manager@example.com",
                "new_hire_name": "Ada",
                "date": "MONDAY",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "failed");
}

#[tokio::test]
async fn test_book_lunch_date_defaults_to_monday() {
    let router = build_router(test_state());

    let response = router
        .oneshot(post_json(
            "/book-lunch",
            &json!({
                "manager_email": "manager@example.com",
                "new_hire_name": "Ada",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "failed");
}

#[tokio::test]
async fn test_book_lunch_rejects_invalid_manager_email() {
    let router = build_router(test_state());

    let response = router
        .oneshot(post_json(
            "/book-lunch",
            &json!({
                "manager_email": "not-an-email",
                "new_hire_name": "Ada",
                "date": "Tuesday",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =========================================================================
// Identity, approval, procurement
// =========================================================================

#[tokio::test]
async fn test_create_identity_acknowledges() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/create-identity",
            &json!({"employee_name": "Ada Lovelace", "department": "Engineering"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");

    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 1);
    assert!(stats["logs"][0]["msg"].as_str().unwrap().starts_with("IDENTITY"));
}

#[tokio::test]
async fn test_create_identity_rejects_nonconforming_payload() {
    let router = build_router(test_state());

    // The endpoint has an explicit schema; a loose object without the
    // required field is rejected at the edge.
    let response = router
        .oneshot(post_json("/create-identity", &json!({"anything": "goes"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_request_approval_goes_pending() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/request-approval",
            &json!({"amount": "$3,000", "reason": "Conference travel"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "pending");

    let stats = fetch_stats(router).await;
    let msg = stats["logs"][0]["msg"].as_str().unwrap();
    assert!(msg.starts_with("GOVERNANCE"));
    assert!(msg.contains("$3,000"));
}

#[tokio::test]
async fn test_order_device_returns_well_formed_order_id() {
    let router = build_router(test_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/order-device",
            &json!({"employee_email": "new.hire@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "ordered");
    assert_eq!(body["eta"], "2 business days");

    // Always ORD- followed by exactly 4 digits.
    let order_id = body["order_id"].as_str().unwrap();
    assert_eq!(order_id.len(), 8);
    assert!(order_id.starts_with("ORD-"));
    assert!(order_id[4..].chars().all(|c| c.is_ascii_digit()));

    // The device type defaults to a MacBook Pro when omitted.
    let stats = fetch_stats(router).await;
    let msg = stats["logs"][0]["msg"].as_str().unwrap();
    assert!(msg.starts_with("PROCUREMENT"));
    assert!(msg.contains("MacBook Pro"));
    assert!(msg.contains("new.hire@example.com"));
}

// =========================================================================
// Edge behavior
// =========================================================================

#[tokio::test]
async fn test_total_calls_accumulates_across_endpoints() {
    let router = build_router(test_state());

    let requests = [
        post_json(
            "/batch-onboard",
            &json!({"candidates": ["Ada"], "department": "Engineering"}),
        ),
        post_json(
            "/book-lunch",
            &json!({"manager_email": "m@example.com", "new_hire_name": "Ada", "date": "Friday"}),
        ),
        post_json("/create-identity", &json!({"employee_name": "Ada"})),
        post_json("/request-approval", &json!({"amount": "$99"})),
        post_json(
            "/order-device",
            &json!({"employee_email": "ada@example.com", "device_type": "ThinkPad X1"}),
        ),
    ];
    for request in requests {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let stats = fetch_stats(router).await;
    assert_eq!(stats["total_calls"], 5);
}

#[tokio::test]
async fn test_malformed_json_body_is_a_client_error() {
    let router = build_router(test_state());

    let response = router
        .oneshot(
            Request::post("/batch-onboard")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(test_state());

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
