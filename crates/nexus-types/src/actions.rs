//! Request and response types for the workflow trigger endpoints.
//!
//! Every endpoint has an explicit schema: bodies that do not conform are
//! rejected at the edge instead of being accepted as loose maps. Validation
//! constraints live on the request types themselves so handlers only see
//! well-formed input.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Batch onboarding
// ---------------------------------------------------------------------------

/// Request body for `POST /batch-onboard`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchOnboardRequest {
    /// Names of the candidates to onboard. Must be non-empty, and every
    /// name must contain at least one non-whitespace character.
    #[validate(
        length(min = 1, message = "candidates must not be empty"),
        custom(function = non_blank_candidates)
    )]
    pub candidates: Vec<String>,
    /// The department the candidates join.
    #[validate(length(min = 1, message = "department must not be blank"))]
    pub department: String,
}

/// Per-candidate outcome in a [`BatchOnboardResponse`].
#[derive(Debug, Serialize)]
pub struct OnboardResult {
    /// The candidate's name as submitted.
    pub name: String,
    /// Always `"onboarded"`.
    pub status: &'static str,
}

impl OnboardResult {
    /// Mark a candidate as onboarded.
    pub const fn onboarded(name: String) -> Self {
        Self {
            name,
            status: "onboarded",
        }
    }
}

/// Response body for `POST /batch-onboard`.
#[derive(Debug, Serialize)]
pub struct BatchOnboardResponse {
    /// Always `"completed"`.
    pub status: &'static str,
    /// One entry per submitted candidate, in submission order.
    pub results: Vec<OnboardResult>,
}

impl BatchOnboardResponse {
    /// Build the completed response from per-candidate results.
    pub const fn completed(results: Vec<OnboardResult>) -> Self {
        Self {
            status: "completed",
            results,
        }
    }
}

/// Reject candidate lists containing blank names.
fn non_blank_candidates(candidates: &[String]) -> Result<(), ValidationError> {
    if candidates.iter().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("blank_candidate")
            .with_message("candidate names must not be blank".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lunch booking
// ---------------------------------------------------------------------------

/// Request body for `POST /book-lunch`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookLunchRequest {
    /// Email address of the hiring manager.
    #[validate(email(message = "manager_email must be a valid email"))]
    pub manager_email: String,
    /// Name of the new hire the lunch is for.
    #[validate(length(min = 1, message = "new_hire_name must not be blank"))]
    pub new_hire_name: String,
    /// Requested day. Defaults to `"Monday"`.
    #[serde(default = "default_lunch_date")]
    pub date: String,
}

fn default_lunch_date() -> String {
    String::from("Monday")
}

/// Response body for `POST /book-lunch`.
///
/// The conflict branch is a business outcome, not a transport error: it is
/// returned with HTTP 200 and `status: "failed"`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BookLunchResponse {
    /// The requested slot was available and has been booked.
    Confirmed {
        /// Always `"confirmed"`.
        status: &'static str,
        /// The booked time slot.
        time: &'static str,
    },
    /// The manager is unavailable on the requested day.
    Conflict {
        /// Always `"failed"`.
        status: &'static str,
        /// The business reason for the failure.
        error: &'static str,
        /// A slot the caller may retry with.
        suggested_alternative: &'static str,
    },
}

impl BookLunchResponse {
    /// The success outcome: lunch booked at noon.
    pub const fn confirmed() -> Self {
        Self::Confirmed {
            status: "confirmed",
            time: "12:00 PM",
        }
    }

    /// The conflict outcome: manager busy, alternative suggested.
    pub const fn manager_busy() -> Self {
        Self::Conflict {
            status: "failed",
            error: "Manager busy",
            suggested_alternative: "Tuesday at 12:30 PM",
        }
    }
}

// ---------------------------------------------------------------------------
// Identity creation
// ---------------------------------------------------------------------------

/// Request body for `POST /create-identity`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIdentityRequest {
    /// Name of the employee the credential is generated for.
    #[validate(length(min = 1, message = "employee_name must not be blank"))]
    pub employee_name: String,
    /// Department the employee belongs to, if known.
    pub department: Option<String>,
}

/// Response body for `POST /create-identity`.
#[derive(Debug, Serialize)]
pub struct CreateIdentityResponse {
    /// Always `"ok"`.
    pub status: &'static str,
}

impl CreateIdentityResponse {
    /// The acknowledgement response.
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

// ---------------------------------------------------------------------------
// Budget approval
// ---------------------------------------------------------------------------

/// Request body for `POST /request-approval`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestApprovalRequest {
    /// The amount that exceeded the budget, as entered by the caller.
    #[validate(length(min = 1, message = "amount must not be blank"))]
    pub amount: String,
    /// Why the approval is needed. Defaults to `"Standard Request"`.
    #[serde(default = "default_approval_reason")]
    pub reason: String,
}

fn default_approval_reason() -> String {
    String::from("Standard Request")
}

/// Response body for `POST /request-approval`.
#[derive(Debug, Serialize)]
pub struct RequestApprovalResponse {
    /// Always `"pending"`.
    pub status: &'static str,
}

impl RequestApprovalResponse {
    /// The pending-approval response.
    pub const fn pending() -> Self {
        Self { status: "pending" }
    }
}

// ---------------------------------------------------------------------------
// Device procurement
// ---------------------------------------------------------------------------

/// Request body for `POST /order-device`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderDeviceRequest {
    /// Email address of the employee receiving the device.
    #[validate(email(message = "employee_email must be a valid email"))]
    pub employee_email: String,
    /// Device model to order. Defaults to `"MacBook Pro"`.
    #[serde(default = "default_device_type")]
    pub device_type: String,
}

fn default_device_type() -> String {
    String::from("MacBook Pro")
}

/// A procurement order identifier, rendered on the wire as `ORD-NNNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(u16);

impl OrderId {
    /// Wrap a raw order number (expected range 1000..=9999).
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// The raw order number.
    pub const fn number(self) -> u16 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ORD-{:04}", self.0)
    }
}

impl Serialize for OrderId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Response body for `POST /order-device`.
#[derive(Debug, Serialize)]
pub struct OrderDeviceResponse {
    /// Always `"ordered"`.
    pub status: &'static str,
    /// The generated order identifier.
    pub order_id: OrderId,
    /// Delivery estimate.
    pub eta: &'static str,
}

impl OrderDeviceResponse {
    /// Build the ordered response for a freshly generated order id.
    pub const fn ordered(order_id: OrderId) -> Self {
        Self {
            status: "ordered",
            order_id,
            eta: "2 business days",
        }
    }
}
