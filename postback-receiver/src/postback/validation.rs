//! Postback payload validation.
//!
//! Every check runs, and every failure is collected, so the logs show the
//! full picture for a rejected postback.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::postback::checksum::{checksums_match, compute_checksum};

/// Postback JSON body.
///
/// Signhost uses PascalCase field names, which are renamed here. Missing
/// fields decode to their defaults so that they are reported as a
/// validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PostbackPayload {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Status")]
    pub status: Option<i64>,
    #[serde(default, rename = "Checksum")]
    pub checksum: String,
    /// Any other fields sent along with the postback.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostbackPayload {
    /// Status code used for the checksum. An absent status counts as `0`.
    pub fn status_code(&self) -> i64 {
        self.status.unwrap_or_default()
    }
}

/// A single reason a postback was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Authorization header")]
    InvalidAuthorizationHeader,
    #[error("Missing required fields")]
    MissingRequiredFields,
    #[error("Invalid checksum")]
    InvalidChecksum,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable messages, in the order the checks ran.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validate a postback against the configured authorization header and
/// shared secret.
///
/// Checks run in order:
/// 1. `Authorization` header equals the expected value
/// 2. `Id`, `Status` and `Checksum` are present
/// 3. `Checksum` matches the recomputed checksum (constant-time)
pub fn validate(
    payload: &PostbackPayload,
    authorization_header: &str,
    expected_auth_header: &str,
    shared_secret: &str,
) -> ValidationResult {
    let mut errors = Vec::new();

    if authorization_header != expected_auth_header {
        errors.push(ValidationError::InvalidAuthorizationHeader);
    }

    if payload.id.is_empty() || payload.status.is_none() || payload.checksum.is_empty() {
        errors.push(ValidationError::MissingRequiredFields);
    }

    let expected_checksum = compute_checksum(&payload.id, payload.status_code(), shared_secret);
    if !checksums_match(&expected_checksum, &payload.checksum) {
        errors.push(ValidationError::InvalidChecksum);
    }

    ValidationResult { errors }
}
