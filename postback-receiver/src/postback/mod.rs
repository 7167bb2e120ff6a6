//! Signhost postback receiver.
//!
//! This module provides the single `POST /postback` endpoint that:
//! - Decodes the JSON postback body
//! - Verifies the `Authorization` header and the SHA-1 checksum
//! - Hands genuine postbacks to a [`PostbackProcessor`]
//! - Returns 200 OK in every case
//!
//! Rejected postbacks are visible in the logs only.

pub mod checksum;
pub mod handlers;
pub mod processor;
pub mod validation;

pub use checksum::{checksums_match, compute_checksum};
pub use handlers::{
    health, postback, receive_postback, router, AppState, HealthResponse, PostbackOutcome,
};
pub use processor::{LoggingProcessor, PostbackProcessor};
pub use validation::{validate, PostbackPayload, ValidationError, ValidationResult};
