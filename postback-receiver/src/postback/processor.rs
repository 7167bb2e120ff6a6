//! Hand-off point for accepted postbacks.
//!
//! The receiver only decides whether a postback is genuine. What happens to
//! a genuine one (updating a document record, notifying a user, enqueueing
//! follow-up work) is up to the [`PostbackProcessor`] injected into
//! [`AppState`](crate::postback::AppState).

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::postback::validation::PostbackPayload;

/// Business logic for a validated postback.
///
/// Errors are logged by the handler. The sender still receives `200 OK`.
#[async_trait]
pub trait PostbackProcessor: Send + Sync {
    async fn process(&self, payload: &PostbackPayload) -> Result<()>;
}

/// Default processor that only records the postback.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProcessor;

#[async_trait]
impl PostbackProcessor for LoggingProcessor {
    async fn process(&self, payload: &PostbackPayload) -> Result<()> {
        info!(
            transaction_id = %payload.id,
            status = payload.status_code(),
            extra_fields = payload.extra.len(),
            "postback_processed"
        );
        Ok(())
    }
}
