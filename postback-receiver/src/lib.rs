//! Signhost Postback - receiver for signing-completion notifications.
//!
//! Signhost calls back into the application whenever a signing transaction
//! changes status. This library validates those calls and hands the genuine
//! ones to application code.
//!
//! ## Flow
//!
//! ```text
//! Signhost → POST /postback → validate → PostbackProcessor
//!                                  ↓
//!                               200 OK
//! ```

pub mod config;
pub mod postback;

// Re-export commonly used types
pub use config::Config;
pub use postback::{router, AppState, PostbackPayload, PostbackProcessor};
