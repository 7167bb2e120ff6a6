//! Configuration module for environment variable parsing.
//!
//! Configuration is read once at startup and never mutated afterwards.

use std::env;
use tracing::warn;

/// Default port, matching the Signhost postback samples.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Secret shared with Signhost, used in the postback checksum
    pub shared_secret: String,

    /// Exact value expected in the `Authorization` header of every postback
    pub expected_auth_header: String,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            shared_secret: required_secret("SIGNHOST_SHARED_SECRET"),

            expected_auth_header: required_secret("SIGNHOST_AUTH_HEADER"),

            port: parse_port("PORT", DEFAULT_PORT),
        }
    }
}

// Secrets stay out of debug output and logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("shared_secret", &"<redacted>")
            .field("expected_auth_header", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

/// Read a secret, falling back to an empty string when it is unset.
fn required_secret(name: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.is_empty() => v,
        _ => {
            warn!(env_var = name, "Secret not set, postbacks will fail validation");
            String::new()
        }
    }
}

/// Parse a port number, warning on invalid values.
fn parse_port(name: &str, default: u16) -> u16 {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid port, using default");
            default
        }
    }
}
