//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Digest time-to-live in seconds
    pub ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
    /// Whether field-level validation runs on canonical payloads
    pub strict_validation: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DIGEST_TTL_SECS` - Digest TTL in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 3600)
    /// - `STRICT_VALIDATION` - Enable strict payload validation (default: off)
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("DIGEST_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            sweep_interval: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            strict_validation: env::var("STRICT_VALIDATION")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: 86_400,
            server_port: 3001,
            sweep_interval: 3600,
            strict_validation: false,
        }
    }
}
