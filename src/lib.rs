//! News Digest - a single-slot news digest cache server
//!
//! Accepts digest payloads in two wire shapes, normalizes them to the
//! canonical 4-category schema and serves the most recent valid digest
//! until its TTL elapses.

pub mod api;
pub mod cache;
pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use digest::NewsDigest;
pub use tasks::spawn_sweep_task;
