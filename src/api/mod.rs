//! API Module
//!
//! HTTP handlers and routing for the digest server REST API.
//!
//! # Endpoints
//! - `POST /api/news` - Ingest a digest payload
//! - `GET /api/get-today` - Retrieve the live digest
//! - `GET /api/status` - Store occupancy without mutation
//! - `POST /api/test-connection` - Diagnostic echo
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
