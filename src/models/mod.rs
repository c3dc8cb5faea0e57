//! Request and Response models for the digest server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ArticlePayload, CanonicalPayload, CategoryPayload, SimplifiedPayload};
pub use responses::{
    DigestResponse, EchoResponse, HealthResponse, PublishResponse, StatusResponse,
};
