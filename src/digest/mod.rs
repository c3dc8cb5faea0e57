//! Digest Module
//!
//! The domain core: canonical digest model, inbound shape detection and
//! validation, and normalization into the canonical schema.

pub mod model;
pub mod normalize;
pub mod validate;


// Re-export public types
pub use model::{Article, Categories, Category, CategoryKey, NewsDigest};
pub use normalize::normalize;
pub use validate::{check_strict, decode, InboundDigest};
