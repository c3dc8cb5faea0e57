//! Request DTOs for the digest server API
//!
//! The two accepted wire shapes for `POST /api/news`. Fields are lenient
//! options: producers routinely omit article fields, and the defaulting
//! policy in the normalizer fills the gaps.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Canonical wire shape: `{date, categories}` keyed by category name.
///
/// Keys outside the fixed category set are dropped during normalization;
/// missing ones are filled with placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct CanonicalPayload {
    /// A non-string date is treated as absent, not rejected
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    pub categories: HashMap<String, CategoryPayload>,
}

/// One inbound category of the canonical shape.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<ArticlePayload>>,
}

/// An inbound article, shared by both wire shapes.
///
/// `reliability` is on the 1-5 scale in the canonical shape and a [0,1]
/// fraction in the simplified shape; the normalizer interprets it per
/// shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlePayload {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub reliability: Option<f64>,
}

/// Simplified wire shape: a single topic plus its articles.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedPayload {
    /// Topic name (Technology, Finance, Business, Global)
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub articles: Vec<ArticlePayload>,
}

/// Accepts any JSON value, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}
