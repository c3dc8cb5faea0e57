//! Digest Validator
//!
//! Shape detection for inbound payloads, centralized here so the
//! normalizer never probes fields itself. A payload is routed to one of
//! the two accepted shapes or rejected before it can reach the store.

use serde_json::Value;

use crate::digest::model::CategoryKey;
use crate::error::{DigestError, Result};
use crate::models::requests::{CanonicalPayload, SimplifiedPayload};

// == Inbound Digest ==
/// An accepted inbound payload, tagged by wire shape.
#[derive(Debug, Clone)]
pub enum InboundDigest {
    Canonical(CanonicalPayload),
    Simplified(SimplifiedPayload),
}

// == Decode ==
/// Routes a decoded JSON body to one of the accepted shapes.
///
/// Canonical is tried first: a `categories` field that is itself an
/// object. Otherwise the presence of both `category` and `articles`
/// selects the simplified shape. Anything else is rejected. The presence
/// checks are deliberately loose; field contents are handled by the
/// typed decode and, on the canonical path, optionally by
/// [`check_strict`].
pub fn decode(payload: Value) -> Result<InboundDigest> {
    if !payload.is_object() {
        return Err(DigestError::InvalidStructure(
            "Payload must be a JSON object".to_string(),
        ));
    }

    let is_canonical = payload
        .get("categories")
        .map(Value::is_object)
        .unwrap_or(false);

    if is_canonical {
        let parsed: CanonicalPayload = serde_json::from_value(payload)
            .map_err(|e| DigestError::InvalidStructure(format!("Canonical payload: {e}")))?;
        return Ok(InboundDigest::Canonical(parsed));
    }

    if payload.get("category").is_some() && payload.get("articles").is_some() {
        let parsed: SimplifiedPayload = serde_json::from_value(payload)
            .map_err(|e| DigestError::InvalidStructure(format!("Simplified payload: {e}")))?;
        return Ok(InboundDigest::Simplified(parsed));
    }

    Err(DigestError::InvalidStructure(
        "Payload matches neither the canonical nor the simplified digest shape".to_string(),
    ))
}

// == Strict Check ==
/// Field-level validation of a canonical payload.
///
/// Verifies, for every category in the fixed key set in declaration
/// order: the category is present, `insight` is a non-empty string,
/// `articles` is a sequence, and every article carries non-empty
/// `title`/`summary`/`context` plus numeric `rank` and `reliability`.
/// Reports the first violation found.
pub fn check_strict(payload: &CanonicalPayload) -> Result<()> {
    for key in CategoryKey::ALL {
        let name = key.as_str();
        let category = payload
            .categories
            .get(name)
            .ok_or_else(|| violation(format!("categories.{name}"), "missing category"))?;

        match &category.insight {
            Some(insight) if !insight.is_empty() => {}
            _ => {
                return Err(violation(
                    format!("categories.{name}.insight"),
                    "must be a non-empty string",
                ))
            }
        }

        let articles = category.articles.as_ref().ok_or_else(|| {
            violation(format!("categories.{name}.articles"), "must be a sequence")
        })?;

        for (i, article) in articles.iter().enumerate() {
            for (field, value) in [
                ("title", &article.title),
                ("summary", &article.summary),
                ("context", &article.context),
            ] {
                match value {
                    Some(s) if !s.is_empty() => {}
                    _ => {
                        return Err(violation(
                            format!("categories.{name}.articles[{i}].{field}"),
                            "must be a non-empty string",
                        ))
                    }
                }
            }
            if article.rank.is_none() {
                return Err(violation(
                    format!("categories.{name}.articles[{i}].rank"),
                    "must be numeric",
                ));
            }
            if article.reliability.is_none() {
                return Err(violation(
                    format!("categories.{name}.articles[{i}].reliability"),
                    "must be numeric",
                ));
            }
        }
    }

    Ok(())
}

fn violation(path: String, reason: &str) -> DigestError {
    DigestError::InvalidStructure(format!("{path}: {reason}"))
}
