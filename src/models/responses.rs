//! Response DTOs for the digest server API
//!
//! Defines the structure of outgoing HTTP response bodies. Wire names
//! are camelCase, matching the contract the reader UI consumes.

use serde::Serialize;
use serde_json::Value;

use crate::cache::StoreStats;
use crate::digest::NewsDigest;

/// Write summary for the publish operation (POST /api/news)
#[derive(Debug, Clone, Serialize)]
pub struct PublishResponse {
    pub status: String,
    pub message: String,
    /// Write timestamp in ISO 8601 format
    pub timestamp: String,
    pub stats: PublishStats,
}

/// Ingestion counts reported back to the producer
#[derive(Debug, Clone, Serialize)]
pub struct PublishStats {
    /// Category count of the stored canonical digest
    pub categories: usize,
    #[serde(rename = "totalArticles")]
    pub total_articles: usize,
}

impl PublishResponse {
    /// Creates a new PublishResponse
    pub fn new(categories: usize, total_articles: usize) -> Self {
        Self {
            status: "ok".to_string(),
            message: "Digest stored successfully".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            stats: PublishStats {
                categories,
                total_articles,
            },
        }
    }
}

/// Response body for the read operation (GET /api/get-today)
///
/// The canonical digest with non-semantic retrieval metadata appended.
#[derive(Debug, Clone, Serialize)]
pub struct DigestResponse {
    #[serde(flatten)]
    pub digest: NewsDigest,
    #[serde(rename = "_metadata")]
    pub metadata: DigestMetadata,
}

/// Retrieval metadata attached to a served digest
#[derive(Debug, Clone, Serialize)]
pub struct DigestMetadata {
    pub source: String,
    #[serde(rename = "retrievedAt")]
    pub retrieved_at: String,
}

impl DigestResponse {
    /// Creates a new DigestResponse
    pub fn new(digest: NewsDigest) -> Self {
        Self {
            digest,
            metadata: DigestMetadata {
                source: "cache".to_string(),
                retrieved_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }
}

/// Response body for the status endpoint (GET /api/status)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(rename = "hasDigest")]
    pub has_digest: bool,
    pub timestamp: String,
    /// Remaining lifetime of the live digest, absent when there is none
    #[serde(rename = "expiresInSeconds")]
    pub expires_in_seconds: Option<u64>,
    pub stats: StoreStats,
}

impl StatusResponse {
    /// Creates a new StatusResponse
    pub fn new(has_digest: bool, expires_in_seconds: Option<u64>, stats: StoreStats) -> Self {
        Self {
            status: "online".to_string(),
            has_digest,
            timestamp: chrono::Utc::now().to_rfc3339(),
            expires_in_seconds,
            stats,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the diagnostic echo (POST /api/test-connection)
#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    pub status: String,
    pub message: String,
    /// The payload exactly as received
    pub received: Value,
    pub timestamp: String,
}

impl EchoResponse {
    /// Creates a new EchoResponse wrapping the received payload
    pub fn new(received: Value) -> Self {
        Self {
            status: "success".to_string(),
            message: "Connection test successful".to_string(),
            received,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{Categories, Category};
    use serde_json::json;

    fn empty_digest() -> NewsDigest {
        NewsDigest {
            date: "2024-01-15".to_string(),
            categories: Categories {
                ia: Category::default(),
                marketing: Category::default(),
                bolsa: Category::default(),
                internacional: Category::default(),
            },
        }
    }

    #[test]
    fn test_publish_response_serialize() {
        let resp = PublishResponse::new(4, 7);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["stats"]["categories"], 4);
        assert_eq!(json["stats"]["totalArticles"], 7);
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_digest_response_flattens_digest() {
        let resp = DigestResponse::new(empty_digest());
        let json = serde_json::to_value(&resp).unwrap();

        // Digest fields at the top level, metadata alongside them
        assert_eq!(json["date"], "2024-01-15");
        assert!(json["categories"]["IA"].is_object());
        assert_eq!(json["_metadata"]["source"], "cache");
        assert!(json["_metadata"].get("retrievedAt").is_some());
    }

    #[test]
    fn test_status_response_serialize() {
        let resp = StatusResponse::new(true, Some(3600), StoreStats::new());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "online");
        assert_eq!(json["hasDigest"], true);
        assert_eq!(json["expiresInSeconds"], 3600);
        assert!(json["stats"].is_object());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_echo_response_serialize() {
        let resp = EchoResponse::new(json!({"test": "connection"}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["received"]["test"], "connection");
    }
}
