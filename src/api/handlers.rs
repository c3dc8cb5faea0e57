//! API Handlers
//!
//! HTTP request handlers for each digest server endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::cache::TtlStore;
use crate::digest::{self, CategoryKey, InboundDigest, NewsDigest};
use crate::error::{DigestError, Result};
use crate::models::{
    DigestResponse, EchoResponse, HealthResponse, PublishResponse, StatusResponse,
};

/// The single slot the digest lives under.
pub const DIGEST_KEY: &str = "today";

/// Application state shared across all handlers.
///
/// The store is the only shared mutable resource; it is wrapped in
/// Arc<RwLock<>> so concurrent requests never observe a partial write.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe digest store
    pub store: Arc<RwLock<TtlStore<NewsDigest>>>,
    /// Whether canonical payloads get field-level validation
    pub strict: bool,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: TtlStore<NewsDigest>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            strict: false,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = TtlStore::new(Duration::from_secs(config.ttl_secs));
        Self {
            store: Arc::new(RwLock::new(store)),
            strict: config.strict_validation,
        }
    }

    /// Enables strict validation of canonical payloads.
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

/// Handler for POST /api/news
///
/// Validates the inbound payload, normalizes it to the canonical shape
/// and stores it, wholesale-replacing any previous digest.
pub async fn publish_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<PublishResponse>> {
    let inbound = digest::decode(body)?;

    if state.strict {
        if let InboundDigest::Canonical(ref payload) = inbound {
            digest::check_strict(payload)?;
        }
    }

    let normalized = digest::normalize(inbound);
    let total_articles = normalized.total_articles();

    // Acquire write lock and replace the slot
    let mut store = state.store.write().await;
    store.set(DIGEST_KEY, normalized);

    info!(total_articles, "digest stored");

    Ok(Json(PublishResponse::new(
        CategoryKey::ALL.len(),
        total_articles,
    )))
}

/// Handler for GET /api/get-today
///
/// Serves the live digest. An expired entry is removed by the read and
/// reported exactly like a never-written one.
pub async fn today_handler(State(state): State<AppState>) -> Result<Json<DigestResponse>> {
    // Write lock: an expired entry is deleted as a side effect of the read
    let mut store = state.store.write().await;
    let digest = store.get(DIGEST_KEY).ok_or(DigestError::Unavailable)?;

    Ok(Json(DigestResponse::new(digest)))
}

/// Handler for GET /api/status
///
/// Reports store occupancy without mutating it: the probes leave
/// expired entries alone and record no hit or miss.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let store = state.store.read().await;
    let has_digest = store.contains(DIGEST_KEY);
    let expires_in = store
        .ttl_remaining(DIGEST_KEY)
        .map(|remaining| remaining.as_secs());

    Json(StatusResponse::new(has_digest, expires_in, store.stats()))
}

/// Handler for GET /health
///
/// Returns liveness status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for POST /api/test-connection
///
/// Echoes the received payload back; touches no store state.
pub async fn test_connection_handler(Json(body): Json<Value>) -> Json<EchoResponse> {
    Json(EchoResponse::new(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(TtlStore::new(Duration::from_secs(300)))
    }

    #[tokio::test]
    async fn test_publish_and_today_handler() {
        let state = test_state();

        let body = json!({
            "category": "Finance",
            "insight": "x",
            "articles": [{"rank": 1, "title": "t", "summary": "s", "context": "c", "reliability": 0.8}]
        });
        let result = publish_handler(State(state.clone()), Json(body)).await;
        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.stats.total_articles, 1);
        assert_eq!(response.stats.categories, 4);

        let result = today_handler(State(state)).await;
        let response = result.unwrap();
        assert_eq!(response.digest.categories.bolsa.articles[0].reliability, 4);
    }

    #[tokio::test]
    async fn test_today_handler_empty_store() {
        let state = test_state();

        let result = today_handler(State(state)).await;
        assert!(matches!(result, Err(DigestError::Unavailable)));
    }

    #[tokio::test]
    async fn test_publish_rejects_unrecognized_shape() {
        let state = test_state();

        let result = publish_handler(State(state), Json(json!({}))).await;
        assert!(matches!(result, Err(DigestError::InvalidStructure(_))));
    }

    #[tokio::test]
    async fn test_publish_replaces_previous_digest() {
        let state = test_state();

        let first = json!({"category": "Finance", "insight": "first", "articles": []});
        let second = json!({"category": "Technology", "insight": "second", "articles": []});
        publish_handler(State(state.clone()), Json(first)).await.unwrap();
        publish_handler(State(state.clone()), Json(second)).await.unwrap();

        let response = today_handler(State(state)).await.unwrap();
        // Last write wins, no merge
        assert_eq!(response.digest.categories.ia.insight, "second");
        assert_ne!(response.digest.categories.bolsa.insight, "first");
    }

    #[tokio::test]
    async fn test_strict_state_rejects_partial_canonical() {
        let state = test_state().with_strict();

        let body = json!({"categories": {"IA": {"insight": "x", "articles": []}}});
        let result = publish_handler(State(state), Json(body)).await;
        assert!(matches!(result, Err(DigestError::InvalidStructure(_))));
    }

    #[tokio::test]
    async fn test_status_handler_reflects_occupancy() {
        let state = test_state();

        let response = status_handler(State(state.clone())).await;
        assert!(!response.has_digest);
        assert!(response.expires_in_seconds.is_none());

        let body = json!({"category": "Global", "insight": "x", "articles": []});
        publish_handler(State(state.clone()), Json(body)).await.unwrap();

        let response = status_handler(State(state)).await;
        assert!(response.has_digest);
        assert!(response.expires_in_seconds.is_some());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_test_connection_handler() {
        let response = test_connection_handler(Json(json!({"ping": true}))).await;
        assert_eq!(response.status, "success");
        assert_eq!(response.received["ping"], true);
    }
}
