//! Digest Normalizer
//!
//! Converts an accepted inbound payload into the canonical 4-category
//! digest. All defaulting lives in the policy table below so every
//! fallback value is auditable in one place.

use chrono::Utc;

use crate::digest::model::{Article, Categories, Category, CategoryKey, NewsDigest};
use crate::digest::validate::InboundDigest;
use crate::models::requests::{
    ArticlePayload, CanonicalPayload, CategoryPayload, SimplifiedPayload,
};

// == Defaulting Policy ==
/// Fallback values applied to absent (or, for the string fields, empty)
/// inbound data. Digest content is Spanish, matching the product's
/// canonical category names.
pub mod defaults {
    use crate::digest::model::CategoryKey;

    pub const RANK: u32 = 1;
    pub const TITLE: &str = "Sin título";
    pub const SUMMARY: &str = "Sin resumen";
    pub const CONTEXT: &str = "";
    /// Fraction assumed when a simplified article omits reliability
    pub const RELIABILITY_FRACTION: f64 = 0.5;
    /// Substitute when the scaled reliability lands on zero
    pub const RELIABILITY_FLOOR: u8 = 3;
    /// Insight for categories the inbound payload did not cover
    pub const NO_INFORMATION: &str = "Sin información disponible";

    /// Insight for the covered category of a simplified payload that
    /// arrived without one.
    pub fn insight_for(key: CategoryKey) -> &'static str {
        match key {
            CategoryKey::Ia => "Sin análisis de IA disponible",
            CategoryKey::Marketing => "Sin análisis de Marketing disponible",
            CategoryKey::Bolsa => "Sin análisis de Bolsa disponible",
            CategoryKey::Internacional => "Sin análisis internacional disponible",
        }
    }
}

// == Normalize ==
/// Converts an accepted payload into the canonical digest.
///
/// The output always carries all four categories; categories the payload
/// did not cover are explicitly represented with the placeholder insight
/// and an empty article list, never omitted.
pub fn normalize(inbound: InboundDigest) -> NewsDigest {
    match inbound {
        InboundDigest::Canonical(payload) => normalize_canonical(payload),
        InboundDigest::Simplified(payload) => normalize_simplified(payload),
    }
}

fn normalize_canonical(mut payload: CanonicalPayload) -> NewsDigest {
    let date = payload.date.take().unwrap_or_else(today);

    let mut categories = placeholder_categories();
    for key in CategoryKey::ALL {
        // Keys outside the fixed set are dropped here
        if let Some(category) = payload.categories.remove(key.as_str()) {
            *categories.get_mut(key) = normalize_category(category);
        }
    }

    NewsDigest { date, categories }
}

fn normalize_simplified(payload: SimplifiedPayload) -> NewsDigest {
    let key = CategoryKey::from_topic(payload.category.as_deref());

    let mut categories = placeholder_categories();
    *categories.get_mut(key) = Category {
        insight: non_empty_or(payload.insight, defaults::insight_for(key)),
        articles: payload
            .articles
            .into_iter()
            .map(normalize_simplified_article)
            .collect(),
    };

    NewsDigest {
        date: today(),
        categories,
    }
}

fn normalize_category(category: CategoryPayload) -> Category {
    Category {
        insight: non_empty_or(category.insight, defaults::NO_INFORMATION),
        articles: category
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(normalize_canonical_article)
            .collect(),
    }
}

fn normalize_canonical_article(article: ArticlePayload) -> Article {
    Article {
        rank: article.rank.unwrap_or(defaults::RANK),
        title: non_empty_or(article.title, defaults::TITLE),
        summary: non_empty_or(article.summary, defaults::SUMMARY),
        context: article.context.unwrap_or_else(|| defaults::CONTEXT.to_string()),
        // Canonical reliability is already on the 1-5 scale
        reliability: article
            .reliability
            .map(|r| r.round() as u8)
            .unwrap_or(defaults::RELIABILITY_FLOOR),
    }
}

fn normalize_simplified_article(article: ArticlePayload) -> Article {
    Article {
        rank: article.rank.unwrap_or(defaults::RANK),
        title: non_empty_or(article.title, defaults::TITLE),
        summary: non_empty_or(article.summary, defaults::SUMMARY),
        context: article.context.unwrap_or_else(|| defaults::CONTEXT.to_string()),
        reliability: scale_reliability(
            article.reliability.unwrap_or(defaults::RELIABILITY_FRACTION),
        ),
    }
}

// == Reliability Scaling ==
/// Scales a [0,1] reliability fraction to the canonical 1-5 scale.
///
/// Rounds half-up; a result of zero is substituted with the floor value
/// so no article is ever served with reliability 0.
pub fn scale_reliability(fraction: f64) -> u8 {
    let scaled = (fraction * 5.0).round();
    if scaled == 0.0 {
        defaults::RELIABILITY_FLOOR
    } else {
        scaled as u8
    }
}

/// Keeps a present, non-empty string; anything else takes the fallback.
fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// Today's UTC calendar date as an ISO string.
fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn placeholder_categories() -> Categories {
    Categories {
        ia: placeholder_category(),
        marketing: placeholder_category(),
        bolsa: placeholder_category(),
        internacional: placeholder_category(),
    }
}

fn placeholder_category() -> Category {
    Category {
        insight: defaults::NO_INFORMATION.to_string(),
        articles: Vec::new(),
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::validate::decode;
    use serde_json::json;

    fn normalize_value(value: serde_json::Value) -> NewsDigest {
        normalize(decode(value).unwrap())
    }

    #[test]
    fn test_scale_reliability_examples() {
        assert_eq!(scale_reliability(0.92), 5); // round(4.6)
        assert_eq!(scale_reliability(0.5), 3); // round half-up of 2.5
        assert_eq!(scale_reliability(0.8), 4);
        assert_eq!(scale_reliability(1.0), 5);
        assert_eq!(scale_reliability(0.0), 3); // floor substitution
    }

    #[test]
    fn test_simplified_populates_mapped_category_only() {
        let digest = normalize_value(json!({
            "category": "Finance",
            "insight": "x",
            "articles": [{
                "rank": 1,
                "title": "t",
                "summary": "s",
                "context": "c",
                "reliability": 0.8
            }]
        }));

        assert_eq!(digest.categories.bolsa.insight, "x");
        assert_eq!(digest.categories.bolsa.articles[0].reliability, 4);

        for key in [CategoryKey::Ia, CategoryKey::Marketing, CategoryKey::Internacional] {
            let category = digest.categories.get(key);
            assert!(category.articles.is_empty());
            assert_eq!(category.insight, defaults::NO_INFORMATION);
        }
    }

    #[test]
    fn test_simplified_unrecognized_topic_lands_in_ia() {
        let digest = normalize_value(json!({
            "category": "Sports",
            "insight": "x",
            "articles": []
        }));

        assert_eq!(digest.categories.ia.insight, "x");
    }

    #[test]
    fn test_simplified_missing_insight_gets_category_phrase() {
        let digest = normalize_value(json!({
            "category": "Finance",
            "articles": []
        }));

        assert_eq!(
            digest.categories.bolsa.insight,
            defaults::insight_for(CategoryKey::Bolsa)
        );
    }

    #[test]
    fn test_simplified_article_defaults() {
        let digest = normalize_value(json!({
            "category": "Technology",
            "insight": "x",
            "articles": [{}]
        }));

        let article = &digest.categories.ia.articles[0];
        assert_eq!(article.rank, defaults::RANK);
        assert_eq!(article.title, defaults::TITLE);
        assert_eq!(article.summary, defaults::SUMMARY);
        assert_eq!(article.context, defaults::CONTEXT);
        // Missing fraction defaults to 0.5 -> round(2.5) = 3
        assert_eq!(article.reliability, 3);
    }

    #[test]
    fn test_simplified_preserves_article_order() {
        let digest = normalize_value(json!({
            "category": "Global",
            "insight": "x",
            "articles": [
                {"rank": 3, "title": "c", "summary": "s", "reliability": 0.2},
                {"rank": 1, "title": "a", "summary": "s", "reliability": 0.2},
                {"rank": 2, "title": "b", "summary": "s", "reliability": 0.2}
            ]
        }));

        let titles: Vec<&str> = digest
            .categories
            .internacional
            .articles
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        // Input order, never re-sorted
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_canonical_passthrough() {
        let digest = normalize_value(json!({
            "date": "2024-01-15",
            "categories": {
                "IA": {
                    "insight": "ia insight",
                    "articles": [{
                        "rank": 2,
                        "title": "t",
                        "summary": "s",
                        "context": "c",
                        "reliability": 5
                    }]
                }
            }
        }));

        assert_eq!(digest.date, "2024-01-15");
        let article = &digest.categories.ia.articles[0];
        assert_eq!(article.rank, 2);
        assert_eq!(article.title, "t");
        // 1-5 scale passes through unscaled
        assert_eq!(article.reliability, 5);
    }

    #[test]
    fn test_canonical_fills_missing_categories() {
        let digest = normalize_value(json!({
            "categories": {
                "Bolsa": {"insight": "x", "articles": []}
            }
        }));

        assert_eq!(digest.categories.bolsa.insight, "x");
        for key in [CategoryKey::Ia, CategoryKey::Marketing, CategoryKey::Internacional] {
            assert_eq!(digest.categories.get(key).insight, defaults::NO_INFORMATION);
        }
    }

    #[test]
    fn test_canonical_drops_unknown_keys() {
        let digest = normalize_value(json!({
            "categories": {
                "IA": {"insight": "x", "articles": []},
                "Deportes": {"insight": "y", "articles": []}
            }
        }));

        let json = serde_json::to_value(&digest).unwrap();
        assert_eq!(json["categories"].as_object().unwrap().len(), 4);
        assert!(json["categories"].get("Deportes").is_none());
    }

    #[test]
    fn test_canonical_missing_date_uses_today() {
        let digest = normalize_value(json!({"categories": {}}));
        assert_eq!(digest.date, today());
    }

    #[test]
    fn test_canonical_non_string_date_uses_today() {
        let digest = normalize_value(json!({"date": 42, "categories": {}}));
        assert_eq!(digest.date, today());
    }
}
