//! Canonical digest model
//!
//! The wire schema served to readers: a dated digest with exactly four
//! fixed categories. The category set is a struct rather than a map so
//! a digest with a missing or extra category cannot be constructed.

use serde::{Deserialize, Serialize};

// == Article ==
/// A single ranked news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Position within its category, 1-based
    pub rank: u32,
    pub title: String,
    pub summary: String,
    /// Additional background, may be empty
    pub context: String,
    /// Source reliability on the 1-5 scale
    pub reliability: u8,
}

// == Category ==
/// One category of the digest: an insight paragraph plus its articles,
/// kept in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub insight: String,
    pub articles: Vec<Article>,
}

// == Category Key ==
/// The fixed category set of the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKey {
    Ia,
    Marketing,
    Bolsa,
    Internacional,
}

impl CategoryKey {
    /// All keys, in the digest's declaration order.
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Ia,
        CategoryKey::Marketing,
        CategoryKey::Bolsa,
        CategoryKey::Internacional,
    ];

    /// Wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Ia => "IA",
            CategoryKey::Marketing => "Marketing",
            CategoryKey::Bolsa => "Bolsa",
            CategoryKey::Internacional => "Internacional",
        }
    }

    /// Maps a simplified-shape topic to its canonical key.
    ///
    /// Fixed lookup table; anything unrecognized (or absent) lands in IA.
    pub fn from_topic(topic: Option<&str>) -> Self {
        match topic {
            Some("Technology") => CategoryKey::Ia,
            Some("Finance") => CategoryKey::Bolsa,
            Some("Business") => CategoryKey::Marketing,
            Some("Global") => CategoryKey::Internacional,
            _ => CategoryKey::Ia,
        }
    }
}

// == Categories ==
/// The four fixed categories of a digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(rename = "IA")]
    pub ia: Category,
    #[serde(rename = "Marketing")]
    pub marketing: Category,
    #[serde(rename = "Bolsa")]
    pub bolsa: Category,
    #[serde(rename = "Internacional")]
    pub internacional: Category,
}

impl Categories {
    /// Returns the category under `key`.
    pub fn get(&self, key: CategoryKey) -> &Category {
        match key {
            CategoryKey::Ia => &self.ia,
            CategoryKey::Marketing => &self.marketing,
            CategoryKey::Bolsa => &self.bolsa,
            CategoryKey::Internacional => &self.internacional,
        }
    }

    /// Returns the category under `key` for mutation.
    pub fn get_mut(&mut self, key: CategoryKey) -> &mut Category {
        match key {
            CategoryKey::Ia => &mut self.ia,
            CategoryKey::Marketing => &mut self.marketing,
            CategoryKey::Bolsa => &mut self.bolsa,
            CategoryKey::Internacional => &mut self.internacional,
        }
    }

    /// Iterates the categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &Category)> {
        CategoryKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

// == News Digest ==
/// The canonical digest document: an ISO calendar date plus the four
/// fixed categories, always all present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDigest {
    pub date: String,
    pub categories: Categories,
}

impl NewsDigest {
    /// Total article count across all categories.
    pub fn total_articles(&self) -> usize {
        self.categories.iter().map(|(_, cat)| cat.articles.len()).sum()
    }
}
