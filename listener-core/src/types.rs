use chrono::{DateTime, Utc};
use serde::Serialize;

/// Sentinel used when a feed entry carries no author.
pub const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub body: String,
    pub author: String,
    pub published: Option<DateTime<Utc>>,
    pub community: String,
}

/// A post that contained at least one configured keyword, together with the
/// keywords that hit (in keyword-list order) and the community that was being
/// scanned when it was found.
#[derive(Debug, Clone)]
pub struct Match {
    pub post: Post,
    pub community: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunityReport {
    pub product: String,
    pub community: String,
    pub outcome: CommunityOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommunityOutcome {
    Scanned { posts_seen: usize, matched: usize },
    Failed { reason: String },
}

impl CommunityReport {
    pub fn scanned(product: &str, community: &str, posts_seen: usize, matched: usize) -> Self {
        Self {
            product: product.to_string(),
            community: community.to_string(),
            outcome: CommunityOutcome::Scanned {
                posts_seen,
                matched,
            },
        }
    }

    pub fn failed(product: &str, community: &str, reason: String) -> Self {
        Self {
            product: product.to_string(),
            community: community.to_string(),
            outcome: CommunityOutcome::Failed { reason },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub key: String,
    pub name: String,
    pub matches: usize,
}

/// Result of a single scan run, returned to the invoking host.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub per_product: Vec<ProductSummary>,
    pub communities: Vec<CommunityReport>,
    pub notifications_sent: usize,
}

impl RunSummary {
    pub fn total_matches(&self) -> usize {
        self.per_product.iter().map(|p| p.matches).sum()
    }
}
