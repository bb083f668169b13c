use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_client::{parse_feed, FeedFetcher};
use listener_core::{
    match_keywords, AppConfig, CommunityReport, FetchError, ListenerError, Match, Post,
    ProductConfig, ProductSummary, RunSummary, USER_AGENT,
};
use notifier::{digest_message, fallback_message, SlackMessage, WebhookClient};
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Source of raw feed markup for a community. `FeedFetcher` is the production
/// implementation; tests substitute scripted feeds.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    async fn fetch(&self, community: &str) -> Result<String, FetchError>;
}

impl FeedSource for FeedFetcher {
    async fn fetch(&self, community: &str) -> Result<String, FetchError> {
        FeedFetcher::fetch(self, community).await
    }
}

/// Runs one scan: every community of every product is fetched in sequence,
/// matches are accumulated per product, and the digests go out at the end.
#[derive(Debug)]
pub struct Scanner<F: FeedSource = FeedFetcher> {
    fetcher: F,
    webhook: WebhookClient,
    request_delay: Duration,
}

impl Scanner<FeedFetcher> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_fetcher(config, FeedFetcher::new(USER_AGENT))
    }
}

impl<F: FeedSource> Scanner<F> {
    /// Builds a scanner over a custom feed source.
    pub fn with_fetcher(config: &AppConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            webhook: WebhookClient::new(config.webhook_url.clone()),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub async fn run(
        &self,
        config: &AppConfig,
        products: &[ProductConfig],
    ) -> Result<RunSummary, ListenerError> {
        let now = Utc::now();
        let cutoff = now - chrono::Duration::hours(config.lookback_hours);
        info!(
            "Starting scan with a {} hour lookback window",
            config.lookback_hours
        );

        let (reports, per_product, digests) = self.scan_products(products, cutoff).await?;

        let messages = plan_notifications(&digests, config.lookback_hours, now);
        for message in &messages {
            self.webhook.send(message).await?;
        }
        info!("Sent {} notification payload(s)", messages.len());

        Ok(RunSummary {
            per_product,
            communities: reports,
            notifications_sent: messages.len(),
        })
    }

    /// The collection phase: walks every product's communities, skipping past
    /// recoverable failures, and returns the reports plus the per-product
    /// match lists. Sending is left to `run` so this phase stays testable
    /// without a webhook.
    async fn scan_products(
        &self,
        products: &[ProductConfig],
        cutoff: DateTime<Utc>,
    ) -> Result<
        (
            Vec<CommunityReport>,
            Vec<ProductSummary>,
            Vec<(String, Vec<Match>)>,
        ),
        ListenerError,
    > {
        let mut reports: Vec<CommunityReport> = Vec::new();
        let mut per_product: Vec<ProductSummary> = Vec::new();
        let mut digests: Vec<(String, Vec<Match>)> = Vec::new();

        for product in products {
            info!("Processing {}", product.name);
            let mut matches: Vec<Match> = Vec::new();

            for community in &product.communities {
                match self
                    .scan_community(community, &product.keywords, cutoff)
                    .await
                {
                    Ok((posts_seen, mut found)) => {
                        debug!(
                            "r/{}: {} posts in feed, {} matched",
                            community,
                            posts_seen,
                            found.len()
                        );
                        reports.push(CommunityReport::scanned(
                            &product.key,
                            community,
                            posts_seen,
                            found.len(),
                        ));
                        matches.append(&mut found);
                    }
                    Err(err) if err.is_recoverable() => {
                        warn!("Skipping r/{} for this run: {}", community, err);
                        reports.push(CommunityReport::failed(
                            &product.key,
                            community,
                            err.to_string(),
                        ));
                    }
                    Err(err) => return Err(err),
                }

                // Stay under the feed host's informal rate limit; applies on
                // failure too so a broken community cannot speed up the loop.
                sleep(self.request_delay).await;
            }

            info!("{}: {} matches", product.name, matches.len());
            per_product.push(ProductSummary {
                key: product.key.clone(),
                name: product.name.clone(),
                matches: matches.len(),
            });
            digests.push((product.name.clone(), matches));
        }

        Ok((reports, per_product, digests))
    }

    async fn scan_community(
        &self,
        community: &str,
        keywords: &[String],
        cutoff: DateTime<Utc>,
    ) -> Result<(usize, Vec<Match>), ListenerError> {
        let xml = self.fetcher.fetch(community).await?;
        let posts = parse_feed(community, &xml)?;
        Ok(collect_matches(community, posts, keywords, cutoff))
    }
}

/// Applies the recency cutoff and keyword matching to one community's posts.
/// Returns how many posts the feed held alongside the matches, so the report
/// can distinguish "quiet community" from "nothing matched".
pub fn collect_matches(
    community: &str,
    posts: Vec<Post>,
    keywords: &[String],
    cutoff: DateTime<Utc>,
) -> (usize, Vec<Match>) {
    let posts_seen = posts.len();
    let matches = posts
        .into_iter()
        .filter(|post| is_recent(post, cutoff))
        .filter_map(|post| {
            let keywords = match_keywords(&post, keywords);
            if keywords.is_empty() {
                None
            } else {
                Some(Match {
                    community: community.to_string(),
                    post,
                    keywords,
                })
            }
        })
        .collect();
    (posts_seen, matches)
}

// Posts without a parseable publish time pass the filter rather than being
// treated as stale.
fn is_recent(post: &Post, cutoff: DateTime<Utc>) -> bool {
    post.published.map_or(true, |published| published >= cutoff)
}

/// Decides what actually goes to the webhook: one digest per product that has
/// matches, or a single run-level fallback when nothing matched anywhere.
pub fn plan_notifications(
    digests: &[(String, Vec<Match>)],
    lookback_hours: i64,
    now: DateTime<Utc>,
) -> Vec<SlackMessage> {
    let mut messages: Vec<SlackMessage> = digests
        .iter()
        .filter_map(|(product_name, matches)| digest_message(product_name, matches))
        .collect();

    if messages.is_empty() {
        messages.push(fallback_message(lookback_hours, now));
    }

    messages
}
