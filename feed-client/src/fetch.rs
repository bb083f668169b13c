use std::time::Duration;

use listener_core::FetchError;
use reqwest::{redirect, Client};
use tracing::{debug, warn};

const FEED_HOST: &str = "https://www.reddit.com";

// Reddit answers feed requests with redirects often enough that following
// none loses whole communities; a small bound keeps a redirect loop from
// hanging the run.
const MAX_REDIRECTS: usize = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn feed_url(community: &str) -> String {
    format!("{}/r/{}/new/.rss", FEED_HOST, community)
}

/// Fetches the public Atom feed of a single community.
#[derive(Debug)]
pub struct FeedFetcher {
    http_client: Client,
}

impl FeedFetcher {
    pub fn new(user_agent: &str) -> Self {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .expect("Failed to create HTTP client");

        Self { http_client }
    }

    /// Returns the raw feed markup for a community, or a `FetchError` the
    /// orchestrator can log and skip past.
    pub async fn fetch(&self, community: &str) -> Result<String, FetchError> {
        let url = feed_url(community);
        debug!("Fetching feed for r/{}", community);

        let response =
            self.http_client
                .get(&url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    community: community.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Feed request for r/{} returned {}", community, status);
            return Err(FetchError::Status {
                community: community.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            community: community.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_targets_the_new_listing() {
        assert_eq!(
            feed_url("familymedicine"),
            "https://www.reddit.com/r/familymedicine/new/.rss"
        );
    }

    #[tokio::test]
    async fn fetcher_builds_with_custom_user_agent() {
        let _fetcher = FeedFetcher::new("reddit-listener-test/0.1");
    }
}
