use atom_syndication::{Entry, Feed};
use chrono::Utc;
use listener_core::{ParseError, Post, UNKNOWN_AUTHOR};
use tracing::debug;

/// Parses raw Atom markup into `Post` records.
///
/// Missing text fields default to empty strings and a missing author becomes
/// the "unknown" sentinel, so downstream code never deals in options for
/// plain text. A missing or unparseable publish time stays `None`; the
/// recency filter lets such posts through rather than guessing an age.
pub fn parse_feed(community: &str, xml: &str) -> Result<Vec<Post>, ParseError> {
    let feed = Feed::read_from(xml.as_bytes()).map_err(|e| ParseError::Malformed {
        community: community.to_string(),
        details: e.to_string(),
    })?;

    let posts: Vec<Post> = feed
        .entries()
        .iter()
        .map(|entry| post_from_entry(community, entry))
        .collect();

    debug!("Parsed {} posts from r/{}", posts.len(), community);
    Ok(posts)
}

fn post_from_entry(community: &str, entry: &Entry) -> Post {
    Post {
        title: entry.title().to_string(),
        link: entry
            .links()
            .first()
            .map(|link| link.href().to_string())
            .unwrap_or_default(),
        body: entry
            .content()
            .and_then(|content| content.value())
            .map(str::to_string)
            .unwrap_or_default(),
        author: entry
            .authors()
            .first()
            .map(|author| author.name().to_string())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        published: entry.published().map(|date| date.with_timezone(&Utc)),
        community: entry
            .categories()
            .first()
            .map(|category| category.term().to_string())
            .unwrap_or_else(|| community.to_string()),
    }
}
