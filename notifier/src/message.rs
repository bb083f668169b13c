use chrono::{DateTime, Utc};
use listener_core::Match;
use serde::Serialize;

/// Detail blocks per digest; anything past this is rolled into a summary line.
const MAX_DETAIL_BLOCKS: usize = 20;

/// Hard cap on rendered title length, ellipsis included.
const MAX_TITLE_CHARS: usize = 100;

/// Keywords shown per match.
const MAX_KEYWORDS_SHOWN: usize = 3;

/// Outgoing webhook payload: either a Block Kit digest or a plain-text
/// fallback, never both.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Divider,
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String },
}

/// Builds the digest for one product. Returns `None` when there is nothing to
/// report; the caller decides whether a run-level fallback is due instead.
pub fn digest_message(product_name: &str, matches: &[Match]) -> Option<SlackMessage> {
    if matches.is_empty() {
        return None;
    }

    let total = matches.len();
    let mut blocks = vec![
        Block::Header {
            text: TextObject::PlainText {
                text: format!(
                    "\u{1f50d} {} — {} thread{} found",
                    product_name,
                    total,
                    if total == 1 { "" } else { "s" }
                ),
                emoji: true,
            },
        },
        Block::Divider,
    ];

    for m in matches.iter().take(MAX_DETAIL_BLOCKS) {
        let keyword_list = m
            .keywords
            .iter()
            .take(MAX_KEYWORDS_SHOWN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        blocks.push(Block::Section {
            text: TextObject::Mrkdwn {
                text: format!(
                    "*r/{}*\n<{}|{}>\n_Keywords: {}_",
                    m.community,
                    m.post.link,
                    truncate(&m.post.title, MAX_TITLE_CHARS),
                    keyword_list
                ),
            },
        });
    }

    if total > MAX_DETAIL_BLOCKS {
        blocks.push(Block::Context {
            elements: vec![TextObject::Mrkdwn {
                text: format!("_...and {} more matches_", total - MAX_DETAIL_BLOCKS),
            }],
        });
    }

    Some(SlackMessage {
        text: None,
        blocks: Some(blocks),
    })
}

/// The single run-level message sent when no community produced a match.
pub fn fallback_message(lookback_hours: i64, now: DateTime<Utc>) -> SlackMessage {
    SlackMessage {
        text: Some(format!(
            "\u{1f50d} Reddit scan complete — {}\n\nNo matching posts found in the last {} hours.",
            now.format("%A, %B %-d, %Y"),
            lookback_hours
        )),
        blocks: None,
    }
}

// Character-based so multi-byte titles never split mid-sequence.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", head)
}
