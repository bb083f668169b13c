pub mod message;
pub mod webhook;

pub use message::{digest_message, fallback_message, Block, SlackMessage, TextObject};
pub use webhook::WebhookClient;
