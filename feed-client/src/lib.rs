pub mod fetch;
pub mod parse;

pub use fetch::FeedFetcher;
pub use parse::parse_feed;
