pub mod config;
pub mod error;
pub mod matching;
pub mod types;

pub use config::*;
pub use error::*;
pub use matching::*;
pub use types::*;
