use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Feed parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

impl ListenerError {
    /// Whether the scan may continue after this error. Fetch and parse
    /// failures skip the affected community; configuration and webhook
    /// failures abort the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ListenerError::Fetch(_) | ListenerError::Parse(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not set: {var_name}")]
    MissingEnvironmentVariable { var_name: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Feed request for r/{community} failed with status {status}")]
    Status { community: String, status: u16 },

    #[error("Network error fetching r/{community}: {source}")]
    Transport {
        community: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed feed for r/{community}: {details}")]
    Malformed { community: String, details: String },
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Webhook rejected payload with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Network error posting to webhook: {0}")]
    Transport(#[from] reqwest::Error),
}
