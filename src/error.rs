use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackLoggerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone: {0} (use an IANA name such as America/New_York)")]
    UnknownTimezone(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlackLoggerError>;
