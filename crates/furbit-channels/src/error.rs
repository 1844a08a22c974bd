use thiserror::Error;

/// Errors that can occur within any notification channel adapter.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The channel-specific configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The HTTP transport failed before the delivery API answered.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The delivery API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}
