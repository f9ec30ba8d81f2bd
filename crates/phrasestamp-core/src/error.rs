use thiserror::Error;

/// Errors raised at the edges of the locator: reading transcripts and
/// loading match rules. Locating a phrase never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transcript parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("match rules parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid match rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, Error>;
