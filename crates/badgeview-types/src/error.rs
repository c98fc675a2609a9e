//! Error types for the badge view.

/// Errors produced by the badge view.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BadgeError>;
