use thiserror::Error;

/// Errors raised while building a lake.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Must provide either desc or map_name")]
    MissingMap,

    #[error("Unknown map preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
