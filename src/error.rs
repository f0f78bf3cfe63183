use thiserror::Error;

/// Failures at the edges of the dashboard: loading the store snapshot and
/// decoding caller input. The view pipeline itself never fails.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Query error: {0}")]
    Query(#[from] serde_urlencoded::de::Error),

    #[error("Query encoding error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
