use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagpostError {
    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("locator error: {0}")]
    Locator(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FlagpostResult<T> = Result<T, FlagpostError>;
