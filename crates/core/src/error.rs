use buildscope_api::AggregateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),
    #[error("Host error: {0}")]
    Host(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for BuildscopeError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        BuildscopeError::Host(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuildscopeError>;
