use buildscope_api::InvalidVersion;
use buildscope_core::BuildscopeError;
use thiserror::Error;

/// Failures loading a tooling dump. Host failures recorded inside a valid dump
/// are not errors; they surface as fetch failures.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to read tooling dump: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tooling dump: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tooling dump contains no builds")]
    NoBuilds,
    #[error("tooling dump references unknown build `{0}`")]
    UnknownBuild(String),
    #[error(transparent)]
    Version(#[from] InvalidVersion),
}

impl From<DumpError> for BuildscopeError {
    fn from(err: DumpError) -> Self {
        match err {
            DumpError::Io(e) => BuildscopeError::Io(e),
            DumpError::Json(e) => BuildscopeError::Json(e),
            other => BuildscopeError::Host(other.to_string()),
        }
    }
}
