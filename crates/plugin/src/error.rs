use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("property `{name}` could not be read: {reason}")]
    Unreadable { name: String, reason: String },
    #[error("property `{name}` is not {expected}")]
    UnexpectedShape { name: String, expected: &'static str },
}

impl PropertyError {
    pub fn unreadable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unreadable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn unexpected_shape(name: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedShape {
            name: name.into(),
            expected,
        }
    }
}

/// A file collection whose membership could not be computed, typically
/// because its dependency graph references an unresolvable artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not resolve {collection}: {reason}")]
pub struct ResolutionError {
    pub collection: String,
    pub reason: String,
}

impl ResolutionError {
    pub fn new(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            reason: reason.into(),
        }
    }
}
