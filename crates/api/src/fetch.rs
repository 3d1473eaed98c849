use serde::{Deserialize, Serialize};
use std::fmt;

/// A failure reported by the host alongside (or instead of) a fetched model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({})", self.message, description),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of a host model fetch: an optional model plus structured failures.
/// Both may be present at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<T> {
    pub model: Option<T>,
    pub failures: Vec<Failure>,
}

impl<T> FetchResult<T> {
    pub fn ok(model: T) -> Self {
        Self {
            model: Some(model),
            failures: Vec::new(),
        }
    }

    /// The host had nothing to report for this target (e.g. the facet does not
    /// apply to the module).
    pub fn absent() -> Self {
        Self {
            model: None,
            failures: Vec::new(),
        }
    }

    pub fn failed(failure: impl Into<String>) -> Self {
        Self {
            model: None,
            failures: vec![Failure::new(failure)],
        }
    }

    pub fn from_option(model: Option<T>) -> Self {
        Self {
            model,
            failures: Vec::new(),
        }
    }

    pub fn with_failure(mut self, failure: Failure) -> Self {
        self.failures.push(failure);
        self
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        FetchResult {
            model: self.model.map(f),
            failures: self.failures,
        }
    }

    pub fn into_parts(self) -> (Option<T>, Vec<Failure>) {
        (self.model, self.failures)
    }
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self::absent()
    }
}
