pub mod controller;
pub mod error;
pub mod fetch;
pub mod models;

// Re-export commonly used types
pub use controller::{BuildController, BuildGraph, BuildRef, HostVersion, InvalidVersion, ProjectRef};
pub use error::{AggregateError, AggregateResult};
pub use fetch::{Failure, FetchResult};
pub use models::*;
