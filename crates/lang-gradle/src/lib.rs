//! Gradle host adapter: serves the build-graph query capability from a
//! tooling dump written by the host-side plugin.

pub mod cap;
pub mod controller;
pub mod error;
pub mod model;
pub mod resolve;
pub mod shape;

pub use controller::DumpController;
pub use error::DumpError;
pub use model::GradleDump;
