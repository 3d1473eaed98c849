pub mod aggregator;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod export;
pub mod fetch;
pub mod identity;
pub mod layout;
pub mod logging;
pub mod toolchain;

pub use aggregator::{Aggregation, Aggregator, aggregate};
pub use config::{AggregatorConfig, ToolchainConfig};
pub use diagnostics::{Diagnostic, DiagnosticScope, Diagnostics};
pub use discovery::DiscoveryStrategy;
pub use error::{BuildscopeError, Result};
pub use export::{export_to_file, read_snapshot, write_snapshot};
pub use identity::resolve_module_id;
pub use layout::SourceLayoutExtractor;
pub use toolchain::ToolchainExtractor;
