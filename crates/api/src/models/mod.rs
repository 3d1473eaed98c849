pub mod module_id;
pub mod project;
pub mod snapshot;
pub mod source_set;
pub mod toolchain;

pub use module_id::*;
pub use project::*;
pub use snapshot::*;
pub use source_set::*;
pub use toolchain::*;
