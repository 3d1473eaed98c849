pub mod module;
pub mod source_set;
pub mod task;

pub use module::*;
pub use source_set::*;
pub use task::*;
