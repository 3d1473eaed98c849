mod module;
mod source_set;
mod task;

pub use module::ProjectScope;
pub use task::TaskView;
