use super::source_set::SourceSetHandle;
use super::task::TaskHandle;

/// Host-side view of a single module: its tasks and its source-set container.
pub trait ModuleScope {
    fn find_task(&self, name: &str) -> Option<&dyn TaskHandle>;

    /// `None` when the module's build lacks a source-set container altogether.
    fn source_sets(&self) -> Option<Vec<&dyn SourceSetHandle>>;
}
