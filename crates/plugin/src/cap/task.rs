use crate::property::PropertyHolder;
use std::path::PathBuf;

/// A named task of a module.
pub trait TaskHandle {
    fn name(&self) -> &str;

    /// Named properties of the task, read best-effort.
    fn properties(&self) -> &dyn PropertyHolder;

    /// True when the task packages its inputs into an archive (a jar-like task).
    fn produces_archive(&self) -> bool {
        false
    }

    fn output_files(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}
