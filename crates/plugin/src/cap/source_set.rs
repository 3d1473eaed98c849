use crate::error::ResolutionError;
use std::path::PathBuf;

pub const MAIN_SOURCE_SET: &str = "main";

/// Derives the conventional name of a per-source-set task: `jar` for `main`,
/// `testJar` for `test`.
pub fn source_set_task_name(source_set: &str, verb: &str) -> String {
    if source_set == MAIN_SOURCE_SET {
        return verb.to_string();
    }
    let mut chars = verb.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", source_set, first.to_uppercase(), chars.as_str()),
        None => source_set.to_string(),
    }
}

/// A source-set definition inside a module's source-set container.
pub trait SourceSetHandle {
    fn name(&self) -> &str;

    fn source_dirs(&self) -> Vec<PathBuf>;

    fn resource_dirs(&self) -> Vec<PathBuf>;

    fn source_excludes(&self) -> Vec<String>;

    fn resource_excludes(&self) -> Vec<String>;

    fn compile_classpath(&self) -> Result<Vec<PathBuf>, ResolutionError>;

    fn runtime_classpath(&self) -> Result<Vec<PathBuf>, ResolutionError>;

    /// Raw compiled-output files (class directories, processed resources).
    fn output_files(&self) -> Vec<PathBuf>;

    /// Name of the packaging task associated with this source set.
    fn jar_task_name(&self) -> String {
        source_set_task_name(self.name(), "jar")
    }
}
