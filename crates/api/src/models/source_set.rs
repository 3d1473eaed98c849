use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A named grouping of source/resource roots plus its dependency and output
/// file sets, scoped to one module.
///
/// Ordering is by name first; names are unique within a module.
#[derive(
    Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct SourceSet {
    pub name: String,
    #[serde(default)]
    pub sources: BTreeSet<PathBuf>,
    #[serde(default)]
    pub resources: BTreeSet<PathBuf>,
    /// Union of source-level and resource-level exclusion globs.
    #[serde(default)]
    pub excludes: BTreeSet<String>,
    #[serde(default)]
    pub compile_classpath: BTreeSet<PathBuf>,
    #[serde(default)]
    pub runtime_classpath: BTreeSet<PathBuf>,
    /// Packaged archives unioned with raw compiled-output files.
    #[serde(default)]
    pub artifacts: BTreeSet<PathBuf>,
    /// Set when either dependency set failed to resolve and was replaced by
    /// an empty set.
    #[serde(default)]
    pub has_unresolved_dependencies: bool,
}

impl SourceSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
