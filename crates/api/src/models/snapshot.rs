use super::module_id::ModuleId;
use super::project::ProjectModel;
use super::source_set::SourceSet;
use super::toolchain::ToolchainSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Immutable result of one aggregation run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    projects: Vec<ProjectModel>,
    toolchains: BTreeMap<ModuleId, ToolchainSettings>,
    source_sets: BTreeMap<ModuleId, BTreeSet<SourceSet>>,
}

impl WorkspaceSnapshot {
    pub fn new(
        projects: Vec<ProjectModel>,
        toolchains: BTreeMap<ModuleId, ToolchainSettings>,
        source_sets: BTreeMap<ModuleId, BTreeSet<SourceSet>>,
    ) -> Self {
        Self {
            projects,
            toolchains,
            source_sets,
        }
    }

    /// Root project first, then projects of included builds in discovery order.
    pub fn projects(&self) -> &[ProjectModel] {
        &self.projects
    }

    pub fn toolchains(&self) -> &BTreeMap<ModuleId, ToolchainSettings> {
        &self.toolchains
    }

    pub fn source_sets(&self) -> &BTreeMap<ModuleId, BTreeSet<SourceSet>> {
        &self.source_sets
    }

    pub fn toolchain(&self, id: &str) -> Option<&ToolchainSettings> {
        self.toolchains.get(id)
    }

    pub fn module_source_sets(&self, id: &str) -> Option<&BTreeSet<SourceSet>> {
        self.source_sets.get(id)
    }

    /// Every module id present in the snapshot.
    pub fn module_ids(&self) -> BTreeSet<&ModuleId> {
        self.source_sets
            .keys()
            .chain(self.toolchains.keys())
            .collect()
    }
}
