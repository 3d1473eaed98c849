use buildscope_api::SourceSet;
use buildscope_plugin::{ModuleScope, ResolutionError, SourceSetHandle};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::warn;

/// Reads the source-set layout of a module.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceLayoutExtractor;

impl SourceLayoutExtractor {
    pub fn new() -> Self {
        Self
    }

    /// `None` when the module has no source-set container. Otherwise every
    /// definition yields exactly one [`SourceSet`], degraded and flagged when
    /// its dependencies cannot be resolved.
    pub fn extract(&self, module: &dyn ModuleScope) -> Option<BTreeSet<SourceSet>> {
        let definitions = module.source_sets()?;
        Some(
            definitions
                .into_iter()
                .map(|definition| self.read_source_set(module, definition))
                .collect(),
        )
    }

    fn read_source_set(
        &self,
        module: &dyn ModuleScope,
        definition: &dyn SourceSetHandle,
    ) -> SourceSet {
        let name = definition.name().to_string();

        let mut excludes: BTreeSet<String> = definition.source_excludes().into_iter().collect();
        excludes.extend(definition.resource_excludes());

        let runtime = resolve_or_flag(&name, definition.runtime_classpath());
        let compile = resolve_or_flag(&name, definition.compile_classpath());
        let has_unresolved_dependencies = runtime.is_none() || compile.is_none();

        SourceSet {
            sources: definition.source_dirs().into_iter().collect(),
            resources: definition.resource_dirs().into_iter().collect(),
            excludes,
            compile_classpath: compile.unwrap_or_default(),
            runtime_classpath: runtime.unwrap_or_default(),
            artifacts: produced_artifacts(module, definition),
            has_unresolved_dependencies,
            name,
        }
    }
}

fn resolve_or_flag(
    source_set: &str,
    resolved: Result<Vec<PathBuf>, ResolutionError>,
) -> Option<BTreeSet<PathBuf>> {
    match resolved {
        Ok(files) => Some(files.into_iter().collect()),
        Err(e) => {
            warn!("Unable to resolve a file collection for source set {source_set} - {e}");
            None
        }
    }
}

/// Archive outputs of the source set's packaging task (when it exists and
/// produces an archive) unioned with its compiled-output files.
fn produced_artifacts(
    module: &dyn ModuleScope,
    definition: &dyn SourceSetHandle,
) -> BTreeSet<PathBuf> {
    let mut artifacts = BTreeSet::new();
    if let Some(task) = module.find_task(&definition.jar_task_name()) {
        if task.produces_archive() {
            artifacts.extend(task.output_files());
        }
    }
    artifacts.extend(definition.output_files());
    artifacts
}
