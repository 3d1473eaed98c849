use crate::config::AggregatorConfig;
use crate::diagnostics::{Diagnostic, DiagnosticScope, Diagnostics};
use crate::discovery::{DiscoveryStrategy, discover_builds};
use crate::fetch::unwrap_fetched;
use crate::identity::resolve_module_id;
use buildscope_api::{
    AggregateError, AggregateResult, BuildController, ModuleId, ProjectModel, SourceSet,
    ToolchainSettings, WorkspaceSnapshot,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error, info, warn};

/// A best-effort snapshot together with the failures met while building it.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub snapshot: WorkspaceSnapshot,
    pub diagnostics: Diagnostics,
}

/// Facets fetched for the modules of one project, in module order.
#[derive(Default)]
struct ProjectFacets {
    toolchains: Vec<(ModuleId, ToolchainSettings)>,
    source_sets: Vec<(ModuleId, BTreeSet<SourceSet>)>,
    diagnostics: Diagnostics,
}

/// Aggregates the metadata of a whole (possibly composite) build into a
/// [`WorkspaceSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Fails only when the root project model is unavailable; every other
    /// failure is recorded in the returned diagnostics.
    pub fn aggregate(&self, controller: &dyn BuildController) -> AggregateResult<Aggregation> {
        let mut diagnostics = Diagnostics::default();
        let projects = self.fetch_projects(controller, &mut diagnostics)?;

        let partials: Vec<ProjectFacets> = if self.config.parallel {
            projects
                .par_iter()
                .map(|project| fetch_project_facets(controller, project))
                .collect()
        } else {
            projects
                .iter()
                .map(|project| fetch_project_facets(controller, project))
                .collect()
        };

        let (toolchains, source_sets) = self.merge(partials, &mut diagnostics);

        info!(
            "Aggregated {} projects, {} modules ({} with toolchain settings), {} diagnostics",
            projects.len(),
            source_sets.len(),
            toolchains.len(),
            diagnostics.len()
        );

        Ok(Aggregation {
            snapshot: WorkspaceSnapshot::new(projects, toolchains, source_sets),
            diagnostics,
        })
    }

    /// Root project first, then the projects of every discovered build.
    fn fetch_projects(
        &self,
        controller: &dyn BuildController,
        diagnostics: &mut Diagnostics,
    ) -> AggregateResult<Vec<ProjectModel>> {
        let root_result = controller.fetch_root_project();
        let root_failures: Vec<String> = root_result
            .failures
            .iter()
            .map(ToString::to_string)
            .collect();
        let Some(root) = unwrap_fetched(root_result, &DiagnosticScope::RootProject, diagnostics)
        else {
            error!("Root project model unavailable, aborting aggregation");
            return Err(AggregateError::RootProjectUnavailable {
                failures: root_failures,
            });
        };

        let strategy = self
            .config
            .strategy_override
            .unwrap_or_else(|| DiscoveryStrategy::for_version(controller.host_version()));
        let graph = controller.build_graph();
        let builds = discover_builds(strategy, &graph, &root.build);
        debug!(
            "Discovered {} included builds using {:?} strategy",
            builds.len(),
            strategy
        );

        let mut projects = vec![root];
        for build in builds {
            for project_ref in &build.projects {
                let scope = DiagnosticScope::Project {
                    build: project_ref.build.clone(),
                    path: project_ref.path.clone(),
                };
                match unwrap_fetched(controller.fetch_project(project_ref), &scope, diagnostics) {
                    Some(project) => projects.push(project),
                    None => warn!("Skipping {}: model unavailable", scope),
                }
            }
        }
        Ok(projects)
    }

    /// Merges per-project results in project order; on a module id collision
    /// the last write wins.
    fn merge(
        &self,
        partials: Vec<ProjectFacets>,
        diagnostics: &mut Diagnostics,
    ) -> (
        BTreeMap<ModuleId, ToolchainSettings>,
        BTreeMap<ModuleId, BTreeSet<SourceSet>>,
    ) {
        let mut toolchains = BTreeMap::new();
        let mut source_sets = BTreeMap::new();

        for partial in partials {
            diagnostics.append(partial.diagnostics);
            toolchains.extend(partial.toolchains);
            for (id, sets) in partial.source_sets {
                let replaced = source_sets.insert(id.clone(), sets).is_some();
                if replaced && self.config.detect_collisions {
                    warn!("Module id {} resolved more than once, keeping the last module", id);
                    diagnostics.push(Diagnostic::new(
                        DiagnosticScope::Collision { module: id },
                        "module id resolved more than once; keeping the last module",
                    ));
                }
            }
        }

        (toolchains, source_sets)
    }
}

fn fetch_project_facets(controller: &dyn BuildController, project: &ProjectModel) -> ProjectFacets {
    let mut facets = ProjectFacets::default();

    for module in &project.modules {
        let id = resolve_module_id(module);
        debug!("Fetching facets of {} ({})", id, module.path);

        let toolchain_scope = DiagnosticScope::Toolchain { module: id.clone() };
        if let Some(toolchain) = unwrap_fetched(
            controller.fetch_toolchain(module),
            &toolchain_scope,
            &mut facets.diagnostics,
        ) {
            facets.toolchains.push((id.clone(), toolchain));
        }

        let layout_scope = DiagnosticScope::SourceSets { module: id.clone() };
        let sets = unwrap_fetched(
            controller.fetch_source_sets(module),
            &layout_scope,
            &mut facets.diagnostics,
        )
        .unwrap_or_default();
        facets.source_sets.push((id, sets));
    }

    facets
}

/// Aggregates with the default configuration.
pub fn aggregate(controller: &dyn BuildController) -> AggregateResult<Aggregation> {
    Aggregator::default().aggregate(controller)
}
