use crate::cap::ProjectScope;
use crate::error::DumpError;
use crate::model::{BuildDump, GradleDump, ProjectDump};
use crate::resolve::{ROOT_PATH, project_model, root_project};
use buildscope_api::{
    BuildController, BuildGraph, BuildRef, Failure, FetchResult, HostVersion, ModuleModel,
    ProjectModel, ProjectRef, SourceSet, ToolchainSettings,
};
use buildscope_core::{SourceLayoutExtractor, ToolchainConfig, ToolchainExtractor};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Answers build-graph queries from a tooling dump.
pub struct DumpController {
    dump: GradleDump,
    root_build: String,
    version: HostVersion,
    toolchain: ToolchainExtractor,
    layout: SourceLayoutExtractor,
}

impl DumpController {
    /// Validates build references and the host version up front so queries
    /// never meet a dangling build name.
    pub fn new(dump: GradleDump) -> Result<Self, DumpError> {
        let root_build = dump.root_build_name().ok_or(DumpError::NoBuilds)?.to_string();
        if dump.build(&root_build).is_none() {
            return Err(DumpError::UnknownBuild(root_build));
        }
        let referenced = dump
            .builds
            .iter()
            .flat_map(|b| b.included_builds.iter())
            .chain(dump.editable_builds.iter());
        for name in referenced {
            if dump.build(name).is_none() {
                return Err(DumpError::UnknownBuild(name.clone()));
            }
        }
        let version: HostVersion = dump.gradle_version.parse()?;

        Ok(Self {
            dump,
            root_build,
            version,
            toolchain: ToolchainExtractor::default(),
            layout: SourceLayoutExtractor::new(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, DumpError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DumpError> {
        let content = std::fs::read_to_string(path)?;
        let controller = Self::from_json(&content)?;
        info!(
            "Loaded tooling dump {} (Gradle {}, {} builds)",
            path.display(),
            controller.version,
            controller.dump.builds.len()
        );
        Ok(controller)
    }

    pub fn with_toolchain_config(mut self, config: ToolchainConfig) -> Self {
        self.toolchain = ToolchainExtractor::new(config);
        self
    }

    pub fn dump(&self) -> &GradleDump {
        &self.dump
    }

    fn fetch_build(&self, name: &str) -> FetchResult<ProjectModel> {
        let Some(build) = self.dump.build(name) else {
            return FetchResult::failed(format!("Unknown build `{name}`"));
        };
        let model = if build.projects.is_empty() {
            None
        } else {
            Some(project_model(build))
        };
        with_failures(FetchResult::from_option(model), &build.failures)
    }

    fn find_project(&self, module: &ModuleModel) -> Option<&ProjectDump> {
        self.dump
            .build(&module.build)?
            .projects
            .iter()
            .find(|p| p.path == module.path)
    }

    /// Legacy view entry for `build`: its own includes are nested below it.
    /// A build already on the current include chain is not followed again.
    fn included_ref(&self, build: &BuildDump, chain: &mut Vec<String>) -> BuildRef {
        chain.push(build.name.clone());
        let mut build_ref = self.build_ref(build);
        for name in &build.included_builds {
            if chain.contains(name) {
                debug!("Include cycle through build {}, not following", name);
                continue;
            }
            if let Some(included) = self.dump.build(name) {
                build_ref.included.push(self.included_ref(included, chain));
            }
        }
        chain.pop();
        build_ref
    }

    /// One project handle per build: its root project stands for the whole
    /// build's project graph. A build whose projects failed to load still
    /// gets a handle so the failure is reported when it is fetched.
    fn build_ref(&self, build: &BuildDump) -> BuildRef {
        let mut build_ref = BuildRef::new(&build.name);
        build_ref.root_dir = build.root_dir.clone();
        let project = match root_project(build) {
            Some(root) => ProjectRef {
                build: build.name.clone(),
                name: root.name.clone(),
                path: root.path.clone(),
                project_dir: root.project_dir.clone(),
            },
            None => ProjectRef {
                build: build.name.clone(),
                name: build.name.clone(),
                path: ROOT_PATH.to_string(),
                project_dir: build.root_dir.clone(),
            },
        };
        build_ref.projects.push(project);
        build_ref
    }
}

fn with_failures<T>(mut result: FetchResult<T>, failures: &[String]) -> FetchResult<T> {
    result
        .failures
        .extend(failures.iter().map(|f| Failure::new(f.clone())));
    result
}

impl BuildController for DumpController {
    fn fetch_root_project(&self) -> FetchResult<ProjectModel> {
        self.fetch_build(&self.root_build)
    }

    fn fetch_project(&self, project: &ProjectRef) -> FetchResult<ProjectModel> {
        self.fetch_build(&project.build)
    }

    fn fetch_toolchain(&self, module: &ModuleModel) -> FetchResult<ToolchainSettings> {
        let Some(project) = self.find_project(module) else {
            return FetchResult::absent();
        };
        if !project.failures.toolchain.is_empty() {
            return with_failures(FetchResult::absent(), &project.failures.toolchain);
        }
        FetchResult::from_option(self.toolchain.extract(&ProjectScope::new(project)))
    }

    fn fetch_source_sets(&self, module: &ModuleModel) -> FetchResult<BTreeSet<SourceSet>> {
        let Some(project) = self.find_project(module) else {
            return FetchResult::absent();
        };
        if !project.failures.source_sets.is_empty() {
            return with_failures(FetchResult::absent(), &project.failures.source_sets);
        }
        FetchResult::from_option(self.layout.extract(&ProjectScope::new(project)))
    }

    fn build_graph(&self) -> BuildGraph {
        let mut graph = BuildGraph::default();
        if let Some(root) = self.dump.build(&self.root_build) {
            let mut chain = vec![root.name.clone()];
            for name in &root.included_builds {
                if let Some(build) = self.dump.build(name) {
                    graph.included_builds.push(self.included_ref(build, &mut chain));
                }
            }
        }
        graph.editable_builds = self
            .dump
            .editable_builds
            .iter()
            .filter_map(|name| self.dump.build(name))
            .map(|build| self.build_ref(build))
            .collect();
        graph
    }

    fn host_version(&self) -> HostVersion {
        self.version
    }
}
