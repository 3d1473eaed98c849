//! Translation of a dumped build's project tree into a [`ProjectModel`].
//!
//! Every Gradle project of the build becomes a module. A module's parent
//! chain follows its Gradle path up to, but excluding, the root project, so
//! `:modules:lib` sits under the container `modules`.

use crate::model::{BuildDump, ProjectDump};
use buildscope_api::{ElementNode, ModuleModel, ProjectModel};
use std::collections::HashMap;

pub const ROOT_PATH: &str = ":";

/// Path of the enclosing project: `:a:b` -> `:a`, `:a` -> `:`, `:` -> none.
pub fn parent_path(path: &str) -> Option<&str> {
    if path == ROOT_PATH {
        return None;
    }
    match path.rfind(':') {
        Some(0) => Some(ROOT_PATH),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit(':').next().unwrap_or(path)
}

/// The build's root project, or its first project when no project sits at `:`.
pub fn root_project(build: &BuildDump) -> Option<&ProjectDump> {
    build
        .projects
        .iter()
        .find(|p| p.path == ROOT_PATH)
        .or_else(|| build.projects.first())
}

pub fn project_model(build: &BuildDump) -> ProjectModel {
    let root = root_project(build);
    let project_name = root.map_or(build.name.as_str(), |p| p.name.as_str());
    let by_path: HashMap<&str, &ProjectDump> = build
        .projects
        .iter()
        .map(|p| (p.path.as_str(), p))
        .collect();

    let mut model = ProjectModel::new(project_name).with_build(&build.name);
    model.project_dir = build
        .root_dir
        .clone()
        .or_else(|| root.and_then(|p| p.project_dir.clone()));
    model.language_level = build.language_level.clone();

    for project in &build.projects {
        let chain = container_chain(&project.path, &by_path);
        let mut module = ModuleModel::new(&project.name, project_name)
            .with_parent(ElementNode::from_ancestors(chain))
            .with_handle(&build.name, &project.path);
        if let Some(dir) = &project.project_dir {
            module = module.with_module_dir(dir);
        }
        model.modules.push(module);
    }
    model
}

/// Names of the containers above `path`, nearest first. A container with no
/// dumped project is named after its path segment.
fn container_chain<'a>(path: &str, by_path: &HashMap<&str, &'a ProjectDump>) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = parent_path(path);
    while let Some(container) = current {
        if container == ROOT_PATH {
            break;
        }
        let name = by_path
            .get(container)
            .map_or(last_segment(container), |p| p.name.as_str());
        chain.push(name.to_string());
        current = parent_path(container);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_core::resolve_module_id;

    fn project(name: &str, path: &str) -> ProjectDump {
        serde_json::from_value(serde_json::json!({ "name": name, "path": path })).unwrap()
    }

    fn build(projects: Vec<ProjectDump>) -> BuildDump {
        BuildDump {
            name: "App".to_string(),
            root_dir: None,
            language_level: None,
            projects,
            included_builds: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[test]
    fn parent_paths_walk_to_the_root() {
        assert_eq!(parent_path(":a:b"), Some(":a"));
        assert_eq!(parent_path(":a"), Some(":"));
        assert_eq!(parent_path(":"), None);
    }

    #[test]
    fn modules_nest_under_their_gradle_parents() {
        let model = project_model(&build(vec![
            project("App", ":"),
            project("modules", ":modules"),
            project("lib", ":modules:lib"),
        ]));
        assert_eq!(model.name, "App");
        let ids: Vec<String> = model
            .modules
            .iter()
            .map(|m| resolve_module_id(m).into_inner())
            .collect();
        assert_eq!(ids, vec!["App", "modules", "modules.lib"]);
        assert_eq!(model.modules[2].path, ":modules:lib");
        assert_eq!(model.modules[2].build, "App");
    }

    #[test]
    fn renamed_containers_use_the_project_name() {
        let model = project_model(&build(vec![
            project("App", ":"),
            project("platform", ":infra"),
            project("db", ":infra:db"),
            project("orphan", ":missing:orphan"),
        ]));
        let ids: Vec<String> = model
            .modules
            .iter()
            .map(|m| resolve_module_id(m).into_inner())
            .collect();
        assert_eq!(ids, vec!["App", "platform", "platform.db", "missing.orphan"]);
    }
}
