use crate::fetch::FetchResult;
use crate::models::{ModuleModel, ProjectModel, SourceSet, ToolchainSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Handle of a project inside some build, used to fetch its structural model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub build: String,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
}

/// A build composed into the root build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
    /// Builds this build includes in turn (legacy view only).
    #[serde(default)]
    pub included: Vec<BuildRef>,
}

impl BuildRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_dir: None,
            projects: Vec::new(),
            included: Vec::new(),
        }
    }

    pub fn with_project(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        let project = ProjectRef {
            build: self.name.clone(),
            name: name.into(),
            path: path.into(),
            project_dir: None,
        };
        self.projects.push(project);
        self
    }

    pub fn with_included(mut self, build: BuildRef) -> Self {
        self.included.push(build);
        self
    }
}

/// The two views of the composite build exposed by the host.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildGraph {
    /// Builds directly included by the root build.
    #[serde(default)]
    pub included_builds: Vec<BuildRef>,
    /// Every build of the composite except the root, flattened.
    #[serde(default)]
    pub editable_builds: Vec<BuildRef>,
}

/// Version of the host build tool, compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl HostVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid host version: {0}")]
pub struct InvalidVersion(pub String);

impl FromStr for HostVersion {
    type Err = InvalidVersion;

    /// Accepts `8`, `8.5`, `8.10.2` and suffixed forms such as `8.5-rc-1` or
    /// `8.7-20240101000000+0000`; the suffix is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s
            .trim()
            .split(|c: char| c == '-' || c == '+' || c.is_whitespace())
            .next()
            .unwrap_or_default();

        let mut parts = [0u32; 3];
        let mut count = 0;
        for (i, component) in base.split('.').enumerate() {
            if i >= parts.len() {
                break;
            }
            parts[i] = component
                .parse()
                .map_err(|_| InvalidVersion(s.to_string()))?;
            count += 1;
        }
        if count == 0 {
            return Err(InvalidVersion(s.to_string()));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

/// Build-graph query capability supplied by the host integration layer.
///
/// Every fetch reports structured failures through [`FetchResult`] instead of
/// failing outright; callers decide how to degrade.
pub trait BuildController: Send + Sync {
    /// Structural model of the root build's project.
    fn fetch_root_project(&self) -> FetchResult<ProjectModel>;

    /// Structural model of a project of some included build.
    fn fetch_project(&self, project: &ProjectRef) -> FetchResult<ProjectModel>;

    /// Toolchain facet of a module. An absent model means the module has no
    /// compile task of the conventional name.
    fn fetch_toolchain(&self, module: &ModuleModel) -> FetchResult<ToolchainSettings>;

    /// Source-layout facet of a module. An absent model means the module has
    /// no source-set container.
    fn fetch_source_sets(&self, module: &ModuleModel) -> FetchResult<BTreeSet<SourceSet>>;

    fn build_graph(&self) -> BuildGraph;

    fn host_version(&self) -> HostVersion;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_and_suffixed_versions() {
        assert_eq!("8.0".parse::<HostVersion>().unwrap(), HostVersion::new(8, 0, 0));
        assert_eq!(
            "8.10.2".parse::<HostVersion>().unwrap(),
            HostVersion::new(8, 10, 2)
        );
        assert_eq!(
            "8.5-rc-1".parse::<HostVersion>().unwrap(),
            HostVersion::new(8, 5, 0)
        );
        assert_eq!(
            "8.7-20240101000000+0000".parse::<HostVersion>().unwrap(),
            HostVersion::new(8, 7, 0)
        );
        assert!("nightly".parse::<HostVersion>().is_err());
        assert!("".parse::<HostVersion>().is_err());
    }

    #[test]
    fn versions_compare_numerically() {
        let v8 = HostVersion::new(8, 0, 0);
        assert!(HostVersion::new(8, 0, 1) > v8);
        assert!(HostVersion::new(7, 6, 4) < v8);
        assert!(HostVersion::new(8, 10, 0) > HostVersion::new(8, 9, 0));
    }

    #[test]
    fn build_ref_projects_carry_their_build() {
        let build = BuildRef::new("tools").with_project("tools", ":");
        assert_eq!(build.projects[0].build, "tools");
        assert_eq!(build.projects[0].path, ":");
    }
}
