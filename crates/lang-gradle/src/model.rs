//! Serialized form of the host build's object model, as written by the
//! host-side tooling plugin.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradleDump {
    pub gradle_version: String,
    /// Name of the root build; the first build when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_build: Option<String>,
    pub builds: Vec<BuildDump>,
    /// Flattened names of every build of the composite except the root.
    #[serde(default)]
    pub editable_builds: Vec<String>,
}

impl GradleDump {
    pub fn root_build_name(&self) -> Option<&str> {
        self.root_build
            .as_deref()
            .or_else(|| self.builds.first().map(|b| b.name.as_str()))
    }

    pub fn build(&self, name: &str) -> Option<&BuildDump> {
        self.builds.iter().find(|b| b.name == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildDump {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_level: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectDump>,
    /// Builds directly included by this build.
    #[serde(default)]
    pub included_builds: Vec<String>,
    /// Failures reported while fetching this build's project model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDump {
    pub name: String,
    /// Gradle project path, `:` for the root project.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    #[serde(default)]
    pub tasks: IndexMap<String, TaskDump>,
    /// `None` when the project has no source-set container.
    #[serde(default)]
    pub source_sets: Option<Vec<SourceSetDump>>,
    #[serde(default)]
    pub failures: FacetFailures,
}

/// Failures of the per-module facet model builders.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FacetFailures {
    #[serde(default)]
    pub toolchain: Vec<String>,
    #[serde(default)]
    pub source_sets: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDump {
    /// True for archive tasks (`Jar` and subclasses).
    #[serde(default)]
    pub archive: bool,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub outputs: Vec<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceSetDump {
    pub name: String,
    #[serde(default)]
    pub source_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub resource_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub source_excludes: Vec<String>,
    #[serde(default)]
    pub resource_excludes: Vec<String>,
    #[serde(default)]
    pub compile_classpath: FileCollectionDump,
    #[serde(default)]
    pub runtime_classpath: FileCollectionDump,
    #[serde(default)]
    pub output_files: Vec<PathBuf>,
}

/// A file collection, or the reason it could not be resolved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FileCollectionDump {
    Unresolved { unresolved: String },
    Files(Vec<PathBuf>),
}

impl Default for FileCollectionDump {
    fn default() -> Self {
        FileCollectionDump::Files(Vec::new())
    }
}

/// A task property as captured by the host. The object keys `error`,
/// `unresolved` and `files` are reserved for the encodings below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyDump {
    /// The property exists but holds no value.
    Absent,
    /// Reading the property threw on the host.
    Error { error: String },
    /// A file-collection property whose dependencies could not be resolved.
    Unresolved { unresolved: String },
    Files { files: Vec<PathBuf> },
    Text(String),
    Bool(bool),
    Number(serde_json::Number),
    List(Vec<PropertyDump>),
    Object(PropertyMap),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PropertyMap(IndexMap<String, PropertyDump>);

impl PropertyMap {
    pub fn get(&self, name: &str) -> Option<&PropertyDump> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropertyDump) {
        self.0.insert(name.into(), value);
    }
}

impl FromIterator<(String, PropertyDump)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, PropertyDump)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
