use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Anything that sits in the container hierarchy of a build: it has a name
/// and, optionally, an enclosing container.
pub trait HierarchicalElement {
    fn name(&self) -> &str;

    fn parent(&self) -> Option<&dyn HierarchicalElement>;
}

/// Walks the containers above `element`, nearest first.
pub fn ancestors(element: &dyn HierarchicalElement) -> Ancestors<'_> {
    Ancestors {
        next: element.parent(),
    }
}

pub struct Ancestors<'a> {
    next: Option<&'a dyn HierarchicalElement>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a dyn HierarchicalElement;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// A named container link in a module's upward chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ElementNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<ElementNode>>,
}

impl ElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    /// Builds a chain from container names given nearest first.
    /// Returns `None` for an empty chain.
    pub fn from_ancestors<I, S>(nearest_first: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: Into<String>,
    {
        nearest_first
            .into_iter()
            .rev()
            .fold(None, |parent, name| {
                Some(ElementNode {
                    name: name.into(),
                    parent: parent.map(Box::new),
                })
            })
    }
}

impl HierarchicalElement for ElementNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> Option<&dyn HierarchicalElement> {
        self.parent
            .as_deref()
            .map(|p| p as &dyn HierarchicalElement)
    }
}

/// A unit of compilation owned by exactly one project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleModel {
    pub name: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ElementNode>,
    /// Host handle of the module (a Gradle project path such as `:modules:lib`).
    #[serde(default)]
    pub path: String,
    /// Name of the build this module was fetched from.
    #[serde(default)]
    pub build: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_dir: Option<PathBuf>,
}

impl ModuleModel {
    pub fn new(name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_name: project_name.into(),
            parent: None,
            path: String::new(),
            build: String::new(),
            module_dir: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<ElementNode>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_handle(mut self, build: impl Into<String>, path: impl Into<String>) -> Self {
        self.build = build.into();
        self.path = path.into();
        self
    }

    pub fn with_module_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.module_dir = Some(dir.into());
        self
    }

    /// True when this module is the synthetic root module of its project.
    pub fn is_project_root(&self) -> bool {
        self.name == self.project_name
    }
}

impl HierarchicalElement for ModuleModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> Option<&dyn HierarchicalElement> {
        self.parent.as_ref().map(|p| p as &dyn HierarchicalElement)
    }
}

/// A top-level buildable unit: one project graph of the root build or of an
/// included build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    pub name: String,
    #[serde(default)]
    pub build: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_level: Option<String>,
    #[serde(default)]
    pub modules: Vec<ModuleModel>,
}

impl ProjectModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build: String::new(),
            project_dir: None,
            language_level: None,
            modules: Vec::new(),
        }
    }

    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    pub fn with_module(mut self, module: ModuleModel) -> Self {
        self.modules.push(module);
        self
    }
}
