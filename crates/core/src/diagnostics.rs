use buildscope_api::ModuleId;
use serde::Serialize;
use std::fmt;

/// The unit a failure belongs to. Failures never leave their unit.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum DiagnosticScope {
    RootProject,
    Project { build: String, path: String },
    Toolchain { module: ModuleId },
    SourceSets { module: ModuleId },
    Collision { module: ModuleId },
}

impl fmt::Display for DiagnosticScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticScope::RootProject => f.write_str("root project"),
            DiagnosticScope::Project { build, path } => write!(f, "project {build}{path}"),
            DiagnosticScope::Toolchain { module } => write!(f, "toolchain of {module}"),
            DiagnosticScope::SourceSets { module } => write!(f, "source sets of {module}"),
            DiagnosticScope::Collision { module } => write!(f, "module id {module}"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub scope: DiagnosticScope,
    pub message: String,
}

impl Diagnostic {
    pub fn new(scope: DiagnosticScope, message: impl Into<String>) -> Self {
        Self {
            scope,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.scope, self.message)
    }
}

/// Out-of-band stream of human-readable failure messages gathered during one
/// aggregation.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn append(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|d| d.message.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
