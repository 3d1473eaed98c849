use crate::model::{FileCollectionDump, SourceSetDump};
use buildscope_plugin::{ResolutionError, SourceSetHandle};
use std::path::PathBuf;

impl SourceSetDump {
    fn resolve(
        &self,
        collection: &FileCollectionDump,
        kind: &str,
    ) -> Result<Vec<PathBuf>, ResolutionError> {
        match collection {
            FileCollectionDump::Files(files) => Ok(files.clone()),
            FileCollectionDump::Unresolved { unresolved } => Err(ResolutionError::new(
                format!("{} of source set {}", kind, self.name),
                unresolved.clone(),
            )),
        }
    }
}

impl SourceSetHandle for SourceSetDump {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_dirs(&self) -> Vec<PathBuf> {
        self.source_dirs.clone()
    }

    fn resource_dirs(&self) -> Vec<PathBuf> {
        self.resource_dirs.clone()
    }

    fn source_excludes(&self) -> Vec<String> {
        self.source_excludes.clone()
    }

    fn resource_excludes(&self) -> Vec<String> {
        self.resource_excludes.clone()
    }

    fn compile_classpath(&self) -> Result<Vec<PathBuf>, ResolutionError> {
        self.resolve(&self.compile_classpath, "compile classpath")
    }

    fn runtime_classpath(&self) -> Result<Vec<PathBuf>, ResolutionError> {
        self.resolve(&self.runtime_classpath, "runtime classpath")
    }

    fn output_files(&self) -> Vec<PathBuf> {
        self.output_files.clone()
    }
}
