use buildscope_core::{Aggregation, Aggregator, AggregatorConfig, Result, ToolchainConfig};
use buildscope_gradle::DumpController;
use std::path::Path;

/// Opens a tooling dump as a build controller with the given toolchain
/// conventions.
pub fn build_default_controller(
    dump: &Path,
    toolchain: ToolchainConfig,
) -> Result<DumpController> {
    Ok(DumpController::load(dump)?.with_toolchain_config(toolchain))
}

/// Loads a dump and aggregates it in one go. Diagnostics are logged as they
/// occur and summarised once at the end.
pub fn aggregate_dump(dump: &Path, config: AggregatorConfig) -> Result<Aggregation> {
    let controller = build_default_controller(dump, ToolchainConfig::default())?;
    let aggregation = Aggregator::new(config).aggregate(&controller)?;
    if !aggregation.diagnostics.is_empty() {
        tracing::warn!(
            "Aggregation of {} finished with {} diagnostics",
            dump.display(),
            aggregation.diagnostics.len()
        );
    }
    Ok(aggregation)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(buildscope_core::logging::init_logging(component, to_stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_core::BuildscopeError;
    use std::io::Write;

    #[test]
    fn aggregates_a_dump_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let dump = serde_json::json!({
            "gradleVersion": "8.5",
            "builds": [{ "name": "App", "projects": [{ "name": "App", "path": ":" }] }]
        });
        file.write_all(dump.to_string().as_bytes()).unwrap();

        let aggregation = aggregate_dump(file.path(), AggregatorConfig::default()).unwrap();
        assert_eq!(aggregation.snapshot.projects().len(), 1);
    }

    #[test]
    fn dump_errors_map_into_the_crate_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = aggregate_dump(file.path(), AggregatorConfig::default()).unwrap_err();
        assert!(matches!(err, BuildscopeError::Json(_)));
    }
}
