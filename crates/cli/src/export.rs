use crate::ExportArgs;
use buildscope_core::{AggregatorConfig, DiscoveryStrategy, export_to_file, write_snapshot};
use tracing::info;

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AggregatorConfig {
        parallel: args.parallel,
        detect_collisions: !args.no_collision_check,
        strategy_override: args.legacy_discovery.then_some(DiscoveryStrategy::Legacy),
    };

    info!("Aggregating tooling dump {}...", args.dump.display());
    let aggregation = buildscope_runtime::aggregate_dump(&args.dump, config)?;
    let pretty = !args.compact;

    match &args.output {
        Some(path) => export_to_file(&aggregation.snapshot, path, pretty)?,
        None => write_snapshot(&aggregation.snapshot, std::io::stdout().lock(), pretty)?,
    }

    if !aggregation.diagnostics.is_empty() {
        eprintln!(
            "Snapshot exported with {} diagnostics:",
            aggregation.diagnostics.len()
        );
        for diagnostic in aggregation.diagnostics.iter() {
            eprintln!(" - {}", diagnostic);
        }
    }
    Ok(())
}
