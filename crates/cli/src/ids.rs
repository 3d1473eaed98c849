use buildscope_core::AggregatorConfig;
use std::path::PathBuf;

pub fn run(dump: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let aggregation = buildscope_runtime::aggregate_dump(&dump, AggregatorConfig::default())?;
    for id in aggregation.snapshot.module_ids() {
        println!("{}", id);
    }
    Ok(())
}
