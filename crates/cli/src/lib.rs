mod export;
mod ids;
mod schema;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "buildscope",
    version,
    about = "Aggregates build-graph metadata into a single workspace snapshot",
    long_about = "Buildscope reads a tooling dump of a (possibly composite) Gradle build and \
                  aggregates its projects, module toolchain settings and source-set layouts \
                  into one JSON snapshot keyed by hierarchical module ids."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a tooling dump and write the workspace snapshot
    #[command(
        long_about = "Aggregates every build reachable from the dump's root build and writes the \
                            snapshot as JSON. Failures that only degrade the snapshot are listed \
                            on stderr after the export."
    )]
    Export(ExportArgs),
    /// Print the module ids of a tooling dump, one per line
    Ids {
        /// Path to the tooling dump
        #[arg(value_name = "DUMP")]
        dump: PathBuf,
    },
    /// Print the JSON schema of the workspace snapshot
    Schema,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the tooling dump
    #[arg(value_name = "DUMP")]
    pub dump: PathBuf,

    /// Write the snapshot to this file instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Fetch per-project facets in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Do not report module id collisions
    #[arg(long)]
    pub no_collision_check: bool,

    /// Always discover builds through the legacy included-builds view
    #[arg(long)]
    pub legacy_discovery: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = buildscope_runtime::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Export(args) => export::run(args),
        Commands::Ids { dump } => ids::run(dump),
        Commands::Schema => schema::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flags_parse() {
        let cli = Cli::try_parse_from([
            "buildscope",
            "export",
            "dump.json",
            "-o",
            "out.json",
            "--parallel",
            "--legacy-discovery",
            "--compact",
        ])
        .unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.dump, PathBuf::from("dump.json"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.parallel && args.legacy_discovery && args.compact);
        assert!(!args.no_collision_check);
    }

    #[test]
    fn dump_path_is_required() {
        assert!(Cli::try_parse_from(["buildscope", "ids"]).is_err());
    }
}
