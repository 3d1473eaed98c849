use crate::discovery::DiscoveryStrategy;

pub const DEFAULT_COMPILE_TASK: &str = "compileKotlin";
pub const DEFAULT_TARGET_PREFIX: &str = "JVM_";

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Fetch per-project facets on the rayon pool and merge once at the end.
    pub parallel: bool,
    /// Report a diagnostic when two modules resolve to the same id.
    pub detect_collisions: bool,
    /// Skip version detection and use this discovery strategy.
    pub strategy_override: Option<DiscoveryStrategy>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            detect_collisions: true,
            strategy_override: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    pub compile_task_name: String,
    /// Token stripped from enum-style targets (`JVM_17` -> `17`).
    pub target_prefix: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            compile_task_name: DEFAULT_COMPILE_TASK.to_string(),
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
        }
    }
}
