use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Compiler-target and compiler-argument/plugin configuration of a module's
/// language toolchain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainSettings {
    /// Normalized target version, e.g. `17` for a `JVM_17` setting.
    pub jvm_target: Option<String>,
    #[serde(default)]
    pub compiler_args: Vec<String>,
    /// Compiler-plugin artifacts only, in classpath order.
    #[serde(default)]
    pub plugin_classpath: Vec<String>,
    #[serde(default)]
    pub plugin_options: Vec<String>,
}

impl ToolchainSettings {
    pub fn is_empty(&self) -> bool {
        self.jvm_target.is_none()
            && self.compiler_args.is_empty()
            && self.plugin_classpath.is_empty()
            && self.plugin_options.is_empty()
    }
}
