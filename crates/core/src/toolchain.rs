//! Best-effort extraction of a module's language-toolchain settings.
//!
//! Task property shapes vary across toolchain versions, so every property is
//! read independently and a failed read degrades only that property.

use crate::config::ToolchainConfig;
use buildscope_api::ToolchainSettings;
use buildscope_plugin::{ModuleScope, PropertyError, PropertyHolder, PropertyLookup, PropertyValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

pub const COMPILER_OPTIONS: &str = "compilerOptions";
pub const JVM_TARGET: &str = "jvmTarget";
pub const FREE_COMPILER_ARGS: &str = "freeCompilerArgs";
pub const PLUGIN_CLASSPATH: &str = "pluginClasspath";
pub const PLUGIN_OPTIONS: &str = "pluginOptions";
pub const PLUGIN_OPTION_ARGUMENTS: &str = "arguments";

static COMPILER_PLUGIN_JAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*-compiler-plugin.*\.jar$").expect("valid plugin jar pattern"));

/// True for file names following the compiler-plugin artifact convention,
/// e.g. `kotlin-serialization-compiler-plugin-2.0.0.jar`.
pub fn is_compiler_plugin_artifact(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| COMPILER_PLUGIN_JAR.is_match(name))
        .unwrap_or(false)
}

/// Strips the enum-style prefix from a target version (`JVM_17` -> `17`).
pub fn normalize_target(raw: &str, prefix: &str) -> String {
    raw.strip_prefix(prefix).unwrap_or(raw).to_string()
}

pub struct ToolchainExtractor {
    config: ToolchainConfig,
}

impl ToolchainExtractor {
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolchainConfig {
        &self.config
    }

    /// Reads the toolchain facet of `module`. `None` when the module has no
    /// compile task of the configured name.
    pub fn extract(&self, module: &dyn ModuleScope) -> Option<ToolchainSettings> {
        let task = module.find_task(&self.config.compile_task_name)?;
        let properties = task.properties();

        let (jvm_target, compiler_args) = self.read_compiler_options(task.name(), properties);
        Some(ToolchainSettings {
            jvm_target,
            compiler_args,
            plugin_classpath: read_plugin_classpath(task.name(), properties),
            plugin_options: read_plugin_options(task.name(), properties),
        })
    }

    fn read_compiler_options(
        &self,
        task: &str,
        properties: &dyn PropertyHolder,
    ) -> (Option<String>, Vec<String>) {
        if !properties.has_property(COMPILER_OPTIONS) {
            return (None, Vec::new());
        }
        let Some(options) = best_effort(task, COMPILER_OPTIONS, properties.object(COMPILER_OPTIONS))
        else {
            return (None, Vec::new());
        };

        let jvm_target = best_effort(task, JVM_TARGET, options.text(JVM_TARGET))
            .map(|raw| normalize_target(&raw, &self.config.target_prefix));
        let compiler_args = best_effort(task, FREE_COMPILER_ARGS, options.list(FREE_COMPILER_ARGS))
            .map(|args| args.iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        (jvm_target, compiler_args)
    }
}

impl Default for ToolchainExtractor {
    fn default() -> Self {
        Self::new(ToolchainConfig::default())
    }
}

fn read_plugin_options(task: &str, properties: &dyn PropertyHolder) -> Vec<String> {
    if !properties.has_property(PLUGIN_OPTIONS) {
        return Vec::new();
    }
    let Some(options) = best_effort(task, PLUGIN_OPTIONS, properties.list(PLUGIN_OPTIONS)) else {
        return Vec::new();
    };
    options.iter().flat_map(option_arguments).collect()
}

/// Arguments of one structured plugin option. Options that do not expose
/// arguments contribute nothing.
fn option_arguments(option: &PropertyValue<'_>) -> Vec<String> {
    let Some(object) = option.as_object() else {
        return Vec::new();
    };
    match object.list(PLUGIN_OPTION_ARGUMENTS) {
        Ok(Some(args)) => args.iter().map(ToString::to_string).collect(),
        _ => Vec::new(),
    }
}

fn read_plugin_classpath(task: &str, properties: &dyn PropertyHolder) -> Vec<String> {
    if !properties.has_property(PLUGIN_CLASSPATH) {
        return Vec::new();
    }
    best_effort(task, PLUGIN_CLASSPATH, properties.files(PLUGIN_CLASSPATH))
        .unwrap_or_default()
        .into_iter()
        .filter(|path| is_compiler_plugin_artifact(path))
        .map(|path| path.to_string_lossy().into_owned())
        .collect()
}

fn best_effort<T>(task: &str, property: &str, read: Result<Option<T>, PropertyError>) -> Option<T> {
    match read {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring {}.{}: {}", task, property, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_plugin::{SourceSetHandle, TaskHandle};
    use std::borrow::Cow;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    enum Value {
        Text(&'static str),
        List(Vec<Value>),
        Files(Vec<&'static str>),
        Object(Props),
        Broken,
    }

    #[derive(Default)]
    struct Props(BTreeMap<&'static str, Value>);

    impl Props {
        fn with(mut self, name: &'static str, value: Value) -> Self {
            self.0.insert(name, value);
            self
        }
    }

    fn view(value: &Value) -> Result<PropertyValue<'_>, PropertyError> {
        Ok(match value {
            Value::Text(t) => PropertyValue::Text(Cow::Borrowed(*t)),
            Value::List(items) => {
                PropertyValue::List(items.iter().map(view).collect::<Result<_, _>>()?)
            }
            Value::Files(files) => {
                PropertyValue::Files(files.iter().map(PathBuf::from).collect())
            }
            Value::Object(props) => PropertyValue::Object(props),
            Value::Broken => return Err(PropertyError::unreadable("?", "provider threw")),
        })
    }

    impl PropertyHolder for Props {
        fn has_property(&self, name: &str) -> bool {
            self.0.contains_key(name)
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError> {
            self.0.get(name).map(view).transpose()
        }
    }

    struct Task(Props);

    impl TaskHandle for Task {
        fn name(&self) -> &str {
            "compileKotlin"
        }

        fn properties(&self) -> &dyn PropertyHolder {
            &self.0
        }
    }

    struct Module(Option<Task>);

    impl ModuleScope for Module {
        fn find_task(&self, name: &str) -> Option<&dyn TaskHandle> {
            self.0
                .as_ref()
                .filter(|_| name == "compileKotlin")
                .map(|t| t as &dyn TaskHandle)
        }

        fn source_sets(&self) -> Option<Vec<&dyn SourceSetHandle>> {
            None
        }
    }

    fn module(props: Props) -> Module {
        Module(Some(Task(props)))
    }

    #[test]
    fn missing_compile_task_means_absent_facet() {
        assert_eq!(ToolchainExtractor::default().extract(&Module(None)), None);
    }

    #[test]
    fn task_without_properties_yields_empty_settings() {
        let settings = ToolchainExtractor::default()
            .extract(&module(Props::default()))
            .unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn reads_target_and_free_args() {
        let options = Props::default()
            .with(JVM_TARGET, Value::Text("JVM_17"))
            .with(
                FREE_COMPILER_ARGS,
                Value::List(vec![Value::Text("-Xjsr305=strict"), Value::Text("-Xcontext-receivers")]),
            );
        let props = Props::default().with(COMPILER_OPTIONS, Value::Object(options));

        let settings = ToolchainExtractor::default().extract(&module(props)).unwrap();
        assert_eq!(settings.jvm_target.as_deref(), Some("17"));
        assert_eq!(settings.compiler_args, vec!["-Xjsr305=strict", "-Xcontext-receivers"]);
    }

    #[test]
    fn plugin_classpath_keeps_only_compiler_plugins() {
        let props = Props::default().with(
            PLUGIN_CLASSPATH,
            Value::Files(vec!["/x/foo-compiler-plugin-1.0.jar", "/x/unrelated.jar"]),
        );
        let settings = ToolchainExtractor::default().extract(&module(props)).unwrap();
        assert_eq!(settings.plugin_classpath, vec!["/x/foo-compiler-plugin-1.0.jar"]);
    }

    #[test]
    fn plugin_options_concatenate_and_skip_unsupported_objects() {
        let first = Props::default().with(
            PLUGIN_OPTION_ARGUMENTS,
            Value::List(vec![Value::Text("plugin:a:x=1"), Value::Text("plugin:a:y=2")]),
        );
        let opaque = Props::default().with("id", Value::Text("b"));
        let second = Props::default().with(
            PLUGIN_OPTION_ARGUMENTS,
            Value::List(vec![Value::Text("plugin:c:z=3")]),
        );
        let props = Props::default().with(
            PLUGIN_OPTIONS,
            Value::List(vec![
                Value::Object(first),
                Value::Object(opaque),
                Value::Text("not-an-object"),
                Value::Object(second),
            ]),
        );

        let settings = ToolchainExtractor::default().extract(&module(props)).unwrap();
        assert_eq!(
            settings.plugin_options,
            vec!["plugin:a:x=1", "plugin:a:y=2", "plugin:c:z=3"]
        );
    }

    #[test]
    fn one_broken_property_does_not_affect_the_others() {
        let options = Props::default()
            .with(JVM_TARGET, Value::Broken)
            .with(FREE_COMPILER_ARGS, Value::List(vec![Value::Text("-Werror")]));
        let props = Props::default()
            .with(COMPILER_OPTIONS, Value::Object(options))
            .with(PLUGIN_OPTIONS, Value::Broken)
            .with(
                PLUGIN_CLASSPATH,
                Value::Files(vec!["/p/kotlin-allopen-compiler-plugin-2.0.0.jar"]),
            );

        let settings = ToolchainExtractor::default().extract(&module(props)).unwrap();
        assert_eq!(settings.jvm_target, None);
        assert_eq!(settings.compiler_args, vec!["-Werror"]);
        assert!(settings.plugin_options.is_empty());
        assert_eq!(settings.plugin_classpath.len(), 1);
    }

    #[test]
    fn wrong_shape_degrades_to_default() {
        let props = Props::default().with(COMPILER_OPTIONS, Value::Text("oops"));
        let settings = ToolchainExtractor::default().extract(&module(props)).unwrap();
        assert_eq!(settings, ToolchainSettings::default());
    }

    #[test]
    fn target_normalization() {
        assert_eq!(normalize_target("JVM_17", "JVM_"), "17");
        assert_eq!(normalize_target("JVM_1_8", "JVM_"), "1_8");
        assert_eq!(normalize_target("21", "JVM_"), "21");
    }

    #[test]
    fn plugin_artifact_convention_applies_to_file_names() {
        assert!(is_compiler_plugin_artifact(Path::new(
            "/cache/kotlinx-serialization-compiler-plugin-embeddable-2.0.0.jar"
        )));
        assert!(!is_compiler_plugin_artifact(Path::new(
            "/x-compiler-plugin/lib/unrelated.jar"
        )));
        assert!(!is_compiler_plugin_artifact(Path::new(
            "/x/foo-compiler-plugin-1.0.pom"
        )));
    }
}
