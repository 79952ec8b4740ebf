//! ECMAScript AST for downlevel.
//!
//! Re-exports the standard SWC AST and adds the option types shared by the
//! parser, the desugaring pipeline and the CLI:
//! - [`Options`]: which passes run and how output is labelled
//! - [`SourceType`]: which parse goal to use

pub use swc_ecma_ast::*;

use serde::{Deserialize, Serialize};

/// File name used for the main input when none is configured.
pub const DEFAULT_SOURCE_FILE_NAME: &str = "input.js";

/// Parse goal for a source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Classic script: no `import`/`export`, sloppy mode allowed.
    Script,
    /// ES module.
    Module,
    /// Let the parser decide from the presence of module syntax.
    #[default]
    Auto,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Script => write!(f, "script"),
            SourceType::Module => write!(f, "module"),
            SourceType::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(SourceType::Script),
            "module" => Ok(SourceType::Module),
            "auto" => Ok(SourceType::Auto),
            other => Err(format!(
                "unknown source type `{other}` (expected script, module or auto)"
            )),
        }
    }
}

/// Compile options.
///
/// Every field may be omitted from a JSON config; missing fields take the
/// values from [`Options::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Rewrite arrow functions into function expressions. Default: on.
    pub arrow_function: bool,
    /// Rewrite classes into constructor functions. Default: on.
    pub class: bool,
    /// Rewrite generator functions into state machines. Default: on.
    pub generator: bool,
    /// Splice the generator runtime into the output.
    ///
    /// `None` means "only if the generator pass rewrote something".
    pub include_runtime: Option<bool>,
    /// Name recorded for the main input in source maps.
    pub source_file_name: Option<String>,
    /// When set, a source map is produced with this as its `file`.
    pub source_map_name: Option<String>,
    pub source_type: SourceType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            arrow_function: true,
            class: true,
            generator: true,
            include_runtime: None,
            source_file_name: None,
            source_map_name: None,
            source_type: SourceType::Auto,
        }
    }
}

impl Options {
    /// Options with every desugaring pass turned off.
    pub fn passthrough() -> Self {
        Self {
            arrow_function: false,
            class: false,
            generator: false,
            ..Self::default()
        }
    }

    pub fn source_file_name(&self) -> &str {
        self.source_file_name
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_FILE_NAME)
    }

    /// Whether the runtime should be injected, given whether the generator
    /// pass actually rewrote any generator function.
    pub fn include_runtime(&self, generators_rewritten: bool) -> bool {
        self.include_runtime
            .unwrap_or(self.generator && generators_rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_enables_all_passes() {
        let o = Options::default();
        assert!(o.arrow_function);
        assert!(o.class);
        assert!(o.generator);
        assert_eq!(o.include_runtime, None);
        assert_eq!(o.source_file_name(), DEFAULT_SOURCE_FILE_NAME);
    }

    #[test]
    fn missing_json_fields_keep_defaults() {
        let o: Options = serde_json::from_str(r#"{ "class": false }"#).unwrap();
        assert!(o.arrow_function);
        assert!(!o.class);
        assert!(o.generator);
    }

    #[test]
    fn json_uses_camel_case_names() {
        let o: Options = serde_json::from_str(
            r#"{
                "arrowFunction": false,
                "includeRuntime": true,
                "sourceFileName": "src/app.js",
                "sourceMapName": "app.js.map",
                "sourceType": "module"
            }"#,
        )
        .unwrap();
        assert!(!o.arrow_function);
        assert_eq!(o.include_runtime, Some(true));
        assert_eq!(o.source_file_name(), "src/app.js");
        assert_eq!(o.source_map_name.as_deref(), Some("app.js.map"));
        assert_eq!(o.source_type, SourceType::Module);
    }

    #[test]
    fn runtime_defaults_to_generator_rewrites() {
        let o = Options::default();
        assert!(o.include_runtime(true));
        assert!(!o.include_runtime(false));

        let no_gen = Options {
            generator: false,
            ..Options::default()
        };
        assert!(!no_gen.include_runtime(true));

        let forced = Options {
            include_runtime: Some(true),
            ..Options::passthrough()
        };
        assert!(forced.include_runtime(false));

        let disabled = Options {
            include_runtime: Some(false),
            ..Options::default()
        };
        assert!(!disabled.include_runtime(true));
    }

    #[test]
    fn source_type_parses_from_str() {
        assert_eq!("script".parse::<SourceType>(), Ok(SourceType::Script));
        assert_eq!("module".parse::<SourceType>(), Ok(SourceType::Module));
        assert!("commonjs".parse::<SourceType>().is_err());
        assert_eq!(SourceType::Auto.to_string(), "auto");
    }
}
