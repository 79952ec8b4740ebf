//! Runtime fragments that can be spliced into compiled output.

use std::path::Path;

/// Source of the bundled generator runtime.
pub const GENERATOR_RUNTIME_SOURCE: &str = include_str!("../runtime/generator.js");

/// Source identity under which the bundled generator runtime is mapped.
pub const GENERATOR_RUNTIME_ID: &str = "downlevel/runtime/generator.js";

/// A self-contained helper module plus the file name it is mapped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub source_id: String,
    pub text: String,
}

impl Runtime {
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
        }
    }

    /// The generator runtime shipped with this crate.
    pub fn generator() -> Self {
        Self::new(GENERATOR_RUNTIME_ID, GENERATOR_RUNTIME_SOURCE)
    }

    /// Read a runtime from disk; its path becomes its source identity.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::generator()
    }
}
