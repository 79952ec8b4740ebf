//! Compiler entry points for downlevel.
//!
//! - [`compile`]: source text in, code (and optionally a source map) out
//! - [`transform`]: parsed program in, desugared program out
//! - [`transform_json`]: the same over a JSON-serialized AST
//! - [`print`]: program out to code through SWC's code generator

pub mod compile;
pub mod error;
pub mod json;
pub mod print;

pub use compile::{compile, compile_with_runtime, transform, transform_with_runtime};
pub use error::{Error, Result};
pub use json::{program_from_json, transform_json};
pub use print::{print, Output};
