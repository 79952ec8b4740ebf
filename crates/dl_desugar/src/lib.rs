//! Desugaring pipeline for downlevel.
//!
//! Transforms, each delegated to SWC's es2015 compat passes:
//! - `(a) => b`       → `function(a) { return b; }`
//! - `class C {}`     → constructor function + prototype methods
//! - `function* g(){}` → state machine driven by `_ts_generator`
//!
//! After the passes, the runtime that defines the generator helpers can be
//! spliced into the program at the AST level (see [`inject`]).

pub mod arrow;
pub mod class;
pub mod desugar;
pub mod generator;
pub mod inject;
pub mod pass;
pub mod pipeline;
pub mod runtime;

pub use desugar::{desugar_program, Desugared};
pub use inject::{inject, inject_runtime};
pub use pass::{DesugarPass, PassContext};
pub use pipeline::{PassRun, Pipeline, PipelineReport};
pub use runtime::Runtime;
