//! Top-level desugaring entry point.
//!
//! Runs the enabled passes over a parsed program and then, if requested
//! (or by default when a generator was rewritten), splices the runtime in
//! front of the result.

use dl_ast::{Options, Program};
use dl_parser::ParseError;
use swc_common::{sync::Lrc, SourceMap};
use tracing::debug;

use crate::{inject, Pipeline, PipelineReport, Runtime};

/// A desugared program and what was done to it.
#[derive(Debug, Clone)]
pub struct Desugared {
    pub program: Program,
    pub report: PipelineReport,
    /// Number of runtime statements spliced in (0 if none).
    pub runtime_statements: usize,
}

/// Desugar `program` according to `options`.
///
/// `source_map` must be the source map `program` was parsed into; the
/// runtime is registered there as its own file.
pub fn desugar_program(
    mut program: Program,
    source_map: &Lrc<SourceMap>,
    options: &Options,
    runtime: &Runtime,
) -> Result<Desugared, ParseError> {
    let pipeline = Pipeline::from_options(options);
    let report = pipeline.run(&mut program);

    let include_runtime = options.include_runtime(report.generators_rewritten());
    debug!(
        passes = ?pipeline.pass_names(),
        include_runtime,
        empty_runtime = runtime.is_empty(),
        "desugared program"
    );

    let runtime_statements = if include_runtime {
        inject(runtime, source_map, &mut program)?
    } else {
        0
    };

    Ok(Desugared {
        program,
        report,
        runtime_statements,
    })
}
