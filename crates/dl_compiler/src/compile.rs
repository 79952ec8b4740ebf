//! `compile` and `transform`: the single entry point over the pipeline.

use dl_ast::{Options, Program};
use dl_desugar::{desugar_program, Runtime};
use swc_common::{sync::Lrc, SourceMap};
use tracing::{debug, instrument};

use crate::{print, Output, Result};

/// Compile next-generation JavaScript into code today's runtimes accept.
///
/// Uses the bundled generator runtime when one is needed; see
/// [`Options::include_runtime`].
pub fn compile(source: &str, options: &Options) -> Result<Output> {
    compile_with_runtime(source, options, &Runtime::generator())
}

/// [`compile`] with a caller-supplied runtime.
#[instrument(level = "debug", skip_all, fields(file = options.source_file_name()))]
pub fn compile_with_runtime(source: &str, options: &Options, runtime: &Runtime) -> Result<Output> {
    let parsed = dl_parser::parse(source, options.source_file_name(), options.source_type)?;

    let desugared = desugar_program(parsed.program, &parsed.source_map, options, runtime)?;
    debug!(
        runs = ?desugared.report.runs,
        runtime_statements = desugared.runtime_statements,
        "compiled"
    );

    print(
        &desugared.program,
        &parsed.source_map,
        Some(&parsed.comments),
        options.source_map_name.as_deref(),
    )
}

/// Desugar an already parsed program.
///
/// `source_map` is the source map `program` was parsed into; an injected
/// runtime is added to it as a new file.
pub fn transform(program: Program, source_map: &Lrc<SourceMap>, options: &Options) -> Result<Program> {
    transform_with_runtime(program, source_map, options, &Runtime::generator())
}

/// [`transform`] with a caller-supplied runtime.
pub fn transform_with_runtime(
    program: Program,
    source_map: &Lrc<SourceMap>,
    options: &Options,
    runtime: &Runtime,
) -> Result<Program> {
    Ok(desugar_program(program, source_map, options, runtime)?.program)
}
