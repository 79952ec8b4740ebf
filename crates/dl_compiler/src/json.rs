//! Transforms over a JSON-serialized AST (the shape `downlevel parse --ast`
//! dumps).

use dl_ast::{Options, Program};
use serde_json::Value;
use swc_common::{sync::Lrc, BytePos, FileName, SourceMap, Span};
use swc_ecma_visit::{Visit, VisitWith};

use crate::{transform, Error, Result};

/// Deserialize a program, asserting the root node is `Module` or `Script`.
pub fn program_from_json(value: Value) -> Result<Program> {
    match value.get("type").and_then(Value::as_str) {
        Some("Module") | Some("Script") => Ok(serde_json::from_value(value)?),
        Some(other) => Err(Error::ContractViolation(format!(
            "expected a Program node (Module or Script), found `{other}`"
        ))),
        None => Err(Error::ContractViolation(
            "expected a Program node, found a value without a `type` tag".to_string(),
        )),
    }
}

/// Desugar a JSON AST and return the result as a JSON AST.
///
/// Spans of the input are kept as-is; they are only meaningful against the
/// source the AST was originally parsed from. An injected runtime gets spans
/// past the highest position the input uses, so the two never overlap.
pub fn transform_json(value: Value, options: &Options) -> Result<Value> {
    let program = program_from_json(value)?;
    let source_map = source_map_after(&program);
    let program = transform(program, &source_map, options)?;
    Ok(serde_json::to_value(&program)?)
}

/// Highest byte position reached by any span of a program.
struct SpanExtent(BytePos);

impl Visit for SpanExtent {
    fn visit_span(&mut self, span: &Span) {
        self.0 = self.0.max(span.hi);
    }
}

fn span_extent(program: &Program) -> BytePos {
    let mut extent = SpanExtent(BytePos(0));
    program.visit_with(&mut extent);
    extent.0
}

/// A fresh source map whose next file starts after every position `program`
/// already uses. The range the input occupies is reserved by an anonymous
/// placeholder file.
fn source_map_after(program: &Program) -> Lrc<SourceMap> {
    let source_map: Lrc<SourceMap> = Default::default();
    let hi = span_extent(program).0 as usize;
    if hi > 0 {
        source_map.new_source_file(Lrc::new(FileName::Anon), " ".repeat(hi));
    }
    source_map
}
