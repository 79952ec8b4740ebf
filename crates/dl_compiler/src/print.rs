use dl_ast::{EsVersion, Program};
use swc_common::{
    comments::Comments, source_map::DefaultSourceMapGenConfig, sync::Lrc, BytePos, LineCol,
    SourceMap,
};
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};
use tracing::trace;

use crate::{Error, Result};

/// Printed code and, when requested, its source map as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub code: String,
    pub map: Option<String>,
}

/// Print `program` with SWC's code generator.
///
/// When `source_map_name` is set, a source map is built from the spans of
/// the printed nodes; its `file` is `source_map_name` and its `sources`
/// are the files of `source_map` those spans point into.
pub fn print(
    program: &Program,
    source_map: &Lrc<SourceMap>,
    comments: Option<&dyn Comments>,
    source_map_name: Option<&str>,
) -> Result<Output> {
    let mut buf = Vec::new();
    let mut srcmap_buf = source_map_name.map(|_| vec![]);
    {
        let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, srcmap_buf.as_mut());
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_target(EsVersion::latest()),
            cm: source_map.clone(),
            comments,
            wr: writer,
        };
        program.emit_with(&mut emitter)?;
    }

    let code = String::from_utf8(buf)?;

    let map = match (source_map_name, srcmap_buf) {
        (Some(name), Some(mappings)) => Some(build_source_map(source_map, &mappings, name)?),
        _ => None,
    };

    trace!(bytes = code.len(), source_map = map.is_some(), "printed program");

    Ok(Output { code, map })
}

fn build_source_map(
    source_map: &Lrc<SourceMap>,
    mappings: &[(BytePos, LineCol)],
    name: &str,
) -> Result<String> {
    let mut srcmap = source_map.build_source_map(mappings, None, DefaultSourceMapGenConfig);
    srcmap.set_file(Some(name.to_string()));

    let mut json = vec![];
    srcmap
        .to_writer(&mut json)
        .map_err(|e| Error::SourceMap(e.to_string()))?;
    Ok(String::from_utf8(json)?)
}
