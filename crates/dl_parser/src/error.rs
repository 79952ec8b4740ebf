use swc_common::{sync::Lrc, SourceMap, Spanned};
use thiserror::Error;

/// A syntax error reported by the SWC parser, located in its source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{line}:{column}: {message}")]
pub struct ParseError {
    pub file: String,
    /// 1-based line, 0 when the parser gave no position.
    pub line: usize,
    /// 1-based column, 0 when the parser gave no position.
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub(crate) fn from_swc(
        source_map: &Lrc<SourceMap>,
        filename: &str,
        err: swc_ecma_parser::error::Error,
    ) -> Self {
        let span = err.span();
        let message = err.kind().msg().to_string();

        if span.is_dummy() {
            return Self {
                file: filename.to_string(),
                line: 0,
                column: 0,
                message,
            };
        }

        let loc = source_map.lookup_char_pos(span.lo());
        Self {
            file: loc.file.name.to_string(),
            line: loc.line,
            column: loc.col.0 + 1,
            message,
        }
    }
}
