use dl_parser::ParseError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input or runtime text, as reported by the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The caller handed over something that is not a program.
    #[error("contract violation: {0}")]
    ContractViolation(String),
    #[error("failed to emit code: {0}")]
    Codegen(#[from] std::io::Error),
    #[error("emitted code is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to serialize source map: {0}")]
    SourceMap(String),
    #[error("invalid JSON AST: {0}")]
    Json(#[from] serde_json::Error),
}
