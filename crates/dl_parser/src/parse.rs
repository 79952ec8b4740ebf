use dl_ast::{Module, Program, Script, SourceType};
use swc_common::{
    comments::{Comments, SingleThreadedComments},
    sync::Lrc,
    FileName, SourceFile, SourceMap,
};
use swc_ecma_ast::EsVersion;
use swc_ecma_parser::{EsSyntax, PResult, Syntax};
use tracing::debug;

use crate::ParseError;

/// Result of parsing a source file into a fresh source map.
pub struct ParseResult {
    pub program: Program,
    pub comments: SingleThreadedComments,
    pub source_map: Lrc<SourceMap>,
}

/// Parse a JavaScript source string into a new source map.
///
/// `filename` is the source identity recorded for every span of the
/// program; it is what a generated source map lists under `sources`.
pub fn parse(
    source: &str,
    filename: &str,
    source_type: SourceType,
) -> Result<ParseResult, ParseError> {
    let source_map: Lrc<SourceMap> = Default::default();
    let comments = SingleThreadedComments::default();

    let program = parse_into(&source_map, source, filename, source_type, Some(&comments))?;

    Ok(ParseResult {
        program,
        comments,
        source_map,
    })
}

/// Parse a JavaScript source string as a new file of an existing source map.
///
/// Spans of the returned program point into the new file, so programs
/// parsed into the same source map can be combined and still map back to
/// their own sources.
pub fn parse_into(
    source_map: &Lrc<SourceMap>,
    source: &str,
    filename: &str,
    source_type: SourceType,
    comments: Option<&dyn Comments>,
) -> Result<Program, ParseError> {
    let program = match source_type {
        SourceType::Script => {
            Program::Script(parse_script_into(source_map, source, filename, comments)?)
        }
        SourceType::Module => {
            Program::Module(parse_module_into(source_map, source, filename, comments)?)
        }
        SourceType::Auto => with_parser(source_map, source, filename, |fm, errors| {
            swc_ecma_parser::parse_file_as_program(fm, syntax(), EsVersion::latest(), comments, errors)
        })?,
    };

    debug!(
        file = filename,
        %source_type,
        module = program.is_module(),
        "parsed"
    );

    Ok(program)
}

/// Parse with the script goal.
pub fn parse_script_into(
    source_map: &Lrc<SourceMap>,
    source: &str,
    filename: &str,
    comments: Option<&dyn Comments>,
) -> Result<Script, ParseError> {
    with_parser(source_map, source, filename, |fm, errors| {
        swc_ecma_parser::parse_file_as_script(fm, syntax(), EsVersion::latest(), comments, errors)
    })
}

/// Parse with the module goal.
pub fn parse_module_into(
    source_map: &Lrc<SourceMap>,
    source: &str,
    filename: &str,
    comments: Option<&dyn Comments>,
) -> Result<Module, ParseError> {
    with_parser(source_map, source, filename, |fm, errors| {
        swc_ecma_parser::parse_file_as_module(fm, syntax(), EsVersion::latest(), comments, errors)
    })
}

fn syntax() -> Syntax {
    Syntax::Es(EsSyntax::default())
}

fn with_parser<T>(
    source_map: &Lrc<SourceMap>,
    source: &str,
    filename: &str,
    parse_file: impl FnOnce(&SourceFile, &mut Vec<swc_ecma_parser::error::Error>) -> PResult<T>,
) -> Result<T, ParseError> {
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source.to_string(),
    );

    let mut recovered = vec![];
    let parsed = parse_file(&source_file, &mut recovered)
        .map_err(|e| ParseError::from_swc(source_map, filename, e))?;

    // The parser recovers from some early errors; treat them as fatal.
    if let Some(e) = recovered.into_iter().next() {
        return Err(ParseError::from_swc(source_map, filename, e));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_common::Spanned;

    #[test]
    fn parses_script_goal() {
        let parsed = parse("var a = 1; a++;", "a.js", SourceType::Script).unwrap();
        match parsed.program {
            Program::Script(s) => assert_eq!(s.body.len(), 2),
            Program::Module(_) => panic!("expected a script"),
        }
    }

    #[test]
    fn auto_detects_modules() {
        let parsed = parse("export const a = 1;", "a.js", SourceType::Auto).unwrap();
        assert!(parsed.program.is_module());
    }

    #[test]
    fn spans_resolve_to_their_file() {
        let cm: Lrc<SourceMap> = Default::default();
        let first = parse_script_into(&cm, "first();", "first.js", None).unwrap();
        let second = parse_module_into(&cm, "second();", "second.js", None).unwrap();

        assert_eq!(cm.span_to_filename(first.body[0].span()).to_string(), "first.js");
        assert_eq!(cm.span_to_filename(second.body[0].span()).to_string(), "second.js");
    }

    #[test]
    fn syntax_errors_carry_location() {
        let err = match parse("var x = 1;\nfunction helper(", "broken.js", SourceType::Script) {
            Err(e) => e,
            Ok(_) => panic!("expected a parse error"),
        };
        assert_eq!(err.file, "broken.js");
        assert_eq!(err.line, 2);
        assert!(!err.message.is_empty());
        assert!(err.to_string().starts_with("broken.js:2:"));
    }

    #[test]
    fn module_syntax_is_rejected_in_scripts() {
        assert!(parse("export default 1;", "a.js", SourceType::Script).is_err());
    }
}
