//! JavaScript parser for downlevel.
//!
//! Wraps the standard SWC parser. Every source text is registered as its
//! own file in a [`swc_common::SourceMap`] before parsing, so the spans of
//! the resulting nodes resolve back to that file when a source map is
//! generated. Several texts (the input and the injected runtime) can share
//! one source map through [`parse_into`].

pub mod error;
pub mod parse;

pub use error::ParseError;
pub use parse::{parse, parse_into, parse_module_into, parse_script_into, ParseResult};
