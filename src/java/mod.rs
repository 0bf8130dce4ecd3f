//! Java syntax-tree provider.
//!
//! Parses Java source with tree-sitter and lowers the concrete syntax tree
//! into the arena [`SyntaxTree`] the extractor walks. Sources with syntax
//! errors are rejected.

pub mod errors;
pub mod lower;
pub mod parser;

pub use errors::ParseError;
pub use lower::lower;
pub use parser::{ErrorNode, JavaParser, ParsedSource};

use crate::pool;
use crate::tree::SyntaxTree;

/// Parse and lower `source` with the given parser.
pub fn parse_with(parser: &mut JavaParser, source: &str) -> Result<SyntaxTree, ParseError> {
    let parsed = parser.parse_with_source(source)?;
    parsed.validate()?;
    Ok(lower(&parsed))
}

/// Parse and lower `source` with this thread's pooled parser.
pub fn parse_java(source: &str) -> Result<SyntaxTree, ParseError> {
    pool::with_parser(|parser| parse_with(parser, source))?
}
