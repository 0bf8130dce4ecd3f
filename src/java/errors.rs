use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to set Java language for parser")]
    LanguageSet,

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("{count} syntax errors, first at line {line}, column {column}")]
    MultipleSyntax {
        count: usize,
        line: usize,
        column: usize,
    },
}
