// src/errors/parser.rs
//! Parser errors (E1xxx).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::LexError;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The current token is not in this parser's start set. Soft: callers
    /// holding alternatives may try the next one. Every other variant means
    /// the parser had committed and the input is genuinely malformed.
    #[error("token does not start this construct")]
    #[diagnostic(code(E1001))]
    NotMySyntax {
        #[label("unexpected here")]
        span: SourceSpan,
    },

    #[error("expected identifier")]
    #[diagnostic(code(E1002))]
    ExpectedIdentifier {
        #[label("expected identifier")]
        span: SourceSpan,
    },

    #[error("expected ';'")]
    #[diagnostic(code(E1003), help("statements are terminated with ';'"))]
    ExpectedTerminator {
        #[label("expected ';'")]
        span: SourceSpan,
    },

    #[error("expected type")]
    #[diagnostic(code(E1004))]
    ExpectedType {
        #[label("expected type")]
        span: SourceSpan,
    },

    #[error("expected '{expected}', found '{found}'")]
    #[diagnostic(code(E1005))]
    ExpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),
}
