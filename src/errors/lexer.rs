// src/errors/lexer.rs
//! Lexer errors (E0xxx).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Every rule's litmus declined the remaining input. The host decides
    /// whether to skip past it and resume or to stop.
    #[error("no lexical rule matches the input")]
    #[diagnostic(code(E0001))]
    NoRuleMatches {
        #[label("unrecognized input")]
        span: SourceSpan,
    },

    #[error("invalid binary literal")]
    #[diagnostic(code(E0002), help("binary literals are '0b' followed by at least one 0 or 1"))]
    InvalidBinary {
        #[label("missing binary digits")]
        span: SourceSpan,
    },

    #[error("invalid octal literal")]
    #[diagnostic(code(E0003), help("octal literals are '0' followed by at least one digit 0-7"))]
    InvalidOctal {
        #[label("missing octal digits")]
        span: SourceSpan,
    },

    #[error("invalid hexadecimal literal")]
    #[diagnostic(
        code(E0004),
        help("hexadecimal literals are '0x' followed by at least one digit 0-9, a-f, or A-F")
    )]
    InvalidHexadecimal {
        #[label("missing hexadecimal digits")]
        span: SourceSpan,
    },

    #[error("invalid unicode escape")]
    #[diagnostic(
        code(E0005),
        help("unicode escapes are '\\u' followed by one to four hexadecimal digits")
    )]
    InvalidUnicode {
        #[label("invalid escape")]
        span: SourceSpan,
    },

    #[error("invalid character literal")]
    #[diagnostic(code(E0006), help("add a closing ' to terminate the character"))]
    InvalidCharacter {
        #[label("character starts here")]
        span: SourceSpan,
    },

    #[error("unterminated string literal")]
    #[diagnostic(code(E0007), help("add a closing '\"' before the end of the line"))]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("unterminated multiline string literal")]
    #[diagnostic(code(E0008), help("close the string with '\"\"\"'"))]
    UnterminatedMultiline {
        #[label("string starts here")]
        span: SourceSpan,
    },
}
