// src/parser.rs

use crate::errors::ParserError;
use crate::lexer::Lexer;
use crate::token::{Leaf, Span, Token};

/// A parse error wrapping a miette-enabled [`ParserError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub error: ParserError,
    pub span: Span,
}

impl ParseError {
    pub fn new(error: ParserError, span: Span) -> Self {
        Self { error, span }
    }

    /// Whether this error only means "not my construct". Soft errors let a
    /// caller try an alternative; everything else is a committed failure and
    /// must propagate.
    pub fn is_soft(&self) -> bool {
        matches!(self.error, ParserError::NotMySyntax { .. })
    }
}

/// Recursive-descent parser over a token stream.
///
/// Holds the single token of lookahead: `current` is the token every parse
/// method inspects, and on success each method leaves `current` on the first
/// token after its construct.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// Display path of the source, for diagnostics.
    path: String,
    pub(crate) current: Token<'src>,
    pub(crate) previous: Token<'src>,
    /// A lex error hit while priming the lookahead; surfaced by the next
    /// parse call so construction stays infallible.
    pending: Option<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_file(source, "<memory>")
    }

    /// Create a parser with a file name for diagnostics.
    pub fn with_file(source: &'src str, path: &str) -> Self {
        let placeholder = Token::new(Leaf::Eos, "", Span::default());
        let mut parser = Self {
            lexer: Lexer::new(source),
            path: path.to_string(),
            current: placeholder,
            previous: placeholder,
            pending: None,
        };
        if let Err(error) = parser.advance() {
            parser.pending = Some(error);
        }
        parser
    }

    /// The display path of the source being parsed.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The source buffer being parsed.
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Surface an error stashed during construction. Every public parse
    /// method calls this before looking at `current`.
    pub(crate) fn flush_pending(&mut self) -> Result<(), ParseError> {
        match self.pending.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Pull the next token into `current`. Lexer errors surface as parse
    /// errors; comments are not meaningful to any grammar rule and are
    /// skipped here.
    pub(crate) fn advance(&mut self) -> Result<(), ParseError> {
        loop {
            let token = self.lexer.next_token().map_err(|error| {
                let span = self.current.span;
                ParseError::new(ParserError::Lex(error), span)
            })?;
            if token.ty == Leaf::Comment {
                continue;
            }
            self.previous = std::mem::replace(&mut self.current, token);
            return Ok(());
        }
    }

    /// Check if the current token matches the given kind.
    pub(crate) fn check(&self, ty: Leaf) -> bool {
        self.current.ty == ty
    }

    /// Consume the current token if it matches, otherwise return false.
    pub(crate) fn match_token(&mut self, ty: Leaf) -> Result<bool, ParseError> {
        if self.check(ty) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Require a token of the given kind, or fail with `expected`.
    pub(crate) fn consume(&mut self, ty: Leaf, expected: &str) -> Result<(), ParseError> {
        if self.check(ty) {
            self.advance()
        } else {
            Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: expected.to_string(),
                    found: self.current.ty.as_str().to_string(),
                    span: self.current.span.into(),
                },
                self.current.span,
            ))
        }
    }

    /// The soft decline shared by every parse method's start-set check.
    pub(crate) fn not_my_syntax(&self) -> ParseError {
        ParseError::new(
            ParserError::NotMySyntax {
                span: self.current.span.into(),
            },
            self.current.span,
        )
    }

    pub(crate) fn expected_identifier(&self) -> ParseError {
        ParseError::new(
            ParserError::ExpectedIdentifier {
                span: self.current.span.into(),
            },
            self.current.span,
        )
    }

    pub(crate) fn expected_type(&self) -> ParseError {
        ParseError::new(
            ParserError::ExpectedType {
                span: self.current.span.into(),
            },
            self.current.span,
        )
    }
}
