// src/parse_import.rs

use crate::ast::Import;
use crate::errors::ParserError;
use crate::parser::{ParseError, Parser};
use crate::token::Leaf;

impl<'src> Parser<'src> {
    /// Parse an import statement: `using SimplePath ;`.
    ///
    /// Declines unless the current token is `using`. After that the path and
    /// the terminator are mandatory.
    pub fn parse_import(&mut self) -> Result<Import<'src>, ParseError> {
        self.flush_pending()?;
        if !self.check(Leaf::KwUsing) {
            return Err(self.not_my_syntax());
        }
        self.advance()?;

        let path = match self.parse_simple_path() {
            Err(error) if error.is_soft() => return Err(self.expected_identifier()),
            other => other?,
        };

        if !self.check(Leaf::Semicolon) {
            // Point at the end of the path, where the terminator belongs.
            let span = self.previous.span;
            return Err(ParseError::new(
                ParserError::ExpectedTerminator { span: span.into() },
                span,
            ));
        }
        self.advance()?;
        Ok(Import { path })
    }
}
