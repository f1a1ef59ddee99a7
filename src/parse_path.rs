// src/parse_path.rs
//
// Path parsing: simple paths (plain dotted identifiers), segments, and
// generic path expressions.

use crate::ast::{PathExpr, PrimitiveType, Segment, SimplePath, Type};
use crate::parser::{ParseError, Parser};
use crate::token::Leaf;

impl<'src> Parser<'src> {
    /// Parse a simple path: `IDENT ('.' IDENT)*`.
    ///
    /// Declines unless the current token is an identifier; after that, every
    /// access operator must be followed by another identifier.
    pub fn parse_simple_path(&mut self) -> Result<SimplePath<'src>, ParseError> {
        self.flush_pending()?;
        if !self.check(Leaf::Identifier) {
            return Err(self.not_my_syntax());
        }

        let mut node = SimplePath::default();
        node.segments.push(self.current.lexeme);
        self.advance()?;

        while self.match_token(Leaf::Dot)? {
            if !self.check(Leaf::Identifier) {
                return Err(self.expected_identifier());
            }
            node.segments.push(self.current.lexeme);
            self.advance()?;
        }
        Ok(node)
    }

    /// Parse one path segment: a primitive type keyword, or an identifier
    /// optionally carrying generic arguments (`name<T, U>`).
    pub fn parse_segment(&mut self) -> Result<Segment<'src>, ParseError> {
        self.flush_pending()?;
        if let Some(primitive) = PrimitiveType::from_leaf(self.current.ty) {
            self.advance()?;
            return Ok(Segment::Primitive(primitive));
        }

        if !self.check(Leaf::Identifier) {
            return Err(self.not_my_syntax());
        }
        let name = self.current.lexeme;
        self.advance()?;

        let inputs = if self.check(Leaf::Lt) {
            self.parse_generic_inputs()?
        } else {
            Vec::new()
        };
        Ok(Segment::Generic { name, inputs })
    }

    /// Parse the bracketed argument list of a generic segment. `<>` is legal
    /// and yields an empty list; a trailing comma is tolerated.
    fn parse_generic_inputs(&mut self) -> Result<Vec<Type<'src>>, ParseError> {
        self.advance()?; // '<'
        let mut inputs = Vec::new();

        if self.match_token(Leaf::Gt)? {
            return Ok(inputs);
        }

        loop {
            let ty = match self.parse_type() {
                Err(error) if error.is_soft() => return Err(self.expected_type()),
                other => other?,
            };
            inputs.push(ty);

            if self.match_token(Leaf::Comma)? {
                if self.check(Leaf::Gt) {
                    break;
                }
                continue;
            }
            break;
        }

        self.consume(Leaf::Gt, ">")?;
        Ok(inputs)
    }

    /// Parse a path expression: `Segment ('.' Segment)*`.
    ///
    /// Declines unless the current token starts a segment; after an access
    /// operator a segment is mandatory.
    pub fn parse_path_expr(&mut self) -> Result<PathExpr<'src>, ParseError> {
        self.flush_pending()?;
        if !self.check(Leaf::Identifier) && !self.current.ty.is_primitive() {
            return Err(self.not_my_syntax());
        }

        let mut node = PathExpr::default();
        node.segments.push(self.parse_segment()?);

        while self.match_token(Leaf::Dot)? {
            let segment = match self.parse_segment() {
                Err(error) if error.is_soft() => return Err(self.expected_identifier()),
                other => other?,
            };
            node.segments.push(segment);
        }
        Ok(node)
    }
}
