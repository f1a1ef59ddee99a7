// src/parse_type.rs
//
// Type expression parsing. A type is a path expression plus an optional
// structural suffix: a parenthesized prototype (function type), bracketed
// dimensions (array type), or a run of pointer/reference sigils.

use crate::ast::{Type, TypeKind};
use crate::parser::{ParseError, Parser};
use crate::token::Leaf;

impl<'src> Parser<'src> {
    /// Parse a type expression.
    ///
    /// Declines on anything outside the path-expression start set. Once the
    /// base path is read, the suffix decides the variant:
    /// - `(` opens a function type: comma-separated input types, `)`, and an
    ///   optional `: T` output;
    /// - `[` opens an array type;
    /// - `*`/`&` open a reference type, one depth entry per sigil.
    pub fn parse_type(&mut self) -> Result<Type<'src>, ParseError> {
        let path = self.parse_path_expr()?;
        let mut node = Type::raw(path.segments);

        match self.current.ty {
            Leaf::LParen => {
                self.advance()?;
                let mut inputs = Vec::new();
                if !self.check(Leaf::RParen) {
                    loop {
                        let input = match self.parse_type() {
                            Err(error) if error.is_soft() => return Err(self.expected_type()),
                            other => other?,
                        };
                        inputs.push(input);

                        if self.match_token(Leaf::Comma)? {
                            if self.check(Leaf::RParen) {
                                break;
                            }
                            continue;
                        }
                        break;
                    }
                }
                self.consume(Leaf::RParen, ")")?;

                let output = if self.match_token(Leaf::Colon)? {
                    let output = match self.parse_type() {
                        Err(error) if error.is_soft() => return Err(self.expected_type()),
                        other => other?,
                    };
                    Some(Box::new(output))
                } else {
                    None
                };
                node.kind = TypeKind::Fn { inputs, output };
            }
            Leaf::LBracket => {
                self.advance()?;
                // TODO: parse dimension expressions once the expression
                // grammar lands; until then only `[]` is accepted.
                let dimensions = Vec::new();
                self.consume(Leaf::RBracket, "]")?;
                node.kind = TypeKind::Arr { dimensions };
            }
            Leaf::Star | Leaf::Ampersand | Leaf::AmpAmp => {
                let mut depth = Vec::new();
                loop {
                    match self.current.ty {
                        Leaf::Star => depth.push(true),
                        Leaf::Ampersand => depth.push(false),
                        // The lexer's longest match turns `&&` into one
                        // token; it still means two reference depths.
                        Leaf::AmpAmp => depth.extend([false, false]),
                        _ => break,
                    }
                    self.advance()?;
                }
                node.kind = TypeKind::Ref { depth };
            }
            _ => {}
        }
        Ok(node)
    }
}
