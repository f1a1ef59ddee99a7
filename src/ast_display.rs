// src/ast_display.rs
//
// Canonical source-like rendering for path and type nodes. Re-lexing and
// re-parsing a rendered type yields a structurally equal tree, which the
// round-trip tests lean on.

use std::fmt;

use crate::ast::{PathExpr, Segment, SimplePath, Type, TypeKind};

impl fmt::Display for SimplePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Primitive(p) => f.write_str(p.as_str()),
            Segment::Generic { name, inputs } => {
                f.write_str(name)?;
                if !inputs.is_empty() {
                    f.write_str("<")?;
                    for (index, input) in inputs.iter().enumerate() {
                        if index > 0 {
                            f.write_str(",")?;
                        }
                        write!(f, "{input}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PathExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        match &self.kind {
            TypeKind::Raw => Ok(()),
            TypeKind::Fn { inputs, output } => {
                f.write_str("(")?;
                for (index, input) in inputs.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{input}")?;
                }
                f.write_str(")")?;
                if let Some(output) = output {
                    write!(f, ":{output}")?;
                }
                Ok(())
            }
            // Dimensions render once expressions exist.
            TypeKind::Arr { .. } => f.write_str("[]"),
            TypeKind::Ref { depth } => {
                for &pointer in depth {
                    f.write_str(if pointer { "*" } else { "&" })?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrimitiveType;

    fn generic(name: &str) -> Segment<'_> {
        Segment::Generic {
            name,
            inputs: Vec::new(),
        }
    }

    #[test]
    fn simple_path_renders_dotted() {
        let path = SimplePath {
            segments: vec!["std", "io", "file"],
        };
        assert_eq!(path.to_string(), "std.io.file");

        let single = SimplePath {
            segments: vec!["std"],
        };
        assert_eq!(single.to_string(), "std");
    }

    #[test]
    fn segments_render_generics_and_primitives() {
        assert_eq!(generic("list").to_string(), "list");
        assert_eq!(
            Segment::Primitive(PrimitiveType::Uint8).to_string(),
            "uint8"
        );

        let seg = Segment::Generic {
            name: "map",
            inputs: vec![
                Type::raw(vec![Segment::Primitive(PrimitiveType::String)]),
                Type::raw(vec![generic("entry")]),
            ],
        };
        assert_eq!(seg.to_string(), "map<string,entry>");
    }

    #[test]
    fn raw_type_renders_path_only() {
        let ty = Type::raw(vec![generic("std"), generic("io"), generic("file")]);
        assert_eq!(ty.to_string(), "std.io.file");
    }

    #[test]
    fn fn_type_renders_prototype() {
        let ty = Type {
            segments: vec![generic("write")],
            kind: TypeKind::Fn {
                inputs: vec![Type::raw(vec![Segment::Primitive(PrimitiveType::String)])],
                output: Some(Box::new(Type::raw(vec![Segment::Primitive(
                    PrimitiveType::Void,
                )]))),
            },
        };
        assert_eq!(ty.to_string(), "write(string):void");

        let no_output = Type {
            segments: vec![generic("callback")],
            kind: TypeKind::Fn {
                inputs: Vec::new(),
                output: None,
            },
        };
        assert_eq!(no_output.to_string(), "callback()");
    }

    #[test]
    fn ref_type_renders_sigils_in_order() {
        let ty = Type {
            segments: vec![Segment::Primitive(PrimitiveType::Int32)],
            kind: TypeKind::Ref {
                depth: vec![true, true, false, false, true, false],
            },
        };
        assert_eq!(ty.to_string(), "int32**&&*&");
    }

    #[test]
    fn arr_type_renders_brackets() {
        let ty = Type {
            segments: vec![Segment::Primitive(PrimitiveType::Char)],
            kind: TypeKind::Arr {
                dimensions: Vec::new(),
            },
        };
        assert_eq!(ty.to_string(), "char[]");
    }
}
