// src/token.rs

/// Single source of truth for keyword-to-token mapping.
///
/// Each entry `"text" => Variant` generates:
/// - A match arm in `Leaf::keyword_type`: `"text" => Some(Leaf::Variant)`
/// - A match arm in `Leaf::as_str`:       `Self::Variant => "text"`
macro_rules! define_keywords {
    ( $( $text:literal => $variant:ident ),+ $(,)? ) => {
        impl Leaf {
            /// Check if a string is a keyword and return its token kind.
            pub fn keyword_type(text: &str) -> Option<Leaf> {
                match text {
                    $( $text => Some(Leaf::$variant), )+
                    _ => None,
                }
            }

            /// String representation for keyword tokens (used by `as_str`).
            fn keyword_as_str(&self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($text), )+
                    _ => None,
                }
            }
        }
    };
}

define_keywords! {
    // Literal keywords
    "null"   => NullLiteral,
    "true"   => TrueLiteral,
    "false"  => FalseLiteral,
    // Declaration keywords
    "var"    => KwVar,
    "const"  => KwConst,
    "static" => KwStatic,
    "object" => KwObject,
    "extend" => KwExtend,
    "def"    => KwDef,
    "alias"  => KwAlias,
    "using"  => KwUsing,
    "module" => KwModule,
    "extern" => KwExtern,
    // Type keywords
    "bool"   => KwBool,
    "char"   => KwChar,
    "int8"   => KwInt8,
    "int16"  => KwInt16,
    "int32"  => KwInt32,
    "int64"  => KwInt64,
    "uint8"  => KwUint8,
    "uint16" => KwUint16,
    "uint32" => KwUint32,
    "uint64" => KwUint64,
    "single" => KwSingle,
    "double" => KwDouble,
    "string" => KwString,
    "void"   => KwVoid,
    // Control flow keywords
    "if"     => KwIf,
    "else"   => KwElse,
    "for"    => KwFor,
    "do"     => KwDo,
    "while"  => KwWhile,
    "match"  => KwMatch,
    "next"   => KwNext,
    "break"  => KwBreak,
    "as"     => KwAs,
    "is"     => KwIs,
    "return" => KwReturn,
}

/// Largest value (exclusive) a terminal kind may take. Grammar non-terminals
/// ([`crate::grammar::Root`]) are numbered from this value upward, which lets
/// a [`crate::grammar::Symbol`] discriminate the two with one comparison.
pub const LEAF_UPPER_LIMIT: i16 = i16::MAX / 2;

/// All token kinds in the Damson language.
///
/// Every token the lexer produces is a terminal of the grammar, hence the
/// name. The discriminants are significant: they double as grammar symbol
/// values, so they stay signed 16-bit and below [`LEAF_UPPER_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Leaf {
    /// End of the source buffer. The token stream is terminated by this.
    Eos = -1,
    /// Input the operator rule could not classify (e.g. `.=`). Reported as
    /// a token rather than an error so the parser decides how to recover.
    Unknown,
    /// A `#` comment running to the end of its line.
    Comment,
    Identifier,

    // Literals
    /// Integer literal in any radix: `42`, `0b1010`, `0777`, `0xFF`.
    IntLiteral,
    /// Reserved for a future unsigned-suffix pass; no rule produces it yet.
    UintLiteral,
    /// Decimal floating-point literal: `3.14`.
    FloatLiteral,
    /// Character literal: `'a'`, `'\n'`, `'\uBeeF'`.
    CharLiteral,
    /// Plain string literal without interpolation: `"text"`.
    StringLiteral,
    /// String literal containing `{...}` interpolation.
    InterpLiteral,
    /// Triple-quoted multiline string without interpolation.
    MultilineLiteral,
    /// Triple-quoted multiline string containing interpolation.
    MultilineInterpLiteral,
    NullLiteral,
    TrueLiteral,
    FalseLiteral,

    // Keywords
    KwVar,
    KwConst,
    KwStatic,
    KwObject,
    KwExtend,
    KwDef,
    KwAlias,
    KwBool,
    KwChar,
    KwInt8,
    KwInt16,
    KwInt32,
    KwInt64,
    KwUint8,
    KwUint16,
    KwUint32,
    KwUint64,
    KwSingle,
    KwDouble,
    KwString,
    KwVoid,
    KwUsing,
    KwModule,
    KwExtern,

    // Control flow keywords
    KwIf,
    KwElse,
    KwFor,
    KwDo,
    KwWhile,
    KwMatch,
    KwNext,
    KwBreak,
    KwAs,
    KwIs,
    KwReturn,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusEq,    // +=
    MinusEq,   // -=
    StarEq,    // *=
    SlashEq,   // /=
    PercentEq, // %=
    PlusPlus,  // ++ (increment)
    MinusMinus, // -- (decrement)
    Eq,        // = (assignment)
    Dot,       // . (member access)
    Question,  // ? (ternary)
    DotDot,    // .. (cascade)
    Ellipsis,  // ...

    // Bitwise operators
    Tilde,            // ~
    Ampersand,        // &
    Pipe,             // |
    Caret,            // ^
    LessLess,         // <<
    GreaterGreater,   // >>
    TildeEq,          // ~=
    AmpEq,            // &=
    PipeEq,           // |=
    CaretEq,          // ^=
    LessLessEq,       // <<=
    GreaterGreaterEq, // >>=

    // Logical operators
    Bang,       // !
    AmpAmp,     // &&
    PipePipe,   // ||
    Lt,         // <
    Gt,         // >
    EqEq,       // ==
    BangEq,     // !=
    AmpAmpEq,   // &&=
    PipePipeEq, // ||=
    LtEq,       // <=
    GtEq,       // >=

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
}

impl Leaf {
    /// Get string representation for error messages.
    pub fn as_str(&self) -> &'static str {
        // Keywords are defined once in `define_keywords!`; delegate to the
        // generated helper so they never diverge from `keyword_type()`.
        if let Some(s) = self.keyword_as_str() {
            return s;
        }
        match self {
            Self::Eos => "end of source",
            Self::Unknown => "unknown",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::IntLiteral => "integer",
            Self::UintLiteral => "unsigned integer",
            Self::FloatLiteral => "float",
            Self::CharLiteral => "character",
            Self::StringLiteral => "string",
            Self::InterpLiteral => "interpolated string",
            Self::MultilineLiteral => "multiline string",
            Self::MultilineInterpLiteral => "interpolated multiline string",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Eq => "=",
            Self::Dot => ".",
            Self::Question => "?",
            Self::DotDot => "..",
            Self::Ellipsis => "...",
            Self::Tilde => "~",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::LessLess => "<<",
            Self::GreaterGreater => ">>",
            Self::TildeEq => "~=",
            Self::AmpEq => "&=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::LessLessEq => "<<=",
            Self::GreaterGreaterEq => ">>=",
            Self::Bang => "!",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::AmpAmpEq => "&&=",
            Self::PipePipeEq => "||=",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            // All keyword variants are handled by `keyword_as_str()` above.
            _ => unreachable!("keyword variant not covered by define_keywords! macro"),
        }
    }

    /// Whether this kind is a primitive type keyword. The primitive set is
    /// the start set shared by segment, path-expression, and type parsing.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::KwBool
                | Self::KwChar
                | Self::KwInt8
                | Self::KwInt16
                | Self::KwInt32
                | Self::KwInt64
                | Self::KwUint8
                | Self::KwUint16
                | Self::KwUint32
                | Self::KwUint64
                | Self::KwSingle
                | Self::KwDouble
                | Self::KwString
                | Self::KwVoid
        )
    }
}

/// Source location span.
///
/// Lines and columns are 0-based: `line` is the number of `\n` bytes before
/// the span start, `column` the number of bytes since the last `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,    // Byte offset
    pub end: usize,      // Byte offset (exclusive)
    pub line: u32,       // Start line
    pub column: u32,     // Start column
    pub end_line: u32,   // End line
    pub end_column: u32, // End column (exclusive)
}

impl Span {
    /// Create a new span with explicit end position.
    pub fn new_with_end(
        start: usize,
        end: usize,
        line: u32,
        column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Create a new span, computing the end position for single-line tokens.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        let length = end.saturating_sub(start);
        Self {
            start,
            end,
            line,
            column,
            end_line: line,
            end_column: column + length as u32,
        }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
            end_line: other.end_line,
            end_column: other.end_column,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        // miette uses (offset, length)
        (span.start, span.end - span.start).into()
    }
}

impl From<&Span> for miette::SourceSpan {
    fn from(span: &Span) -> Self {
        (span.start, span.end - span.start).into()
    }
}

/// A token with its location in source code.
///
/// The lexeme is a zero-copy view into the source buffer; it stays valid for
/// as long as the buffer the lexer was constructed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub ty: Leaf,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(ty: Leaf, lexeme: &'src str, span: Span) -> Self {
        Self { ty, lexeme, span }
    }
}
