//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the token kinds that can appear in a stylesheet made of type and
//! class selectors with simple declarations are modelled. `url(` is treated
//! like any other function, and `<!--`/`-->` come through as delimiters.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// A single CSS token.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`" (the name, without the opening parenthesis)
    Function(String),

    /// "`<at-keyword-token>`" (the name, without the `@`)
    AtKeyword(String),

    /// "`<hash-token>`" (the value, without the `#`)
    Hash(String),

    /// "`<string-token>`" (unquoted and unescaped)
    String(String),

    /// "`<bad-string-token>`"
    /// "represents a parsing error"
    BadString,

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number {
        /// "a numeric value"
        value: f64,
        /// True when the source had no fraction or exponent.
        is_integer: bool,
    },

    /// "`<percentage-token>`"
    Percentage(f64),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of input.
    EOF,
}

impl CSSToken {
    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

/// [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
///
/// Simplified serialization, enough to turn a declaration value back into
/// the text the size and font-family resolvers consume.
impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => f.write_str(v),
            Self::Function(name) => write!(f, "{name}("),
            Self::AtKeyword(name) => write!(f, "@{name}"),
            Self::Hash(v) => write!(f, "#{v}"),
            Self::String(v) => write!(f, "\"{v}\""),
            Self::BadString | Self::EOF => Ok(()),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Percentage(value) => write!(f, "{value}%"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Whitespace => f.write_str(" "),
            Self::Colon => f.write_str(":"),
            Self::Semicolon => f.write_str(";"),
            Self::Comma => f.write_str(","),
            Self::LeftBracket => f.write_str("["),
            Self::RightBracket => f.write_str("]"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::LeftBrace => f.write_str("{"),
            Self::RightBrace => f.write_str("}"),
        }
    }
}
