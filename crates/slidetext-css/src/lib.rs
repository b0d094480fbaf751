//! CSS tokenizer, rule parser, and value resolvers for the slidetext converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - Ident, function, at-keyword, hash, string, number, percentage and dimension tokens
//!   - Comment handling
//!   - Escape sequences
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Stylesheet parsing (style rules and at-rules)
//!   - Declaration lists for inline `style` attributes
//!   - `!important` annotations
//!
//! - **Values**
//!   - Colors: hex, named, `rgb()`/`rgba()`/`hsl()`/`hsla()`
//!     ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Font sizes in points: `%`, `em`, `rem`, `pt` and the legacy size keywords
//!
//! # Not Yet Implemented
//!
//! - Selector matching beyond a bare tag name or a single `.class`
//! - Specificity (rules apply in source order)
//! - Media queries and other at-rules (parsed, then ignored)

/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Color and font size values.
pub mod values;

pub use parser::{ComponentValue, Declaration, StyleRule, Stylesheet, parse_declaration_list};
pub use tokenizer::{CSSToken, CSSTokenizer};
pub use values::{ColorValue, FontSizeBasis, parse_color, parse_font_size};
