//! CSS parser module.

/// CSS parser implementation per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
#[allow(clippy::module_inception)]
pub mod parser;

pub use parser::{
    AtRule, CSSParser, ComponentValue, Declaration, Rule, Selector, StyleRule, Stylesheet,
    parse_component_values, parse_declaration_list, serialize_component_values,
};
