//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//! Style rules keep their selectors as trimmed text: matching is done by plain
//! string comparison against a tag name or a `.class` token, never by
//! selector parsing.

use std::fmt::Write as _;

use slidetext_common::warning::warn_once;

use crate::tokenizer::{CSSToken, tokenize};

/// [§ 5.3.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-a-component-value)
///
/// A component value in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(CSSToken),
    /// A function with its contents.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        value: Vec<ComponentValue>,
    },
    /// A simple block.
    Block {
        /// The opening token character.
        token: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
}

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, ASCII-lowercased.
    pub name: String,
    /// The property value as component values, without `!important` and
    /// without leading or trailing whitespace.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration had `!important`. Parsed for completeness;
    /// it does not change the order in which declarations apply.
    pub important: bool,
}

impl Declaration {
    /// The value split on top-level whitespace, e.g. `1pt solid red` gives
    /// three parts while `rgb(0, 0, 0)` stays one.
    #[must_use]
    pub fn parts(&self) -> Vec<&[ComponentValue]> {
        self.value
            .split(|v| matches!(v, ComponentValue::Token(CSSToken::Whitespace)))
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// The value serialized back to text.
    #[must_use]
    pub fn value_text(&self) -> String {
        serialize_component_values(&self.value)
    }
}

/// A CSS selector, kept as its trimmed source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Raw selector text, e.g. `h1` or `.question`
    pub text: String,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
///
/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The comma-separated selector list, in source order.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block, in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Whether this rule applies to an element named `tag` whose `class`
    /// attribute is `class_attr`.
    ///
    /// A rule matches when its selector list contains the bare tag name or
    /// `.name` for any whitespace-separated token of the class attribute.
    /// Compound selectors such as `p.note` or `ul li` never match.
    #[must_use]
    pub fn selects(&self, tag: &str, class_attr: Option<&str>) -> bool {
        let has_selector = |text: &str| self.selectors.iter().any(|s| s.text == text);

        if has_selector(tag) {
            return true;
        }

        class_attr.is_some_and(|classes| {
            classes
                .split_whitespace()
                .any(|class| has_selector(&format!(".{class}")))
        })
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
///
/// A CSS at-rule. Kept in the rule list but never applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// The at-keyword name (without the `@`).
    pub name: String,
    /// The prelude component values.
    pub prelude: Vec<ComponentValue>,
    /// The optional block contents.
    pub block: Option<Vec<ComponentValue>>,
}

/// A CSS rule (either a style rule or an at-rule).
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A style rule (qualified rule).
    Style(StyleRule),
    /// An at-rule.
    At(AtRule),
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed CSS stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet, in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Tokenize and parse stylesheet text.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        CSSParser::new(tokenize(css)).parse_stylesheet()
    }

    /// Style rules in source order, skipping at-rules.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Style(style) => Some(style),
            Rule::At(_) => None,
        })
    }

    /// Style rules that apply to an element, in source order.
    pub fn matching_rules<'a>(
        &'a self,
        tag: &'a str,
        class_attr: Option<&'a str>,
    ) -> impl Iterator<Item = &'a StyleRule> + 'a {
        self.style_rules()
            .filter(move |rule| rule.selects(tag, class_attr))
    }

    /// Returns true if the stylesheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// [§ 5.3.6 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
///
/// Parse the contents of a `style` attribute.
#[must_use]
pub fn parse_declaration_list(text: &str) -> Vec<Declaration> {
    CSSParser::new(tokenize(text)).parse_declaration_list()
}

/// [§ 5.3.10 Parse a list of component values](https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values)
///
/// Parse a standalone value such as an HTML `color` attribute.
#[must_use]
pub fn parse_component_values(text: &str) -> Vec<ComponentValue> {
    let mut parser = CSSParser::new(tokenize(text));
    let mut values = Vec::new();
    while let Some(value) = parser.consume_component_value() {
        values.push(value);
    }
    values
}

/// CSS parser
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    position: usize,
}

impl CSSParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();

        // [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
        loop {
            match self.peek() {
                Some(CSSToken::Whitespace) => self.advance(),
                None | Some(CSSToken::EOF) => return Stylesheet { rules },
                Some(CSSToken::AtKeyword(_)) => {
                    if let Some(at_rule) = self.consume_at_rule() {
                        warn_once("CSS", &format!("at-rule '@{}' is ignored", at_rule.name));
                        rules.push(Rule::At(at_rule));
                    }
                }
                Some(_) => {
                    if let Some(rule) = self.consume_qualified_rule() {
                        rules.push(Rule::Style(rule));
                    }
                }
            }
        }
    }

    /// [§ 5.3.6 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    pub fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        self.consume_list_of_declarations()
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    fn consume_at_rule(&mut self) -> Option<AtRule> {
        let name = match self.consume() {
            Some(CSSToken::AtKeyword(name)) => name,
            _ => return None,
        };
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Semicolon) => {
                    self.advance();
                    return Some(AtRule {
                        name,
                        prelude,
                        block: None,
                    });
                }
                None | Some(CSSToken::EOF) => {
                    return Some(AtRule {
                        name,
                        prelude,
                        block: None,
                    });
                }
                Some(CSSToken::LeftBrace) => {
                    let block = self.consume_simple_block();
                    return Some(AtRule {
                        name,
                        prelude,
                        block: Some(block),
                    });
                }
                Some(_) => {
                    if let Some(value) = self.consume_component_value() {
                        prelude.push(value);
                    }
                }
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Option<StyleRule> {
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                // "This is a parse error. Return nothing."
                None | Some(CSSToken::EOF) => return None,
                Some(CSSToken::LeftBrace) => {
                    self.advance();
                    let selectors = split_selector_list(&prelude);
                    let declarations = self.consume_list_of_declarations();
                    if self.peek() == Some(&CSSToken::RightBrace) {
                        self.advance();
                    }
                    return Some(StyleRule {
                        selectors,
                        declarations,
                    });
                }
                Some(_) => {
                    if let Some(token) = self.consume() {
                        prelude.push(token);
                    }
                }
            }
        }
    }

    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self) -> Vec<ComponentValue> {
        let ending = match self.consume() {
            Some(CSSToken::LeftBrace) => CSSToken::RightBrace,
            Some(CSSToken::LeftBracket) => CSSToken::RightBracket,
            Some(CSSToken::LeftParen) => CSSToken::RightParen,
            _ => return Vec::new(),
        };

        let mut value = Vec::new();
        loop {
            match self.peek() {
                Some(token) if *token == ending => {
                    self.advance();
                    return value;
                }
                None | Some(CSSToken::EOF) => return value,
                Some(_) => {
                    if let Some(v) = self.consume_component_value() {
                        value.push(v);
                    }
                }
            }
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    fn consume_list_of_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => self.advance(),
                None | Some(CSSToken::EOF | CSSToken::RightBrace) => return declarations,
                Some(CSSToken::AtKeyword(_)) => {
                    let _ = self.consume_at_rule();
                }
                Some(CSSToken::Ident(_)) => {
                    if let Some(declaration) = self.consume_declaration() {
                        declarations.push(declaration);
                    }
                }
                // "This is a parse error. ... consume a component value and
                // throw away the returned value."
                Some(_) => {
                    self.advance();
                    self.skip_to_declaration_end();
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Option<Declaration> {
        let name = match self.consume() {
            Some(CSSToken::Ident(name)) => name.to_ascii_lowercase(),
            _ => return None,
        };

        self.skip_whitespace();
        if self.peek() != Some(&CSSToken::Colon) {
            // "this is a parse error. Return nothing."
            self.skip_to_declaration_end();
            return None;
        }
        self.advance();
        self.skip_whitespace();

        let mut value = Vec::new();
        while !self.at_declaration_end() {
            if let Some(v) = self.consume_component_value() {
                value.push(v);
            }
        }

        let important = strip_important(&mut value);
        trim_trailing_whitespace(&mut value);

        Some(Declaration {
            name,
            value,
            important,
        })
    }

    /// [§ 5.4.9 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Option<ComponentValue> {
        match self.peek()? {
            CSSToken::LeftBrace | CSSToken::LeftBracket | CSSToken::LeftParen => {
                let token = match self.peek() {
                    Some(CSSToken::LeftBrace) => '{',
                    Some(CSSToken::LeftBracket) => '[',
                    _ => '(',
                };
                let value = self.consume_simple_block();
                Some(ComponentValue::Block { token, value })
            }
            CSSToken::Function(_) => {
                let Some(CSSToken::Function(name)) = self.consume() else {
                    return None;
                };
                // [§ 5.4.10 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
                let mut value = Vec::new();
                loop {
                    match self.peek() {
                        Some(CSSToken::RightParen) => {
                            self.advance();
                            break;
                        }
                        None | Some(CSSToken::EOF) => break,
                        Some(_) => {
                            if let Some(v) = self.consume_component_value() {
                                value.push(v);
                            }
                        }
                    }
                }
                Some(ComponentValue::Function { name, value })
            }
            CSSToken::EOF => None,
            _ => self.consume().map(ComponentValue::Token),
        }
    }

    fn at_declaration_end(&self) -> bool {
        matches!(
            self.peek(),
            None | Some(CSSToken::EOF | CSSToken::Semicolon | CSSToken::RightBrace)
        )
    }

    fn skip_to_declaration_end(&mut self) {
        while !self.at_declaration_end() {
            let _ = self.consume_component_value();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek() == Some(&CSSToken::Whitespace) {
            self.advance();
        }
    }

    fn consume(&mut self) -> Option<CSSToken> {
        let token = self.tokens.get(self.position).cloned()?;
        self.position += 1;
        Some(token)
    }

    const fn advance(&mut self) {
        self.position += 1;
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }
}

/// [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// "A selector list is a comma-separated list of selectors."
fn split_selector_list(tokens: &[CSSToken]) -> Vec<Selector> {
    tokens
        .split(|token| matches!(token, CSSToken::Comma))
        .filter_map(|group| {
            let text = group.iter().map(ToString::to_string).collect::<String>();
            let text = text.trim();
            (!text.is_empty()).then(|| Selector {
                text: text.to_string(),
            })
        })
        .collect()
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if ... the last two (non-whitespace, non-comment)
/// tokens in its value are a <delim-token> with the value "!" followed by an
/// <ident-token> with a value that is an ASCII case-insensitive match for
/// "important"."
///
/// Removes the annotation from `value` and reports whether it was present.
fn strip_important(value: &mut Vec<ComponentValue>) -> bool {
    let significant: Vec<usize> = value
        .iter()
        .enumerate()
        .filter(|(_, v)| !matches!(v, ComponentValue::Token(CSSToken::Whitespace)))
        .map(|(i, _)| i)
        .collect();

    let [.., bang, important] = significant.as_slice() else {
        return false;
    };

    let is_important = matches!(
        &value[*important],
        ComponentValue::Token(CSSToken::Ident(ident)) if ident.eq_ignore_ascii_case("important")
    ) && matches!(&value[*bang], ComponentValue::Token(CSSToken::Delim('!')));

    if is_important {
        value.truncate(*bang);
    }
    is_important
}

fn trim_trailing_whitespace(value: &mut Vec<ComponentValue>) {
    while matches!(
        value.last(),
        Some(ComponentValue::Token(CSSToken::Whitespace))
    ) {
        let _ = value.pop();
    }
}

/// [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
///
/// Serialize component values back to text. Strings keep their quotes.
#[must_use]
pub fn serialize_component_values(values: &[ComponentValue]) -> String {
    let mut out = String::new();
    for value in values {
        write_component_value(&mut out, value);
    }
    out
}

fn write_component_value(out: &mut String, value: &ComponentValue) {
    match value {
        ComponentValue::Token(token) => {
            let _ = write!(out, "{token}");
        }
        ComponentValue::Function { name, value } => {
            out.push_str(name);
            out.push('(');
            for v in value {
                write_component_value(out, v);
            }
            out.push(')');
        }
        ComponentValue::Block { token, value } => {
            let closing = match token {
                '{' => '}',
                '[' => ']',
                _ => ')',
            };
            out.push(*token);
            for v in value {
                write_component_value(out, v);
            }
            out.push(closing);
        }
    }
}
