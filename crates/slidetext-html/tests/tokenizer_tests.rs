//! Integration tests for the HTML tokenizer.

use slidetext_html::tokenizer::{Attribute, HTMLTokenizer, Token};

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Character tokens merged into strings, so tests can compare text directly.
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

fn start_tag(name: &str, attributes: &[(&str, &str)]) -> Token {
    Token::StartTag {
        name: name.to_string(),
        self_closing: false,
        attributes: attributes
            .iter()
            .map(|(name, value)| Attribute::new(*name, *value))
            .collect(),
    }
}

#[test]
fn test_simple_element() {
    let tokens = tokenize("<b>hi</b>");
    assert_eq!(tokens[0], start_tag("b", &[]));
    assert_eq!(text_of(&tokens), "hi");
    assert_eq!(
        tokens[3],
        Token::EndTag {
            name: "b".to_string()
        }
    );
    assert!(tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn test_names_are_lowercased() {
    let tokens = tokenize("<FONT COLOR=Red></FONT>");
    assert_eq!(tokens[0], start_tag("font", &[("color", "Red")]));
    assert_eq!(tokens[1].tag_name(), Some("font"));
}

#[test]
fn test_attribute_value_forms() {
    let tokens = tokenize(r#"<a href="1" title='two' data=three checked>"#);
    assert_eq!(
        tokens[0],
        start_tag(
            "a",
            &[
                ("href", "1"),
                ("title", "two"),
                ("data", "three"),
                ("checked", "")
            ]
        )
    );
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let tokens = tokenize(r#"<span class="a" class="b">"#);
    assert_eq!(tokens[0], start_tag("span", &[("class", "a")]));
}

#[test]
fn test_self_closing_flag() {
    let tokens = tokenize("<br/>");
    assert!(matches!(
        &tokens[0],
        Token::StartTag { name, self_closing: true, .. } if name == "br"
    ));
}

#[test]
fn test_named_character_references() {
    let tokens = tokenize("a &amp; b &lt;c&gt; &copy 2020 &nbsp;x");
    assert_eq!(text_of(&tokens), "a & b <c> \u{a9} 2020 \u{a0}x");
}

#[test]
fn test_unknown_reference_is_literal() {
    let tokens = tokenize("&bogus; & &;");
    assert_eq!(text_of(&tokens), "&bogus; & &;");
}

#[test]
fn test_numeric_character_references() {
    let tokens = tokenize("&#65;&#x42;&#X63;&#0;&#x110000;&#128;");
    assert_eq!(text_of(&tokens), "ABc\u{FFFD}\u{FFFD}\u{20AC}");
}

#[test]
fn test_numeric_reference_without_digits() {
    let tokens = tokenize("&#; &#xZ");
    assert_eq!(text_of(&tokens), "&#; &#xZ");
}

#[test]
fn test_reference_in_attribute() {
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2&copy=3">"#);
    // `&copy=` stays literal inside attributes for historical reasons.
    assert_eq!(tokens[0], start_tag("a", &[("href", "?a=1&b=2&copy=3")]));
}

#[test]
fn test_comments_and_doctype() {
    let tokens = tokenize("<!DOCTYPE html><!-- note -->x");
    assert_eq!(
        tokens[0],
        Token::Doctype {
            name: Some("html".to_string())
        }
    );
    assert_eq!(
        tokens[1],
        Token::Comment {
            data: " note ".to_string()
        }
    );
    assert_eq!(text_of(&tokens), "x");
}

#[test]
fn test_style_content_is_raw_text() {
    let tokens = tokenize("<style>p > b { color: red }</style><b>");
    assert_eq!(text_of(&tokens), "p > b { color: red }");
    assert_eq!(
        tokens.iter().filter(|t| matches!(t, Token::StartTag { .. })).count(),
        2
    );
}

#[test]
fn test_stray_less_than_is_text() {
    let tokens = tokenize("1 < 2");
    assert_eq!(text_of(&tokens), "1 < 2");
}

#[test]
fn test_eof_inside_tag_drops_tag() {
    let tokens = tokenize("text<b class=");
    assert_eq!(text_of(&tokens), "text");
    assert!(!tokens.iter().any(|t| matches!(t, Token::StartTag { .. })));
}

#[test]
fn test_crlf_is_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}
