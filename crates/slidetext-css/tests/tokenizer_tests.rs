//! Integration tests for the CSS tokenizer.

use slidetext_css::tokenizer::{CSSToken, CSSTokenizer, tokenize};

fn significant(input: &str) -> Vec<CSSToken> {
    tokenize(input)
        .into_iter()
        .filter(|token| !token.is_whitespace() && !token.is_eof())
        .collect()
}

#[test]
fn test_tokenize_declaration() {
    let tokens = significant("color: red;");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Ident("color".to_string()),
            CSSToken::Colon,
            CSSToken::Ident("red".to_string()),
            CSSToken::Semicolon,
        ]
    );
}

#[test]
fn test_run_ends_with_eof() {
    let mut tokenizer = CSSTokenizer::new("a");
    tokenizer.run();
    let tokens = tokenizer.into_tokens();
    assert_eq!(tokens.last(), Some(&CSSToken::EOF));
}

#[test]
fn test_empty_input_is_only_eof() {
    assert_eq!(tokenize(""), vec![CSSToken::EOF]);
}

#[test]
fn test_numeric_tokens() {
    let tokens = significant("150% 1.5em 12pt 700 -2px");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Percentage(150.0),
            CSSToken::Dimension {
                value: 1.5,
                unit: "em".to_string()
            },
            CSSToken::Dimension {
                value: 12.0,
                unit: "pt".to_string()
            },
            CSSToken::Number {
                value: 700.0,
                is_integer: true
            },
            CSSToken::Dimension {
                value: -2.0,
                unit: "px".to_string()
            },
        ]
    );
}

#[test]
fn test_hash_and_function() {
    let tokens = significant("#ff0000 rgb(1,2,3)");
    assert_eq!(tokens[0], CSSToken::Hash("ff0000".to_string()));
    assert_eq!(tokens[1], CSSToken::Function("rgb".to_string()));
    assert_eq!(tokens.last(), Some(&CSSToken::RightParen));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = significant("/* heading */ h1 /* unterminated");
    assert_eq!(tokens, vec![CSSToken::Ident("h1".to_string())]);
}

#[test]
fn test_strings_are_unquoted() {
    let tokens = significant(r#"'Times New Roman' "Ari\61 l""#);
    assert_eq!(
        tokens,
        vec![
            CSSToken::String("Times New Roman".to_string()),
            CSSToken::String("Arial".to_string()),
        ]
    );
}

#[test]
fn test_newline_in_string_is_bad_string() {
    let tokens = significant("'abc\ndef'");
    assert_eq!(tokens[0], CSSToken::BadString);
}

#[test]
fn test_class_selector_tokens() {
    let tokens = significant(".question");
    assert_eq!(
        tokens,
        vec![
            CSSToken::Delim('.'),
            CSSToken::Ident("question".to_string())
        ]
    );
}
