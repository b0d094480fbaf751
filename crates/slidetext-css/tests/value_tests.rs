//! Integration tests for color and font size resolution.

use slidetext_css::values::{
    ColorValue, DEFAULT_FONT_SIZE_PT, FontSizeBasis, legacy_size_scale, parse_color,
    parse_font_size, round_half_up,
};

#[test]
fn test_hex_colors() {
    assert_eq!(parse_color("#ff0000"), Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(parse_color("#0f0"), Some(ColorValue::rgb(0, 255, 0)));
    assert_eq!(parse_color("#12345"), None);

    let translucent = parse_color("#00000080").expect("8-digit hex");
    assert!((translucent.alpha() - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn test_named_colors() {
    assert_eq!(parse_color("red"), Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(parse_color("RebeccaPurple"), Some(ColorValue::rgb(102, 51, 153)));
    assert_eq!(parse_color("notacolor"), None);
    assert_eq!(parse_color("transparent").map(|c| c.alpha()), Some(0.0));
}

#[test]
fn test_color_functions() {
    assert_eq!(parse_color("rgb(0, 128, 255)"), Some(ColorValue::rgb(0, 128, 255)));
    assert_eq!(parse_color("rgb(100%, 0%, 0%)"), Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(parse_color("hsl(120, 100%, 50%)"), Some(ColorValue::rgb(0, 255, 0)));
    assert_eq!(parse_color("hsl(240deg 100% 50%)"), Some(ColorValue::rgb(0, 0, 255)));

    let rgba = parse_color("rgba(0, 0, 0, 0.5)").expect("rgba");
    assert_eq!(rgba.alpha(), 0.5);
    assert_eq!(rgba.to_hex(), "000000");

    assert_eq!(parse_color("rgb(1, 2)"), None);
    assert_eq!(parse_color("rgb(a, b, c)"), None);
}

#[test]
fn test_to_hex_is_lowercase_without_hash() {
    assert_eq!(ColorValue::rgb(0xAB, 0xCD, 0xEF).to_hex(), "abcdef");
}

#[test]
fn test_legacy_size_table() {
    assert_eq!(legacy_size_scale("h1"), Some(2.0));
    assert_eq!(legacy_size_scale("7"), Some(3.0));
    assert_eq!(legacy_size_scale("x-small"), Some(0.67));
    assert_eq!(legacy_size_scale("huge"), None);
}

#[test]
fn test_keyword_sizes_scale_current() {
    let basis = FontSizeBasis::uniform(12.0);
    assert_eq!(parse_font_size("h1", basis), Some(24.0));
    assert_eq!(parse_font_size("h3", basis), Some(14.0));
    assert_eq!(parse_font_size("5", basis), Some(18.0));
    assert_eq!(parse_font_size("small", basis), Some(10.0));
}

#[test]
fn test_relative_units() {
    let basis = FontSizeBasis {
        current: 20.0,
        parent: 10.0,
        root: 12.0,
    };
    assert_eq!(parse_font_size("150%", basis), Some(15.0));
    assert_eq!(parse_font_size("1.5em", basis), Some(30.0));
    assert_eq!(parse_font_size("2rem", basis), Some(24.0));
    assert_eq!(parse_font_size("14.5pt", basis), Some(14.5));
}

#[test]
fn test_unsupported_sizes() {
    let basis = FontSizeBasis::default();
    assert_eq!(parse_font_size("16px", basis), None);
    assert_eq!(parse_font_size("bigger", basis), None);
    assert_eq!(parse_font_size("1em 2em", basis), None);
    assert_eq!(parse_font_size("", basis), None);
}

#[test]
fn test_overflowing_sizes() {
    let basis = FontSizeBasis::default();
    assert_eq!(parse_font_size("1e400em", basis), None);
    assert_eq!(parse_font_size("1e400pt", basis), None);
    assert_eq!(parse_font_size("1e400%", basis), None);
}

#[test]
fn test_default_basis() {
    assert_eq!(FontSizeBasis::default(), FontSizeBasis::uniform(DEFAULT_FONT_SIZE_PT));
}

#[test]
fn test_round_half_up() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(14.04), 14.0);
    assert_eq!(round_half_up(9.96), 10.0);
}
