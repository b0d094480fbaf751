//! Integration tests for style resolution through the context stack.

use std::sync::Arc;

use slidetext::css::Stylesheet;
use slidetext::html::{Attributes, EventSink, parse_events};
use slidetext::{ConvertOptions, TagHandler, TextRun, html_to_runs};

fn convert_with_css(html: &str, css: &str) -> Vec<TextRun> {
    html_to_runs(html, &ConvertOptions::default().with_css(css))
}

fn convert(html: &str) -> Vec<TextRun> {
    html_to_runs(html, &ConvertOptions::default())
}

fn run<'a>(runs: &'a [TextRun], text: &str) -> &'a TextRun {
    runs.iter().find(|run| run.text == text).unwrap()
}

fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs.iter().copied().collect()
}

#[test]
fn test_descendants_inherit_until_overridden() {
    let runs = convert(
        r#"<span style="color: red">a<i>b<span style="color: blue">c</span>d</i></span>e"#,
    );
    assert_eq!(run(&runs, "a").options.color.as_deref(), Some("ff0000"));
    assert_eq!(run(&runs, "b").options.color.as_deref(), Some("ff0000"));
    assert!(run(&runs, "b").options.italic);
    assert_eq!(run(&runs, "c").options.color.as_deref(), Some("0000ff"));
    assert!(run(&runs, "c").options.italic);
    assert_eq!(run(&runs, "d").options.color.as_deref(), Some("ff0000"));
    assert_eq!(run(&runs, "e").options.color, None);
}

#[test]
fn test_false_hides_inherited_true() {
    let runs = convert(r#"<i>a<span style="font-style: normal">b</span></i>"#);
    assert!(run(&runs, "a").options.italic);
    assert!(!run(&runs, "b").options.italic);
}

#[test]
fn test_class_rule_overrides_tag_meaning() {
    let runs = convert_with_css(r#"<b class="light">x</b>"#, ".light { font-weight: normal }");
    assert!(!runs[0].options.bold);
}

#[test]
fn test_class_rule_overrides_align_attribute() {
    let runs = convert_with_css(
        r#"<span align="center" class="c">x</span>"#,
        ".c { text-align: right }",
    );
    assert_eq!(runs[0].options.align.as_deref(), Some("right"));
}

#[test]
fn test_multiple_classes_and_selector_lists() {
    let css = "h2, .big { font-size: 20pt } .red { color: red } p.note { color: blue }";
    let runs = convert_with_css(r#"<span class="big  red">x</span><p class="note">y</p>"#, css);
    let x = run(&runs, "x");
    assert_eq!(x.options.font_size, 20.0);
    assert_eq!(x.options.color.as_deref(), Some("ff0000"));
    // Compound selectors never match.
    assert_eq!(run(&runs, "y").options.color, None);
}

#[test]
fn test_stylesheet_order_decides_ties() {
    let css = ".a { color: red } .b { color: blue }";
    let runs = convert_with_css(r#"<span class="b a">x</span>"#, css);
    assert_eq!(runs[0].options.color.as_deref(), Some("0000ff"));
}

#[test]
fn test_important_does_not_reorder() {
    let css = ".a { color: red !important } .b { color: blue }";
    let runs = convert_with_css(r#"<span class="a b">x</span>"#, css);
    assert_eq!(runs[0].options.color.as_deref(), Some("0000ff"));
}

#[test]
fn test_percent_scales_parent_size() {
    let css = ".outer { font-size: 10pt } .inner { font-size: 150% }";
    let runs = convert_with_css(
        r#"<span class="outer"><span class="inner">x</span></span>"#,
        css,
    );
    assert_eq!(runs[0].options.font_size, 15.0);
}

#[test]
fn test_em_and_rem() {
    let options = ConvertOptions::default().with_font_size(20.0);
    let runs = html_to_runs(
        r#"<span style="font-size: 10pt"><b style="font-size: 2rem">r</b><i style="font-size: 1.5em">e</i></span>"#,
        &options,
    );
    assert_eq!(run(&runs, "r").options.font_size, 40.0);
    assert_eq!(run(&runs, "e").options.font_size, 15.0);
}

#[test]
fn test_point_sizes_are_not_rounded() {
    let runs = convert(r#"<span style="font-size: 10.5pt">x</span>"#);
    assert_eq!(runs[0].options.font_size, 10.5);
}

#[test]
fn test_zero_and_unsupported_sizes_are_ignored() {
    let runs = convert(
        r#"<span style="font-size: 0pt">a</span><span style="font-size: 14px">b</span>"#,
    );
    assert_eq!(run(&runs, "a").options.font_size, 12.0);
    assert_eq!(run(&runs, "b").options.font_size, 12.0);
}

#[test]
fn test_overflowing_size_is_ignored() {
    let runs = convert(r#"<span style="font-size: 1e400em">x</span>"#);
    assert_eq!(runs[0].options.font_size, 12.0);
}

#[test]
fn test_keyword_sizes() {
    let runs = convert(r#"<span style="font-size: x-large">x</span>"#);
    assert_eq!(runs[0].options.font_size, 18.0);
}

#[test]
fn test_fill_and_font_family() {
    let runs = convert(
        r#"<span style="background: #ABC; font-family: 'Times New Roman', serif">x</span>"#,
    );
    assert_eq!(runs[0].options.fill.as_deref(), Some("aabbcc"));
    assert_eq!(runs[0].options.font_face, "Times New Roman");
}

#[test]
fn test_invalid_color_leaves_attribute_unset() {
    let runs = convert(r#"<span style="color: red"><b style="color: nope">x</b></span>"#);
    assert_eq!(runs[0].options.color.as_deref(), Some("ff0000"));
}

#[test]
fn test_unknown_property_is_ignored() {
    let runs = convert(r#"<span style="letter-spacing: 2pt; color: lime">x</span>"#);
    assert_eq!(runs[0].options.color.as_deref(), Some("00ff00"));
}

#[test]
fn test_text_shadow() {
    let runs = convert(r#"<span style="text-shadow: 3pt 4pt 2pt rgba(0, 0, 0, 0.5)">x</span>"#);
    let shadow = runs[0].options.shadow.as_ref().unwrap();
    assert_eq!(shadow.offset, 5.0);
    assert_eq!(shadow.blur, 2.0);
    assert_eq!(shadow.color, "000000");
    assert_eq!(shadow.opacity, 0.5);
}

#[test]
fn test_incomplete_text_shadow_is_dropped() {
    let runs = convert(r#"<span style="text-shadow: 3pt 4pt red">x</span>"#);
    assert_eq!(runs[0].options.shadow, None);
}

#[test]
fn test_border_needs_size_and_color() {
    let stylesheet = Arc::new(Stylesheet::default());
    let options = ConvertOptions::default();
    let mut handler = TagHandler::new(&options, stylesheet);

    handler.open_tag("span", &attributes(&[("style", "border: 1pt solid")]));
    assert_eq!(handler.stack().top().outline, None);
    handler.close_tag("span");

    handler.open_tag("span", &attributes(&[("style", "border: solid red")]));
    assert_eq!(handler.stack().top().outline, None);
    handler.close_tag("span");

    handler.open_tag("span", &attributes(&[("style", "border: 2pt dashed #00f")]));
    let outline = handler.stack().top().outline.clone().unwrap();
    assert_eq!(outline.size, 2.0);
    assert_eq!(outline.color, "0000ff");
}

#[test]
fn test_margin() {
    let options = ConvertOptions::default();
    let mut handler = TagHandler::new(&options, Arc::new(Stylesheet::default()));
    handler.open_tag("div", &attributes(&[("style", "margin: 6pt 2pt")]));
    assert_eq!(handler.stack().top().margin, Some(6.0));
}

#[test]
fn test_indent_returns_after_lists() {
    let options = ConvertOptions::default();
    let mut handler = TagHandler::new(&options, Arc::new(Stylesheet::default()));

    handler.open_tag("div", &Attributes::new());
    let before = handler.stack().cascade().indent_level();
    parse_events("<ul><li>a<ol><li>b</ol></ul>", &mut handler);
    assert_eq!(handler.stack().cascade().indent_level(), before);
    assert_eq!(before, -1);
}

#[test]
fn test_paragraph_spacing() {
    let options = ConvertOptions::default().with_para_space_after(8.0);
    let mut handler = TagHandler::new(&options, Arc::new(Stylesheet::default()));

    handler.open_tag("p", &Attributes::new());
    // Spacing applies to the leading break only.
    assert_eq!(handler.stack().top().para_space_before, Some(0.0));
    assert_eq!(handler.runs().len(), 1);
    handler.close_tag("p");
    assert_eq!(handler.runs().len(), 2);
    assert_eq!(handler.stack().depth(), 1);
}

#[test]
fn test_serializing_twice_is_identical() {
    let css = ".x { color: red; text-shadow: 1pt 1pt 1pt black }";
    let options = ConvertOptions::default().with_css(css);
    let stylesheet = Arc::new(Stylesheet::parse(css));
    let mut handler = TagHandler::new(&options, stylesheet);

    handler.open_tag("a", &attributes(&[("href", "7"), ("class", "x")]));
    handler.open_tag("li", &Attributes::new());
    let first = handler.stack().cascade().text_options();
    let second = handler.stack().cascade().text_options();
    assert_eq!(first, second);
}
