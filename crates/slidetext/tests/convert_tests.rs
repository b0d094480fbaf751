//! Integration tests for HTML to run conversion.

use slidetext::{
    Bullet, ConvertOptions, Converter, Hyperlink, LinkTarget, ListKind, TextRun, html_to_runs,
};

fn convert(html: &str) -> Vec<TextRun> {
    html_to_runs(html, &ConvertOptions::default())
}

fn convert_with_css(html: &str, css: &str) -> Vec<TextRun> {
    html_to_runs(html, &ConvertOptions::default().with_css(css))
}

fn texts(runs: &[TextRun]) -> Vec<&str> {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// The run whose text is `text`.
fn run<'a>(runs: &'a [TextRun], text: &str) -> &'a TextRun {
    runs.iter()
        .find(|run| run.text == text)
        .unwrap_or_else(|| panic!("no run with text {text:?} in {:?}", texts(runs)))
}

#[test]
fn test_paragraph_with_bold() {
    let runs = convert("<p>Hello <b>world</b></p>");
    assert_eq!(texts(&runs), vec!["", "Hello ", "world", ""]);

    assert!(runs[0].options.break_line);
    assert!(!runs[1].options.bold);
    assert!(!runs[1].options.break_line);
    assert!(runs[2].options.bold);
    assert!(runs[3].options.break_line);
    assert!(!runs[3].options.bold);
}

#[test]
fn test_hyperlink_to_slide() {
    let runs = convert(r#"<a href="42" title="go">Jump</a>"#);
    assert_eq!(runs.len(), 1);
    assert_eq!(
        runs[0].options.hyperlink,
        Some(Hyperlink {
            target: LinkTarget::Slide("42".to_string()),
            tooltip: Some("go".to_string()),
        })
    );
}

#[test]
fn test_hyperlink_to_url() {
    let runs = convert(r#"<a href="https://example.com/2">site</a> after"#);
    let link = runs[0].options.hyperlink.as_ref().unwrap();
    assert_eq!(
        link.target,
        LinkTarget::Url("https://example.com/2".to_string())
    );
    assert_eq!(link.tooltip, None);
    assert_eq!(run(&runs, " after").options.hyperlink, None);
}

#[test]
fn test_anchor_without_href_hides_outer_link() {
    let runs = convert(r#"<a href="3">a<a name="x">b</a>c</a>"#);
    assert!(run(&runs, "a").options.hyperlink.is_some());
    assert_eq!(run(&runs, "b").options.hyperlink, None);
    assert!(run(&runs, "c").options.hyperlink.is_some());

    let runs = convert(r#"<a href="">empty</a>"#);
    assert_eq!(runs[0].options.hyperlink, None);
}

#[test]
fn test_inline_flags() {
    let runs = convert(
        "<i>i</i><u>u</u><s>s</s><del>del</del><strike>strike</strike>\
         <sub>sub</sub><sup>sup</sup><strong>strong</strong>",
    );
    assert!(run(&runs, "i").options.italic);
    assert!(run(&runs, "u").options.underline);
    assert!(run(&runs, "s").options.strike);
    assert!(run(&runs, "del").options.strike);
    assert!(run(&runs, "strike").options.strike);
    assert!(run(&runs, "sub").options.subscript);
    assert!(run(&runs, "sup").options.superscript);
    assert!(run(&runs, "strong").options.bold);
}

#[test]
fn test_line_break() {
    let runs = convert("a<br>b");
    assert_eq!(texts(&runs), vec!["a", "", "b"]);
    assert!(runs[1].options.break_line);
    assert!(!runs[2].options.break_line);
}

#[test]
fn test_bullet_is_written_once_per_item() {
    let runs = convert("<ul><li>one <b>two</b></li><li>three</li></ul>");
    assert_eq!(texts(&runs), vec!["one ", "two", "three", ""]);

    assert_eq!(runs[0].options.bullet, Some(Bullet::On(ListKind::Unordered)));
    assert_eq!(runs[0].options.indent_level, Some(0));
    assert_eq!(runs[1].options.bullet, None);
    assert_eq!(runs[1].options.indent_level, None);
    assert_eq!(runs[2].options.bullet, Some(Bullet::On(ListKind::Unordered)));
    assert_eq!(runs[3].options.bullet, Some(Bullet::Off));
}

#[test]
fn test_nested_lists() {
    let runs = convert("<ol><li>a<ul><li>b</li></ul></li><li>c</li></ol>");
    assert_eq!(texts(&runs), vec!["a", "b", "c", ""]);

    assert_eq!(runs[0].options.bullet, Some(Bullet::On(ListKind::Ordered)));
    assert_eq!(runs[0].options.indent_level, Some(0));
    assert_eq!(runs[1].options.bullet, Some(Bullet::On(ListKind::Unordered)));
    assert_eq!(runs[1].options.indent_level, Some(1));
    // Closing the inner list does not end the bullets.
    assert_eq!(runs[2].options.bullet, Some(Bullet::On(ListKind::Ordered)));
    assert_eq!(runs[2].options.indent_level, Some(0));
    assert_eq!(runs[3].options.bullet, Some(Bullet::Off));
}

#[test]
fn test_implied_list_item_close() {
    let runs = convert("<ul><li>a<li>b</ul>");
    assert_eq!(texts(&runs), vec!["a", "b", ""]);
    assert!(runs[..2]
        .iter()
        .all(|run| run.options.bullet == Some(Bullet::On(ListKind::Unordered))));
}

#[test]
fn test_list_item_outside_list() {
    let runs = convert("<li>x</li>");
    assert_eq!(runs[0].options.bullet, None);
    assert_eq!(runs[0].options.indent_level, Some(-1));
}

#[test]
fn test_heading() {
    let runs = convert("<h1>Title</h1>after");
    let title = run(&runs, "Title");
    assert!(title.options.bold);
    assert_eq!(title.options.font_size, 24.0);

    assert_eq!(texts(&runs), vec!["Title", "", "after"]);
    assert!(runs[1].options.break_line);
    assert_eq!(runs[2].options.font_size, 12.0);
    assert!(!runs[2].options.bold);
}

#[test]
fn test_heading_levels() {
    let runs = convert("<h2>a</h2><h3>b</h3><h5>c</h5><h6>d</h6>");
    assert_eq!(run(&runs, "a").options.font_size, 18.0);
    assert_eq!(run(&runs, "b").options.font_size, 14.0);
    assert_eq!(run(&runs, "c").options.font_size, 10.0);
    assert_eq!(run(&runs, "d").options.font_size, 8.0);
}

#[test]
fn test_preformatted_keeps_whitespace() {
    let runs = convert("<pre>a  b\n  c</pre><i>x   y</i>");
    let pre = run(&runs, "a  b\n  c");
    assert_eq!(pre.options.font_face, "Courier New");
    assert!(runs[1].options.break_line);
    assert_eq!(run(&runs, "x y").options.font_face, "Arial");
}

#[test]
fn test_pre_font_is_configurable() {
    let options = ConvertOptions::default().with_pre_font_face("Consolas");
    let runs = html_to_runs("<pre>x</pre>", &options);
    assert_eq!(runs[0].options.font_face, "Consolas");
}

#[test]
fn test_pre_font_can_be_overridden_by_style() {
    let runs = convert(r#"<pre style="font-family: Menlo">x</pre>"#);
    assert_eq!(runs[0].options.font_face, "Menlo");
}

#[test]
fn test_whitespace_collapses() {
    let runs = convert("<b>a</b>\n   <i>b\t\tc</i>");
    assert_eq!(texts(&runs), vec!["a", " ", "b c"]);
}

#[test]
fn test_font_element() {
    let runs = convert(r#"<font color="red" face="Georgia" size="5">x</font>"#);
    assert_eq!(runs[0].options.color.as_deref(), Some("ff0000"));
    assert_eq!(runs[0].options.font_face, "Georgia");
    assert_eq!(runs[0].options.font_size, 18.0);
}

#[test]
fn test_font_element_bad_values() {
    let runs = convert(r#"<font color="notacolor" face="" size="+1">x</font>"#);
    assert_eq!(runs[0].options.color, None);
    assert_eq!(runs[0].options.font_face, "Arial");
    assert_eq!(runs[0].options.font_size, 12.0);
}

#[test]
fn test_align_attribute_resets_on_close() {
    let runs = convert(r#"<p align="center">x</p>"#);
    assert_eq!(texts(&runs), vec!["", "x", "", ""]);

    // The leading break is emitted before the attribute applies.
    assert_eq!(runs[0].options.align, None);
    assert_eq!(runs[1].options.align.as_deref(), Some("center"));
    assert_eq!(runs[2].options.align.as_deref(), Some("center"));
    assert!(runs[2].options.break_line);
    assert_eq!(runs[3].options.align.as_deref(), Some("left"));
    assert!(!runs[3].options.break_line);
}

#[test]
fn test_inherited_align_is_reset_by_children() {
    let runs = convert(r#"<div align="right"><b>x</b>y</div>"#);
    assert_eq!(texts(&runs), vec!["x", "", "y", ""]);
    assert_eq!(runs[0].options.align.as_deref(), Some("right"));
    assert_eq!(runs[1].options.align.as_deref(), Some("left"));
    assert!(runs[1].options.bold);
    assert_eq!(runs[2].options.align.as_deref(), Some("right"));
    assert_eq!(runs[3].options.align.as_deref(), Some("left"));
}

#[test]
fn test_inline_close_inside_aligned_paragraph() {
    let runs = convert(r#"<p align="center">A <b>B</b> C</p>"#);
    assert_eq!(texts(&runs), vec!["", "A ", "B", "", " C", "", ""]);
    assert_eq!(runs[3].options.align.as_deref(), Some("left"));
    assert_eq!(runs[4].options.align.as_deref(), Some("center"));
    assert!(runs[5].options.break_line);
    assert_eq!(runs[6].options.align.as_deref(), Some("left"));
}

#[test]
fn test_unmatched_close_keeps_root() {
    let runs = convert("</b></i>x</ul>");
    assert_eq!(texts(&runs), vec!["x"]);
    assert_eq!(runs[0].options.bullet, None);
}

#[test]
fn test_style_and_script_text_is_dropped() {
    let runs = convert("<style>.x { color: red }</style><script>var a;</script>t");
    assert_eq!(texts(&runs), vec!["t"]);
}

#[test]
fn test_entities_are_decoded() {
    let runs = convert("<b>Tom &amp; Jerry&nbsp;&#8212;</b>");
    assert_eq!(runs[0].text, "Tom & Jerry \u{2014}");

    // The decoded no-break space collapses unless whitespace is kept.
    let runs = convert("<pre>a&nbsp;b</pre>");
    assert_eq!(runs[0].text, "a\u{a0}b");
}

#[test]
fn test_every_text_node_produces_a_run() {
    let html = "<p>one</p><ul><li>two</li></ul><h2>three</h2><span>four</span>";
    let runs = convert(html);
    let text_runs = runs.iter().filter(|run| !run.is_control()).count();
    assert_eq!(text_runs, 4);
    assert!(runs.len() >= 4);
}

#[test]
fn test_converter_is_reusable_and_deterministic() {
    let converter = Converter::new(ConvertOptions::default().with_css(".x { color: navy }"));
    let html = r#"<p class="x">Hello <i>there</i></p>"#;
    assert_eq!(converter.convert(html), converter.convert(html));
}

#[test]
fn test_stylesheet_is_shared_across_threads() {
    let converter = Converter::new(ConvertOptions::default().with_css("b { color: teal }"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert("<b>x</b>"))
        })
        .collect();
    for handle in handles {
        let runs = handle.join().unwrap();
        assert_eq!(runs[0].options.color.as_deref(), Some("008080"));
    }
}

#[test]
fn test_base_font_options() {
    let options = ConvertOptions::default()
        .with_font_face("Calibri")
        .with_font_size(20.0);
    let runs = html_to_runs("<h1>a</h1>", &options);
    assert_eq!(runs[0].options.font_face, "Calibri");
    assert_eq!(runs[0].options.font_size, 40.0);
}

#[test]
fn test_empty_and_zero_base_options_fall_back() {
    let options = ConvertOptions::default()
        .with_font_face("")
        .with_font_size(0.0);
    let runs = html_to_runs("x", &options);
    assert_eq!(runs[0].options.font_face, "Arial");
    assert_eq!(runs[0].options.font_size, 12.0);
}

#[test]
fn test_css_inline_in_class_order() {
    let css = "b { color: blue } .warn { color: red }";
    let runs = convert_with_css(
        r#"<b class="warn" style="color: green">g</b><b class="warn">r</b><b>b</b>"#,
        css,
    );
    assert_eq!(run(&runs, "g").options.color.as_deref(), Some("008000"));
    assert_eq!(run(&runs, "r").options.color.as_deref(), Some("ff0000"));
    assert_eq!(run(&runs, "b").options.color.as_deref(), Some("0000ff"));
}
