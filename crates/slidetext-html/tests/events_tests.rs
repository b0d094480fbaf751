//! Integration tests for the open/text/close event source.

use slidetext_html::events::{Attributes, EventSink, implied_closes, is_void_element};
use slidetext_html::parse_events;

/// Records events as compact strings: `+tag`, `-tag` and `"text"`.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    attributes: Vec<(String, Attributes)>,
}

impl EventSink for Recorder {
    fn open_tag(&mut self, name: &str, attributes: &Attributes) {
        self.events.push(format!("+{name}"));
        self.attributes.push((name.to_string(), attributes.clone()));
    }

    fn text(&mut self, text: &str) {
        self.events.push(format!("{text:?}"));
    }

    fn close_tag(&mut self, name: &str) {
        self.events.push(format!("-{name}"));
    }
}

fn events(html: &str) -> Vec<String> {
    let mut recorder = Recorder::default();
    parse_events(html, &mut recorder);
    recorder.events
}

#[test]
fn test_nested_elements() {
    assert_eq!(
        events("<p>Hello <b>world</b></p>"),
        vec!["+p", "\"Hello \"", "+b", "\"world\"", "-b", "-p"]
    );
}

#[test]
fn test_text_is_delivered_in_one_piece() {
    assert_eq!(events("a &amp; b"), vec!["\"a & b\""]);
}

#[test]
fn test_void_elements_close_immediately() {
    assert_eq!(
        events("a<br>b<img src=x>"),
        vec!["\"a\"", "+br", "-br", "\"b\"", "+img", "-img"]
    );
}

#[test]
fn test_self_closing_non_void_stays_open() {
    assert_eq!(events("<b/>x"), vec!["+b", "\"x\"", "-b"]);
}

#[test]
fn test_li_closes_li() {
    assert_eq!(
        events("<ul><li>a<li>b</ul>"),
        vec!["+ul", "+li", "\"a\"", "-li", "+li", "\"b\"", "-li", "-ul"]
    );
}

#[test]
fn test_block_closes_paragraph() {
    assert_eq!(
        events("<p>a<p>b<ul><li>c</li></ul>"),
        vec![
            "+p", "\"a\"", "-p", "+p", "\"b\"", "-p", "+ul", "+li", "\"c\"", "-li", "-ul"
        ]
    );
}

#[test]
fn test_paragraph_not_closed_through_inline() {
    // `<p>` only closes a `p` that is the current element.
    assert_eq!(
        events("<p><b>a<p>b"),
        vec!["+p", "+b", "\"a\"", "+p", "\"b\"", "-p", "-b", "-p"]
    );
}

#[test]
fn test_end_tag_closes_intervening_elements() {
    assert_eq!(
        events("<i><b>x</i>y"),
        vec!["+i", "+b", "\"x\"", "-b", "-i", "\"y\""]
    );
}

#[test]
fn test_unmatched_end_tags() {
    assert_eq!(events("a</b>c"), vec!["\"a\"", "\"c\""]);
    assert_eq!(events("</br>"), vec!["+br", "-br"]);
    assert_eq!(events("</p>"), vec!["+p", "-p"]);
}

#[test]
fn test_eof_closes_open_elements() {
    assert_eq!(
        events("<ol><li><i>x"),
        vec!["+ol", "+li", "+i", "\"x\"", "-i", "-li", "-ol"]
    );
}

#[test]
fn test_style_and_script_text_is_not_delivered() {
    assert_eq!(
        events("<style>.a{}</style><script>if (a < b) {}</script>t"),
        vec!["+style", "-style", "+script", "-script", "\"t\""]
    );
}

#[test]
fn test_comments_split_text() {
    assert_eq!(events("a<!-- c -->b"), vec!["\"a\"", "\"b\""]);
}

#[test]
fn test_attributes_are_passed_through() {
    let mut recorder = Recorder::default();
    parse_events(r#"<a href="42" title="go">Jump</a>"#, &mut recorder);
    let (name, attributes) = &recorder.attributes[0];
    assert_eq!(name, "a");
    assert_eq!(attributes.get("href"), Some("42"));
    assert_eq!(attributes.get("title"), Some("go"));
    assert_eq!(attributes.get("class"), None);
    assert_eq!(attributes.len(), 2);

    let names: Vec<&str> = attributes.into_iter().map(|attr| attr.name.as_str()).collect();
    assert_eq!(names, vec!["href", "title"]);
}

#[test]
fn test_tables() {
    assert!(is_void_element("br"));
    assert!(!is_void_element("p"));
    assert_eq!(implied_closes("li"), &["li"]);
    assert!(implied_closes("h2").contains(&"p"));
    assert!(implied_closes("span").is_empty());
}
