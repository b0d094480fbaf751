//! Open tag / text / close tag events over the token stream.
//!
//! The converter does not need a DOM, only the nesting of elements as it
//! happens. [`EventSource`] keeps a stack of open element names and applies
//! the small part of tree construction that changes that nesting:
//!
//! - [void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
//!   close as soon as they open;
//! - opening some elements implicitly closes the current one
//!   ([§ 13.2.6.3 generate implied end tags](https://html.spec.whatwg.org/multipage/parsing.html#generate-implied-end-tags)
//!   in spirit, applied only to the current element);
//! - an end tag closes everything up to the matching open element;
//! - end of input closes whatever is still open.

use crate::tokenizer::{Attribute, HTMLTokenizer, Token};

/// Receives element and text events in document order.
pub trait EventSink {
    /// An element opened. Attribute names are lowercase.
    fn open_tag(&mut self, name: &str, attributes: &Attributes);

    /// A run of character data between two tags, with entities decoded.
    fn text(&mut self, text: &str);

    /// An element closed, either explicitly or implicitly.
    fn close_tag(&mut self, name: &str);
}

/// The attributes of a start tag, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attributes: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// The value of the attribute called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Whether an attribute called `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over the attributes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(name, value)| Attribute::new(name, value))
                .collect(),
        }
    }
}

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified for
/// void elements." Includes the obsolete void elements browsers still honour.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "basefont"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "frame"
            | "hr"
            | "image"
            | "img"
            | "input"
            | "isindex"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose content is not text (`script`, `style`).
fn is_raw_text_element(name: &str) -> bool {
    matches!(name, "script" | "style")
}

/// The elements that opening `name` closes when one of them is the current
/// element. Closing repeats while the new current element is in the set.
#[must_use]
pub fn implied_closes(name: &str) -> &'static [&'static str] {
    const P: &[&str] = &["p"];
    const FORM_CONTROLS: &[&str] = &[
        "input", "option", "optgroup", "select", "button", "datalist", "textarea",
    ];

    match name {
        "li" => &["li"],
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "address" | "article" | "aside"
        | "blockquote" | "details" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
        | "footer" | "form" | "header" | "hr" | "main" | "nav" | "ol" | "pre" | "section"
        | "table" | "ul" => P,
        "dd" | "dt" => &["dd", "dt"],
        "tr" => &["tr", "th", "td"],
        "th" => &["th"],
        "td" => &["thead", "th", "td"],
        "tbody" | "tfoot" => &["thead", "tbody"],
        "option" => &["option"],
        "optgroup" => &["optgroup", "option"],
        "select" | "input" | "output" | "button" | "datalist" | "textarea" => FORM_CONTROLS,
        "rt" | "rp" => &["rt", "rp"],
        "body" => &["head", "link", "script"],
        _ => &[],
    }
}

/// Turns tokens into [`EventSink`] callbacks.
pub struct EventSource<'s, S: EventSink + ?Sized> {
    sink: &'s mut S,
    /// Names of the open elements, outermost first.
    open_elements: Vec<String>,
    /// Character tokens not yet delivered.
    pending_text: String,
}

impl<'s, S: EventSink + ?Sized> EventSource<'s, S> {
    /// Create an event source delivering to `sink`.
    pub const fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            open_elements: Vec::new(),
            pending_text: String::new(),
        }
    }

    /// Names of the currently open elements, outermost first.
    #[must_use]
    pub fn open_elements(&self) -> &[String] {
        &self.open_elements
    }

    /// Process one token.
    pub fn process_token(&mut self, token: Token) {
        match token {
            Token::Character { data } => {
                let in_raw_text = self
                    .open_elements
                    .last()
                    .is_some_and(|name| is_raw_text_element(name));
                if !in_raw_text {
                    self.pending_text.push(data);
                }
            }
            Token::StartTag {
                name, attributes, ..
            } => {
                self.flush_text();
                self.open_element(&name, &Attributes::from(attributes));
            }
            Token::EndTag { name } => {
                self.flush_text();
                self.close_element(&name);
            }
            Token::Comment { .. } | Token::Doctype { .. } => self.flush_text(),
            Token::EndOfFile => self.finish(),
        }
    }

    /// Deliver pending text and close every open element, innermost first.
    pub fn finish(&mut self) {
        self.flush_text();
        while let Some(name) = self.open_elements.pop() {
            self.sink.close_tag(&name);
        }
    }

    fn flush_text(&mut self) {
        if !self.pending_text.is_empty() {
            let text = std::mem::take(&mut self.pending_text);
            self.sink.text(&text);
        }
    }

    fn open_element(&mut self, name: &str, attributes: &Attributes) {
        let closes = implied_closes(name);
        while let Some(current) = self.open_elements.last() {
            if !closes.contains(&current.as_str()) {
                break;
            }
            if let Some(closed) = self.open_elements.pop() {
                self.sink.close_tag(&closed);
            }
        }

        self.sink.open_tag(name, attributes);

        // The self-closing flag is ignored on non-void elements, as in HTML.
        if is_void_element(name) {
            self.sink.close_tag(name);
        } else {
            self.open_elements.push(name.to_string());
        }
    }

    fn close_element(&mut self, name: &str) {
        if let Some(index) = self.open_elements.iter().rposition(|open| open == name) {
            while self.open_elements.len() > index {
                if let Some(closed) = self.open_elements.pop() {
                    self.sink.close_tag(&closed);
                }
            }
            return;
        }

        // [§ 13.2.6.4.7 "in body"](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody):
        // "An end tag whose tag name is "br"" is treated as a `<br>` start
        // tag, and "If the stack of open elements does not have a p element
        // in button scope, ... insert an HTML element for a "p" start tag
        // token with no attributes" before closing it.
        match name {
            "br" => self.open_element("br", &Attributes::new()),
            "p" => {
                self.open_element("p", &Attributes::new());
                self.close_element("p");
            }
            _ => {}
        }
    }
}

/// Tokenize `html` and deliver its events to `sink`.
pub fn parse_events<S: EventSink + ?Sized>(html: &str, sink: &mut S) {
    let mut tokenizer = HTMLTokenizer::new(html);
    tokenizer.run();

    let mut source = EventSource::new(sink);
    for token in tokenizer.into_tokens() {
        source.process_token(token);
    }
    source.finish();
}
