//! Element handling: what each tag does to the context stack.
//!
//! Opening an element pushes a context and styles it in a fixed order:
//!
//! 1. the tag's own meaning (`<b>` is bold, `<ol>` starts a numbered list);
//! 2. an `align` attribute;
//! 3. stylesheet rules selecting the tag name or one of its classes;
//! 4. the inline `style` attribute.
//!
//! Closing an element emits whatever trailing structure it has (a line
//! break, the end of a list) and pops its context.

use std::borrow::Cow;
use std::sync::Arc;

use slidetext_css::Stylesheet;
use slidetext_html::{Attributes, EventSink};
use strum_macros::{EnumString, IntoStaticStr};

use crate::context::Link;
use crate::emitter::{ControlRun, RunEmitter};
use crate::options::ConvertOptions;
use crate::run::{ListKind, TextRun};
use crate::stack::ContextStack;

/// Elements with a meaning of their own. Any other element only takes
/// part through its `align`, `class` and `style` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    /// Hyperlink.
    A,
    /// Bold.
    B,
    /// Strong importance, rendered bold.
    Strong,
    /// Italic.
    I,
    /// Strike-through.
    S,
    /// Strike-through.
    Strike,
    /// Deleted text, rendered struck through.
    Del,
    /// Subscript.
    Sub,
    /// Superscript.
    Sup,
    /// Underline.
    U,
    /// Line break.
    Br,
    /// Paragraph.
    P,
    /// Ordered list.
    Ol,
    /// Unordered list.
    Ul,
    /// List item.
    Li,
    /// Heading level 1.
    H1,
    /// Heading level 2.
    H2,
    /// Heading level 3.
    H3,
    /// Heading level 4.
    H4,
    /// Heading level 5.
    H5,
    /// Heading level 6.
    H6,
    /// Preformatted text.
    Pre,
    /// Legacy `<font color face size>`.
    Font,
}

impl Tag {
    /// Look up a lowercase element name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The element name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns true for `h1` to `h6`.
    #[must_use]
    pub const fn is_heading(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }
}

/// Turns element and text events into runs.
pub struct TagHandler<'o> {
    options: &'o ConvertOptions,
    stack: ContextStack,
    emitter: RunEmitter,
}

impl<'o> TagHandler<'o> {
    /// A handler with an empty stack for `options`.
    #[must_use]
    pub fn new(options: &'o ConvertOptions, stylesheet: Arc<Stylesheet>) -> Self {
        Self {
            options,
            stack: ContextStack::new(options, stylesheet),
            emitter: RunEmitter::new(),
        }
    }

    /// The context stack.
    #[must_use]
    pub const fn stack(&self) -> &ContextStack {
        &self.stack
    }

    /// The runs emitted so far.
    #[must_use]
    pub fn runs(&self) -> &[TextRun] {
        self.emitter.runs()
    }

    /// Take the emitted runs.
    #[must_use]
    pub fn into_runs(self) -> Vec<TextRun> {
        self.emitter.into_runs()
    }

    fn apply_tag(&mut self, tag: Tag, attributes: &Attributes) {
        let (context, ancestors) = self.stack.top_mut();
        match tag {
            // An `<a>` without an href still hides an enclosing link.
            Tag::A => {
                context.link = Some(Link {
                    href: attributes.get("href").unwrap_or_default().to_string(),
                    title: attributes.get("title").map(str::to_string),
                });
            }
            Tag::B => context.bold = Some(true),
            Tag::Strong => context.strong = Some(true),
            Tag::I => context.italic = Some(true),
            Tag::S | Tag::Strike | Tag::Del => context.strike = Some(true),
            Tag::Sub => context.subscript = Some(true),
            Tag::Sup => context.superscript = Some(true),
            Tag::U => context.underline = Some(true),
            Tag::Br => self.emitter.control(ControlRun::HardBreak, &mut self.stack),
            Tag::P => {
                let space = self
                    .options
                    .para_space_before()
                    .or_else(|| self.stack.cascade().font_size());
                self.stack.top_mut().0.para_space_before = space;
                self.emitter.control(ControlRun::HardBreak, &mut self.stack);
                self.stack.top_mut().0.para_space_before = Some(0.0);
            }
            Tag::Ol | Tag::Ul => {
                context.indent_level = Some(ancestors.indent_level() + 1);
                context.list_kind = Some(if tag == Tag::Ol {
                    ListKind::Ordered
                } else {
                    ListKind::Unordered
                });
            }
            Tag::Li => context.bullet = Some(true),
            Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4 | Tag::H5 | Tag::H6 => {
                context.bold = Some(true);
                context.set_font_size(tag.name(), ancestors);
            }
            Tag::Pre => {
                context.preformatted = Some(true);
                context.set_font_face(self.options.pre_font_face());
            }
            Tag::Font => {
                if let Some(color) = attributes.get("color") {
                    context.set_color(color);
                }
                if let Some(face) = attributes.get("face") {
                    context.set_font_face(face);
                }
                if let Some(size) = attributes.get("size") {
                    context.set_font_size(size, ancestors);
                }
            }
        }
    }
}

impl EventSink for TagHandler<'_> {
    fn open_tag(&mut self, name: &str, attributes: &Attributes) {
        let _ = self.stack.push_derived();

        if let Some(tag) = Tag::from_name(name) {
            self.apply_tag(tag, attributes);
        }

        let (context, ancestors) = self.stack.top_mut();
        if let Some(align) = attributes.get("align").filter(|align| !align.is_empty()) {
            context.align = Some(align.to_string());
        }
        context.set_class(name, attributes.get("class"), ancestors);
        if let Some(style) = attributes.get("style").filter(|style| !style.is_empty()) {
            context.set_style(style, ancestors);
        }
    }

    fn text(&mut self, text: &str) {
        let text = if self.stack.cascade().preformatted() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(collapse_whitespace(text))
        };

        if !text.is_empty() {
            self.emitter.text(text, &mut self.stack);
        }
    }

    fn close_tag(&mut self, name: &str) {
        // Only contexts pushed by an open tag are closed; the root stays.
        if self.stack.depth() < 2 {
            return;
        }

        match Tag::from_name(name) {
            Some(tag) if tag.is_heading() || tag == Tag::Pre => {
                self.emitter.control(ControlRun::HardBreak, &mut self.stack);
            }
            // Only the outermost list ends the bullets; nested lists hand
            // back to their parent item.
            Some(Tag::Ol | Tag::Ul) => {
                if self.stack.cascade().indent_level() == 0 {
                    self.emitter.control(ControlRun::BulletEnd, &mut self.stack);
                }
            }
            Some(Tag::P) => {
                let space = self
                    .options
                    .para_space_after()
                    .or_else(|| self.stack.cascade().font_size());
                self.stack.top_mut().0.para_space_after = space;
                self.emitter.control(ControlRun::HardBreak, &mut self.stack);
            }
            _ => {}
        }

        if self.stack.cascade().resolve(|context| context.align.as_ref()).is_some() {
            self.emitter.control(ControlRun::AlignReset, &mut self.stack);
        }

        let _ = self.stack.pop();
    }
}

/// Replace each run of whitespace with a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(collapse_whitespace("a \n\t b"), "a b");
        assert_eq!(collapse_whitespace("\n\n"), " ");
        assert_eq!(collapse_whitespace("a\u{a0}\u{a0}b"), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn tag_names() {
        assert_eq!(Tag::from_name("strong"), Some(Tag::Strong));
        assert_eq!(Tag::from_name("h3"), Some(Tag::H3));
        assert_eq!(Tag::from_name("div"), None);
        assert_eq!(Tag::H6.name(), "h6");
        assert!(Tag::H1.is_heading());
        assert!(!Tag::Pre.is_heading());
    }
}
