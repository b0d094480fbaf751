//! The context stack and cascade resolution.
//!
//! The stack mirrors element nesting: one [`StyleContext`] per open
//! element above a root built from the conversion options. The root is
//! never popped.
//!
//! [`Cascade`] is a read-only view of a stretch of the stack. A value is
//! resolved by walking from the innermost context outwards and taking the
//! first one that set it, so a change to an ancestor is visible to every
//! descendant without copying.

use std::sync::Arc;

use slidetext_css::Stylesheet;
use slidetext_css::values::DEFAULT_FONT_SIZE_PT;

use crate::context::StyleContext;
use crate::options::{ConvertOptions, DEFAULT_FONT_FACE};
use crate::run::{Bullet, Hyperlink, TextOptions};

/// Open element contexts above a root context.
#[derive(Debug, Clone)]
pub struct ContextStack {
    root: StyleContext,
    open: Vec<StyleContext>,
}

impl ContextStack {
    /// A stack holding only the root context for `options`.
    #[must_use]
    pub fn new(options: &ConvertOptions, stylesheet: Arc<Stylesheet>) -> Self {
        Self::with_root(StyleContext::root(options, stylesheet))
    }

    /// A stack holding only `root`.
    #[must_use]
    pub const fn with_root(root: StyleContext) -> Self {
        Self {
            root,
            open: Vec::new(),
        }
    }

    /// Number of contexts, root included. Never zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// The root context.
    #[must_use]
    pub const fn root(&self) -> &StyleContext {
        &self.root
    }

    /// The innermost context.
    #[must_use]
    pub fn top(&self) -> &StyleContext {
        self.open.last().unwrap_or(&self.root)
    }

    /// The innermost context, mutable, together with a view of its
    /// ancestors for resolving relative values.
    pub fn top_mut(&mut self) -> (&mut StyleContext, Cascade<'_>) {
        match self.open.split_last_mut() {
            Some((top, ancestors)) => (
                top,
                Cascade {
                    root: Some(&self.root),
                    path: ancestors,
                },
            ),
            None => (&mut self.root, Cascade::EMPTY),
        }
    }

    /// Push a child of the innermost context and return it.
    pub fn push_derived(&mut self) -> &mut StyleContext {
        let child = self.top().derive();
        self.open.push(child);
        let (top, _) = self.top_mut();
        top
    }

    /// Pop the innermost context. The root stays; popping it returns `None`.
    pub fn pop(&mut self) -> Option<StyleContext> {
        self.open.pop()
    }

    /// Clear the bullet state of every context, so the list marker of an
    /// item is written on exactly one run.
    pub fn reset_bullets(&mut self) {
        self.root.bullet = None;
        for context in &mut self.open {
            context.bullet = None;
        }
    }

    /// A view of the whole stack.
    #[must_use]
    pub fn cascade(&self) -> Cascade<'_> {
        Cascade {
            root: Some(&self.root),
            path: &self.open,
        }
    }
}

/// A read-only chain of contexts, outermost first.
#[derive(Debug, Clone, Copy)]
pub struct Cascade<'a> {
    root: Option<&'a StyleContext>,
    path: &'a [StyleContext],
}

impl<'a> Cascade<'a> {
    /// A chain with no contexts; every lookup falls back to the defaults.
    pub const EMPTY: Self = Self {
        root: None,
        path: &[],
    };

    /// A chain over `contexts`, outermost first.
    #[must_use]
    pub const fn new(contexts: &'a [StyleContext]) -> Self {
        Self {
            root: None,
            path: contexts,
        }
    }

    /// Returns true if the chain holds no contexts.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none() && self.path.is_empty()
    }

    /// The value set by the innermost context that set one.
    #[must_use]
    pub fn resolve<T>(&self, field: impl Fn(&'a StyleContext) -> Option<T>) -> Option<T> {
        self.path.iter().rev().chain(self.root).find_map(field)
    }

    fn flag(&self, field: impl Fn(&'a StyleContext) -> Option<bool>) -> bool {
        self.resolve(field).unwrap_or(false)
    }

    /// The outermost context.
    #[must_use]
    pub fn outermost(&self) -> Option<&'a StyleContext> {
        self.root.or_else(|| self.path.first())
    }

    /// Resolved font size, if any context set one.
    #[must_use]
    pub fn font_size(&self) -> Option<f64> {
        self.resolve(|context| context.font_size)
    }

    /// Font size of the outermost context, the basis of `rem`.
    #[must_use]
    pub fn root_font_size(&self) -> Option<f64> {
        self.outermost().and_then(|context| context.font_size)
    }

    /// Resolved list depth, `-1` outside lists.
    #[must_use]
    pub fn indent_level(&self) -> i32 {
        self.resolve(|context| context.indent_level).unwrap_or(-1)
    }

    /// Whether whitespace is kept as is.
    #[must_use]
    pub fn preformatted(&self) -> bool {
        self.flag(|context| context.preformatted)
    }

    /// Resolve every option a run carries.
    #[must_use]
    pub fn text_options(&self) -> TextOptions {
        let (bullet, indent_level) = match self.resolve(|context| context.bullet) {
            Some(true) => (
                self.resolve(|context| context.list_kind).map(Bullet::On),
                Some(self.indent_level()),
            ),
            Some(false) => (Some(Bullet::Off), None),
            None => (None, None),
        };

        TextOptions {
            align: self.resolve(|context| context.align.clone()),
            bold: self.flag(|context| context.bold) || self.flag(|context| context.strong),
            break_line: false,
            color: self.resolve(|context| context.color.clone()),
            fill: self.resolve(|context| context.fill.clone()),
            font_face: self
                .resolve(|context| context.font_face.clone())
                .unwrap_or_else(|| DEFAULT_FONT_FACE.to_string()),
            font_size: self.font_size().unwrap_or(DEFAULT_FONT_SIZE_PT),
            italic: self.flag(|context| context.italic),
            shadow: self.resolve(|context| context.shadow.clone()),
            strike: self.flag(|context| context.strike),
            subscript: self.flag(|context| context.subscript),
            superscript: self.flag(|context| context.superscript),
            underline: self.flag(|context| context.underline),
            bullet,
            indent_level,
            hyperlink: self
                .resolve(|context| context.link.as_ref())
                .filter(|link| !link.href.is_empty())
                .map(|link| Hyperlink::new(&link.href, link.title.as_deref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ContextStack {
        ContextStack::new(&ConvertOptions::default(), Arc::new(Stylesheet::default()))
    }

    #[test]
    fn root_is_never_popped() {
        let mut stack = stack();
        let _ = stack.push_derived();
        assert_eq!(stack.depth(), 2);
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().font_size, Some(12.0));
    }

    #[test]
    fn top_mut_sees_ancestors() {
        let mut stack = stack();
        stack.push_derived().font_size = Some(10.0);
        let _ = stack.push_derived();
        let (top, ancestors) = stack.top_mut();
        assert_eq!(top.font_size, None);
        assert_eq!(ancestors.font_size(), Some(10.0));
        assert_eq!(ancestors.root_font_size(), Some(12.0));
    }

    #[test]
    fn root_has_no_ancestors() {
        let mut stack = stack();
        let (_, ancestors) = stack.top_mut();
        assert!(ancestors.is_empty());
        assert_eq!(ancestors.font_size(), None);
    }

    #[test]
    fn reads_are_live() {
        let mut stack = stack();
        let _ = stack.push_derived();
        let _ = stack.push_derived();
        assert!(!stack.cascade().text_options().italic);

        // Changing an ancestor after the child exists is visible through it.
        stack.open[0].italic = Some(true);
        assert!(stack.cascade().text_options().italic);
    }
}
