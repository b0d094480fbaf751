//! Run emission.
//!
//! Text becomes a run carrying the options of the innermost context.
//! Structure that has no text of its own (line breaks, the end of a list,
//! an alignment change) is written as a zero-length control run.

use crate::run::{TextOptions, TextRun};
use crate::stack::ContextStack;

/// A zero-length run emitted only for its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRun {
    /// An empty run with `breakLine` set.
    HardBreak,
    /// An empty run with `bullet: false`, after the outermost list.
    BulletEnd,
    /// An empty run resetting the alignment to `left`, before a context
    /// that set its own alignment is discarded.
    AlignReset,
}

/// Collects the runs of one conversion.
#[derive(Debug, Clone, Default)]
pub struct RunEmitter {
    runs: Vec<TextRun>,
}

impl RunEmitter {
    /// An emitter with no runs.
    #[must_use]
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Append a run for `text` with the options of the innermost context.
    ///
    /// Every context's bullet state is cleared afterwards, so a list marker
    /// is carried by the first run of its item only.
    pub fn text(&mut self, text: impl Into<String>, stack: &mut ContextStack) {
        let options = stack.cascade().text_options();
        self.push(text.into(), options, stack);
    }

    /// Append a control run.
    pub fn control(&mut self, control: ControlRun, stack: &mut ContextStack) {
        match control {
            ControlRun::HardBreak => {
                let mut options = stack.cascade().text_options();
                options.break_line = true;
                self.push(String::new(), options, stack);
            }
            ControlRun::BulletEnd => {
                let (top, _) = stack.top_mut();
                top.bullet = Some(false);
                self.text("", stack);
            }
            ControlRun::AlignReset => {
                let (top, _) = stack.top_mut();
                top.align = Some("left".to_string());
                self.text("", stack);
            }
        }
    }

    fn push(&mut self, text: String, options: TextOptions, stack: &mut ContextStack) {
        self.runs.push(TextRun { text, options });
        stack.reset_bullets();
    }

    /// The runs so far, in order.
    #[must_use]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Take the runs.
    #[must_use]
    pub fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }
}
