//! HTML and CSS to styled text runs for slide renderers.
//!
//! # Scope
//!
//! This crate provides:
//! - **Style Contexts** - one cascade node per open element, with live
//!   fallback to the ancestors for anything it does not set
//! - **Context Stack** - element nesting, with a root built from
//!   [`ConvertOptions`]
//! - **Tag Handling** - the meaning of `b`, `i`, `a`, `p`, lists, headings,
//!   `pre`, `font` and friends, plus `align`, `class` and `style`
//! - **Run Emission** - text runs and zero-length control runs, serialized
//!   in the pptxgenjs text-object shape
//!
//! # Not Yet Implemented
//!
//! - Selector specificity and combinators (see `slidetext-css`)
//! - Tables, images and block layout
//! - Streaming output; runs are collected in one pass
//!
//! # Example
//!
//! ```
//! use slidetext::{ConvertOptions, html_to_runs};
//!
//! let runs = html_to_runs("<a href=\"42\" title=\"go\">Jump</a>", &ConvertOptions::default());
//! assert_eq!(runs[0].text, "Jump");
//! ```

pub mod context;
pub mod emitter;
pub mod handler;
pub mod options;
pub mod run;
pub mod stack;

pub use slidetext_css as css;
pub use slidetext_html as html;

use std::sync::Arc;

use slidetext_css::Stylesheet;

pub use context::StyleContext;
pub use emitter::{ControlRun, RunEmitter};
pub use handler::{Tag, TagHandler};
pub use options::{ConfigError, ConvertOptions};
pub use run::{Bullet, Hyperlink, LinkTarget, ListKind, Shadow, TextOptions, TextRun, runs_to_json};
pub use stack::{Cascade, ContextStack};

/// Converts documents with one set of options and a parsed stylesheet.
///
/// The stylesheet is parsed once and shared, so a converter can be reused
/// for many documents and cloned across threads cheaply.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConvertOptions,
    stylesheet: Arc<Stylesheet>,
}

impl Converter {
    /// A converter for `options`, parsing `options.css` if present.
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        let stylesheet = options
            .css
            .as_deref()
            .map(Stylesheet::parse)
            .unwrap_or_default();
        Self::with_stylesheet(options, Arc::new(stylesheet))
    }

    /// A converter using an already parsed stylesheet. `options.css` is
    /// ignored.
    #[must_use]
    pub const fn with_stylesheet(options: ConvertOptions, stylesheet: Arc<Stylesheet>) -> Self {
        Self {
            options,
            stylesheet,
        }
    }

    /// The conversion options.
    #[must_use]
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// The shared stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &Arc<Stylesheet> {
        &self.stylesheet
    }

    /// Convert one document.
    #[must_use]
    pub fn convert(&self, html: &str) -> Vec<TextRun> {
        let mut handler = TagHandler::new(&self.options, Arc::clone(&self.stylesheet));
        slidetext_html::parse_events(html, &mut handler);
        handler.into_runs()
    }
}

/// Convert `html` with `options`.
#[must_use]
pub fn html_to_runs(html: &str, options: &ConvertOptions) -> Vec<TextRun> {
    Converter::new(options.clone()).convert(html)
}
