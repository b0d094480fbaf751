//! Conversion options.
//!
//! Options load from JSON with `camelCase` keys, the same names the run
//! options use. Every key is optional:
//!
//! ```json
//! { "fontFace": "Calibri", "fontSize": 18, "css": ".note { color: gray }" }
//! ```

use serde::Deserialize;
use slidetext_css::values::DEFAULT_FONT_SIZE_PT;
use thiserror::Error;

/// Font family used when nothing sets one.
pub const DEFAULT_FONT_FACE: &str = "Arial";

/// Font family applied inside `<pre>`.
pub const DEFAULT_PRE_FONT_FACE: &str = "Courier New";

/// An error loading [`ConvertOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has a value of the wrong type.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A size is negative, infinite or NaN.
    #[error("`{field}` must be a finite, non-negative size in points, got {value}")]
    InvalidSize {
        /// The `camelCase` key.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Base font family. Empty means [`DEFAULT_FONT_FACE`].
    pub font_face: String,
    /// Base font size in points. Zero means the 12pt default.
    pub font_size: f64,
    /// Stylesheet text applied by tag name and class.
    pub css: Option<String>,
    /// Font family for `<pre>` content.
    pub pre_font_face: String,
    /// Space before paragraphs in points. Unset or zero means the font size
    /// at the paragraph.
    pub para_space_before: Option<f64>,
    /// Space after paragraphs in points, with the same fallback.
    pub para_space_after: Option<f64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            font_face: DEFAULT_FONT_FACE.to_string(),
            font_size: DEFAULT_FONT_SIZE_PT,
            css: None,
            pre_font_face: DEFAULT_PRE_FONT_FACE.to_string(),
            para_space_before: None,
            para_space_after: None,
        }
    }
}

impl ConvertOptions {
    /// Parse and validate a JSON options document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, unknown keys or
    /// mistyped values, and [`ConfigError::InvalidSize`] for a bad size.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every size is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("fontSize", Some(self.font_size)),
            ("paraSpaceBefore", self.para_space_before),
            ("paraSpaceAfter", self.para_space_after),
        ];
        for (field, value) in sizes {
            if let Some(value) = value.filter(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConfigError::InvalidSize { field, value });
            }
        }
        Ok(())
    }

    /// Set the stylesheet text.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Set the base font family.
    #[must_use]
    pub fn with_font_face(mut self, font_face: impl Into<String>) -> Self {
        self.font_face = font_face.into();
        self
    }

    /// Set the base font size in points.
    #[must_use]
    pub const fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the `<pre>` font family.
    #[must_use]
    pub fn with_pre_font_face(mut self, pre_font_face: impl Into<String>) -> Self {
        self.pre_font_face = pre_font_face.into();
        self
    }

    /// Set the space before paragraphs.
    #[must_use]
    pub const fn with_para_space_before(mut self, points: f64) -> Self {
        self.para_space_before = Some(points);
        self
    }

    /// Set the space after paragraphs.
    #[must_use]
    pub const fn with_para_space_after(mut self, points: f64) -> Self {
        self.para_space_after = Some(points);
        self
    }

    /// The base font family, falling back to [`DEFAULT_FONT_FACE`].
    #[must_use]
    pub fn base_font_face(&self) -> &str {
        non_empty_or(&self.font_face, DEFAULT_FONT_FACE)
    }

    /// The base font size, falling back to 12pt when zero.
    #[must_use]
    pub fn base_font_size(&self) -> f64 {
        if self.font_size > 0.0 {
            self.font_size
        } else {
            DEFAULT_FONT_SIZE_PT
        }
    }

    /// The `<pre>` font family, falling back to [`DEFAULT_PRE_FONT_FACE`].
    #[must_use]
    pub fn pre_font_face(&self) -> &str {
        non_empty_or(&self.pre_font_face, DEFAULT_PRE_FONT_FACE)
    }

    /// The configured space before paragraphs, if set and non-zero.
    #[must_use]
    pub fn para_space_before(&self) -> Option<f64> {
        self.para_space_before.filter(|points| *points > 0.0)
    }

    /// The configured space after paragraphs, if set and non-zero.
    #[must_use]
    pub fn para_space_after(&self) -> Option<f64> {
        self.para_space_after.filter(|points| *points > 0.0)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
