//! Text runs and their serialized options.
//!
//! A run is one span of uniformly styled text in the shape slide renderers
//! such as pptxgenjs accept: `{ "text": ..., "options": { ... } }`. Key names
//! are `camelCase` and optional keys are left out rather than written as
//! `null`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum_macros::Display;

/// One span of text with fully resolved presentation options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Literal text, empty for control runs.
    pub text: String,
    /// Presentation options resolved through the cascade.
    pub options: TextOptions,
}

impl TextRun {
    /// Returns true for zero-length runs that only carry a style change.
    #[must_use]
    pub fn is_control(&self) -> bool {
        self.text.is_empty()
    }
}

/// The resolved options of a run. Field order is the key order of the
/// serialized object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct TextOptions {
    /// Paragraph alignment keyword, e.g. `center`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    /// Bold, from `b`, `strong`, headings or `font-weight`.
    pub bold: bool,
    /// Set on the empty runs that end a line.
    pub break_line: bool,
    /// Text color as six lowercase hex digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background fill as six lowercase hex digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Font family name.
    pub font_face: String,
    /// Font size in points.
    #[serde(serialize_with = "serialize_number")]
    pub font_size: f64,
    /// Italic.
    pub italic: bool,
    /// Text shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Strike-through.
    pub strike: bool,
    /// Subscript.
    pub subscript: bool,
    /// Superscript.
    pub superscript: bool,
    /// Underline.
    pub underline: bool,
    /// List marker of the first run of a list item, or `false` on the run
    /// that ends a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
    /// List nesting depth, present alongside a list marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<i32>,
    /// Link target of text inside `<a href>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

/// The marker type a list gives its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ListKind {
    /// `<ul>`: a plain bullet.
    Unordered,
    /// `<ol>`: a number.
    Ordered,
}

/// The `bullet` option of a run.
///
/// Serializes as `false`, `true` (plain bullet) or `{"type":"number"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bullet {
    /// Explicitly no bullet, written once when a top-level list closes.
    Off,
    /// A list marker of the given kind.
    On(ListKind),
}

impl Serialize for Bullet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Off => serializer.serialize_bool(false),
            Self::On(ListKind::Unordered) => serializer.serialize_bool(true),
            Self::On(ListKind::Ordered) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "number")?;
                map.end()
            }
        }
    }
}

/// A hyperlink: a slide number or an external URL, with an optional
/// tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    /// Where the link goes.
    #[serde(flatten)]
    pub target: LinkTarget,
    /// Tooltip text, from the `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// The destination of a [`Hyperlink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Another slide of the same presentation, by number.
    Slide(String),
    /// An external URL.
    Url(String),
}

impl Hyperlink {
    /// Classify `href`: all ASCII digits is a slide number, anything else a
    /// URL.
    #[must_use]
    pub fn new(href: &str, tooltip: Option<&str>) -> Self {
        let target = if !href.is_empty() && href.bytes().all(|b| b.is_ascii_digit()) {
            LinkTarget::Slide(href.to_string())
        } else {
            LinkTarget::Url(href.to_string())
        };
        Self {
            target,
            tooltip: tooltip.map(str::to_string),
        }
    }
}

/// [CSS Text Decoration Level 3 § 4](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property)
/// expressed the way presentation formats describe shadows: a direction
/// and a distance rather than two offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    /// Always [`ShadowKind::Outer`] for `text-shadow`.
    #[serde(rename = "type")]
    pub kind: ShadowKind,
    /// Direction in degrees, `[0, 360)`.
    #[serde(serialize_with = "serialize_number")]
    pub angle: f64,
    /// Blur radius in points.
    #[serde(serialize_with = "serialize_number")]
    pub blur: f64,
    /// Six lowercase hex digits.
    pub color: String,
    /// Distance in points.
    #[serde(serialize_with = "serialize_number")]
    pub offset: f64,
    /// Alpha of the shadow color, `[0, 1]`.
    #[serde(serialize_with = "serialize_number")]
    pub opacity: f64,
}

/// Shadow placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowKind {
    /// Cast outside the glyphs.
    Outer,
}

/// Integral values are written as JSON integers (`12`, not `12.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Serialize runs as a JSON array.
///
/// # Errors
///
/// Returns the serializer error; with the types above this only happens
/// for non-string map keys, which never occur.
pub fn runs_to_json(runs: &[TextRun], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(runs)
    } else {
        serde_json::to_string(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_are_integers() {
        let shadow = Shadow {
            kind: ShadowKind::Outer,
            angle: 315.0,
            blur: 2.0,
            color: "000000".to_string(),
            offset: 1.5,
            opacity: 1.0,
        };
        let json = serde_json::to_string(&shadow).unwrap();
        assert_eq!(
            json,
            r#"{"type":"outer","angle":315,"blur":2,"color":"000000","offset":1.5,"opacity":1}"#
        );
    }

    #[test]
    fn slide_links_need_digits_only() {
        assert_eq!(
            Hyperlink::new("42", None).target,
            LinkTarget::Slide("42".to_string())
        );
        assert_eq!(
            Hyperlink::new("slide42", None).target,
            LinkTarget::Url("slide42".to_string())
        );
        assert_eq!(
            Hyperlink::new("", None).target,
            LinkTarget::Url(String::new())
        );
    }
}
