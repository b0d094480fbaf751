//! Font size resolution for slide text.
//!
//! [CSS Fonts Module Level 4 § 2.5](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
//!
//! Sizes resolve to points. Besides CSS lengths this accepts the HTML
//! `<font size>` numbers and the heading names `h1`..`h6`, all of which
//! scale the current size by a fixed factor.

use crate::parser::{ComponentValue, parse_component_values};
use crate::tokenizer::CSSToken;

/// Font size used when nothing in the cascade sets one.
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// The font sizes a relative size value can refer to, all in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeBasis {
    /// Resolved size of the element being styled; `em` and the keyword
    /// table scale this.
    pub current: f64,
    /// Resolved size of the nearest ancestor; `%` scales this.
    pub parent: f64,
    /// Size of the root context; `rem` scales this.
    pub root: f64,
}

impl FontSizeBasis {
    /// A basis where every reference size is the same.
    #[must_use]
    pub const fn uniform(size: f64) -> Self {
        Self {
            current: size,
            parent: size,
            root: size,
        }
    }
}

impl Default for FontSizeBasis {
    fn default() -> Self {
        Self::uniform(DEFAULT_FONT_SIZE_PT)
    }
}

/// Scale factor for the legacy size keywords.
///
/// The HTML `<font size>` numbers, the heading names and the CSS
/// absolute-size keywords share one table.
#[must_use]
pub fn legacy_size_scale(keyword: &str) -> Option<f64> {
    let scale = match keyword {
        "7" => 3.0,
        "h1" | "xx-large" | "6" => 2.0,
        "h2" | "x-large" | "5" => 1.5,
        "h3" | "large" | "4" => 1.17,
        "h4" | "medium" | "3" => 1.0,
        "h5" | "small" | "2" => 0.83,
        "h6" | "x-small" | "1" => 0.67,
        "xx-small" => 0.5,
        _ => return None,
    };
    Some(scale)
}

/// Resolve a size value to points.
///
/// Resolution order:
/// 1. the legacy keyword table, scaling `basis.current`, rounded;
/// 2. a single `%`, `em`, `pt` or `rem` quantity: `%` scales
///    `basis.parent`, `em` scales `basis.current`, `rem` scales
///    `basis.root` (all rounded), `pt` is taken as is.
///
/// Anything else resolves to `None`.
#[must_use]
pub fn parse_font_size(value: &str, basis: FontSizeBasis) -> Option<f64> {
    let value = value.trim();

    if let Some(scale) = legacy_size_scale(value) {
        return Some(round_half_up(basis.current * scale));
    }

    let values = parse_component_values(value);
    match values.as_slice() {
        [single] => resolve_quantity(single, basis),
        _ => None,
    }
}

/// Resolve one whitespace-delimited part of a declaration (for example one
/// of the offsets in `text-shadow`) to points.
#[must_use]
pub fn parse_font_size_part(part: &[ComponentValue], basis: FontSizeBasis) -> Option<f64> {
    match part {
        [ComponentValue::Token(CSSToken::Ident(keyword))] => {
            legacy_size_scale(keyword).map(|scale| round_half_up(basis.current * scale))
        }
        [ComponentValue::Token(CSSToken::Number { value, is_integer: true })] => {
            legacy_size_scale(&value.to_string())
                .map(|scale| round_half_up(basis.current * scale))
        }
        [single] => resolve_quantity(single, basis),
        _ => None,
    }
}

/// Overflowing quantities such as `1e400em` resolve to `None`.
fn resolve_quantity(value: &ComponentValue, basis: FontSizeBasis) -> Option<f64> {
    let size = match value {
        ComponentValue::Token(CSSToken::Percentage(percent)) => {
            Some(round_half_up(basis.parent * percent / 100.0))
        }
        ComponentValue::Token(CSSToken::Dimension { value, unit }) => {
            match unit.to_ascii_lowercase().as_str() {
                "em" => Some(round_half_up(basis.current * value)),
                "rem" => Some(round_half_up(basis.root * value)),
                "pt" => Some(*value),
                _ => None,
            }
        }
        _ => None,
    };
    size.filter(|size| size.is_finite())
}

/// Round to the nearest integer with halves going up, so `12 × 1.5 = 18`
/// and `2.5 → 3`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
