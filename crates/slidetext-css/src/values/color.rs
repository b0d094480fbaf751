//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use crate::parser::{ComponentValue, parse_component_values};
use crate::tokenizer::CSSToken;

use super::named_colors::NAMED_COLORS;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0.0 = transparent, 1.0 = opaque)
    pub alpha: f64,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        // "The three-digit RGB notation (#RGB) is converted into six-digit form
        // (#RRGGBB) by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        let (r, g, b, a) = match hex.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(2)?, long(4)?, 255),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            _ => return None,
        };

        Some(Self {
            r,
            g,
            b,
            alpha: f64::from(a) / 255.0,
        })
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    /// "CSS defines a large set of named colors..."
    ///
    /// Also accepts `transparent` (fully transparent black).
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name == "transparent" {
            return Some(Self {
                alpha: 0.0,
                ..Self::BLACK
            });
        }
        NAMED_COLORS
            .binary_search_by(|(candidate, _)| candidate.cmp(&name.as_str()))
            .ok()
            .map(|index| {
                let [r, g, b] = NAMED_COLORS[index].1;
                Self::rgb(r, g, b)
            })
    }

    /// Six lowercase hex digits without a leading `#`, alpha dropped.
    /// This is the form slide renderers expect for text colors.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The alpha channel in `[0, 1]`.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Parse a standalone color string such as `red`, `#336699` or
/// `rgba(0, 0, 0, 0.5)`.
///
/// Returns `None` for anything that is not exactly one color value.
#[must_use]
pub fn parse_color(text: &str) -> Option<ColorValue> {
    let values = parse_component_values(text.trim());
    match values.as_slice() {
        [single] => parse_single_color(single),
        _ => None,
    }
}

/// Parse a run of component values (one whitespace-delimited part of a
/// declaration) as a color.
#[must_use]
pub fn parse_color_value(values: &[ComponentValue]) -> Option<ColorValue> {
    match values {
        [single] => parse_single_color(single),
        _ => None,
    }
}

/// Parse a single component value as a color.
#[must_use]
pub fn parse_single_color(v: &ComponentValue) -> Option<ColorValue> {
    match v {
        ComponentValue::Token(CSSToken::Hash(value)) => ColorValue::from_hex(value),
        ComponentValue::Token(CSSToken::Ident(name)) => ColorValue::from_named(name),
        ComponentValue::Function { name, value } => parse_color_function(name, value),
        _ => None,
    }
}

/// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 7 The HSL Functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Per CSS Color 4, rgb()/rgba() and hsl()/hsla() are aliases.
fn parse_color_function(name: &str, args: &[ComponentValue]) -> Option<ColorValue> {
    let args = extract_color_args(args)?;
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let alpha = args.get(3).map_or(1.0, |&arg| alpha_fraction(arg));

    let (r, g, b) = match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => (
            channel_to_u8(args[0]),
            channel_to_u8(args[1]),
            channel_to_u8(args[2]),
        ),
        "hsl" | "hsla" => {
            // "Because this value is so often given in degrees, the argument
            // can also be given as a number, which is interpreted as degrees."
            let hue = match args[0] {
                ColorArg::Number(v) => v,
                ColorArg::Percentage(v) => v * 3.6,
            };
            hsl_to_rgb(hue, args[1].as_fraction(), args[2].as_fraction())
        }
        _ => return None,
    };

    Some(ColorValue { r, g, b, alpha })
}

/// A numeric color function argument.
#[derive(Debug, Clone, Copy)]
enum ColorArg {
    Number(f64),
    Percentage(f64),
}

impl ColorArg {
    /// Saturation and lightness accept `50%` and the legacy bare `50`.
    fn as_fraction(self) -> f64 {
        match self {
            Self::Number(v) | Self::Percentage(v) => v / 100.0,
        }
    }
}

/// Collect numeric arguments, accepting both the legacy comma syntax and the
/// modern space syntax with `/ alpha`. Any other token makes the color invalid.
fn extract_color_args(args: &[ComponentValue]) -> Option<Vec<ColorArg>> {
    let mut result = Vec::new();
    for arg in args {
        match arg {
            ComponentValue::Token(CSSToken::Number { value, .. }) => {
                result.push(ColorArg::Number(*value));
            }
            ComponentValue::Token(CSSToken::Percentage(value)) => {
                result.push(ColorArg::Percentage(*value));
            }
            // hsl() hues may carry an angle unit.
            ComponentValue::Token(CSSToken::Dimension { value, unit })
                if unit.eq_ignore_ascii_case("deg") =>
            {
                result.push(ColorArg::Number(*value));
            }
            ComponentValue::Token(
                CSSToken::Whitespace | CSSToken::Comma | CSSToken::Delim('/'),
            ) => {}
            _ => return None,
        }
    }
    Some(result)
}

/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(arg: ColorArg) -> u8 {
    let v = match arg {
        ColorArg::Number(n) => n,
        ColorArg::Percentage(p) => p * 255.0 / 100.0,
    };
    v.round().clamp(0.0, 255.0) as u8
}

/// "The <alpha-value> can be a <number> (clamped to [0, 1]) or a
/// <percentage> (clamped to [0%, 100%])."
fn alpha_fraction(arg: ColorArg) -> f64 {
    match arg {
        ColorArg::Number(n) => n.clamp(0.0, 1.0),
        ColorArg::Percentage(p) => (p / 100.0).clamp(0.0, 1.0),
    }
}

/// [§ 7.1 Converting HSL Colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    (to_u8(r1), to_u8(g1), to_u8(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_table_is_sorted_for_binary_search() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }
}
