//! Style contexts: one node of the cascade per open element.
//!
//! [CSS Cascading and Inheritance Level 4 § 7](https://www.w3.org/TR/css-cascade-4/#inheriting)
//! "Inheritance propagates property values from parent elements to their
//! children."
//!
//! A context only stores what its own element set. Everything else is read
//! through the ancestors at the time of the read (see [`Cascade`]), so every
//! field is an `Option`: `Some(false)` hides an inherited `true`, `None`
//! lets it through.

use std::sync::Arc;

use slidetext_common::warning::warn_once;
use slidetext_css::tokenizer::CSSToken;
use slidetext_css::values::{
    DEFAULT_FONT_SIZE_PT, FontSizeBasis, parse_color, parse_color_value, parse_font_size,
    parse_font_size_part,
};
use slidetext_css::{ComponentValue, Declaration, Stylesheet, parse_declaration_list};

use crate::options::ConvertOptions;
use crate::run::{ListKind, Shadow, ShadowKind};
use crate::stack::Cascade;

/// The `href` and `title` captured from an `<a>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The link target as written.
    pub href: String,
    /// The `title` attribute, used as the tooltip.
    pub title: Option<String>,
}

/// A border from the `border` shorthand. Both parts are required.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Width in points.
    pub size: f64,
    /// Six lowercase hex digits.
    pub color: String,
}

/// The attributes one element set, on top of what it inherits.
#[derive(Debug, Clone)]
pub struct StyleContext {
    /// Font family.
    pub font_face: Option<String>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Text color, six lowercase hex digits.
    pub color: Option<String>,
    /// Background fill, six lowercase hex digits.
    pub fill: Option<String>,
    /// Set by `<b>`, headings and `font-weight`.
    pub bold: Option<bool>,
    /// Set by `<strong>`. Serialized as bold.
    pub strong: Option<bool>,
    /// Set by `<i>` and `font-style`.
    pub italic: Option<bool>,
    /// Set by `<u>`.
    pub underline: Option<bool>,
    /// Set by `<s>`, `<strike>` and `<del>`.
    pub strike: Option<bool>,
    /// Set by `<sub>`.
    pub subscript: Option<bool>,
    /// Set by `<sup>`.
    pub superscript: Option<bool>,
    /// Alignment keyword from an `align` attribute or `text-align`.
    pub align: Option<String>,
    /// `Some(true)` on a list item until its first run, `Some(false)` on
    /// the run that ends a top-level list.
    pub bullet: Option<bool>,
    /// Marker type of the enclosing list.
    pub list_kind: Option<ListKind>,
    /// List nesting depth; `-1` outside any list.
    pub indent_level: Option<i32>,
    /// Link of the enclosing `<a>`. An empty href means no link.
    pub link: Option<Link>,
    /// From `text-shadow`.
    pub shadow: Option<Shadow>,
    /// From `border`.
    pub outline: Option<Outline>,
    /// Space before the paragraph in points.
    pub para_space_before: Option<f64>,
    /// Space after the paragraph in points.
    pub para_space_after: Option<f64>,
    /// Inside `<pre>`: whitespace is kept as is.
    pub preformatted: Option<bool>,
    /// From `margin`, in points.
    pub margin: Option<f64>,
    stylesheet: Arc<Stylesheet>,
}

impl StyleContext {
    /// The root of a conversion: the configured font and an indent level
    /// of `-1`.
    #[must_use]
    pub fn root(options: &ConvertOptions, stylesheet: Arc<Stylesheet>) -> Self {
        Self {
            font_face: Some(options.base_font_face().to_string()),
            font_size: Some(options.base_font_size()),
            indent_level: Some(-1),
            ..Self::empty(stylesheet)
        }
    }

    fn empty(stylesheet: Arc<Stylesheet>) -> Self {
        Self {
            font_face: None,
            font_size: None,
            color: None,
            fill: None,
            bold: None,
            strong: None,
            italic: None,
            underline: None,
            strike: None,
            subscript: None,
            superscript: None,
            align: None,
            bullet: None,
            list_kind: None,
            indent_level: None,
            link: None,
            shadow: None,
            outline: None,
            para_space_before: None,
            para_space_after: None,
            preformatted: None,
            margin: None,
            stylesheet,
        }
    }

    /// A child context that sets nothing and shares the stylesheet.
    #[must_use]
    pub fn derive(&self) -> Self {
        Self::empty(Arc::clone(&self.stylesheet))
    }

    /// The stylesheet shared by every context of the conversion.
    #[must_use]
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Set the text color. Unparseable colors leave it unset.
    pub fn set_color(&mut self, value: &str) {
        if let Some(color) = parse_color(value) {
            self.color = Some(color.to_hex());
        }
    }

    /// Set the font family unless `value` is empty.
    pub fn set_font_face(&mut self, value: &str) {
        if !value.is_empty() {
            self.font_face = Some(value.to_string());
        }
    }

    /// Set the font size from a size value. Sizes that do not resolve, or
    /// resolve to exactly zero, are ignored.
    pub fn set_font_size(&mut self, value: &str, ancestors: Cascade<'_>) {
        let size = self.parse_size(value, ancestors);
        self.apply_font_size(size);
    }

    fn apply_font_size(&mut self, size: Option<f64>) {
        if let Some(size) = size.filter(|size| size.is_finite() && *size != 0.0) {
            self.font_size = Some(size);
        }
    }

    /// Resolve a size value to points against this context.
    ///
    /// `em` and the legacy keywords scale this context's font size, `%`
    /// the nearest ancestor's and `rem` the root's.
    #[must_use]
    pub fn parse_size(&self, value: &str, ancestors: Cascade<'_>) -> Option<f64> {
        parse_font_size(value, self.size_basis(ancestors))
    }

    fn size_basis(&self, ancestors: Cascade<'_>) -> FontSizeBasis {
        let parent = ancestors.font_size();
        let current = self.font_size.or(parent).unwrap_or(DEFAULT_FONT_SIZE_PT);
        FontSizeBasis {
            current,
            parent: parent.unwrap_or(current),
            root: ancestors.root_font_size().unwrap_or(current),
        }
    }

    /// Apply the stylesheet rules that select `tag` or one of the classes
    /// in `class_attr`, in stylesheet order.
    pub fn set_class(&mut self, tag: &str, class_attr: Option<&str>, ancestors: Cascade<'_>) {
        let stylesheet = Arc::clone(&self.stylesheet);
        for rule in stylesheet.matching_rules(tag, class_attr) {
            self.apply_declarations(&rule.declarations, ancestors);
        }
    }

    /// Apply an inline `style` attribute.
    pub fn set_style(&mut self, style: &str, ancestors: Cascade<'_>) {
        let declarations = parse_declaration_list(style);
        self.apply_declarations(&declarations, ancestors);
    }

    /// Apply declarations in order; later ones overwrite earlier ones.
    /// `!important` has no effect.
    pub fn apply_declarations(&mut self, declarations: &[Declaration], ancestors: Cascade<'_>) {
        for declaration in declarations {
            self.apply_declaration(declaration, ancestors);
        }
    }

    fn apply_declaration(&mut self, decl: &Declaration, ancestors: Cascade<'_>) {
        match decl.name.as_str() {
            // [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
            // The `background` shorthand only counts when it is a lone color.
            "background" | "background-color" => {
                if let Some(color) = parse_declared_color(decl) {
                    self.fill = Some(color);
                }
            }
            // [§ 4 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
            //
            // Width first, then a color anywhere after it. Without both the
            // declaration is dropped.
            "border" => {
                let basis = self.size_basis(ancestors);
                let parts = decl.parts();
                let size = parts
                    .first()
                    .and_then(|part| parse_font_size_part(part, basis))
                    .filter(|size| *size != 0.0);
                let color = parts.iter().skip(1).find_map(|part| parse_color_value(part));
                if let (Some(size), Some(color)) = (size, color) {
                    self.outline = Some(Outline {
                        size,
                        color: color.to_hex(),
                    });
                }
            }
            // [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
            "color" => {
                if let Some(color) = parse_declared_color(decl) {
                    self.color = Some(color);
                }
            }
            // [§ 2.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
            //
            // Slides name one font, so only the first family is kept.
            "font-family" => {
                let text = decl.value_text();
                let first = text.split(',').next().unwrap_or_default();
                self.set_font_face(first.trim().trim_matches(['"', '\'']).trim());
            }
            // [§ 2.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
            "font-size" => {
                let size = parse_font_size_part(&decl.value, self.size_basis(ancestors));
                self.apply_font_size(size);
            }
            // [§ 2.4 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
            "font-style" => {
                self.italic = Some(decl.value_text().eq_ignore_ascii_case("italic"));
            }
            // [§ 2.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
            "font-weight" => {
                self.bold = Some(is_bold_weight(&decl.value));
            }
            // [§ 6.1 'margin'](https://www.w3.org/TR/css-box-4/#margin-physical)
            "margin" => {
                let basis = self.size_basis(ancestors);
                let margin = decl
                    .parts()
                    .first()
                    .and_then(|part| parse_font_size_part(part, basis))
                    .filter(|size| *size != 0.0);
                if margin.is_some() {
                    self.margin = margin;
                }
            }
            // [§ 7.1 'text-align'](https://www.w3.org/TR/css-text-3/#text-align-property)
            "text-align" => {
                let align = decl.value_text();
                if !align.is_empty() {
                    self.align = Some(align);
                }
            }
            // [§ 4 'text-shadow'](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property)
            "text-shadow" => {
                if let Some(shadow) = parse_text_shadow(&decl.parts(), self.size_basis(ancestors)) {
                    self.shadow = Some(shadow);
                }
            }
            name => warn_once("CSS", &format!("unsupported property '{name}'")),
        }
    }
}

/// A color declaration as hex, warning when the value is not a color.
fn parse_declared_color(decl: &Declaration) -> Option<String> {
    let color = parse_color_value(&decl.value).map(|color| color.to_hex());
    if color.is_none() {
        warn_once(
            "CSS",
            &format!("invalid color '{}' for '{}'", decl.value_text(), decl.name),
        );
    }
    color
}

/// `bold`, `bolder` or a numeric weight of at least 700.
fn is_bold_weight(value: &[ComponentValue]) -> bool {
    match value {
        [ComponentValue::Token(CSSToken::Ident(keyword))] => {
            keyword.eq_ignore_ascii_case("bold") || keyword.eq_ignore_ascii_case("bolder")
        }
        [ComponentValue::Token(CSSToken::Number { value, .. })] => *value >= 700.0,
        _ => false,
    }
}

/// `<offset-x> <offset-y> <blur-radius>` plus a color in any position.
/// All four are required.
///
/// The offsets become a direction and a distance; `0` (and only `0`) may
/// be written without a unit.
fn parse_text_shadow(parts: &[&[ComponentValue]], basis: FontSizeBasis) -> Option<Shadow> {
    let mut color = None;
    let mut lengths = Vec::with_capacity(3);

    for part in parts {
        match parse_color_value(part) {
            Some(parsed) if color.is_none() => color = Some(parsed),
            _ => lengths.push(parse_shadow_length(part, basis)?),
        }
    }

    let color = color?;
    let [horizontal, vertical, blur]: [f64; 3] = lengths.try_into().ok()?;

    Some(Shadow {
        kind: ShadowKind::Outer,
        angle: (270.0 + vertical.atan2(horizontal).to_degrees()) % 360.0,
        blur,
        color: color.to_hex(),
        offset: horizontal.hypot(vertical),
        opacity: color.alpha(),
    })
}

fn parse_shadow_length(part: &[ComponentValue], basis: FontSizeBasis) -> Option<f64> {
    match part {
        [ComponentValue::Token(CSSToken::Number { value, .. })] => (*value == 0.0).then_some(0.0),
        _ => parse_font_size_part(part, basis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shadow(css: &str) -> Option<Shadow> {
        let declarations = parse_declaration_list(css);
        parse_text_shadow(&declarations[0].parts(), FontSizeBasis::default())
    }

    #[test]
    fn shadow_direction_and_distance() {
        let shadow = shadow("text-shadow: 3pt 4pt 2pt red").unwrap();
        assert_eq!(shadow.offset, 5.0);
        assert_eq!(shadow.blur, 2.0);
        assert_eq!(shadow.color, "ff0000");
        assert_eq!(shadow.opacity, 1.0);
        let expected = (270.0 + 4.0_f64.atan2(3.0).to_degrees()) % 360.0;
        assert!((shadow.angle - expected).abs() < 1e-9);
    }

    #[test]
    fn shadow_color_may_come_first() {
        let shadow = shadow("text-shadow: rgba(0, 0, 0, 0.5) 0 1pt 1pt").unwrap();
        assert_eq!(shadow.color, "000000");
        assert_eq!(shadow.opacity, 0.5);
        assert_eq!(shadow.offset, 1.0);
        assert!(shadow.angle.abs() < 1e-9 || (shadow.angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn shadow_needs_every_part() {
        assert!(shadow("text-shadow: 1pt 1pt red").is_none());
        assert!(shadow("text-shadow: 1pt 1pt 2pt").is_none());
        assert!(shadow("text-shadow: none").is_none());
        assert!(shadow("text-shadow: 1 1 2 red").is_none());
    }

    #[test]
    fn bold_weights() {
        let bold = |css: &str| is_bold_weight(&parse_declaration_list(css)[0].value);
        assert!(bold("font-weight: bold"));
        assert!(bold("font-weight: BOLDER"));
        assert!(bold("font-weight: 700"));
        assert!(bold("font-weight: 900"));
        assert!(!bold("font-weight: 600"));
        assert!(!bold("font-weight: normal"));
    }
}
