//! CSS value types and resolvers
//!
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

mod color;
mod named_colors;
mod size;

pub use color::{ColorValue, parse_color, parse_color_value, parse_single_color};
pub use size::{
    DEFAULT_FONT_SIZE_PT, FontSizeBasis, legacy_size_scale, parse_font_size,
    parse_font_size_part, round_half_up,
};
