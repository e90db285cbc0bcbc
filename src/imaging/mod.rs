//! Image rendering in pure Rust, with no system graphics libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Font loading** | `ab_glyph::FontVec` (preferred file) / bundled DejaVu Sans |
//! | **Text measurement** | `imageproc::drawing::text_size` |
//! | **Rectangles** | `imageproc::drawing::draw_filled_rect_mut` |
//! | **Text drawing** | `imageproc::drawing::draw_text_mut` |
//! | **Encode → PNG** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: pure layout math (unit testable, no fonts)
//! - **Text**: the [`Measure`] trait and greedy [`wrap_text`]
//! - **Font**: [`FontSet`] with its silent fallback
//! - **Color**: hex parsing and the role [`Palette`]
//! - **Card**: [`CardRenderer`], combining the above onto a canvas

pub mod calculations;
mod card;
mod color;
mod font;
mod text;

pub use card::{CardLayout, CardRenderer, RenderError, TextBlock, encode_png};
pub use color::{Palette, parse_hex_color};
pub use font::{Face, FontSet, FontSource, TextRole};
pub use text::{Measure, wrap_text};

/// Card width in pixels (Open Graph standard).
pub const OG_WIDTH: u32 = 1200;
/// Card height in pixels.
pub const OG_HEIGHT: u32 = 630;
