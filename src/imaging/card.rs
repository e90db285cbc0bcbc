//! The preview card renderer.
//!
//! A card is laid out first ([`CardRenderer::layout`], pure apart from text
//! measurement) and then painted onto a fresh 1200×630 RGB canvas:
//!
//! ```text
//! ┌──────────────┬┬─────────────────────────────────────┐
//! │              ││  Title, wrapped                     │
//! │              ││                                     │
//! │   AETHRON    ││  Subtitle, wrapped                  │
//! │  TECHNOLOGY  ││  Description, wrapped               │
//! │              ││                                     │
//! │    panel     ││                              ┌────┐ │
//! │              ││                              │ EN │ │
//! └──────────────┴┴──────────────────────────────┴────┴─┘
//! ```
//!
//! Rendering has no randomness and embeds no timestamps, so identical input
//! produces byte-identical PNGs.

use super::calculations::{
    BadgeLayout, Bounds, BrandLayout, accent_bounds, badge_layout, brand_layout, line_top,
    panel_bounds, stack_blocks,
};
use super::color::Palette;
use super::font::{FontSet, TextRole};
use super::text::{Measure, wrap_text};
use super::{OG_HEIGHT, OG_WIDTH};
use crate::config::RenderConfig;
use crate::pages::{Lang, PageEntry, PageRecord};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid color for {name}: {value:?}")]
    InvalidColor { name: &'static str, value: String },
}

/// One wrapped text field and where its lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub x: i32,
    pub top: i32,
    pub line_height: u32,
}

impl TextBlock {
    /// `(x, y, line)` for every line, top to bottom.
    pub fn positioned_lines(&self) -> impl Iterator<Item = (i32, i32, &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (self.x, line_top(self.top, i, self.line_height), line.as_str()))
    }
}

/// Everything needed to paint one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub panel: Bounds,
    pub accent: Bounds,
    pub brand: BrandLayout,
    pub title: TextBlock,
    pub subtitle: TextBlock,
    pub description: TextBlock,
    pub badge: BadgeLayout,
    pub badge_label: &'static str,
}

/// Renders cards with one config and font set.
pub struct CardRenderer<'a> {
    config: &'a RenderConfig,
    fonts: &'a FontSet,
    palette: Palette,
}

impl<'a> CardRenderer<'a> {
    pub fn new(config: &'a RenderConfig, fonts: &'a FontSet) -> Result<Self, RenderError> {
        let palette = Palette::from_config(&config.colors)
            .map_err(|(name, value)| RenderError::InvalidColor { name, value })?;
        Ok(Self {
            config,
            fonts,
            palette,
        })
    }

    /// Measure, wrap, and position every element of a card.
    pub fn layout(&self, page: &PageRecord, lang: Lang) -> CardLayout {
        let layout = &self.config.layout;
        let brand = &self.config.brand;

        let logo = self.fonts.face(TextRole::Logo);
        let subtitle_face = self.fonts.face(TextRole::Subtitle);
        let brand_pos = brand_layout(
            layout,
            OG_HEIGHT,
            logo.text_size(&brand.wordmark),
            subtitle_face.text_size(&brand.tagline),
        );

        let content_x = layout.content_x() as i32;
        let max_width = layout.content_width();

        let title_lines = wrap_text(page.title, &self.fonts.face(TextRole::Title), max_width);
        let subtitle_lines = wrap_text(page.subtitle, &subtitle_face, max_width);
        let description_lines = wrap_text(
            page.description,
            &self.fonts.face(TextRole::Description),
            max_width,
        );
        let tops = stack_blocks(layout, title_lines.len(), subtitle_lines.len());

        let badge_label = lang.badge();
        let badge = badge_layout(
            layout,
            (OG_WIDTH, OG_HEIGHT),
            subtitle_face.text_width(badge_label),
        );

        CardLayout {
            panel: panel_bounds(layout, OG_HEIGHT),
            accent: accent_bounds(layout, OG_HEIGHT),
            brand: brand_pos,
            title: TextBlock {
                lines: title_lines,
                x: content_x,
                top: tops.title,
                line_height: layout.title_line_height,
            },
            subtitle: TextBlock {
                lines: subtitle_lines,
                x: content_x,
                top: tops.subtitle,
                line_height: layout.subtitle_line_height,
            },
            description: TextBlock {
                lines: description_lines,
                x: content_x,
                top: tops.description,
                line_height: layout.description_line_height,
            },
            badge,
            badge_label,
        }
    }

    /// Paint a card onto a new canvas.
    pub fn render(&self, page: &PageRecord, lang: Lang) -> RgbImage {
        let card = self.layout(page, lang);
        let p = &self.palette;
        let mut canvas = RgbImage::from_pixel(OG_WIDTH, OG_HEIGHT, p.background);

        fill(&mut canvas, card.panel, p.panel);
        fill(&mut canvas, card.accent, p.accent);

        let logo = self.fonts.face(TextRole::Logo);
        let subtitle = self.fonts.face(TextRole::Subtitle);
        let (x, y) = card.brand.wordmark;
        draw_text_mut(
            &mut canvas,
            p.panel_text,
            x,
            y,
            logo.scale(),
            logo.font(),
            &self.config.brand.wordmark,
        );
        let (x, y) = card.brand.tagline;
        draw_text_mut(
            &mut canvas,
            p.panel_text,
            x,
            y,
            subtitle.scale(),
            subtitle.font(),
            &self.config.brand.tagline,
        );

        for (block, role, color) in [
            (&card.title, TextRole::Title, p.title),
            (&card.subtitle, TextRole::Subtitle, p.subtitle),
            (&card.description, TextRole::Description, p.description),
        ] {
            let face = self.fonts.face(role);
            for (x, y, line) in block.positioned_lines() {
                draw_text_mut(&mut canvas, color, x, y, face.scale(), face.font(), line);
            }
        }

        fill(&mut canvas, card.badge.backing, p.badge);
        let (x, y) = card.badge.label;
        draw_text_mut(
            &mut canvas,
            p.badge_text,
            x,
            y,
            subtitle.scale(),
            subtitle.font(),
            card.badge_label,
        );

        canvas
    }

    /// Render `entry` and write it as `og-{page}-{lang}.png` in `output_dir`.
    ///
    /// The directory must already exist. Returns the written path.
    pub fn write_card(&self, entry: &PageEntry, output_dir: &Path) -> Result<PathBuf, RenderError> {
        let canvas = self.render(&entry.page, entry.lang);
        let path = output_dir.join(entry.filename());
        fs::write(&path, encode_png(&canvas)?)?;
        Ok(path)
    }
}

fn fill(canvas: &mut RgbImage, bounds: Bounds, color: Rgb<u8>) {
    if bounds.width() == 0 || bounds.height() == 0 {
        return;
    }
    let rect = Rect::at(bounds.left, bounds.top).of_size(bounds.width(), bounds.height());
    draw_filled_rect_mut(canvas, rect, color);
}

/// Encode an RGB canvas as PNG bytes.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}
