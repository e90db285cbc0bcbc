//! Pure layout math for the preview card.
//!
//! All functions here are pure and testable without fonts or a canvas. Text
//! extents come in as `(width, height)` pairs already measured by the caller.
//!
//! Rectangles use inclusive bounds on both edges, so a panel spanning
//! `0..=400` covers 401 pixel columns.

use crate::config::LayoutConfig;

/// Inclusive pixel rectangle. May extend past the canvas; drawing clips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }
}

/// Offset that centers an item of `item` pixels in a span of `container` pixels.
///
/// Rounds toward negative infinity, so an item wider than its container gets
/// a negative offset and overhangs evenly (within a pixel) on both sides.
///
/// # Examples
/// ```
/// # use og_cards::imaging::calculations::centered;
/// assert_eq!(centered(400, 200), 100);
/// assert_eq!(centered(400, 201), 99);
/// assert_eq!(centered(100, 131), -16);
/// ```
pub fn centered(container: u32, item: u32) -> i32 {
    (container as i32 - item as i32).div_euclid(2)
}

/// Brand panel: from the left edge through `panel_width`, full height.
pub fn panel_bounds(layout: &LayoutConfig, canvas_height: u32) -> Bounds {
    Bounds {
        left: 0,
        top: 0,
        right: layout.panel_width as i32,
        bottom: canvas_height as i32,
    }
}

/// Accent stripe immediately right of the panel, sharing its right edge column.
pub fn accent_bounds(layout: &LayoutConfig, canvas_height: u32) -> Bounds {
    let left = layout.panel_width as i32;
    Bounds {
        left,
        top: 0,
        right: left + layout.accent_width as i32,
        bottom: canvas_height as i32,
    }
}

/// Top-left positions of the wordmark and tagline on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandLayout {
    pub wordmark: (i32, i32),
    pub tagline: (i32, i32),
}

/// Center the wordmark and tagline horizontally in the panel and vertically
/// as a pair (with `brand_gap` between them) on the canvas.
pub fn brand_layout(
    layout: &LayoutConfig,
    canvas_height: u32,
    wordmark: (u32, u32),
    tagline: (u32, u32),
) -> BrandLayout {
    let (wordmark_w, wordmark_h) = wordmark;
    let (tagline_w, tagline_h) = tagline;
    let gap = layout.brand_gap as i32;

    let block_h = wordmark_h as i32 + tagline_h as i32 + gap;
    let wordmark_y = (canvas_height as i32 - block_h).div_euclid(2);
    let tagline_y = wordmark_y + wordmark_h as i32 + gap;

    BrandLayout {
        wordmark: (centered(layout.panel_width, wordmark_w), wordmark_y),
        tagline: (centered(layout.panel_width, tagline_w), tagline_y),
    }
}

/// Top rows of the three stacked text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTops {
    pub title: i32,
    pub subtitle: i32,
    pub description: i32,
}

/// Stack title, subtitle, and description below each other.
///
/// Each block's height is its line count times its fixed line height; the
/// configured gaps separate consecutive blocks.
pub fn stack_blocks(layout: &LayoutConfig, title_lines: usize, subtitle_lines: usize) -> BlockTops {
    let title = layout.title_top as i32;
    let subtitle =
        title + title_lines as i32 * layout.title_line_height as i32 + layout.title_gap as i32;
    let description = subtitle
        + subtitle_lines as i32 * layout.subtitle_line_height as i32
        + layout.subtitle_gap as i32;
    BlockTops {
        title,
        subtitle,
        description,
    }
}

/// Top row of line `index` in a block starting at `block_top`.
pub fn line_top(block_top: i32, index: usize, line_height: u32) -> i32 {
    block_top + index as i32 * line_height as i32
}

/// Language badge: label position and its backing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLayout {
    pub label: (i32, i32),
    pub backing: Bounds,
}

/// Anchor the badge to the bottom-right corner.
///
/// The label's right edge sits `badge_margin_right` from the canvas edge and
/// its top `badge_margin_bottom` above the bottom. The backing extends
/// `badge_padding` past the label on the left, right, and top, and
/// `badge_height` below the label's top.
pub fn badge_layout(
    layout: &LayoutConfig,
    canvas: (u32, u32),
    label_width: u32,
) -> BadgeLayout {
    let (canvas_w, canvas_h) = canvas;
    let x = canvas_w as i32 - label_width as i32 - layout.badge_margin_right as i32;
    let y = canvas_h as i32 - layout.badge_margin_bottom as i32;
    let pad = layout.badge_padding as i32;

    BadgeLayout {
        label: (x, y),
        backing: Bounds {
            left: x - pad,
            top: y - pad,
            right: x + label_width as i32 + pad,
            bottom: y + layout.badge_height as i32,
        },
    }
}
