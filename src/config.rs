//! Render configuration.
//!
//! Every render uses the same layout, fonts, and palette. The stock values
//! reproduce the site's preview card exactly; an optional `og.toml` can
//! override any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! panel_width = 400          # Brand panel on the left edge
//! accent_width = 8           # Accent stripe right of the panel
//! content_padding = 40       # Gap between stripe/right edge and text
//! title_top = 80             # Baseline row of the first title line
//! title_line_height = 60
//! subtitle_line_height = 35
//! description_line_height = 30
//! title_gap = 40             # Space between title block and subtitle
//! subtitle_gap = 30          # Space between subtitle and description
//! brand_gap = 20             # Space between wordmark and tagline
//! badge_margin_right = 30
//! badge_margin_bottom = 60
//! badge_padding = 10
//! badge_height = 35
//!
//! [fonts]
//! preferred = "/System/Library/Fonts/Helvetica.ttc"
//! title = 52.0
//! subtitle = 28.0
//! description = 24.0
//! logo = 32.0
//!
//! [colors]
//! blue = "#0066cc"
//! blue_dark = "#004499"
//! orange = "#ff6600"
//! white = "#ffffff"
//! black = "#000000"
//! gray = "#f5f5f5"
//! gray_dark = "#333333"
//!
//! [brand]
//! name = "Aethron Technology"  # Site name in CLI output
//! wordmark = "AETHRON"
//! tagline = "TECHNOLOGY"
//! ```
//!
//! Canvas size is not configurable: every card is 1200×630.
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{OG_HEIGHT, OG_WIDTH, parse_hex_color};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f32 = OG_HEIGHT as f32;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a render needs besides the page text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Panel, stripe, and text block geometry.
    pub layout: LayoutConfig,
    /// Preferred font file and point sizes per text role.
    pub fonts: FontsConfig,
    /// Named brand colors.
    pub colors: ColorsConfig,
    /// Wordmark text drawn on the panel.
    pub brand: BrandConfig,
}

impl RenderConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Every layout distance must fit on the canvas along its own axis and
    /// font sizes are capped at the canvas height, so all later layout math
    /// stays well inside `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        for (name, value, limit) in l.bounded_fields() {
            if value > limit {
                return Err(ConfigError::Validation(format!(
                    "layout.{name} must be at most {limit}, got {value}"
                )));
            }
        }
        if l.panel_width == 0 || l.accent_width == 0 {
            return Err(ConfigError::Validation(
                "layout.panel_width and layout.accent_width must be non-zero".into(),
            ));
        }
        let text_right = l
            .content_x()
            .checked_add(l.content_padding)
            .unwrap_or(u32::MAX);
        if text_right >= OG_WIDTH {
            return Err(ConfigError::Validation(format!(
                "layout leaves no room for text: panel, stripe and padding exceed {OG_WIDTH}px"
            )));
        }
        if l.title_top >= OG_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "layout.title_top must be below {OG_HEIGHT}"
            )));
        }
        if l.title_line_height == 0 || l.subtitle_line_height == 0 || l.description_line_height == 0
        {
            return Err(ConfigError::Validation(
                "layout line heights must be non-zero".into(),
            ));
        }
        if l.badge_height == 0 {
            return Err(ConfigError::Validation(
                "layout.badge_height must be non-zero".into(),
            ));
        }

        let f = &self.fonts;
        for (name, size) in [
            ("title", f.title),
            ("subtitle", f.subtitle),
            ("description", f.description),
            ("logo", f.logo),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "fonts.{name} must be a positive size"
                )));
            }
            if size > MAX_FONT_SIZE {
                return Err(ConfigError::Validation(format!(
                    "fonts.{name} must be at most {MAX_FONT_SIZE}, got {size}"
                )));
            }
        }

        for (name, value) in self.colors.named() {
            if parse_hex_color(value).is_none() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must be a #rrggbb hex color, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Card geometry in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub panel_width: u32,
    pub accent_width: u32,
    pub content_padding: u32,
    pub title_top: u32,
    pub title_line_height: u32,
    pub subtitle_line_height: u32,
    pub description_line_height: u32,
    pub title_gap: u32,
    pub subtitle_gap: u32,
    pub brand_gap: u32,
    pub badge_margin_right: u32,
    pub badge_margin_bottom: u32,
    pub badge_padding: u32,
    pub badge_height: u32,
}

impl LayoutConfig {
    /// Left edge of the text column. Saturates instead of overflowing.
    pub fn content_x(&self) -> u32 {
        self.panel_width
            .checked_add(self.accent_width)
            .and_then(|x| x.checked_add(self.content_padding))
            .unwrap_or(u32::MAX)
    }

    /// Maximum draw width for wrapped text.
    pub fn content_width(&self) -> u32 {
        self.content_x()
            .checked_add(self.content_padding)
            .map_or(0, |used| OG_WIDTH.saturating_sub(used))
    }

    /// Each field with the canvas extent along its axis.
    fn bounded_fields(&self) -> [(&'static str, u32, u32); 14] {
        [
            ("panel_width", self.panel_width, OG_WIDTH),
            ("accent_width", self.accent_width, OG_WIDTH),
            ("content_padding", self.content_padding, OG_WIDTH),
            ("badge_margin_right", self.badge_margin_right, OG_WIDTH),
            ("badge_padding", self.badge_padding, OG_WIDTH),
            ("title_top", self.title_top, OG_HEIGHT),
            ("title_line_height", self.title_line_height, OG_HEIGHT),
            ("subtitle_line_height", self.subtitle_line_height, OG_HEIGHT),
            ("description_line_height", self.description_line_height, OG_HEIGHT),
            ("title_gap", self.title_gap, OG_HEIGHT),
            ("subtitle_gap", self.subtitle_gap, OG_HEIGHT),
            ("brand_gap", self.brand_gap, OG_HEIGHT),
            ("badge_margin_bottom", self.badge_margin_bottom, OG_HEIGHT),
            ("badge_height", self.badge_height, OG_HEIGHT),
        ]
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: 400,
            accent_width: 8,
            content_padding: 40,
            title_top: 80,
            title_line_height: 60,
            subtitle_line_height: 35,
            description_line_height: 30,
            title_gap: 40,
            subtitle_gap: 30,
            brand_gap: 20,
            badge_margin_right: 30,
            badge_margin_bottom: 60,
            badge_padding: 10,
            badge_height: 35,
        }
    }
}

/// Font file and pixel sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Font tried first. Any failure to load it falls back to the bundled face.
    pub preferred: String,
    pub title: f32,
    pub subtitle: f32,
    pub description: f32,
    pub logo: f32,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            preferred: "/System/Library/Fonts/Helvetica.ttc".to_string(),
            title: 52.0,
            subtitle: 28.0,
            description: 24.0,
            logo: 32.0,
        }
    }
}

/// Brand palette as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    pub blue: String,
    pub blue_dark: String,
    pub orange: String,
    pub white: String,
    pub black: String,
    pub gray: String,
    pub gray_dark: String,
}

impl ColorsConfig {
    /// All palette entries with their key names, in declaration order.
    pub fn named(&self) -> [(&'static str, &str); 7] {
        [
            ("blue", &self.blue),
            ("blue_dark", &self.blue_dark),
            ("orange", &self.orange),
            ("white", &self.white),
            ("black", &self.black),
            ("gray", &self.gray),
            ("gray_dark", &self.gray_dark),
        ]
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            blue: "#0066cc".to_string(),
            blue_dark: "#004499".to_string(),
            orange: "#ff6600".to_string(),
            white: "#ffffff".to_string(),
            black: "#000000".to_string(),
            gray: "#f5f5f5".to_string(),
            gray_dark: "#333333".to_string(),
        }
    }
}

/// Site name, plus the wordmark and tagline on the brand panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    /// Shown in the batch header; never drawn.
    pub name: String,
    pub wordmark: String,
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Aethron Technology".to_string(),
            wordmark: "AETHRON".to_string(),
            tagline: "TECHNOLOGY".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(RenderConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if the file is absent.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the render config from `path`, layered over stock defaults.
///
/// A missing file yields the stock config. Unknown keys and out-of-range
/// values are errors.
pub fn load_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: RenderConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `og.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# OG card configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys are an error.
#
# Page titles and descriptions are not configured here: they live in the
# built-in page table.

# ---------------------------------------------------------------------------
# Layout (pixels, on a fixed 1200x630 canvas)
# ---------------------------------------------------------------------------
[layout]
# Brand panel on the left edge, then the accent stripe.
panel_width = 400
accent_width = 8

# Horizontal gap between the stripe and the text, and between text and the
# right edge.
content_padding = 40

# Top of the first title line.
title_top = 80

# Vertical distance between wrapped lines of each field.
title_line_height = 60
subtitle_line_height = 35
description_line_height = 30

# Extra space after the title block and after the subtitle block.
title_gap = 40
subtitle_gap = 30

# Space between wordmark and tagline on the panel.
brand_gap = 20

# Language badge placement, measured from the bottom-right corner.
badge_margin_right = 30
badge_margin_bottom = 60
badge_padding = 10
badge_height = 35

# ---------------------------------------------------------------------------
# Fonts
# ---------------------------------------------------------------------------
[fonts]
# Tried first; if it cannot be read or parsed, the bundled DejaVu Sans is used.
# TrueType collections (.ttc) use their first face.
preferred = "/System/Library/Fonts/Helvetica.ttc"

# Pixel sizes per text role. The tagline and badge use the subtitle size.
title = 52.0
subtitle = 28.0
description = 24.0
logo = 32.0

# ---------------------------------------------------------------------------
# Colors (#rrggbb)
# ---------------------------------------------------------------------------
[colors]
blue = "#0066cc"       # Panel, subtitle
blue_dark = "#004499"
orange = "#ff6600"     # Accent stripe, badge
white = "#ffffff"      # Background, panel text
black = "#000000"
gray = "#f5f5f5"
gray_dark = "#333333"  # Title, description

# ---------------------------------------------------------------------------
# Brand panel text
# ---------------------------------------------------------------------------
[brand]
# Site name used in progress output.
name = "Aethron Technology"
wordmark = "AETHRON"
tagline = "TECHNOLOGY"
"##
}
