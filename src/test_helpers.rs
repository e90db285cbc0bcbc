//! Shared test utilities.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let config = config_without_preferred_font(&tmp);
//! generate(tmp.path(), &config, None).unwrap();
//! assert_eq!(png_files(tmp.path()).len(), 12);
//!
//! let lines = wrap_text("aa bb cc", &FixedAdvance::new(10, 20), 50);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::RenderConfig;
use crate::imaging::Measure;

// =========================================================================
// Measurement
// =========================================================================

/// Monospace stand-in for a font: every char is `advance` pixels wide.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    advance: u32,
    height: u32,
}

impl FixedAdvance {
    pub const fn new(advance: u32, height: u32) -> Self {
        Self { advance, height }
    }
}

impl Measure for FixedAdvance {
    fn text_size(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * self.advance, self.height)
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Stock config whose preferred font points into `tmp` where nothing exists,
/// so renders always use the bundled face regardless of the host's fonts.
pub fn config_without_preferred_font(tmp: &TempDir) -> RenderConfig {
    let mut config = RenderConfig::default();
    config.fonts.preferred = tmp
        .path()
        .join("no-such-font.ttc")
        .to_string_lossy()
        .into_owned();
    config
}

/// Names of the `.png` files directly inside `dir`, sorted.
pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}
