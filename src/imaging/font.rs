//! Font loading with a built-in fallback.
//!
//! One face serves every text role; roles differ only in pixel size. The
//! preferred font (a path from config) is tried first. Any failure, whether
//! the file is missing, unreadable, or not a parsable font, silently selects
//! the bundled DejaVu Sans instead. Font loading never fails a render.
//!
//! TrueType collections (`.ttc`) are loaded from their first face.

use super::text::Measure;
use crate::config::FontsConfig;
use ab_glyph::{FontArc, FontVec, PxScale};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

static BUILTIN_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Where the loaded face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Preferred(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Preferred(path) => write!(f, "{}", path.display()),
            FontSource::Builtin => f.write_str("built-in DejaVu Sans"),
        }
    }
}

/// Text roles on the card. Tagline and badge share the subtitle size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
    Description,
    Logo,
}

/// A loaded face plus the pixel size for each role.
pub struct FontSet {
    font: FontArc,
    source: FontSource,
    sizes: FontsConfig,
}

impl FontSet {
    /// Load the preferred font, falling back to the bundled face.
    pub fn load(preferred: &Path, sizes: &FontsConfig) -> Self {
        match read_font(preferred) {
            Some(font) => Self {
                font,
                source: FontSource::Preferred(preferred.to_path_buf()),
                sizes: sizes.clone(),
            },
            None => Self::builtin(sizes),
        }
    }

    /// Load from `FontsConfig::preferred`.
    pub fn from_config(config: &FontsConfig) -> Self {
        Self::load(Path::new(&config.preferred), config)
    }

    /// The bundled face, without trying any file.
    pub fn builtin(sizes: &FontsConfig) -> Self {
        Self {
            font: builtin_font(),
            source: FontSource::Builtin,
            sizes: sizes.clone(),
        }
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn face(&self, role: TextRole) -> Face<'_> {
        let px = match role {
            TextRole::Title => self.sizes.title,
            TextRole::Subtitle => self.sizes.subtitle,
            TextRole::Description => self.sizes.description,
            TextRole::Logo => self.sizes.logo,
        };
        Face {
            font: &self.font,
            scale: PxScale::from(px),
        }
    }
}

/// A font at a fixed pixel size.
#[derive(Clone, Copy)]
pub struct Face<'a> {
    font: &'a FontArc,
    scale: PxScale,
}

impl<'a> Face<'a> {
    pub fn font(&self) -> &'a FontArc {
        self.font
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }
}

impl Measure for Face<'_> {
    fn text_size(&self, text: &str) -> (u32, u32) {
        imageproc::drawing::text_size(self.scale, self.font, text)
    }
}

fn read_font(path: &Path) -> Option<FontArc> {
    let data = fs::read(path).ok()?;
    FontVec::try_from_vec_and_index(data, 0)
        .ok()
        .map(FontArc::new)
}

// The bytes are compiled in, so parsing either always succeeds or fails in
// every test run.
fn builtin_font() -> FontArc {
    FontArc::try_from_slice(BUILTIN_FONT).expect("bundled font must parse")
}
