//! Post-build verification of an output directory.
//!
//! For every page table entry the expected file must exist, decode, and be
//! exactly 1200×630. Any other `og-*.png` file in the directory is reported
//! as stray: it is not produced by the table and will never be refreshed.
//!
//! Each valid image is fingerprinted (SHA-256 of the file bytes) so two runs
//! can be compared for byte-identical output.

use crate::imaging::{OG_HEIGHT, OG_WIDTH};
use crate::naming::{ParsedOutput, parse_output_filename};
use crate::pages::{self, PageEntry};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Verdict for one expected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    /// Present with the right dimensions.
    Valid { sha256: String },
    Missing,
    WrongSize { width: u32, height: u32 },
    /// Present but not a decodable image.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCheck {
    pub filename: String,
    pub state: ImageState,
}

/// An `og-*.png` file that no table entry produces.
#[derive(Debug, Clone, PartialEq)]
pub struct StrayFile {
    pub filename: String,
    pub parsed: ParsedOutput,
}

impl StrayFile {
    /// Why the table doesn't produce this file.
    pub fn reason(&self) -> String {
        match self.parsed.lang {
            Some(lang) => format!("no page `{}` in {}", self.parsed.slug, lang),
            None => format!("unknown language `{}`", self.parsed.lang_code),
        }
    }
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub images: Vec<ImageCheck>,
    /// Sorted by filename.
    pub stray: Vec<StrayFile>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.stray.is_empty() && self.problem_count() == 0
    }

    /// Expected images that are missing, mis-sized, or unreadable.
    pub fn problem_count(&self) -> usize {
        self.images
            .iter()
            .filter(|c| !matches!(c.state, ImageState::Valid { .. }))
            .count()
    }
}

/// Check `output_dir` against the full page table.
///
/// A missing directory is not an error: every image is reported missing.
pub fn check(output_dir: &Path) -> Result<CheckReport, CheckError> {
    check_entries(&pages::entries(), output_dir)
}

pub fn check_entries(entries: &[PageEntry], output_dir: &Path) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::default();
    let expected: BTreeSet<String> = entries.iter().map(|e| e.filename()).collect();

    for entry in entries {
        let filename = entry.filename();
        let state = check_image(&output_dir.join(&filename))?;
        report.images.push(ImageCheck { filename, state });
    }

    if output_dir.is_dir() {
        let mut stray = Vec::new();
        for dir_entry in fs::read_dir(output_dir)? {
            let name = dir_entry?.file_name().to_string_lossy().into_owned();
            if expected.contains(&name) {
                continue;
            }
            if let Some(parsed) = parse_output_filename(&name) {
                stray.push(StrayFile {
                    filename: name,
                    parsed,
                });
            }
        }
        stray.sort_by(|a, b| a.filename.cmp(&b.filename));
        report.stray = stray;
    }

    Ok(report)
}

fn check_image(path: &Path) -> Result<ImageState, CheckError> {
    if !path.is_file() {
        return Ok(ImageState::Missing);
    }
    match image::image_dimensions(path) {
        Ok((OG_WIDTH, OG_HEIGHT)) => Ok(ImageState::Valid {
            sha256: file_sha256(path)?,
        }),
        Ok((width, height)) => Ok(ImageState::WrongSize { width, height }),
        Err(e) => Ok(ImageState::Unreadable(e.to_string())),
    }
}

/// SHA-256 hash of a file's contents, returned as a hex string.
fn file_sha256(path: &Path) -> Result<String, std::io::Error> {
    let bytes = fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
