//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Generating OG images for Aethron Technology...
//! Output directory: src/assets/images/og
//! Image size: 1200x630px
//! Images: 12
//! Font: built-in DejaVu Sans
//! --------------------------------------------------
//! Created: og-home-en.png
//! Created: og-about-en.png
//! ...
//! --------------------------------------------------
//! Generated 12 OG images successfully!
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 og-home-en.png  ok  3f2a9c01b7e4
//! 002 og-about-en.png  MISSING
//! 003 og-solutions-en.png  WRONG SIZE 600x315
//!
//! Stray
//!     og-blog-en.png  (no page `blog` in en)
//!
//! 1 of 12 images have problems, 1 stray file
//! ```
//!
//! ## List
//!
//! ```text
//! en
//! 001 home → og-home-en.png
//!     Aethron Technology
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::check::{CheckReport, ImageState};
use crate::generate::GenerateEvent;
use crate::pages::PageEntry;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Length of the fingerprint prefix shown by `check`.
const SHORT_HASH: usize = 12;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format one batch progress event.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::Started {
            site,
            output_dir,
            width,
            height,
            font,
            total,
        } => vec![
            format!("Generating OG images for {}...", site),
            format!("Output directory: {}", output_dir.display()),
            format!("Image size: {}x{}px", width, height),
            format!("Images: {}", total),
            format!("Font: {}", font),
            rule(),
        ],
        GenerateEvent::Created { filename } => vec![format!("Created: {}", filename)],
        GenerateEvent::Finished { count } => vec![
            rule(),
            format!("Generated {} OG images successfully!", count),
        ],
    }
}

pub fn print_generate_event(event: &GenerateEvent) {
    for line in format_generate_event(event) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a verification report.
pub fn format_check_output(report: &CheckReport, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Checking {}", output_dir.display())];

    for (i, image) in report.images.iter().enumerate() {
        let status = match &image.state {
            ImageState::Valid { sha256 } => {
                format!("ok  {}", &sha256[..SHORT_HASH.min(sha256.len())])
            }
            ImageState::Missing => "MISSING".to_string(),
            ImageState::WrongSize { width, height } => {
                format!("WRONG SIZE {}x{}", width, height)
            }
            ImageState::Unreadable(reason) => format!("UNREADABLE {}", reason),
        };
        lines.push(format!(
            "{} {}  {}",
            format_index(i + 1),
            image.filename,
            status
        ));
    }

    if !report.stray.is_empty() {
        lines.push(String::new());
        lines.push("Stray".to_string());
        for stray in &report.stray {
            lines.push(format!("    {}  ({})", stray.filename, stray.reason()));
        }
    }

    lines.push(String::new());
    if report.is_ok() {
        lines.push(format!(
            "All {} OK",
            plural(report.images.len(), "image", "images")
        ));
    } else {
        lines.push(format!(
            "{} of {} have problems, {}",
            report.problem_count(),
            plural(report.images.len(), "image", "images"),
            plural(report.stray.len(), "stray file", "stray files")
        ));
    }
    lines
}

pub fn print_check_output(report: &CheckReport, output_dir: &Path) {
    for line in format_check_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// List
// ============================================================================

/// Format the page table grouped by language.
pub fn format_list_output(entries: &[PageEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_lang = None;
    let mut position = 0;

    for entry in entries {
        if current_lang != Some(entry.lang) {
            if current_lang.is_some() {
                lines.push(String::new());
            }
            lines.push(entry.lang.code().to_string());
            current_lang = Some(entry.lang);
            position = 0;
        }
        position += 1;
        lines.push(format!(
            "{} {} → {}",
            format_index(position),
            entry.slug,
            entry.filename()
        ));
        lines.push(format!("    {}", entry.page.title));
    }

    lines.push(String::new());
    lines.push(format!("{} total", plural(entries.len(), "image", "images")));
    lines
}

pub fn print_list_output(entries: &[PageEntry]) {
    for line in format_list_output(entries) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{ImageCheck, StrayFile};
    use crate::naming::parse_output_filename;
    use crate::imaging::FontSource;
    use crate::pages::{self, Lang};
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "image", "images"), "1 image");
        assert_eq!(plural(0, "image", "images"), "0 images");
        assert_eq!(plural(12, "image", "images"), "12 images");
    }

    // =========================================================================
    // Generate
    // =========================================================================

    #[test]
    fn started_event_shows_batch_header() {
        let lines = format_generate_event(&GenerateEvent::Started {
            site: "Aethron Technology".into(),
            output_dir: PathBuf::from("src/assets/images/og"),
            width: 1200,
            height: 630,
            font: FontSource::Builtin,
            total: 12,
        });
        assert_eq!(
            lines,
            vec![
                "Generating OG images for Aethron Technology...",
                "Output directory: src/assets/images/og",
                "Image size: 1200x630px",
                "Images: 12",
                "Font: built-in DejaVu Sans",
                "--------------------------------------------------",
            ]
        );
    }

    #[test]
    fn created_event_is_confirmation_line() {
        let lines = format_generate_event(&GenerateEvent::Created {
            filename: "og-home-en.png".into(),
        });
        assert_eq!(lines, vec!["Created: og-home-en.png"]);
    }

    #[test]
    fn finished_event_shows_count() {
        let lines = format_generate_event(&GenerateEvent::Finished { count: 12 });
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1], "Generated 12 OG images successfully!");
    }

    // =========================================================================
    // Check
    // =========================================================================

    fn report(states: Vec<ImageState>, stray: Vec<&str>) -> CheckReport {
        CheckReport {
            images: states
                .into_iter()
                .zip(["og-home-en.png", "og-about-en.png", "og-terms-nl.png"])
                .map(|(state, filename)| ImageCheck {
                    filename: filename.to_string(),
                    state,
                })
                .collect(),
            stray: stray
                .into_iter()
                .map(|name| StrayFile {
                    filename: name.to_string(),
                    parsed: parse_output_filename(name).unwrap(),
                })
                .collect(),
        }
    }

    #[test]
    fn check_all_ok() {
        let r = report(
            vec![ImageState::Valid {
                sha256: "a".repeat(64),
            }],
            vec![],
        );
        let lines = format_check_output(&r, Path::new("out"));
        assert_eq!(lines[0], "Checking out");
        assert_eq!(lines[1], format!("001 og-home-en.png  ok  {}", "a".repeat(12)));
        assert_eq!(lines.last().unwrap(), "All 1 image OK");
    }

    #[test]
    fn check_lists_problems_and_strays() {
        let r = report(
            vec![
                ImageState::Missing,
                ImageState::WrongSize {
                    width: 600,
                    height: 315,
                },
                ImageState::Unreadable("bad header".into()),
            ],
            vec!["og-blog-en.png"],
        );
        let lines = format_check_output(&r, Path::new("out"));
        assert!(lines.contains(&"001 og-home-en.png  MISSING".to_string()));
        assert!(lines.contains(&"002 og-about-en.png  WRONG SIZE 600x315".to_string()));
        assert!(lines.contains(&"003 og-terms-nl.png  UNREADABLE bad header".to_string()));
        assert!(lines.contains(&"Stray".to_string()));
        assert!(lines.contains(&"    og-blog-en.png  (no page `blog` in en)".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "3 of 3 images have problems, 1 stray file"
        );
    }

    // =========================================================================
    // List
    // =========================================================================

    #[test]
    fn list_groups_by_language() {
        let lines = format_list_output(&pages::entries());
        assert_eq!(lines[0], "en");
        assert_eq!(lines[1], "001 home → og-home-en.png");
        assert_eq!(lines[2], "    Aethron Technology");
        let nl = lines.iter().position(|l| l == "nl").unwrap();
        assert_eq!(lines[nl - 1], "");
        assert_eq!(lines[nl + 1], "001 home → og-home-nl.png");
        assert_eq!(lines.last().unwrap(), "12 images total");
    }

    #[test]
    fn list_single_entry() {
        let entries = [pages::find(Lang::Nl, "terms").unwrap()];
        let lines = format_list_output(&entries);
        assert_eq!(
            lines,
            vec![
                "nl",
                "001 terms → og-terms-nl.png",
                "    Algemene Voorwaarden",
                "",
                "1 image total",
            ]
        );
    }
}
