//! # og-cards
//!
//! Batch generator for the site's Open Graph preview images. Every
//! (language, page) pair in a built-in table gets one 1200×630 PNG: a brand
//! panel with the wordmark, an accent stripe, the page's title, subtitle and
//! description wrapped to the content column, and a language badge.
//!
//! ```text
//! pages table  →  layout (measure + wrap)  →  paint  →  og-{page}-{lang}.png
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | The page table: languages, records, iteration order |
//! | [`naming`] | `og-{page}-{lang}.png` filename convention |
//! | [`config`] | Layout, fonts, palette; `og.toml` overrides over stock defaults |
//! | [`imaging`] | Fonts, text measurement, greedy wrapping, layout math, PNG rendering |
//! | [`generate`] | Batch driver: output directory, one render per entry, abort on first error |
//! | [`check`] | Verifies an output directory: presence, 1200×630 size, strays, fingerprints |
//! | [`output`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## The Table Is the Content
//!
//! Page text lives in [`pages`], not in a data file. Adding a page means
//! editing the table for every language. Configuration can restyle cards but
//! can never add or change page text.
//!
//! ## Deterministic Output
//!
//! Rendering is single-threaded, uses no randomness, and embeds no timestamps
//! or metadata chunks. Re-running over an unchanged table rewrites every file
//! with identical bytes, so generated images can be committed without noise.
//!
//! ## Font Fallback Is Silent
//!
//! The preferred font is a system path that only exists on some machines. If
//! it cannot be loaded for any reason, the bundled DejaVu Sans is used instead
//! and the batch carries on. The chosen font is shown in the batch header.
//! No other failure is recovered: the first write or encode error aborts.
//!
//! ## Pure-Rust Rendering
//!
//! Text is rasterized with `imageproc` over `ab_glyph`, and PNGs are encoded
//! by the `image` crate. No system graphics libraries are needed.

pub mod check;
pub mod config;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pages;

#[cfg(test)]
pub(crate) mod test_helpers;
