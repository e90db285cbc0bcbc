//! Batch generation: one PNG per page table entry.
//!
//! ## Output Structure
//!
//! ```text
//! src/assets/images/og/
//! ├── og-home-en.png
//! ├── og-about-en.png
//! ├── ...
//! ├── og-home-nl.png
//! └── og-terms-nl.png
//! ```
//!
//! ## Failure Model
//!
//! The output directory is created if absent. Images are rendered one at a
//! time, in table order. The first write or encode failure aborts the batch;
//! files already written stay on disk. Re-running overwrites every file with
//! byte-identical content for unchanged input.
//!
//! Progress is reported as [`GenerateEvent`]s over an optional channel so the
//! CLI can print while the library stays free of stdout writes.

use crate::config::RenderConfig;
use crate::imaging::{CardRenderer, FontSet, FontSource, OG_HEIGHT, OG_WIDTH, RenderError};
use crate::pages::{self, PageEntry};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "src/assets/images/og";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render failed for {filename}: {source}")]
    Render {
        filename: String,
        #[source]
        source: RenderError,
    },
    #[error(transparent)]
    Setup(#[from] RenderError),
}

/// Progress notifications emitted during a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Batch is about to render `total` images.
    Started {
        site: String,
        output_dir: PathBuf,
        width: u32,
        height: u32,
        font: FontSource,
        total: usize,
    },
    /// One image was written.
    Created { filename: String },
    /// Every image was written.
    Finished { count: usize },
}

/// What a completed batch produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub font: FontSource,
}

/// Render every page table entry into `output_dir`.
pub fn generate(
    output_dir: &Path,
    config: &RenderConfig,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    generate_entries(&pages::entries(), output_dir, config, events)
}

/// Render the given entries into `output_dir`, stopping at the first failure.
pub fn generate_entries(
    entries: &[PageEntry],
    output_dir: &Path,
    config: &RenderConfig,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    let fonts = FontSet::from_config(&config.fonts);
    let renderer = CardRenderer::new(config, &fonts)?;

    fs::create_dir_all(output_dir)?;

    let emit = |event: GenerateEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is listening.
            tx.send(event).ok();
        }
    };

    emit(GenerateEvent::Started {
        site: config.brand.name.clone(),
        output_dir: output_dir.to_path_buf(),
        width: OG_WIDTH,
        height: OG_HEIGHT,
        font: fonts.source().clone(),
        total: entries.len(),
    });

    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = renderer
            .write_card(entry, output_dir)
            .map_err(|source| GenerateError::Render {
                filename: entry.filename(),
                source,
            })?;
        emit(GenerateEvent::Created {
            filename: entry.filename(),
        });
        written.push(path);
    }

    emit(GenerateEvent::Finished {
        count: written.len(),
    });

    Ok(GenerateReport {
        written,
        font: fonts.source().clone(),
    })
}
