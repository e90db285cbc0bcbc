//! End-to-end batch tests against the public library API.
//!
//! Every test points the preferred font at a path that does not exist, so the
//! bundled face is used and results don't depend on the host's fonts.

use og_cards::check::{self, ImageState};
use og_cards::config::{self, RenderConfig};
use og_cards::generate::{self, GenerateEvent};
use og_cards::imaging::{FontSet, FontSource, Measure, TextRole, wrap_text};
use og_cards::pages;
use std::fs;
use std::path::Path;
use std::sync::mpsc;
use tempfile::TempDir;

fn offline_config(tmp: &TempDir) -> RenderConfig {
    let mut config = RenderConfig::default();
    config.fonts.preferred = tmp
        .path()
        .join("missing/Helvetica.ttc")
        .to_string_lossy()
        .into_owned();
    config
}

fn read_all(dir: &Path) -> Vec<(String, Vec<u8>)> {
    pages::entries()
        .iter()
        .map(|e| {
            let name = e.filename();
            let bytes = fs::read(dir.join(&name)).unwrap();
            (name, bytes)
        })
        .collect()
}

#[test]
fn full_batch_produces_every_image_at_og_size() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);
    let out = tmp.path().join("src/assets/images/og");

    let report = generate::generate(&out, &config, None).unwrap();

    assert_eq!(report.written.len(), pages::entries().len());
    assert_eq!(report.written.len(), 12);
    for entry in pages::entries() {
        let path = out.join(format!("og-{}-{}.png", entry.slug, entry.lang.code()));
        assert_eq!(
            image::image_dimensions(&path).unwrap(),
            (1200, 630),
            "{}",
            path.display()
        );
    }
}

#[test]
fn output_directory_contains_nothing_else() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);
    let out = tmp.path().join("og");

    generate::generate(&out, &config, None).unwrap();
    let count = fs::read_dir(&out).unwrap().count();
    assert_eq!(count, 12);
}

#[test]
fn two_runs_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);
    let first_dir = tmp.path().join("first");
    let second_dir = tmp.path().join("second");

    generate::generate(&first_dir, &config, None).unwrap();
    generate::generate(&second_dir, &config, None).unwrap();

    assert_eq!(read_all(&first_dir), read_all(&second_dir));
}

#[test]
fn missing_preferred_font_still_renders() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);
    let (tx, rx) = mpsc::channel();

    let report = generate::generate(tmp.path(), &config, Some(tx)).unwrap();

    assert_eq!(report.font, FontSource::Builtin);
    let events: Vec<GenerateEvent> = rx.iter().collect();
    assert!(matches!(
        events.first(),
        Some(GenerateEvent::Started {
            font: FontSource::Builtin,
            ..
        })
    ));
    assert_eq!(
        events.last(),
        Some(&GenerateEvent::Finished { count: 12 })
    );
}

#[test]
fn check_accepts_fresh_output() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);

    generate::generate(tmp.path(), &config, None).unwrap();
    let report = check::check(tmp.path()).unwrap();

    assert!(report.is_ok());
    assert_eq!(report.images.len(), 12);
    assert!(
        report
            .images
            .iter()
            .all(|c| matches!(c.state, ImageState::Valid { .. }))
    );
}

#[test]
fn check_flags_deleted_image() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(&tmp);

    generate::generate(tmp.path(), &config, None).unwrap();
    fs::remove_file(tmp.path().join("og-contact-nl.png")).unwrap();
    let report = check::check(tmp.path()).unwrap();

    assert_eq!(report.problem_count(), 1);
    let missing = report
        .images
        .iter()
        .find(|c| c.state == ImageState::Missing)
        .unwrap();
    assert_eq!(missing.filename, "og-contact-nl.png");
}

#[test]
fn config_file_restyles_cards() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("og.toml");
    fs::write(
        &config_path,
        format!(
            "[fonts]\npreferred = {:?}\n\n[colors]\nblue = \"#112233\"\n",
            tmp.path().join("none.ttf").to_string_lossy()
        ),
    )
    .unwrap();
    let config = config::load_config(&config_path).unwrap();
    let out = tmp.path().join("og");

    generate::generate(&out, &config, None).unwrap();

    let img = image::open(out.join("og-home-en.png")).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(3, 3).0, [0x11, 0x22, 0x33]);
}

#[test]
fn wrapping_with_bundled_font() {
    let fonts = FontSet::builtin(&RenderConfig::default().fonts);
    let face = fonts.face(TextRole::Title);

    // Comfortably narrower than the limit: one line, unchanged.
    let lines = wrap_text("Contact", &face, 712);
    assert_eq!(lines, vec!["Contact"]);

    // A single word wider than the limit survives on its own line.
    let word = "Onderzoeksinfrastructuurontwikkeling";
    assert!(face.text_width(word) > 300);
    let lines = wrap_text(&format!("De {word} nu"), &face, 300);
    assert!(lines.contains(&word.to_string()), "{lines:?}");
    assert_eq!(lines.join(" "), format!("De {word} nu"));
}
