//! Text measurement and greedy line wrapping.
//!
//! Wrapping only needs widths, so it works against the [`Measure`] trait.
//! Production code measures with a real font face
//! ([`Face`](super::font::Face)); tests use a fixed-advance measurer.

/// Rendered extent of a string at a fixed font and size.
pub trait Measure {
    /// Width and height in pixels of `text` as it would be drawn.
    fn text_size(&self, text: &str) -> (u32, u32);

    fn text_width(&self, text: &str) -> u32 {
        self.text_size(text).0
    }
}

/// Greedy word wrap to `max_width` pixels.
///
/// Words are whitespace-separated. Each word is appended to the current line
/// while the joined line still measures within `max_width`; otherwise the
/// current line is closed and the word starts the next one. A word wider than
/// `max_width` on its own becomes a line by itself, so no content is dropped.
///
/// Empty or whitespace-only input yields no lines.
pub fn wrap_text<M: Measure + ?Sized>(text: &str, measure: &M, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.text_width(&candidate) <= max_width {
            current = candidate;
        } else if current.is_empty() {
            lines.push(word.to_string());
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
