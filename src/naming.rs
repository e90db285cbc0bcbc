//! Output filename convention: `og-{page}-{lang}.png`.
//!
//! Every table entry maps to exactly one file in the output directory. The
//! language code is always the last dash-separated segment, so page slugs may
//! themselves contain dashes:
//! - `og-home-en.png` → page `home`, lang `en`
//! - `og-case-studies-nl.png` → page `case-studies`, lang `nl`

use crate::pages::Lang;

const PREFIX: &str = "og-";
const EXTENSION: &str = ".png";

/// Result of parsing a generated filename like `og-about-nl.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOutput {
    /// Page slug (e.g., `about`). Dashes preserved.
    pub slug: String,
    /// Language, when the trailing code is one the table knows.
    pub lang: Option<Lang>,
    /// Raw trailing code as written in the filename.
    pub lang_code: String,
}

/// Build the output filename for a page slug and language.
pub fn output_filename(slug: &str, lang: Lang) -> String {
    format!("{PREFIX}{slug}-{}{EXTENSION}", lang.code())
}

/// Parse a filename following the `og-{page}-{lang}.png` convention.
///
/// Returns `None` for anything that doesn't fit the pattern:
/// - `"og-home-en.png"` → slug="home", lang=Some(En)
/// - `"og-home-fr.png"` → slug="home", lang=None, lang_code="fr"
/// - `"og-home.png"` → None (no language segment)
/// - `"logo.png"` → None
pub fn parse_output_filename(name: &str) -> Option<ParsedOutput> {
    let stem = name.strip_prefix(PREFIX)?.strip_suffix(EXTENSION)?;
    let (slug, code) = stem.rsplit_once('-')?;
    if slug.is_empty() || code.is_empty() {
        return None;
    }
    Some(ParsedOutput {
        slug: slug.to_string(),
        lang: Lang::from_code(code),
        lang_code: code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_for_english_page() {
        assert_eq!(output_filename("home", Lang::En), "og-home-en.png");
    }

    #[test]
    fn filename_for_dutch_page() {
        assert_eq!(output_filename("solutions", Lang::Nl), "og-solutions-nl.png");
    }

    #[test]
    fn parse_simple_name() {
        let p = parse_output_filename("og-about-nl.png").unwrap();
        assert_eq!(p.slug, "about");
        assert_eq!(p.lang, Some(Lang::Nl));
        assert_eq!(p.lang_code, "nl");
    }

    #[test]
    fn parse_slug_with_dashes() {
        let p = parse_output_filename("og-case-studies-en.png").unwrap();
        assert_eq!(p.slug, "case-studies");
        assert_eq!(p.lang, Some(Lang::En));
    }

    #[test]
    fn parse_unknown_language_keeps_code() {
        let p = parse_output_filename("og-home-fr.png").unwrap();
        assert_eq!(p.slug, "home");
        assert_eq!(p.lang, None);
        assert_eq!(p.lang_code, "fr");
    }

    #[test]
    fn parse_rejects_missing_language() {
        assert_eq!(parse_output_filename("og-home.png"), None);
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert_eq!(parse_output_filename("og--en.png"), None);
        assert_eq!(parse_output_filename("og-home-.png"), None);
    }

    #[test]
    fn parse_rejects_other_files() {
        assert_eq!(parse_output_filename("logo.png"), None);
        assert_eq!(parse_output_filename("og-home-en.jpg"), None);
        assert_eq!(parse_output_filename("og-home-en.png.bak"), None);
    }

    #[test]
    fn parse_inverts_output_filename() {
        for entry in crate::pages::entries() {
            let p = parse_output_filename(&entry.filename()).unwrap();
            assert_eq!(p.slug, entry.slug);
            assert_eq!(p.lang, Some(entry.lang));
        }
    }
}
