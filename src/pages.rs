//! The page table: every (language, page) pair that gets a preview image.
//!
//! The table is the single source of truth. Adding a page means adding a row
//! here for every language; there is no other content source.
//!
//! Iteration order is fixed: languages in [`Lang::ALL`] order, pages in table
//! order within each language. Generation, `list`, and `check` all follow it.

use std::fmt;

/// A site language with its own set of preview images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    En,
    Nl,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Nl];

    /// Lowercase code used in output filenames (`en`, `nl`).
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Nl => "nl",
        }
    }

    /// Two-letter label drawn in the badge (`EN`, `NL`).
    pub fn badge(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Nl => "NL",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        Lang::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text content for one preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRecord {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

/// One row of the table: a page record keyed by language and slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub lang: Lang,
    pub slug: &'static str,
    pub page: PageRecord,
}

impl PageEntry {
    /// Filename this entry renders to.
    pub fn filename(&self) -> String {
        crate::naming::output_filename(self.slug, self.lang)
    }
}

const fn record(
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
) -> PageRecord {
    PageRecord {
        title,
        subtitle,
        description,
    }
}

static EN_PAGES: &[(&str, PageRecord)] = &[
    (
        "home",
        record(
            "Aethron Technology",
            "People-centric software. Flexible. Reliable. Smart.",
            "Technology in service of people",
        ),
    ),
    (
        "about",
        record(
            "About Aethron Technology",
            "People-centric Software Solutions",
            "Our mission, story and approach",
        ),
    ),
    (
        "solutions",
        record(
            "Our Solutions",
            "Technology That Works for People",
            "Flexible technological solutions",
        ),
    ),
    (
        "contact",
        record(
            "Contact",
            "Let's Build Something Great Together",
            "Get in touch with our team",
        ),
    ),
    (
        "privacy",
        record(
            "Privacy Policy",
            "Your Privacy Matters",
            "How we protect your data",
        ),
    ),
    (
        "terms",
        record(
            "Terms of Service",
            "Service Agreement",
            "Terms and conditions",
        ),
    ),
];

static NL_PAGES: &[(&str, PageRecord)] = &[
    (
        "home",
        record(
            "Aethron Technology",
            "Mensgerichte software. Flexibel. Betrouwbaar. Slim.",
            "Technologie in dienst van mensen",
        ),
    ),
    (
        "about",
        record(
            "Over Aethron Technology",
            "Mensgerichte Software Oplossingen",
            "Onze missie, verhaal en aanpak",
        ),
    ),
    (
        "solutions",
        record(
            "Onze Oplossingen",
            "Technologie Die Werkt voor Mensen",
            "Flexibele technologische oplossingen",
        ),
    ),
    (
        "contact",
        record(
            "Contact",
            "Laten We Samen Iets Geweldigs Bouwen",
            "Neem contact op met ons team",
        ),
    ),
    (
        "privacy",
        record(
            "Privacybeleid",
            "Uw Privacy Is Belangrijk",
            "Hoe we uw gegevens beschermen",
        ),
    ),
    (
        "terms",
        record(
            "Algemene Voorwaarden",
            "Service Overeenkomst",
            "Voorwaarden en bepalingen",
        ),
    ),
];

/// Pages defined for one language, in table order.
pub fn pages_for(lang: Lang) -> &'static [(&'static str, PageRecord)] {
    match lang {
        Lang::En => EN_PAGES,
        Lang::Nl => NL_PAGES,
    }
}

/// Every table entry, languages first, pages in table order.
pub fn entries() -> Vec<PageEntry> {
    Lang::ALL
        .into_iter()
        .flat_map(|lang| {
            pages_for(lang).iter().map(move |&(slug, page)| PageEntry {
                lang,
                slug,
                page,
            })
        })
        .collect()
}

/// Look up a single entry by language and slug.
pub fn find(lang: Lang, slug: &str) -> Option<PageEntry> {
    pages_for(lang)
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|&(slug, page)| PageEntry { lang, slug, page })
}
