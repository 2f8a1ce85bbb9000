//! Translation targets offered to the front end.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "ta", name: "Tamil" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "te", name: "Telugu" },
    Language { code: "kn", name: "Kannada" },
    Language { code: "ml", name: "Malayalam" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "pa", name: "Punjabi" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "ru", name: "Russian" },
];

/// Maps a known language code to its display name. Anything else, including
/// names of languages not in the catalogue, is passed through trimmed.
#[must_use]
pub fn resolve_language_name(input: &str) -> String {
    let trimmed = input.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(trimmed))
        .map_or_else(|| trimmed.to_string(), |lang| lang.name.to_string())
}
