//! Voice resolution
//!
//! Language-tag-to-voice matching is best effort: an exact tag match is
//! preferred, then any voice from the same language family, then the
//! engine default (None).

use folio_core::LanguageTag;

/// One voice offered by a synthesis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub language: LanguageTag,
}

impl Voice {
    pub fn new(name: impl Into<String>, language: LanguageTag) -> Self {
        Self {
            name: name.into(),
            language,
        }
    }
}

/// Picks the best voice for a language tag
pub fn resolve_voice<'a>(voices: &'a [Voice], language: &LanguageTag) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|v| v.language.as_str().eq_ignore_ascii_case(language.as_str()))
        .or_else(|| voices.iter().find(|v| v.language.same_family(language)))
}
