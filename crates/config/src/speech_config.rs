//! Spoken-reading preferences

use crate::error::ValidationError;
use folio_core::{LanguageTag, RepeatMode, SpeechRate};
use serde::{Deserialize, Serialize};

/// Settings for sentence-by-sentence reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeechConfig {
    /// Synthesis rate multiplier (0.5 - 3.0)
    pub rate: f32,

    /// Preferred voice language tag, e.g. "en-US", "zh-HK"
    pub language: String,

    /// Stop after this many sentences per play
    pub sentence_limit: usize,

    /// Repeat the current sentence or continue to the next
    pub repeat_mode: RepeatMode,
}

impl SpeechConfig {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(0.5..=3.0).contains(&self.rate) {
            errors.push(ValidationError::with_value(
                "speech.rate",
                "must be between 0.5 and 3.0",
                self.rate,
            ));
        }

        if self.sentence_limit == 0 {
            errors.push(ValidationError::new(
                "speech.sentence_limit",
                "must be at least 1",
            ));
        }

        if self.language.trim().is_empty() {
            errors.push(ValidationError::new(
                "speech.language",
                "must not be empty",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Typed rate for the speech engine
    pub fn speech_rate(&self) -> SpeechRate {
        SpeechRate::new(self.rate).unwrap_or_default()
    }

    /// Typed language tag for the speech engine
    pub fn language_tag(&self) -> LanguageTag {
        LanguageTag::new(self.language.clone())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            language: "en-US".to_string(),
            sentence_limit: 5,
            repeat_mode: RepeatMode::Continue,
        }
    }
}
