//! Speech-related domain models

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Speech synthesis rate multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechRate(f32);

impl SpeechRate {
    /// Creates a new speech rate (0.5x - 3.0x)
    pub fn new(rate: f32) -> Result<Self, String> {
        if !(0.5..=3.0).contains(&rate) {
            Err("Rate must be between 0.5 and 3.0".to_string())
        } else {
            Ok(Self(rate))
        }
    }

    /// Creates a speech rate without validation (for deserialization)
    pub fn new_unchecked(rate: f32) -> Self {
        Self(rate)
    }

    /// Returns the rate value
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Validator for SpeechRate {
    fn validate(&self) -> Result<(), Vec<String>> {
        if !(0.5..=3.0).contains(&self.0) {
            Err(vec!["Rate must be between 0.5 and 3.0".to_string()])
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// BCP-47-style language tag, e.g. "en-US", "zh-HK"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Full tag as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag ("en" for "en-US")
    pub fn primary_subtag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Returns true if the other tag shares this tag's primary subtag
    pub fn same_family(&self, other: &LanguageTag) -> bool {
        self.primary_subtag().eq_ignore_ascii_case(other.primary_subtag())
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happens after a sentence finishes playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Advance to the next sentence
    Continue,
    /// Repeat the same sentence
    Repeat,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Continue
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_rate_default() {
        let rate = SpeechRate::default();
        assert_eq!(rate.value(), 1.0);
    }

    #[test]
    fn test_speech_rate_new_valid() {
        let rate = SpeechRate::new(1.5).unwrap();
        assert_eq!(rate.value(), 1.5);
    }

    #[test]
    fn test_speech_rate_new_invalid_low() {
        assert!(SpeechRate::new(0.3).is_err());
    }

    #[test]
    fn test_speech_rate_new_invalid_high() {
        assert!(SpeechRate::new(3.5).is_err());
    }

    #[test]
    fn test_speech_rate_validation() {
        assert!(SpeechRate::new(2.0).unwrap().is_valid());
        assert!(!SpeechRate::new_unchecked(5.0).is_valid());
    }

    #[test]
    fn test_language_tag_primary_subtag() {
        assert_eq!(LanguageTag::new("en-US").primary_subtag(), "en");
        assert_eq!(LanguageTag::new("zh-HK").primary_subtag(), "zh");
        assert_eq!(LanguageTag::new("fr").primary_subtag(), "fr");
    }

    #[test]
    fn test_language_tag_same_family() {
        let us = LanguageTag::new("en-US");
        let gb = LanguageTag::new("en-GB");
        let hk = LanguageTag::new("zh-HK");
        assert!(us.same_family(&gb));
        assert!(!us.same_family(&hk));
    }

    #[test]
    fn test_repeat_mode_default() {
        assert_eq!(RepeatMode::default(), RepeatMode::Continue);
    }

    #[test]
    fn test_repeat_mode_display() {
        assert_eq!(RepeatMode::Repeat.to_string(), "repeat");
        assert_eq!(RepeatMode::Continue.to_string(), "continue");
    }
}
