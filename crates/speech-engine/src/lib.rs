//! Speech Engine - sentence-level text-to-speech sequencing for Folio

mod error;
mod segmenter;
mod sequencer;
mod state;
mod synthesis;
mod voices;

pub use error::{EngineError, EngineResult};
pub use segmenter::segment;
pub use sequencer::{Continuation, TtsSequencer, ADVANCE_DELAY};
pub use state::{SequencerState, DEFAULT_SENTENCE_LIMIT};
pub use synthesis::{signal_channel, SpeechSynthesizer, SynthesisSignal, UtteranceId};
pub use voices::{resolve_voice, Voice};
pub use folio_core::{LanguageTag, RepeatMode, SpeechRate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Speaking,
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_exports_accessible() {
        let _ = PlaybackStatus::Idle;
        let _ = SequencerState::new();
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::SynthesisFailed("engine busy".to_string());
        assert!(format!("{}", error).contains("engine busy"));
    }
}
