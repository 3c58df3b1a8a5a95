//! Sequencer state management

use crate::PlaybackStatus;
use folio_core::{LanguageTag, RepeatMode, SpeechRate};

/// Default stop-after-N-sentences limit
pub const DEFAULT_SENTENCE_LIMIT: usize = 5;

/// Playback state owned by the sequencer. Mutated only through the
/// sequencer's operations; discarded whenever a new text source loads.
#[derive(Debug, Clone)]
pub struct SequencerState {
    sentences: Vec<String>,
    current_index: usize,
    status: PlaybackStatus,
    session_read: usize,
    rate: SpeechRate,
    language: LanguageTag,
    sentence_limit: usize,
    repeat_mode: RepeatMode,
}

impl SequencerState {
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
            current_index: 0,
            status: PlaybackStatus::Idle,
            session_read: 0,
            rate: SpeechRate::default(),
            language: LanguageTag::default(),
            sentence_limit: DEFAULT_SENTENCE_LIMIT,
            repeat_mode: RepeatMode::default(),
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Replaces the sentence list and resets position and session counter
    pub fn set_sentences(&mut self, sentences: Vec<String>) {
        self.sentences = sentences;
        self.current_index = 0;
        self.session_read = 0;
    }

    pub fn sentence(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(String::as_str)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn current_sentence(&self) -> Option<&str> {
        self.sentence(self.current_index)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PlaybackStatus) {
        self.status = status;
    }

    /// Sentences completed since the current play started
    pub fn session_read(&self) -> usize {
        self.session_read
    }

    pub fn reset_session(&mut self) {
        self.session_read = 0;
    }

    pub fn increment_session_read(&mut self) {
        self.session_read += 1;
    }

    pub fn rate(&self) -> SpeechRate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: SpeechRate) {
        self.rate = rate;
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn set_language(&mut self, language: LanguageTag) {
        self.language = language;
    }

    pub fn sentence_limit(&self) -> usize {
        self.sentence_limit
    }

    /// Clamped to a minimum of 1
    pub fn set_sentence_limit(&mut self, limit: usize) {
        self.sentence_limit = limit.max(1);
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn test_state_new() {
        let state = SequencerState::new();
        assert_eq!(state.status(), PlaybackStatus::Idle);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.sentence_count(), 0);
        assert_eq!(state.sentence_limit(), DEFAULT_SENTENCE_LIMIT);
    }

    #[test]
    fn test_set_sentences_resets_position() {
        let mut state = SequencerState::new();
        state.set_current_index(3);
        state.increment_session_read();

        state.set_sentences(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.session_read(), 0);
        assert_eq!(state.sentence_count(), 2);
    }

    #[test]
    fn test_sentence_limit_clamps_to_one() {
        let mut state = SequencerState::new();
        state.set_sentence_limit(0);
        assert_eq!(state.sentence_limit(), 1);
        state.set_sentence_limit(10);
        assert_eq!(state.sentence_limit(), 10);
    }

    #[test]
    fn test_session_counter() {
        let mut state = SequencerState::new();
        state.increment_session_read();
        state.increment_session_read();
        assert_eq!(state.session_read(), 2);
        state.reset_session();
        assert_eq!(state.session_read(), 0);
    }
}
