//! Sentence-by-sentence playback sequencing
//!
//! The sequencer owns the playback state and drives an injected
//! synthesis backend one sentence at a time. Completions either repeat
//! the current sentence or advance to the next one, until the session
//! limit or the last sentence is reached; both are the same terminal
//! transition to idle.
//!
//! Between a completion and the next utterance sits a fixed debounce
//! delay. The sequencer hands the driver a [`Continuation`] token
//! stamped with a generation counter; `stop`, `load_text`, navigation
//! and any new play bump the generation, so a continuation resumed
//! after one of those is stale and does nothing.

use crate::segmenter::segment;
use crate::state::SequencerState;
use crate::synthesis::{SpeechSynthesizer, UtteranceId};
use crate::PlaybackStatus;
use folio_core::{LanguageTag, RepeatMode, SpeechRate};
use log::{debug, warn};
use std::time::Duration;

/// Debounce between an utterance ending and the next one starting
pub const ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// A scheduled follow-up utterance. Only valid for the generation it was
/// created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    generation: u64,
    index: usize,
}

pub struct TtsSequencer<S: SpeechSynthesizer> {
    synthesizer: S,
    state: SequencerState,
    generation: u64,
    active: Option<UtteranceId>,
}

impl<S: SpeechSynthesizer> TtsSequencer<S> {
    pub fn new(synthesizer: S) -> Self {
        Self {
            synthesizer,
            state: SequencerState::new(),
            generation: 0,
            active: None,
        }
    }

    /// Replaces the text source: re-segments, resets position and session
    /// counter, and cancels any in-flight utterance so nothing keeps
    /// speaking stale sentences.
    pub fn load_text(&mut self, text: &str) {
        self.halt();
        self.state.set_sentences(segment(text));
        debug!("loaded text: {} sentences", self.state.sentence_count());
    }

    /// Starts playback from the current position
    pub fn play(&mut self) {
        self.play_from_index(self.state.current_index());
    }

    /// Starts playback from a specific sentence, resetting the session
    /// counter. The index is clamped to the last sentence.
    pub fn play_from_index(&mut self, index: usize) {
        let count = self.state.sentence_count();
        if count == 0 {
            return;
        }

        self.generation += 1;
        self.state.reset_session();
        self.state.set_current_index(index.min(count - 1));
        self.speak_current();
    }

    /// Best-effort start from a text selection: plays from the first
    /// sentence containing the selection (or contained in it). Returns
    /// false when nothing matches so the caller can fall back to `play`.
    pub fn play_from_selection(&mut self, selection: &str) -> bool {
        let needle = selection.trim();
        if needle.is_empty() {
            return false;
        }

        let found = self
            .state
            .sentences()
            .iter()
            .position(|s| s.contains(needle))
            .or_else(|| {
                self.state
                    .sentences()
                    .iter()
                    .position(|s| needle.contains(s.as_str()))
            });

        match found {
            Some(index) => {
                self.play_from_index(index);
                true
            }
            None => false,
        }
    }

    /// Stops playback and cancels any in-flight utterance. Idempotent;
    /// stopping while idle changes nothing.
    pub fn stop(&mut self) {
        self.halt();
    }

    /// Moves to the previous sentence, interrupting playback. No
    /// wraparound.
    pub fn prev_sentence(&mut self) {
        self.halt();
        let index = self.state.current_index().saturating_sub(1);
        self.state.set_current_index(index);
    }

    /// Moves to the next sentence, interrupting playback. No wraparound.
    pub fn next_sentence(&mut self) {
        self.halt();
        let count = self.state.sentence_count();
        if count == 0 {
            return;
        }
        let index = (self.state.current_index() + 1).min(count - 1);
        self.state.set_current_index(index);
    }

    /// Reports that the active utterance finished. Returns the follow-up
    /// to resume after [`ADVANCE_DELAY`], or None when playback ended.
    /// Signals for anything but the active utterance are ignored.
    pub fn utterance_completed(&mut self, id: UtteranceId) -> Option<Continuation> {
        if self.state.status() != PlaybackStatus::Speaking || self.active != Some(id) {
            debug!("ignoring stale completion for {:?}", id);
            return None;
        }

        self.active = None;
        self.state.increment_session_read();

        if self.state.session_read() >= self.state.sentence_limit() {
            self.halt();
            return None;
        }

        match self.state.repeat_mode() {
            RepeatMode::Repeat => Some(Continuation {
                generation: self.generation,
                index: self.state.current_index(),
            }),
            RepeatMode::Continue => {
                let next = self.state.current_index() + 1;
                if next >= self.state.sentence_count() {
                    self.halt();
                    None
                } else {
                    self.state.set_current_index(next);
                    Some(Continuation {
                        generation: self.generation,
                        index: next,
                    })
                }
            }
        }
    }

    /// Reports that the active utterance failed. Treated as an implicit
    /// stop; the error is logged, not surfaced.
    pub fn utterance_failed(&mut self, id: UtteranceId, reason: &str) {
        if self.active == Some(id) {
            warn!("speech synthesis error: {}", reason);
            self.halt();
        }
    }

    /// Fires a continuation scheduled by an earlier completion. A
    /// continuation from a superseded generation is dropped.
    pub fn resume(&mut self, continuation: Continuation) {
        if continuation.generation != self.generation {
            debug!("dropping stale continuation");
            return;
        }
        if self.state.status() != PlaybackStatus::Speaking {
            return;
        }

        self.state.set_current_index(continuation.index);
        self.speak_current();
    }

    /// The debounce to wait before calling [`Self::resume`]
    pub fn advance_delay(&self) -> Duration {
        ADVANCE_DELAY
    }

    // ===== accessors =====

    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    pub fn is_playing(&self) -> bool {
        self.state.status() == PlaybackStatus::Speaking
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn sentences(&self) -> &[String] {
        self.state.sentences()
    }

    pub fn sentence_count(&self) -> usize {
        self.state.sentence_count()
    }

    pub fn current_sentence(&self) -> Option<&str> {
        self.state.current_sentence()
    }

    pub fn sentences_read(&self) -> usize {
        self.state.session_read()
    }

    pub fn rate(&self) -> SpeechRate {
        self.state.rate()
    }

    pub fn set_rate(&mut self, rate: SpeechRate) {
        self.state.set_rate(rate);
    }

    pub fn language(&self) -> &LanguageTag {
        self.state.language()
    }

    pub fn set_language(&mut self, language: LanguageTag) {
        self.state.set_language(language);
    }

    pub fn sentence_limit(&self) -> usize {
        self.state.sentence_limit()
    }

    pub fn set_sentence_limit(&mut self, limit: usize) {
        self.state.set_sentence_limit(limit);
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.state.repeat_mode()
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.state.set_repeat_mode(mode);
    }

    /// Position display, e.g. `3/12: The quick brown fox...`
    pub fn sentence_indicator(&self) -> String {
        let count = self.state.sentence_count();
        if count == 0 {
            return "Ready to read...".to_string();
        }

        let current = self.state.current_sentence().unwrap_or("");
        let prefix: String = current.chars().take(20).collect();
        let ellipsis = if current.chars().count() > 20 {
            "..."
        } else {
            ""
        };
        format!(
            "{}/{}: {}{}",
            self.state.current_index() + 1,
            count,
            prefix,
            ellipsis
        )
    }

    // ===== internal =====

    /// Bumps the generation (invalidating scheduled continuations),
    /// cancels in-flight synthesis and returns to idle.
    fn halt(&mut self) {
        self.generation += 1;
        self.active = None;
        self.synthesizer.cancel_all();
        self.state.set_status(PlaybackStatus::Idle);
    }

    /// Synthesizes the sentence at the current index. A synthesis error
    /// degrades to a stop.
    fn speak_current(&mut self) {
        let sentence = match self.state.current_sentence() {
            Some(s) => s.to_string(),
            None => {
                self.halt();
                return;
            }
        };

        // Clear any engine queue remnants before the new request
        self.synthesizer.cancel_all();

        let rate = self.state.rate();
        let language = self.state.language().clone();
        match self.synthesizer.speak(&sentence, rate, &language) {
            Ok(id) => {
                self.active = Some(id);
                self.state.set_status(PlaybackStatus::Speaking);
            }
            Err(e) => {
                warn!("speech synthesis failed: {}", e);
                self.halt();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    /// Records requests and hands out sequential ids; completions are
    /// driven by the tests.
    struct FakeSynthesizer {
        next_id: u64,
        spoken: Vec<String>,
        cancel_calls: usize,
        fail_next: bool,
    }

    impl FakeSynthesizer {
        fn new() -> Self {
            Self {
                next_id: 0,
                spoken: Vec::new(),
                cancel_calls: 0,
                fail_next: false,
            }
        }

        fn last_id(&self) -> UtteranceId {
            UtteranceId::new(self.next_id)
        }
    }

    impl SpeechSynthesizer for FakeSynthesizer {
        fn speak(
            &mut self,
            text: &str,
            _rate: SpeechRate,
            _language: &LanguageTag,
        ) -> crate::EngineResult<UtteranceId> {
            if self.fail_next {
                return Err(EngineError::SynthesisFailed("no voices".to_string()));
            }
            self.next_id += 1;
            self.spoken.push(text.to_string());
            Ok(UtteranceId::new(self.next_id))
        }

        fn cancel_all(&mut self) {
            self.cancel_calls += 1;
        }
    }

    fn sequencer_with(text: &str) -> TtsSequencer<FakeSynthesizer> {
        let mut seq = TtsSequencer::new(FakeSynthesizer::new());
        seq.load_text(text);
        seq
    }

    /// Drives one completion, resuming the continuation immediately
    /// (tests skip the debounce the driver would sleep through).
    fn complete_and_resume(seq: &mut TtsSequencer<FakeSynthesizer>) {
        let id = seq.synthesizer.last_id();
        if let Some(continuation) = seq.utterance_completed(id) {
            seq.resume(continuation);
        }
    }

    #[test]
    fn test_load_text_segments() {
        let seq = sequencer_with("One. Two. Three.");
        assert_eq!(seq.sentence_count(), 3);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_play_speaks_current_sentence() {
        let mut seq = sequencer_with("One. Two.");
        seq.play();

        assert_eq!(seq.status(), PlaybackStatus::Speaking);
        assert_eq!(seq.synthesizer.spoken, vec!["One"]);
    }

    #[test]
    fn test_play_on_empty_text_is_noop() {
        let mut seq = sequencer_with("");
        seq.play();
        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert!(seq.synthesizer.spoken.is_empty());
    }

    #[test]
    fn test_continue_mode_advances_until_exhausted() {
        // Three sentences, limit five: playback ends on index exhaustion
        let mut seq = sequencer_with("One. Two. Three.");
        seq.set_sentence_limit(5);
        seq.set_repeat_mode(RepeatMode::Continue);
        seq.play();
        assert_eq!(seq.current_index(), 0);

        complete_and_resume(&mut seq);
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.status(), PlaybackStatus::Speaking);

        complete_and_resume(&mut seq);
        assert_eq!(seq.current_index(), 2);
        assert_eq!(seq.status(), PlaybackStatus::Speaking);

        complete_and_resume(&mut seq);
        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert_eq!(seq.synthesizer.spoken, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_repeat_mode_stops_at_limit() {
        let mut seq = sequencer_with("One. Two. Three.");
        seq.set_sentence_limit(2);
        seq.set_repeat_mode(RepeatMode::Repeat);
        seq.play();

        complete_and_resume(&mut seq);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.status(), PlaybackStatus::Speaking);

        complete_and_resume(&mut seq);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.status(), PlaybackStatus::Idle);

        assert_eq!(seq.synthesizer.spoken, vec!["One", "One"]);
    }

    #[test]
    fn test_limit_applies_in_continue_mode_too() {
        let mut seq = sequencer_with("One. Two. Three. Four.");
        seq.set_sentence_limit(2);
        seq.play();

        complete_and_resume(&mut seq);
        complete_and_resume(&mut seq);

        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert_eq!(seq.synthesizer.spoken, vec!["One", "Two"]);
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let mut seq = sequencer_with("One. Two.");
        let index_before = seq.current_index();

        seq.stop();
        seq.stop();

        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert_eq!(seq.current_index(), index_before);
        assert!(seq.synthesizer.spoken.is_empty());
    }

    #[test]
    fn test_stop_cancels_active_utterance() {
        let mut seq = sequencer_with("One. Two.");
        seq.play();
        let cancels_before = seq.synthesizer.cancel_calls;

        seq.stop();

        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert!(seq.synthesizer.cancel_calls > cancels_before);

        // A completion arriving for the cancelled utterance is stale
        let id = seq.synthesizer.last_id();
        assert!(seq.utterance_completed(id).is_none());
        assert_eq!(seq.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_stale_continuation_does_not_resurrect_playback() {
        let mut seq = sequencer_with("One. Two. Three.");
        seq.play();

        let id = seq.synthesizer.last_id();
        let continuation = seq.utterance_completed(id).expect("should schedule");

        seq.stop();
        seq.resume(continuation);

        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert_eq!(seq.synthesizer.spoken, vec!["One"]);
    }

    #[test]
    fn test_new_play_supersedes_pending_continuation() {
        let mut seq = sequencer_with("One. Two. Three.");
        seq.play();

        let id = seq.synthesizer.last_id();
        let stale = seq.utterance_completed(id).expect("should schedule");

        // User restarts from the top before the delay elapses
        seq.play_from_index(0);
        seq.resume(stale);

        // Only the restart's utterance is speaking; the stale resume
        // did not double-speak
        assert_eq!(seq.synthesizer.spoken, vec!["One", "One"]);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_load_text_cancels_playback() {
        let mut seq = sequencer_with("One. Two.");
        seq.play();
        seq.load_text("New content here. More.");

        assert_eq!(seq.status(), PlaybackStatus::Idle);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.sentences_read(), 0);
        assert_eq!(seq.sentence_count(), 2);
    }

    #[test]
    fn test_synthesis_error_stops_playback() {
        let mut seq = sequencer_with("One. Two.");
        seq.synthesizer.fail_next = true;
        seq.play();
        assert_eq!(seq.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_error_signal_stops_playback() {
        let mut seq = sequencer_with("One. Two.");
        seq.play();
        let id = seq.synthesizer.last_id();

        seq.utterance_failed(id, "engine gone");
        assert_eq!(seq.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_navigation_clamps_without_wraparound() {
        let mut seq = sequencer_with("One. Two. Three.");

        seq.prev_sentence();
        assert_eq!(seq.current_index(), 0);

        seq.next_sentence();
        seq.next_sentence();
        seq.next_sentence();
        seq.next_sentence();
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_navigation_interrupts_playback() {
        let mut seq = sequencer_with("One. Two. Three.");
        seq.play();
        assert!(seq.is_playing());

        seq.next_sentence();
        assert!(!seq.is_playing());
        assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn test_play_from_index_clamps() {
        let mut seq = sequencer_with("One. Two.");
        seq.play_from_index(99);
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.synthesizer.spoken, vec!["Two"]);
    }

    #[test]
    fn test_play_from_selection_containment() {
        let mut seq = sequencer_with("The cat sat. A dog barked. Birds sang.");

        assert!(seq.play_from_selection("dog bark"));
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.synthesizer.spoken, vec!["A dog barked"]);
    }

    #[test]
    fn test_play_from_selection_reverse_containment() {
        let mut seq = sequencer_with("Short. Another sentence.");

        // Selection spans more than the sentence; first contained match wins
        assert!(seq.play_from_selection("xx Short yy"));
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_play_from_selection_no_match() {
        let mut seq = sequencer_with("One. Two.");
        assert!(!seq.play_from_selection("zebra"));
        assert!(!seq.play_from_selection("   "));
        assert_eq!(seq.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_session_counter_resets_on_play() {
        let mut seq = sequencer_with("One. Two. Three. Four.");
        seq.set_sentence_limit(2);
        seq.play();
        complete_and_resume(&mut seq);
        complete_and_resume(&mut seq);
        assert_eq!(seq.status(), PlaybackStatus::Idle);

        // A fresh play gets a fresh budget
        seq.play();
        assert!(seq.is_playing());
        assert_eq!(seq.sentences_read(), 0);
    }

    #[test]
    fn test_sentence_indicator() {
        let mut seq = sequencer_with("Short one. A very long sentence that keeps going on.");
        assert_eq!(seq.sentence_indicator(), "1/2: Short one");

        seq.next_sentence();
        let indicator = seq.sentence_indicator();
        assert!(indicator.starts_with("2/2: A very long sentence"));
        assert!(indicator.ends_with("..."));

        seq.load_text("");
        assert_eq!(seq.sentence_indicator(), "Ready to read...");
    }
}
