//! Speech synthesis capability boundary
//!
//! The sequencer never talks to a platform speech engine directly; it
//! drives an injected [`SpeechSynthesizer`]. Backends accept one sentence
//! at a time and report completion or failure asynchronously, using the
//! signal channel when the backend runs on its own thread.

use crate::error::EngineResult;
use crossbeam_channel::{Receiver, Sender};
use folio_core::{LanguageTag, SpeechRate};

/// Identifies one synthesis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(u64);

impl UtteranceId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A speech synthesis backend.
///
/// `speak` starts synthesis of one sentence and returns immediately with
/// the request's id; the utterance finishes (or fails, or is cancelled
/// and never heard from again) later. `cancel_all` drops every pending
/// request and must be safe to call with nothing in flight.
pub trait SpeechSynthesizer {
    fn speak(
        &mut self,
        text: &str,
        rate: SpeechRate,
        language: &LanguageTag,
    ) -> EngineResult<UtteranceId>;

    fn cancel_all(&mut self);
}

/// Completion signal from a synthesis backend
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisSignal {
    Completed(UtteranceId),
    Failed(UtteranceId, String),
}

/// Channel for delivering signals from a backend thread to the driver
pub fn signal_channel() -> (Sender<SynthesisSignal>, Receiver<SynthesisSignal>) {
    crossbeam_channel::unbounded()
}
