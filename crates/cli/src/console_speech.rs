//! Console speech backend
//!
//! Stands in for a platform synthesis engine: each sentence prints to the
//! terminal and "finishes" after a pacing delay proportional to its
//! length, delivered from a worker thread over the signal channel. The
//! sequencer ignores completions for cancelled utterances, so cancel_all
//! has nothing to tear down.

use console::style;
use crossbeam_channel::Sender;
use folio_core::{LanguageTag, SpeechRate};
use speech_engine::{resolve_voice, EngineResult, SpeechSynthesizer, SynthesisSignal, UtteranceId, Voice};
use std::time::Duration;

const CHARS_PER_SECOND: f32 = 25.0;
const MAX_UTTERANCE_SECS: f32 = 2.0;

pub struct ConsoleSynthesizer {
    tx: Sender<SynthesisSignal>,
    voices: Vec<Voice>,
    next_id: u64,
}

impl ConsoleSynthesizer {
    pub fn new(tx: Sender<SynthesisSignal>) -> Self {
        Self {
            tx,
            voices: vec![
                Voice::new("Samantha", LanguageTag::new("en-US")),
                Voice::new("Daniel", LanguageTag::new("en-GB")),
                Voice::new("Sin-ji", LanguageTag::new("zh-HK")),
                Voice::new("Ting-Ting", LanguageTag::new("zh-CN")),
            ],
            next_id: 0,
        }
    }
}

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn speak(
        &mut self,
        text: &str,
        rate: SpeechRate,
        language: &LanguageTag,
    ) -> EngineResult<UtteranceId> {
        self.next_id += 1;
        let id = UtteranceId::new(self.next_id);

        let voice_label = resolve_voice(&self.voices, language)
            .map(|v| v.name.as_str())
            .unwrap_or("default");
        println!(
            "{} {} {}",
            style("▶").green().bold(),
            style(format!("[{}]", voice_label)).dim(),
            text
        );

        let seconds =
            (text.chars().count() as f32 / (CHARS_PER_SECOND * rate.value())).min(MAX_UTTERANCE_SECS);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs_f32(seconds));
            let _ = tx.send(SynthesisSignal::Completed(id));
        });

        Ok(id)
    }

    fn cancel_all(&mut self) {}
}
