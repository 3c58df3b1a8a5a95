// FILE: crates/speech-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Synthesis error: {0}")]
    SynthesisFailed(String),

    #[error("No voice available for language: {0}")]
    NoVoice(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
