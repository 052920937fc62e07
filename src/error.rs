// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// The syllabifier rejected a rule-generated phoneme string.
#[derive(Debug, Clone, Error)]
#[error("cannot syllabify '{phonemes}': {reason}")]
pub struct SyllabificationError {
    pub phonemes: String,
    pub reason: String,
}

/// The language detector could not classify a word.
#[derive(Debug, Clone, Error)]
#[error("language detection failed for '{word}': {reason}")]
pub struct DetectionError {
    pub word: String,
    pub reason: String,
}

/// Failures while building tables and collaborators at startup.
/// Nothing in this enum can occur once a `Phonemiser` has been constructed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io { path: path.into(), source }
    }
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
