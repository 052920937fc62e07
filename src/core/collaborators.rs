// src/core/collaborators.rs
//! Capabilities the phonemiser consumes but does not implement.
//!
//! Every collaborator is shared read-only between concurrent resolution
//! calls, hence the `Send + Sync` bounds. A collaborator that keeps its own
//! mutable state must synchronise it internally.
use crate::core::types::{DictionaryKind, Language, MorphSegment, PhonemeString, WordClass};
use crate::error::{DetectionError, SyllabificationError};

/// Exact lookup in a user dictionary or a general lexicon.
pub trait Dictionary: Send + Sync {
    /// `pos` is a disambiguation hint and may be ignored.
    fn lookup(&self, word: &str, pos: Option<&str>, kind: DictionaryKind) -> Option<PhonemeString>;
}

/// Letter-to-sound prediction for either language.
pub trait LetterToSound: Send + Sync {
    fn predict(&self, word: &str, language: Language) -> Option<PhonemeString>;
}

/// Inserts syllable boundaries and stress markers into Swedish rule output.
pub trait Syllabifier: Send + Sync {
    fn syllabify(&self, phonemes: &str) -> Result<PhonemeString, SyllabificationError>;
}

/// Decomposes a (lowercased) word into morphs.
pub trait CompoundSplitter: Send + Sync {
    fn split(&self, word: &str) -> Vec<MorphSegment>;

    /// The literal pronunciation of a fixed ending. `Some("")` and `None`
    /// both mean the ending has no pronunciation of its own.
    fn ending_pronunciation(&self, ending: &str) -> Option<&str>;
}

pub trait LanguageDetector: Send + Sync {
    fn detect(&self, word: &str) -> Result<Language, DetectionError>;
}

/// Strips diacritics from exotic letters. Must be idempotent.
pub trait UnicodeNormaliser: Send + Sync {
    fn normalise(&self, word: &str) -> String;
}

/// Receives unknown and foreign words for frequency statistics.
pub trait UsageRecorder: Send + Sync {
    fn record(&self, word: &str, class: WordClass);
}
