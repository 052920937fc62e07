// src/core/arbiter.rs
use crate::core::collaborators::LanguageDetector;
use crate::core::text;
use crate::core::types::Language;
use std::sync::Arc;

/// Picks which letter-to-sound rules to use for a word nobody knows.
/// Never fails: anything doubtful is treated as Swedish.
pub struct LanguageArbiter {
    detector: Arc<dyn LanguageDetector>,
}

impl LanguageArbiter {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }

    pub fn arbitrate(&self, word: &str) -> Language {
        if !text::has_word_char(word) {
            return Language::Target;
        }
        // All-caps words are acronyms or shouting, never English.
        if text::is_swedish_uppercase(word) {
            return Language::Target;
        }

        match self.detector.detect(word) {
            Ok(Language::Auxiliary) => {
                tracing::debug!(word, "identified as an English word");
                Language::Auxiliary
            }
            Ok(Language::Target) => {
                tracing::debug!(word, "identified as a Swedish word");
                Language::Target
            }
            Err(e) => {
                tracing::warn!(word, error = %e, "language detection failed, assuming Swedish");
                Language::Target
            }
        }
    }
}
