// src/core/compound.rs
use crate::core::collaborators::{CompoundSplitter, Dictionary};
use crate::core::stress::correct_stress_markers;
use crate::core::types::{DictionaryKind, MorphRole, MorphSegment, PhonemeString};
use std::sync::Arc;

/// Separator placed between the pronunciations of successive morphs.
pub const MORPH_BOUNDARY: &str = " - ";

/// Pronounces a compound by splitting it and stitching the morphs together.
pub struct CompoundResolver {
    splitter: Arc<dyn CompoundSplitter>,
    dictionary: Arc<dyn Dictionary>,
}

impl CompoundResolver {
    pub fn new(splitter: Arc<dyn CompoundSplitter>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self { splitter, dictionary }
    }

    /// `rules` pronounces morphs that are neither dictionary stems nor
    /// endings with a literal pronunciation.
    ///
    /// Morphs without a pronunciation are left out; the whole word only
    /// fails when no morph could be pronounced.
    pub fn resolve<F>(&self, word: &str, pos: Option<&str>, rules: F) -> Option<PhonemeString>
    where
        F: Fn(&str) -> Option<PhonemeString>,
    {
        let lowered = word.to_lowercase();
        let segments = self.splitter.split(&lowered);

        let mut parts: Vec<PhonemeString> = Vec::with_capacity(segments.len());
        for segment in &segments {
            match self.pronounce(segment, pos, &rules) {
                Some(ph) if !ph.is_empty() => parts.push(ph),
                _ => tracing::trace!(word, morph = %segment.text, "morph has no pronunciation"),
            }
        }

        if parts.is_empty() {
            return None;
        }
        Some(correct_stress_markers(&parts.join(MORPH_BOUNDARY)))
    }

    fn pronounce<F>(&self, segment: &MorphSegment, pos: Option<&str>, rules: &F) -> Option<PhonemeString>
    where
        F: Fn(&str) -> Option<PhonemeString>,
    {
        let text = segment.text.as_str();
        match segment.role {
            MorphRole::Lexical => self
                .dictionary
                .lookup(text, pos, DictionaryKind::User)
                .or_else(|| self.dictionary.lookup(text, pos, DictionaryKind::General)),
            MorphRole::FixedEnding => match self.splitter.ending_pronunciation(text) {
                Some(literal) if !literal.is_empty() => Some(literal.to_string()),
                _ => rules(text),
            },
            MorphRole::Other => rules(text),
        }
    }
}
