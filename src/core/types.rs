// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whitespace-separated sequence of phone tokens, e.g. `"s 'e: - m e s"`.
pub type PhonemeString = String;

/// The two languages the phonemiser knows about.
/// `Target` is Swedish, `Auxiliary` is borrowed English vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Target,
    Auxiliary,
}

/// Which of the two dictionaries of a language to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    User,
    General,
}

/// Records which resolution stage produced a pronunciation.
/// Informational only: it never changes the phonetic content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    UserDictionary,
    Lexicon,
    Compound,
    TargetRules,
    AuxiliaryRules,
}

impl Provenance {
    /// Stable tag written into the host document's `g2p_method` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::UserDictionary => "user-dictionary",
            Provenance::Lexicon => "lexicon",
            Provenance::Compound => "compound",
            Provenance::TargetRules => "target-rules",
            Provenance::AuxiliaryRules => "auxiliary-rules",
        }
    }

    pub(crate) fn from_dictionary(kind: DictionaryKind) -> Self {
        match kind {
            DictionaryKind::User => Provenance::UserDictionary,
            DictionaryKind::General => Provenance::Lexicon,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phoneme string together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub phonemes: PhonemeString,
    pub provenance: Provenance,
}

impl Pronunciation {
    pub fn new(phonemes: impl Into<PhonemeString>, provenance: Provenance) -> Self {
        Self { phonemes: phonemes.into(), provenance }
    }
}

/// The role a compound splitter assigns to a morph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphRole {
    /// A stem expected to be found in the dictionaries.
    Lexical,
    /// A known inflectional or linking ending ("s" in "tysklandssemester").
    FixedEnding,
    Other,
}

/// One piece of a decomposed compound, e.g. `("tyskland", Lexical)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphSegment {
    pub text: String,
    pub role: MorphRole,
}

impl MorphSegment {
    pub fn new(text: impl Into<String>, role: MorphRole) -> Self {
        Self { text: text.into(), role }
    }
}

/// Classes of words the usage recorder keeps frequency counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    /// Reached the Swedish letter-to-sound rules.
    Unknown,
    /// Pronounced through the English lexicon or rules.
    Foreign,
}
