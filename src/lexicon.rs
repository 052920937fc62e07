// src/lexicon.rs
//! In-memory collaborators for running without the full language resources.
use crate::core::collaborators::{
    CompoundSplitter, Dictionary, LanguageDetector, LetterToSound, Syllabifier, UnicodeNormaliser,
};
use crate::core::types::{DictionaryKind, Language, MorphSegment, PhonemeString};
use crate::error::{DetectionError, LoadError, Result, SyllabificationError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
struct Entry {
    phonemes: String,
    pos: Option<String>,
}

/// A user dictionary and a general lexicon held in hash maps.
///
/// A word may have several entries distinguished by part of speech.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    user: HashMap<String, Vec<Entry>>,
    general: HashMap<String, Vec<Entry>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: DictionaryKind, word: &str, phonemes: &str, pos: Option<&str>) {
        let entry = Entry {
            phonemes: phonemes.to_string(),
            pos: pos.map(str::to_string),
        };
        self.table_mut(kind).entry(word.to_string()).or_default().push(entry);
    }

    /// Loads `word<TAB>phonemes[<TAB>pos]` lines into one of the tables.
    pub fn load(&mut self, kind: DictionaryKind, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let count = self.parse(kind, &source, path)?;
        tracing::info!(path = %path.display(), entries = count, ?kind, "loaded dictionary");
        Ok(count)
    }

    pub fn parse(&mut self, kind: DictionaryKind, source: &str, origin: &Path) -> Result<usize> {
        let mut count = 0;
        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            match (fields.next(), fields.next()) {
                (Some(word), Some(phonemes)) if !word.is_empty() && !phonemes.trim().is_empty() => {
                    let pos = fields.next().map(str::trim).filter(|p| !p.is_empty());
                    self.insert(kind, word, phonemes.trim(), pos);
                    count += 1;
                }
                _ => {
                    return Err(LoadError::Malformed {
                        path: origin.to_path_buf(),
                        line: idx + 1,
                        reason: "expected `word<TAB>phonemes[<TAB>pos]`",
                    })
                }
            }
        }
        Ok(count)
    }

    fn table(&self, kind: DictionaryKind) -> &HashMap<String, Vec<Entry>> {
        match kind {
            DictionaryKind::User => &self.user,
            DictionaryKind::General => &self.general,
        }
    }

    fn table_mut(&mut self, kind: DictionaryKind) -> &mut HashMap<String, Vec<Entry>> {
        match kind {
            DictionaryKind::User => &mut self.user,
            DictionaryKind::General => &mut self.general,
        }
    }
}

impl Dictionary for MemoryLexicon {
    fn lookup(&self, word: &str, pos: Option<&str>, kind: DictionaryKind) -> Option<PhonemeString> {
        let entries = self.table(kind).get(word)?;
        let chosen = match pos {
            Some(pos) => entries
                .iter()
                .find(|e| e.pos.as_deref() == Some(pos))
                .or_else(|| entries.iter().find(|e| e.pos.is_none()))
                .or_else(|| entries.first()),
            None => entries.first(),
        };
        chosen.map(|e| e.phonemes.clone())
    }
}

/// Stand-in for collaborators that are not installed.
///
/// Predicts nothing, splits nothing, cannot detect languages, leaves words
/// and phoneme strings as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl LetterToSound for Unavailable {
    fn predict(&self, _word: &str, _language: Language) -> Option<PhonemeString> {
        None
    }
}

impl CompoundSplitter for Unavailable {
    fn split(&self, _word: &str) -> Vec<MorphSegment> {
        Vec::new()
    }

    fn ending_pronunciation(&self, _ending: &str) -> Option<&str> {
        None
    }
}

impl LanguageDetector for Unavailable {
    fn detect(&self, word: &str) -> std::result::Result<Language, DetectionError> {
        Err(DetectionError {
            word: word.to_string(),
            reason: "no language detector installed".to_string(),
        })
    }
}

impl UnicodeNormaliser for Unavailable {
    fn normalise(&self, word: &str) -> String {
        word.to_string()
    }
}

impl Syllabifier for Unavailable {
    fn syllabify(&self, phonemes: &str) -> std::result::Result<PhonemeString, SyllabificationError> {
        Ok(phonemes.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_disambiguates_entries() {
        let mut lex = MemoryLexicon::new();
        lex.insert(DictionaryKind::General, "band", "b 'a n d", Some("NN"));
        lex.insert(DictionaryKind::General, "band", "b 'a n d e", Some("VB"));
        lex.insert(DictionaryKind::General, "band", "b a n d", None);

        let get = |pos| lex.lookup("band", pos, DictionaryKind::General);
        assert_eq!(get(Some("VB")).as_deref(), Some("b 'a n d e"));
        assert_eq!(get(Some("JJ")).as_deref(), Some("b a n d"));
        assert_eq!(get(None).as_deref(), Some("b 'a n d"));
        assert_eq!(lex.lookup("band", None, DictionaryKind::User), None);
    }

    #[test]
    fn parse_tsv() {
        let mut lex = MemoryLexicon::new();
        let source = "# comment\nhund\th 'u n d\n\nkatt\tk 'a t\tNN\n";
        let n = lex.parse(DictionaryKind::User, source, Path::new("user.tsv")).unwrap();
        assert_eq!(n, 2);
        assert_eq!(lex.lookup("katt", None, DictionaryKind::User).as_deref(), Some("k 'a t"));
    }

    #[test]
    fn parse_rejects_missing_pronunciation() {
        let mut lex = MemoryLexicon::new();
        let err = lex
            .parse(DictionaryKind::General, "hund\n", Path::new("lex.tsv"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 1, .. }));
    }

    #[test]
    fn unavailable_collaborators() {
        assert_eq!(Unavailable.predict("hej", Language::Target), None);
        assert!(Unavailable.split("hej").is_empty());
        assert!(Unavailable.detect("hej").is_err());
        assert_eq!(Unavailable.normalise("café"), "café");
        assert_eq!(Unavailable.syllabify("h e j").unwrap(), "h e j");
    }
}
