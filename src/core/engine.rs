use crate::core::arbiter::LanguageArbiter;
use crate::core::collaborators::{
    CompoundSplitter, Dictionary, LanguageDetector, LetterToSound, Syllabifier, UnicodeNormaliser,
    UsageRecorder,
};
use crate::core::compound::{CompoundResolver, MORPH_BOUNDARY};
use crate::core::mapping::PhonemeMapper;
use crate::core::stress::correct_stress_markers;
use crate::core::text;
use crate::core::types::{
    DictionaryKind, Language, PhonemeString, Provenance, Pronunciation, WordClass,
};
use std::sync::Arc;

/// The external services a `Phonemiser` is assembled from.
pub struct Collaborators {
    /// Swedish user dictionary and lexicon.
    pub dictionary: Arc<dyn Dictionary>,
    /// English user dictionary and lexicon.
    pub auxiliary_dictionary: Arc<dyn Dictionary>,
    pub letter_to_sound: Arc<dyn LetterToSound>,
    pub syllabifier: Arc<dyn Syllabifier>,
    pub splitter: Arc<dyn CompoundSplitter>,
    pub detector: Arc<dyn LanguageDetector>,
    pub normaliser: Arc<dyn UnicodeNormaliser>,
}

// The phonemiser is composed of the compound resolver, the arbiter and the
// phoneme map, plus the collaborators it queries directly.
pub struct Phonemiser {
    dictionary: Arc<dyn Dictionary>,
    auxiliary_dictionary: Arc<dyn Dictionary>,
    letter_to_sound: Arc<dyn LetterToSound>,
    syllabifier: Arc<dyn Syllabifier>,
    normaliser: Arc<dyn UnicodeNormaliser>,
    compound: CompoundResolver,
    arbiter: LanguageArbiter,
    mapper: PhonemeMapper,
    recorder: Option<Arc<dyn UsageRecorder>>,
}

impl Phonemiser {
    pub fn new(collaborators: Collaborators, mapper: PhonemeMapper) -> Self {
        let Collaborators {
            dictionary,
            auxiliary_dictionary,
            letter_to_sound,
            syllabifier,
            splitter,
            detector,
            normaliser,
        } = collaborators;

        Self {
            compound: CompoundResolver::new(splitter, dictionary.clone()),
            arbiter: LanguageArbiter::new(detector),
            dictionary,
            auxiliary_dictionary,
            letter_to_sound,
            syllabifier,
            normaliser,
            mapper,
            recorder: None,
        }
    }

    /// Attaches a recorder that is told about unknown and foreign words.
    pub fn with_recorder(mut self, recorder: Arc<dyn UsageRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Finds a pronunciation for a single word. Tries, in order:
    ///  1. the Swedish user dictionary, then the lexicon;
    ///  2. splitting the word as a Swedish compound;
    ///  3. the dictionaries again with exotic letters normalised;
    ///  4. the English lexicon and rules, for words without å, ä, ö that
    ///     contain a lowercase letter;
    ///  5. letter-to-sound rules in whichever language the arbiter picks.
    ///
    /// Returns `None` when every stage fails.
    pub fn phonemise(&self, word: &str, pos: Option<&str>) -> Option<Pronunciation> {
        let result = self.resolve(word, pos);
        match &result {
            Some(p) => tracing::debug!(word, provenance = %p.provenance, phonemes = %p.phonemes, "phonemised"),
            None => tracing::debug!(word, "no pronunciation found"),
        }
        result
    }

    fn resolve(&self, word: &str, pos: Option<&str>) -> Option<Pronunciation> {
        // 1. Exact lookup
        if let Some(found) = lookup(self.dictionary.as_ref(), word, pos) {
            return Some(found);
        }

        // 2. Compound analysis
        if text::has_word_char(word) {
            if let Some(ph) = self.compound.resolve(word, pos, |morph| self.target_rules(morph)) {
                return Some(Pronunciation::new(ph, Provenance::Compound));
            }
        }

        // 3. Normalised lookup, dictionaries only
        let normalised = self.normaliser.normalise(word);
        if normalised != word {
            if let Some(found) = lookup(self.dictionary.as_ref(), &normalised, pos) {
                return Some(found);
            }
        }

        // 4. English lexicon and rules
        if !text::has_swedish_diacritic(word) && text::has_lowercase_latin(word) {
            if let Some(found) = self.auxiliary(word, pos) {
                return Some(found);
            }
        }

        // 5. Rules chosen by language identification
        match self.arbiter.arbitrate(word) {
            Language::Target => self
                .target_rules(word)
                .map(|ph| Pronunciation::new(ph, Provenance::TargetRules)),
            Language::Auxiliary => self
                .auxiliary_rules(word)
                .map(|ph| Pronunciation::new(ph, Provenance::AuxiliaryRules)),
        }
    }

    /// Phonemises text that may hold several words separated by spaces or
    /// hyphens, such as a `sounds_like` override. Each part is resolved on
    /// its own and the results are joined with ` - `. The provenance is the
    /// one of the first part that resolved.
    pub fn phonemise_text(&self, input: &str, pos: Option<&str>) -> Option<Pronunciation> {
        let mut provenance = None;
        let mut parts: Vec<PhonemeString> = Vec::new();

        for graph in input.split(&[' ', '-'][..]).filter(|s| !s.is_empty()) {
            if text::is_punctuation(graph) {
                continue;
            }
            let Some(found) = self.phonemise(graph, pos) else {
                continue;
            };
            if found.phonemes.is_empty() {
                continue;
            }
            provenance.get_or_insert(found.provenance);
            parts.push(found.phonemes);
        }

        provenance.map(|provenance| Pronunciation::new(parts.join(MORPH_BOUNDARY), provenance))
    }

    fn auxiliary(&self, word: &str, pos: Option<&str>) -> Option<Pronunciation> {
        let (phonemes, provenance) = match lookup(self.auxiliary_dictionary.as_ref(), word, pos) {
            Some(found) => (found.phonemes, Provenance::Lexicon),
            None => (
                self.letter_to_sound.predict(word, Language::Auxiliary)?,
                Provenance::AuxiliaryRules,
            ),
        };
        self.record(word, WordClass::Foreign);
        Some(Pronunciation::new(self.mapper.convert(&phonemes), provenance))
    }

    fn auxiliary_rules(&self, word: &str) -> Option<PhonemeString> {
        let phonemes = self.letter_to_sound.predict(word, Language::Auxiliary)?;
        self.record(word, WordClass::Foreign);
        Some(self.mapper.convert(&phonemes))
    }

    /// Swedish letter-to-sound prediction, syllabified and stress-corrected.
    fn target_rules(&self, word: &str) -> Option<PhonemeString> {
        let phones = self.letter_to_sound.predict(word, Language::Target)?;
        let syllabified = match self.syllabifier.syllabify(&phones) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(word, error = %e, "syllabification failed");
                return None;
            }
        };
        self.record(word.trim(), WordClass::Unknown);
        Some(correct_stress_markers(&syllabified))
    }

    fn record(&self, word: &str, class: WordClass) {
        if let Some(recorder) = &self.recorder {
            recorder.record(word, class);
        }
    }
}

/// User dictionary first, then the general lexicon.
fn lookup(dictionary: &dyn Dictionary, word: &str, pos: Option<&str>) -> Option<Pronunciation> {
    [DictionaryKind::User, DictionaryKind::General]
        .into_iter()
        .find_map(|kind| {
            dictionary
                .lookup(word, pos, kind)
                .map(|ph| Pronunciation::new(ph, Provenance::from_dictionary(kind)))
        })
}
