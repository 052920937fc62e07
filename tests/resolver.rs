use phonemiser_core::core::collaborators::{
    CompoundSplitter, Dictionary, LanguageDetector, LetterToSound, Syllabifier, UnicodeNormaliser,
};
use phonemiser_core::core::mapping::PhonemeMapper;
use phonemiser_core::core::types::{DictionaryKind, MorphRole, MorphSegment, WordClass};
use phonemiser_core::error::{DetectionError, SyllabificationError};
use phonemiser_core::stats::FrequencyLog;
use phonemiser_core::{Collaborators, Language, Phonemiser, Provenance, Pronunciation};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Calls {
    user: AtomicUsize,
    general: AtomicUsize,
    auxiliary_dictionary: AtomicUsize,
    target_rules: AtomicUsize,
    auxiliary_rules: AtomicUsize,
    split: AtomicUsize,
    detect: AtomicUsize,
    syllabify: AtomicUsize,
}

fn get(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

/// Every collaborator at once, backed by small tables and counting calls.
#[derive(Default)]
struct World {
    user: HashMap<&'static str, &'static str>,
    general: HashMap<&'static str, &'static str>,
    english: HashMap<&'static str, &'static str>,
    target_rules: HashMap<&'static str, &'static str>,
    english_rules: HashMap<&'static str, &'static str>,
    compounds: HashMap<&'static str, Vec<MorphSegment>>,
    endings: HashMap<&'static str, &'static str>,
    normalised: HashMap<&'static str, &'static str>,
    /// `None` makes the detector fail.
    detected: Option<Language>,
    syllabifier_fails: bool,
    calls: Calls,
}

impl Dictionary for World {
    fn lookup(&self, word: &str, _pos: Option<&str>, kind: DictionaryKind) -> Option<String> {
        let table = match kind {
            DictionaryKind::User => {
                bump(&self.calls.user);
                &self.user
            }
            DictionaryKind::General => {
                bump(&self.calls.general);
                &self.general
            }
        };
        table.get(word).map(|s| s.to_string())
    }
}

struct English(Arc<World>);

impl Dictionary for English {
    fn lookup(&self, word: &str, _pos: Option<&str>, kind: DictionaryKind) -> Option<String> {
        bump(&self.0.calls.auxiliary_dictionary);
        match kind {
            DictionaryKind::User => None,
            DictionaryKind::General => self.0.english.get(word).map(|s| s.to_string()),
        }
    }
}

impl LetterToSound for World {
    fn predict(&self, word: &str, language: Language) -> Option<String> {
        let table = match language {
            Language::Target => {
                bump(&self.calls.target_rules);
                &self.target_rules
            }
            Language::Auxiliary => {
                bump(&self.calls.auxiliary_rules);
                &self.english_rules
            }
        };
        table.get(word).map(|s| s.to_string())
    }
}

impl Syllabifier for World {
    fn syllabify(&self, phonemes: &str) -> Result<String, SyllabificationError> {
        bump(&self.calls.syllabify);
        if self.syllabifier_fails {
            return Err(SyllabificationError {
                phonemes: phonemes.to_string(),
                reason: "no vowel".to_string(),
            });
        }
        Ok(phonemes.to_string())
    }
}

impl CompoundSplitter for World {
    fn split(&self, word: &str) -> Vec<MorphSegment> {
        bump(&self.calls.split);
        self.compounds.get(word).cloned().unwrap_or_default()
    }

    fn ending_pronunciation(&self, ending: &str) -> Option<&str> {
        self.endings.get(ending).copied()
    }
}

impl LanguageDetector for World {
    fn detect(&self, word: &str) -> Result<Language, DetectionError> {
        bump(&self.calls.detect);
        self.detected.ok_or_else(|| DetectionError {
            word: word.to_string(),
            reason: "detector crashed".to_string(),
        })
    }
}

impl UnicodeNormaliser for World {
    fn normalise(&self, word: &str) -> String {
        self.normalised.get(word).copied().unwrap_or(word).to_string()
    }
}

fn base_world() -> World {
    World {
        user: HashMap::from([("hund", "h 'u n d")]),
        general: HashMap::from([
            ("hund", "h 'u n d - l e x"),
            ("katt", "k 'a t"),
            ("cafe", "k a - 'f e:"),
            ("tyskland", "'t y s k - l a n d"),
            ("semester", "s e - 'm e s - t e r"),
        ]),
        english: HashMap::from([("weekend", "'w i: k - e n d")]),
        target_rules: HashMap::from([("NASA", "n 'a: - s ,a"), ("blorp", "b l 'o r p"), ("smörx", "s m '2 r k s")]),
        english_rules: HashMap::from([("gadget", "'g { dZ - I t"), ("smörx", "s m @U k s")]),
        compounds: HashMap::from([(
            "tysklandssemester",
            vec![
                MorphSegment::new("tyskland", MorphRole::Lexical),
                MorphSegment::new("s", MorphRole::FixedEnding),
                MorphSegment::new("semester", MorphRole::Lexical),
            ],
        )]),
        endings: HashMap::from([("s", "s")]),
        normalised: HashMap::from([("café", "cafe")]),
        detected: Some(Language::Target),
        ..World::default()
    }
}

fn build(world: World) -> (Phonemiser, Arc<World>) {
    let world = Arc::new(world);
    let collaborators = Collaborators {
        dictionary: world.clone(),
        auxiliary_dictionary: Arc::new(English(world.clone())),
        letter_to_sound: world.clone(),
        syllabifier: world.clone(),
        splitter: world.clone(),
        detector: world.clone(),
        normaliser: world.clone(),
    };
    let mapper = PhonemeMapper::new([("{", "a"), ("dZ", "d j"), ("@U", "o:"), ("w", "v")]);
    (Phonemiser::new(collaborators, mapper), world)
}

#[test]
fn user_dictionary_wins_and_stops_the_chain() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("hund", Some("NN")).unwrap();
    assert_eq!(result, Pronunciation::new("h 'u n d", Provenance::UserDictionary));

    let calls = &world.calls;
    assert_eq!(get(&calls.user), 1);
    assert_eq!(get(&calls.general), 0);
    assert_eq!(get(&calls.split), 0);
    assert_eq!(get(&calls.auxiliary_dictionary), 0);
    assert_eq!(get(&calls.target_rules), 0);
    assert_eq!(get(&calls.auxiliary_rules), 0);
    assert_eq!(get(&calls.detect), 0);
}

#[test]
fn lexicon_is_consulted_after_the_user_dictionary() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("katt", None).unwrap();
    assert_eq!(result, Pronunciation::new("k 'a t", Provenance::Lexicon));
    assert_eq!(get(&world.calls.split), 0);
}

#[test]
fn compounds_are_stitched_and_stress_corrected() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("Tysklandssemester", None).unwrap();
    assert_eq!(result.provenance, Provenance::Compound);
    assert_eq!(result.phonemes, ",t y s k - l a n d - s - s e - %m e s - t e r");
    assert_eq!(get(&world.calls.split), 1);
    assert_eq!(get(&world.calls.auxiliary_dictionary), 0);
}

#[test]
fn normalised_form_is_looked_up() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("café", None).unwrap();
    assert_eq!(result, Pronunciation::new("k a - 'f e:", Provenance::Lexicon));
    assert_eq!(get(&world.calls.user), 2);
    assert_eq!(get(&world.calls.general), 2);
    assert_eq!(get(&world.calls.split), 1);
    assert_eq!(get(&world.calls.auxiliary_dictionary), 0);
    assert_eq!(get(&world.calls.target_rules), 0);
}

#[test]
fn normalised_retry_skips_compound_analysis() {
    let mut world = base_world();
    world.normalised.insert("Tysklandssemestér", "tysklandssemester");
    let (phonemiser, world) = build(world);

    // The normalised form would split, but only the dictionaries are retried.
    assert_eq!(phonemiser.phonemise("Tysklandssemestér", None), None);
    assert_eq!(get(&world.calls.split), 1);
    assert_eq!(get(&world.calls.user), 2);
    assert_eq!(get(&world.calls.general), 2);
}

#[test]
fn unchanged_normalised_form_is_not_looked_up_again() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("blorp", None).unwrap();
    assert_eq!(result.provenance, Provenance::TargetRules);
    assert_eq!(get(&world.calls.user), 1);
    assert_eq!(get(&world.calls.general), 1);
}

#[test]
fn english_lexicon_is_mapped_to_swedish_phones() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("weekend", None).unwrap();
    assert_eq!(result, Pronunciation::new("'w i: k - e n d", Provenance::Lexicon));
    assert_eq!(get(&world.calls.detect), 0);

    // Only whole phones are mapped; "'w" carries a stress marker.
    let mut world = base_world();
    world.english.insert("wow", "w aU");
    let (phonemiser, _) = build(world);
    let result = phonemiser.phonemise("wow", None).unwrap();
    assert_eq!(result.phonemes, " v aU");
}

#[test]
fn english_rules_answer_before_language_detection() {
    let (phonemiser, world) = build(base_world());

    let result = phonemiser.phonemise("gadget", None).unwrap();
    assert_eq!(result, Pronunciation::new("'g a d j - I t", Provenance::AuxiliaryRules));
    assert_eq!(get(&world.calls.auxiliary_dictionary), 2);
    assert_eq!(get(&world.calls.detect), 0);
}

#[test]
fn swedish_letters_bypass_the_english_lexicon() {
    let mut world = base_world();
    world.english.insert("smörx", "s m @U k s");
    world.detected = Some(Language::Auxiliary);
    let (phonemiser, world) = build(world);

    let result = phonemiser.phonemise("smörx", None).unwrap();
    // Arbitration still sends it to the English rules.
    assert_eq!(result, Pronunciation::new("s m o: k s", Provenance::AuxiliaryRules));
    assert_eq!(get(&world.calls.auxiliary_dictionary), 0);
    assert_eq!(get(&world.calls.auxiliary_rules), 1);
    assert_eq!(get(&world.calls.detect), 1);
}

#[test]
fn uppercase_words_use_swedish_rules_without_detection() {
    let mut world = base_world();
    world.detected = None;
    world.english_rules.insert("NASA", "n { s @");
    let (phonemiser, world) = build(world);

    let result = phonemiser.phonemise("NASA", None).unwrap();
    assert_eq!(result, Pronunciation::new("n ,a: - s %a", Provenance::TargetRules));
    assert_eq!(get(&world.calls.detect), 0);
    assert_eq!(get(&world.calls.auxiliary_dictionary), 0);
    assert_eq!(get(&world.calls.syllabify), 1);
}

#[test]
fn failed_detection_defaults_to_swedish_rules() {
    let mut world = base_world();
    world.detected = None;
    let (phonemiser, world) = build(world);

    // Not in any English resource, so it reaches arbitration.
    let result = phonemiser.phonemise("blorp", None).unwrap();
    assert_eq!(result, Pronunciation::new("b l 'o r p", Provenance::TargetRules));
    assert_eq!(get(&world.calls.detect), 1);
}

#[test]
fn failed_syllabification_yields_nothing() {
    let mut world = base_world();
    world.syllabifier_fails = true;
    let (phonemiser, world) = build(world);

    assert_eq!(phonemiser.phonemise("blorp", None), None);
    assert_eq!(get(&world.calls.target_rules), 1);
    assert_eq!(get(&world.calls.syllabify), 1);
}

#[test]
fn nothing_applies_to_bare_symbols() {
    let (phonemiser, world) = build(base_world());

    assert_eq!(phonemiser.phonemise("%%", None), None);
    assert_eq!(get(&world.calls.split), 0);
    assert_eq!(get(&world.calls.auxiliary_dictionary), 0);
    assert_eq!(get(&world.calls.detect), 0);
    assert_eq!(get(&world.calls.target_rules), 1);
}

#[test]
fn multi_part_text_is_joined_with_boundaries() {
    let (phonemiser, _) = build(base_world());

    let result = phonemiser.phonemise_text("katt . hund-katt", None).unwrap();
    assert_eq!(result.phonemes, "k 'a t - h 'u n d - k 'a t");
    assert_eq!(result.provenance, Provenance::Lexicon);
}

#[test]
fn provenance_comes_from_the_first_resolved_part() {
    let (phonemiser, _) = build(base_world());

    let result = phonemiser.phonemise_text("%% hund katt", None).unwrap();
    assert_eq!(result.phonemes, "h 'u n d - k 'a t");
    assert_eq!(result.provenance, Provenance::UserDictionary);

    assert_eq!(phonemiser.phonemise_text("! ? --", None), None);
}

#[test]
fn spelled_out_letters_are_phonemised_one_by_one() {
    let mut world = base_world();
    world.general.insert("S", "'e s");
    world.general.insert("V", "'v e:");
    let (phonemiser, _) = build(world);

    let spelled = phonemiser_core::spell_out("SV");
    let result = phonemiser.phonemise_text(&spelled, None).unwrap();
    assert_eq!(result.phonemes, "'e s - 'v e:");
}

#[test]
fn recorder_counts_unknown_and_foreign_words() {
    let (phonemiser, _) = build(base_world());
    let log = Arc::new(FrequencyLog::new());
    let phonemiser = phonemiser.with_recorder(log.clone());

    phonemiser.phonemise("blorp", None);
    phonemiser.phonemise("blorp", None);
    phonemiser.phonemise("gadget", None);
    phonemiser.phonemise("katt", None);

    assert_eq!(log.count("blorp", WordClass::Unknown), 2);
    assert_eq!(log.count("gadget", WordClass::Foreign), 1);
    assert_eq!(log.count("katt", WordClass::Unknown), 0);
    assert_eq!(log.report(WordClass::Unknown), vec!["2 blorp"]);
}

#[test]
fn one_phonemiser_serves_many_threads() {
    let (phonemiser, _) = build(base_world());
    let words = ["hund", "katt", "Tysklandssemester", "gadget", "NASA", "blorp"];
    let expected: Vec<_> = words.iter().map(|w| phonemiser.phonemise(w, None)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got: Vec<_> = words.iter().map(|w| phonemiser.phonemise(w, None)).collect();
                assert_eq!(got, expected);
            });
        }
    });
}
