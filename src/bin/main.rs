use crossterm::style::Stylize;
use phonemiser_core::config::PhonemiserConfig;
use phonemiser_core::core::collaborators::UsageRecorder;
use phonemiser_core::core::mapping::PhonemeMapper;
use phonemiser_core::core::types::DictionaryKind;
use phonemiser_core::lexicon::{MemoryLexicon, Unavailable};
use phonemiser_core::persistence::{load_snapshot, save_snapshot, write_reports};
use phonemiser_core::stats::FrequencyLog;
use phonemiser_core::{Collaborators, LoadError, Phonemiser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

const SNAPSHOT_FILE: &str = "stats.bin";

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let Some(config_path) = std::env::args().nth(1) else {
        eprintln!("usage: phonemiser_shell <config.json>");
        return ExitCode::from(2);
    };

    match run(Path::new(&config_path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &Path) -> phonemiser_core::Result<()> {
    let config = PhonemiserConfig::from_path(config_path)?;

    let mut lexicon = MemoryLexicon::new();
    lexicon.load(DictionaryKind::General, &config.lexicon)?;
    if let Some(path) = &config.user_dictionary {
        lexicon.load(DictionaryKind::User, path)?;
    }
    let mut english = MemoryLexicon::new();
    if let Some(path) = &config.auxiliary_lexicon {
        english.load(DictionaryKind::General, path)?;
    }
    let mapper = PhonemeMapper::from_path(&config.phoneme_map)?;

    // Dictionary-only mode: no rules, splitter or language detector installed.
    let collaborators = Collaborators {
        dictionary: Arc::new(lexicon),
        auxiliary_dictionary: Arc::new(english),
        letter_to_sound: Arc::new(Unavailable),
        syllabifier: Arc::new(Unavailable),
        splitter: Arc::new(Unavailable),
        detector: Arc::new(Unavailable),
        normaliser: Arc::new(Unavailable),
    };
    let mut phonemiser = Phonemiser::new(collaborators, mapper);

    let stats_dir = config.stats_dir.clone().unwrap_or_else(|| PathBuf::from("log"));
    let recorder = if config.log_unknown {
        let snapshot = stats_dir.join(SNAPSHOT_FILE);
        let log = if snapshot.exists() {
            load_snapshot(&snapshot)?
        } else {
            FrequencyLog::new()
        };
        let log = Arc::new(log);
        phonemiser = phonemiser.with_recorder(log.clone() as Arc<dyn UsageRecorder>);
        Some(log)
    } else {
        None
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| LoadError::io("<stdin>", e))?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let printed = match phonemiser.phonemise_text(word, None) {
            Some(p) => writeln!(
                stdout,
                "{} -> {} [{}]",
                word,
                p.phonemes.trim().green(),
                p.provenance.to_string().dark_grey()
            ),
            None => writeln!(stdout, "{} -> {}", word, "<none>".red()),
        };
        printed.map_err(|e| LoadError::io("<stdout>", e))?;
    }

    if let Some(log) = recorder {
        save_snapshot(&log, &stats_dir.join(SNAPSHOT_FILE))?;
        write_reports(&log, &stats_dir)?;
    }
    Ok(())
}
