// src/config.rs
use crate::error::{LoadError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resource locations for a phonemiser, read from a JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhonemiserConfig {
    /// English to Swedish allophone table.
    pub phoneme_map: PathBuf,
    pub lexicon: PathBuf,
    #[serde(default)]
    pub user_dictionary: Option<PathBuf>,
    #[serde(default)]
    pub auxiliary_lexicon: Option<PathBuf>,
    /// Count unknown and English words and write them out at shutdown.
    #[serde(default)]
    pub log_unknown: bool,
    #[serde(default)]
    pub stats_dir: Option<PathBuf>,
}

impl PhonemiserConfig {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config; relative paths are taken relative to its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let mut config = Self::parse(&json)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let fix = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        fix(&mut self.phoneme_map);
        fix(&mut self.lexicon);
        self.user_dictionary.iter_mut().for_each(fix);
        self.auxiliary_lexicon.iter_mut().for_each(fix);
        self.stats_dir.iter_mut().for_each(fix);
    }
}
