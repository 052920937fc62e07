// src/core/mapping.rs
use crate::error::{LoadError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maps English allophones onto their closest Swedish equivalents.
///
/// Built once at startup and never mutated afterwards, so a single instance
/// can be shared by any number of concurrent resolution calls.
#[derive(Debug, Clone, Default)]
pub struct PhonemeMapper {
    table: HashMap<String, String>,
}

impl PhonemeMapper {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Parses the table format: `foreign<TAB>target`, one pair per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(source: &str, origin: &Path) -> Result<Self> {
        let mut table = HashMap::new();
        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.trim().split('\t');
            let (foreign, target) = match (fields.next(), fields.next()) {
                (Some(f), Some(t)) if !f.is_empty() => (f, t),
                _ => {
                    return Err(LoadError::Malformed {
                        path: origin.to_path_buf(),
                        line: idx + 1,
                        reason: "expected `foreign<TAB>target`",
                    })
                }
            };
            table.insert(foreign.to_string(), target.trim().to_string());
        }
        Ok(Self { table })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let mapper = Self::parse(&source, path)?;
        tracing::info!(path = %path.display(), entries = mapper.len(), "loaded phoneme map");
        Ok(mapper)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Rewrites every space-delimited phone found in the table.
    ///
    /// Each phone is looked up on its own, so one substitution can never feed
    /// into another. A replaced phone at either end of the string is padded
    /// with a space on that side. Strings without mapped phones come back
    /// unchanged.
    pub fn convert(&self, phonemes: &str) -> String {
        let pieces: Vec<&str> = phonemes.split(' ').collect();
        let mut out = String::with_capacity(phonemes.len() + 2);
        let last = pieces.len() - 1;

        for (i, piece) in pieces.iter().enumerate() {
            let mapped = self.table.get(*piece);
            if i > 0 {
                out.push(' ');
            }
            match mapped {
                Some(target) => {
                    if i == 0 {
                        out.push(' ');
                    }
                    out.push_str(target);
                    if i == last {
                        out.push(' ');
                    }
                }
                None => out.push_str(piece),
            }
        }
        out
    }
}
