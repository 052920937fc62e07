// File: src/persistence.rs
use crate::core::types::WordClass;
use crate::error::{LoadError, Result};
use crate::stats::{FrequencyLog, FrequencyTables};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const UNKNOWN_REPORT: &str = "sv_unknown.txt";
pub const FOREIGN_REPORT: &str = "sv_english.txt";

/// Writes `path` through a temporary file in the same directory so a crash
/// never leaves a half-written file behind.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| LoadError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| LoadError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush().map_err(|e| LoadError::io(path, e))?;
    }

    temp_file.persist(path).map_err(|e| LoadError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Saves the raw counters so they survive a restart.
pub fn save_snapshot(log: &FrequencyLog, path: &Path) -> Result<()> {
    let tables = log.snapshot();
    write_atomically(path, |writer| {
        bincode::serialize_into(writer, &tables)?;
        Ok(())
    })
}

pub fn load_snapshot(path: &Path) -> Result<FrequencyLog> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);
    let tables: FrequencyTables = bincode::deserialize_from(reader)?;
    Ok(FrequencyLog::from_tables(tables))
}

/// Writes the human-readable unknown and English word lists into `dir`.
pub fn write_reports(log: &FrequencyLog, dir: &Path) -> Result<()> {
    for (class, name) in [
        (WordClass::Unknown, UNKNOWN_REPORT),
        (WordClass::Foreign, FOREIGN_REPORT),
    ] {
        let path = dir.join(name);
        let lines = log.report(class);
        write_atomically(&path, |writer| {
            for line in &lines {
                writeln!(writer, "{line}").map_err(|e| LoadError::io(&path, e))?;
            }
            Ok(())
        })?;
        tracing::info!(path = %path.display(), words = lines.len(), "wrote word report");
    }
    Ok(())
}
