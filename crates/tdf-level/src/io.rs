//! Reading and writing level documents.
//!
//! Documents are emitted as JSON indented with 4 spaces so generated
//! fixtures stay diff-stable.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::level::Level;
use crate::types::GridSize;

/// Errors surfaced by document I/O.
#[derive(Debug, Error)]
pub enum LevelIoError {
    #[error("failed to access level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize level document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Render a level as an indented JSON document (no trailing newline).
pub fn to_document(level: &Level) -> Result<String, LevelIoError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    level.serialize(&mut ser).map_err(LevelIoError::Serialize)?;
    // serde_json always produces valid UTF-8
    Ok(String::from_utf8(out).expect("serialized JSON is UTF-8"))
}

/// Write a level document followed by a trailing newline.
pub fn write_level<W: Write>(mut writer: W, level: &Level) -> Result<(), LevelIoError> {
    let doc = to_document(level)?;
    writer.write_all(doc.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write a level document to a file, creating parent directories as needed.
pub fn write_level_to_file(path: &Path, level: &Level) -> Result<(), LevelIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut doc = to_document(level)?;
    doc.push('\n');
    fs::write(path, doc)?;
    Ok(())
}

/// Parse a level document.
pub fn load_level(json: &str) -> Result<Level, LevelIoError> {
    serde_json::from_str(json).map_err(LevelIoError::Parse)
}

/// Load a level document from a file.
pub fn load_level_from_file(path: &Path) -> Result<Level, LevelIoError> {
    let json = fs::read_to_string(path)?;
    load_level(&json)
}

/// Lightweight metadata for listing level documents without keeping the
/// full wave schedules around.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMetadata {
    /// File stem the document was found under.
    pub file_stem: String,
    pub path: PathBuf,
    pub name: String,
    pub wave_count: usize,
    pub grid_size: GridSize,
    pub total_creeps: u32,
}

/// Scan a directory for `.json` level documents, sorted by file stem.
///
/// Unreadable or malformed entries are skipped.
pub fn list_levels(dir: &Path) -> Vec<LevelMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut levels = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Ok(level) = load_level_from_file(&path) else {
            continue;
        };
        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let total_creeps = level.total_creeps();
        levels.push(LevelMetadata {
            file_stem,
            path,
            name: level.name,
            wave_count: level.waves.len(),
            grid_size: level.grid_size,
            total_creeps,
        });
    }
    levels.sort_by(|a, b| a.file_stem.cmp(&b.file_stem));
    levels
}
