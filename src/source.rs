//! Discovery of transcript files in a data directory.
//!
//! A data directory is a flat folder of exports; every regular file directly
//! inside it is a candidate transcript. Subdirectories are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChatstatsError, Result};

/// Directory searched when no input is given.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// [`ChatstatsError::Read`] if the directory cannot be opened or listed.
pub fn list_transcripts(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| ChatstatsError::read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ChatstatsError::read(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = files.len(), "listed transcripts");
    Ok(files)
}

/// Picks one transcript from `dir`.
///
/// With a `name`, returns the listed file with exactly that file name.
/// Without one, returns the first file in name order.
///
/// # Errors
///
/// - [`ChatstatsError::Read`] if the directory cannot be listed
/// - [`ChatstatsError::NoTranscripts`] if it holds no files
/// - [`ChatstatsError::UnknownTranscript`] if `name` is not among them
pub fn select_transcript(dir: impl AsRef<Path>, name: Option<&str>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let mut files = list_transcripts(dir)?;

    if files.is_empty() {
        return Err(ChatstatsError::NoTranscripts {
            dir: dir.to_path_buf(),
        });
    }

    match name {
        None => Ok(files.swap_remove(0)),
        Some(name) => files
            .into_iter()
            .find(|path| path.file_name().is_some_and(|f| f == name))
            .ok_or_else(|| ChatstatsError::UnknownTranscript {
                name: name.to_string(),
                dir: dir.to_path_buf(),
            }),
    }
}
