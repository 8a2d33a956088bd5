//! File-backed high scores
//!
//! [`JsonFileStore`] keeps the ranked list as a JSON array on disk, by default
//! under `$XDG_CONFIG_HOME/classic-tetris/highscores.json`. Every query
//! re-reads the file, so several running games share one ranking. Failures
//! never reach the engine: they are logged and the store falls back to the
//! last list it read or wrote.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use classic_tetris_core::high_scores::{HighScoreEntry, HighScoreStore, HighScoreTable};
use log::{debug, warn};
use thiserror::Error;

const APP_DIR: &str = "classic-tetris";
const FILENAME: &str = "highscores.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid high-score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default location of the high-score file (XDG config dir or ~/.config).
pub fn default_path() -> PathBuf {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .unwrap_or_else(|_| PathBuf::from(".")),
    };
    base.join(APP_DIR).join(FILENAME)
}

/// Read a stored list. A missing file is an empty list.
pub fn load_entries(path: &Path) -> Result<Vec<HighScoreEntry>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Write a list, creating the parent directory if needed.
pub fn write_entries(path: &Path, entries: &[HighScoreEntry]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

/// High-score store persisted as JSON
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Last list read from or written to disk.
    table: HighScoreTable,
}

impl JsonFileStore {
    /// Open the store at `path`; an unreadable file starts an empty list
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = match load_entries(&path) {
            Ok(entries) => {
                debug!("loaded {} high score(s) from {}", entries.len(), path.display());
                HighScoreTable::from_entries(entries)
            }
            Err(e) => {
                warn!("could not read high scores from {}: {}", path.display(), e);
                HighScoreTable::new()
            }
        };
        Self { path, table }
    }

    pub fn open_default() -> Self {
        Self::open(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The list currently on disk, or the cached one if the file is unreadable
    fn current(&self) -> HighScoreTable {
        match load_entries(&self.path) {
            Ok(entries) => HighScoreTable::from_entries(entries),
            Err(e) => {
                warn!("could not reload high scores from {}: {}", self.path.display(), e);
                self.table.clone()
            }
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn is_high_score(&self, score: u32) -> bool {
        self.current().qualifies(score)
    }

    fn save_high_score(&mut self, player_name: &str, score: u32) -> Vec<HighScoreEntry> {
        let mut updated = self.current();
        updated.insert(HighScoreEntry::new(player_name, score));

        match write_entries(&self.path, updated.entries()) {
            Ok(()) => {
                debug!("saved high score {} for {}", score, player_name);
                self.table = updated;
                self.table.entries().to_vec()
            }
            Err(e) => {
                warn!("could not save high score to {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn high_scores(&self) -> Vec<HighScoreEntry> {
        self.current().entries().to_vec()
    }

    fn clear_high_scores(&mut self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!("could not clear high scores at {}: {}", self.path.display(), e);
                return false;
            }
        }
        self.table.clear();
        true
    }
}
