//! High-score collaborator
//!
//! The engine reports a finished game through [`HighScoreStore`]. Stores never
//! surface errors through this trait; a failing backend degrades to "no high
//! scores recorded".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::MAX_HIGH_SCORES;

/// One ranked result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
    pub date: DateTime<Utc>,
}

impl HighScoreEntry {
    pub fn new(player_name: impl Into<String>, score: u32) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            date: Utc::now(),
        }
    }
}

/// Ranking policy: descending by score, ties in insertion order, capped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table from previously stored entries, re-ranked and capped
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        // Stable sort keeps earlier entries ahead of later equal scores.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HighScoreEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Would `score` make the list?
    ///
    /// Any score qualifies while the list has room; otherwise it must beat
    /// the lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        let lowest = self.entries.last().map(|e| e.score).unwrap_or(0);
        score > lowest
    }

    /// Insert an entry, keeping the ranking and cap
    pub fn insert(&mut self, entry: HighScoreEntry) {
        // Insert after every entry with an equal or higher score.
        let pos = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Persistence boundary for finished games
pub trait HighScoreStore {
    /// Would `score` enter the list?
    fn is_high_score(&self, score: u32) -> bool;

    /// Record a result and return the updated list (empty if the store failed)
    fn save_high_score(&mut self, player_name: &str, score: u32) -> Vec<HighScoreEntry>;

    /// Current list, best first
    fn high_scores(&self) -> Vec<HighScoreEntry>;

    /// Remove every entry; `false` if the store could not be cleared
    fn clear_high_scores(&mut self) -> bool;
}

/// Store that keeps results in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    table: HighScoreTable,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryHighScores {
    fn is_high_score(&self, score: u32) -> bool {
        self.table.qualifies(score)
    }

    fn save_high_score(&mut self, player_name: &str, score: u32) -> Vec<HighScoreEntry> {
        self.table.insert(HighScoreEntry::new(player_name, score));
        self.table.entries().to_vec()
    }

    fn high_scores(&self) -> Vec<HighScoreEntry> {
        self.table.entries().to_vec()
    }

    fn clear_high_scores(&mut self) -> bool {
        self.table.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[HighScoreEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player_name.as_str()).collect()
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut table = HighScoreTable::new();
        table.insert(HighScoreEntry::new("a", 100));
        table.insert(HighScoreEntry::new("b", 300));
        table.insert(HighScoreEntry::new("c", 100));
        table.insert(HighScoreEntry::new("d", 300));
        assert_eq!(names(table.entries()), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn list_is_capped() {
        let mut table = HighScoreTable::new();
        for i in 0..15 {
            table.insert(HighScoreEntry::new(format!("p{}", i), i * 10));
        }
        assert_eq!(table.len(), MAX_HIGH_SCORES);
        assert_eq!(table.entries()[0].score, 140);
        assert_eq!(table.entries()[9].score, 50);
    }

    #[test]
    fn qualification_against_full_list() {
        let mut table = HighScoreTable::new();
        assert!(table.qualifies(0));
        for _ in 0..MAX_HIGH_SCORES {
            table.insert(HighScoreEntry::new("x", 500));
        }
        assert!(!table.qualifies(500));
        assert!(table.qualifies(501));
    }

    #[test]
    fn from_entries_reranks() {
        let table = HighScoreTable::from_entries(vec![
            HighScoreEntry::new("low", 10),
            HighScoreEntry::new("high", 90),
        ]);
        assert_eq!(names(table.entries()), vec!["high", "low"]);
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryHighScores::new();
        let list = store.save_high_score("Player1", 440);
        assert_eq!(list.len(), 1);
        assert_eq!(store.high_scores()[0].score, 440);
        assert!(store.clear_high_scores());
        assert!(store.high_scores().is_empty());
    }
}
