//! High-score table, one entry per application.

use serde::{Deserialize, Serialize};

use crate::storage::{Document, DocumentKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Name of the game or quiz the score came from
    pub app: String,
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(app: impl Into<String>, score: i64) -> Self {
        Self {
            app: app.into(),
            score,
        }
    }
}

/// Entries in insertion order, at most one per app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLeaderboard")]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

/// Saved form; may contain repeated or untrimmed app names
#[derive(Deserialize)]
struct RawLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl From<RawLeaderboard> for Leaderboard {
    fn from(raw: RawLeaderboard) -> Self {
        let mut board = Self::new();
        for entry in raw.entries {
            board.upsert(&entry.app, entry.score);
        }
        board
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn position(&self, app: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.app == app)
    }

    pub fn get(&self, app: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.app == app)
    }

    /// Overwrite the score of the entry at `index`. Returns false if the
    /// index is out of range.
    pub fn update_score(&mut self, index: usize, score: i64) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.score = score;
                true
            }
            None => false,
        }
    }

    pub fn append(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
    }

    /// Set the score for `app` (trimmed), updating its entry in place or
    /// appending a new one. Returns false for an empty name.
    pub fn upsert(&mut self, app: &str, score: i64) -> bool {
        let app = app.trim();
        if app.is_empty() {
            return false;
        }
        match self.position(app) {
            Some(index) => {
                self.update_score(index, score);
            }
            None => self.append(LeaderboardEntry::new(app, score)),
        }
        true
    }

    /// Entries by score, highest first. Equal scores keep insertion order.
    pub fn sorted_entries(&self) -> Vec<LeaderboardEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Document for Leaderboard {
    const KIND: DocumentKind = DocumentKind::Leaderboard;
}
