//! Operations the presentation layer calls.
//!
//! Mutating operations save the affected document before returning.

use tracing::{debug, warn};

use super::Armory;
use crate::error::Result;
use crate::leaderboard::LeaderboardEntry;
use crate::passage::Passage;
use crate::player::ArmorPiece;

impl Armory {
    /// Whether the player may currently earn a task reward
    pub fn task_eligible(&self) -> bool {
        self.player.is_task_eligible(self.clock.now())
    }

    /// Reward the player for a finished task. Returns the gems granted.
    pub fn complete_task(&mut self, difficulty: i32) -> u32 {
        let now = self.clock.now();
        self.mutate_player(|player| player.reward(difficulty, now))
    }

    /// Level of an armor piece; 1 if the player has never upgraded it
    pub fn armor_level(&self, piece: ArmorPiece) -> u8 {
        self.player.armor().level(piece)
    }

    /// Spend gems on the next level of a piece. Nothing is saved on failure.
    pub fn upgrade_armor(&mut self, piece: ArmorPiece) -> Result<u8> {
        self.try_mutate_player(|player| player.upgrade_armor(piece))
    }

    pub fn passages(&self) -> &[Passage] {
        self.player.passages()
    }

    pub fn add_passage(&mut self, passage: Passage) {
        debug!("Adding passage {}", passage);
        self.mutate_player(|player| player.add_passage(passage));
    }

    /// Remove passages at offsets into the current `passages()` list
    pub fn remove_passages(&mut self, offsets: &[usize]) -> usize {
        self.mutate_player(|player| player.remove_passages(offsets))
    }

    pub fn review_passage(&mut self, passage: &Passage) {
        let now = self.clock.now();
        self.mutate_player(|player| player.review(passage, now));
    }

    pub fn reviews_today(&self, passage: &Passage) -> usize {
        self.player.reviews_on(passage, self.clock.today())
    }

    pub fn is_passage_reviewed_today(&self, passage: &Passage) -> bool {
        self.player.is_reviewed_on(passage, self.clock.today())
    }

    /// Passage text from the loaded translation
    pub fn passage_text(&self, passage: &Passage) -> Option<String> {
        self.text.passage_text(passage)
    }

    /// Leaderboard entries, highest score first
    pub fn high_score_entries(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.sorted_entries()
    }

    /// Record the latest score for an app, replacing any previous score.
    /// Surrounding whitespace in the name is ignored.
    pub fn high_score(&mut self, app: &str, score: i64) {
        if app.trim().is_empty() {
            warn!("Ignoring score {} with empty app name", score);
            return;
        }

        self.mutate_leaderboard(|board| board.upsert(app, score));
    }
}
