//! Player profile: gem economy, armor leveling, memory passages and
//! review tracking.
//!
//! Daily rules (reviews counted, tasks rewarded) use the local calendar
//! date of the timestamp passed in, so callers control the day boundary.

mod armor;

pub use armor::*;

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::passage::Passage;
use crate::storage::{Document, DocumentKind};

/// Reviews needed in one day for a passage to count as reviewed
pub const MIN_REVIEWS_PER_DAY: usize = 2;

/// Rewarded tasks allowed per calendar day
pub const DAILY_TASK_LIMIT: usize = 5;

pub const GEMS_PER_DIFFICULTY: u32 = 10;

/// Gems per current level needed to raise a piece by one level
pub const ARMOR_UPGRADE_COST: u32 = 5;

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    gems: u32,
    #[serde(default)]
    armor: ArmorSet,
    #[serde(default)]
    passages: Vec<Passage>,
    /// Review timestamps keyed by passage reference
    #[serde(default)]
    reviews: BTreeMap<String, Vec<DateTime<Utc>>>,
    /// Timestamps of rewarded tasks, pruned to the current day on each reward
    #[serde(default)]
    task_log: Vec<DateTime<Utc>>,
}

fn local_date(ts: &DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gems(gems: u32) -> Self {
        Self {
            gems,
            ..Default::default()
        }
    }

    pub fn gems(&self) -> u32 {
        self.gems
    }

    pub fn armor(&self) -> &ArmorSet {
        &self.armor
    }

    pub fn armor_mut(&mut self) -> &mut ArmorSet {
        &mut self.armor
    }

    /// Gems granted for a task of the given difficulty, 0 when out of range
    pub fn gems_for_difficulty(difficulty: i32) -> u32 {
        if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            difficulty as u32 * GEMS_PER_DIFFICULTY
        } else {
            0
        }
    }

    /// Reward a completed task. Returns the number of gems granted.
    pub fn reward(&mut self, difficulty: i32, now: DateTime<Local>) -> u32 {
        let gems = Self::gems_for_difficulty(difficulty);
        if gems == 0 {
            warn!(
                "Ignoring reward for out-of-range difficulty {} (expected {}-{})",
                difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
            );
            return 0;
        }

        let today = now.date_naive();
        self.task_log.retain(|ts| local_date(ts) == today);
        self.task_log.push(now.to_utc());
        self.gems = self.gems.saturating_add(gems);
        debug!("Rewarded {} gems for difficulty {}", gems, difficulty);
        gems
    }

    pub fn tasks_completed_on(&self, date: NaiveDate) -> usize {
        self.task_log.iter().filter(|ts| local_date(ts) == date).count()
    }

    /// A task may be rewarded once some passage has been reviewed today and
    /// the daily task limit has not been reached.
    pub fn is_task_eligible(&self, now: DateTime<Local>) -> bool {
        let today = now.date_naive();
        let studied = self.passages.iter().any(|p| self.is_reviewed_on(p, today));
        studied && self.tasks_completed_on(today) < DAILY_TASK_LIMIT
    }

    /// Spend gems to raise a piece by one level. Returns the new level.
    pub fn upgrade_armor(&mut self, piece: ArmorPiece) -> Result<u8> {
        let level = self.armor.level(piece);
        if level >= MAX_ARMOR_LEVEL {
            return Err(Error::ArmorMaxed(piece));
        }

        let cost = level as u32 * ARMOR_UPGRADE_COST;
        if self.gems < cost {
            return Err(Error::InsufficientGems {
                needed: cost,
                available: self.gems,
            });
        }

        self.gems -= cost;
        self.armor.set_level(piece, level + 1);
        Ok(level + 1)
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn add_passage(&mut self, passage: Passage) {
        self.passages.push(passage);
    }

    /// Remove passages at the given offsets. Out-of-range offsets are
    /// skipped. Returns the number of passages removed.
    pub fn remove_passages(&mut self, offsets: &[usize]) -> usize {
        let mut offsets = offsets.to_vec();
        offsets.sort_unstable_by(|a, b| b.cmp(a));
        offsets.dedup();

        let mut removed = 0;
        for offset in offsets {
            if offset >= self.passages.len() {
                warn!(
                    "Skipping passage offset {} (list has {} passages)",
                    offset,
                    self.passages.len()
                );
                continue;
            }
            let passage = self.passages.remove(offset);
            if !self.passages.contains(&passage) {
                self.reviews.remove(&passage.reference());
            }
            removed += 1;
        }
        removed
    }

    pub fn review(&mut self, passage: &Passage, now: DateTime<Local>) {
        self.reviews
            .entry(passage.reference())
            .or_default()
            .push(now.to_utc());
    }

    /// Number of reviews of a passage on a local calendar date
    pub fn reviews_on(&self, passage: &Passage, date: NaiveDate) -> usize {
        self.reviews
            .get(&passage.reference())
            .map(|log| log.iter().filter(|ts| local_date(ts) == date).count())
            .unwrap_or(0)
    }

    pub fn is_reviewed_on(&self, passage: &Passage, date: NaiveDate) -> bool {
        self.reviews_on(passage, date) >= MIN_REVIEWS_PER_DAY
    }
}

impl Document for Player {
    const KIND: DocumentKind = DocumentKind::Player;
}
