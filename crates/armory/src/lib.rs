//! # armory
//!
//! Core library for Armory, a Bible memorization game.
//!
//! This crate provides:
//! - The `Armory` coordinator that owns and saves game state
//! - Player profile (gems, armor levels, passages, review tracking)
//! - Per-app leaderboard
//! - Scripture text loading
//! - JSON document storage under the platform application support directory

pub mod armory;
pub mod clock;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod passage;
pub mod player;
pub mod prelude;
pub mod scripture;
pub mod storage;

pub use armory::{Armory, StateChange};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ArmoryConfig, ArmoryConfigBuilder, DEFAULT_APP_ID};
pub use error::{Error, Result};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use passage::Passage;
pub use player::{
    ARMOR_UPGRADE_COST, ArmorPiece, ArmorSet, DAILY_TASK_LIMIT, MAX_ARMOR_LEVEL, MIN_ARMOR_LEVEL,
    MIN_REVIEWS_PER_DAY, Player,
};
pub use scripture::{
    InMemorySource, JsonDirSource, ScriptureSource, ScriptureText, TextProvider, Translation,
    Verse,
};
pub use storage::{
    DirectoryResolver, Document, DocumentKind, DocumentStore, FixedDir, PlatformDirs, Unresolved,
};
