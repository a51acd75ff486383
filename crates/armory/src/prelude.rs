//! Prelude module for convenient imports
//!
//! ```ignore
//! use armory::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Core types: `Armory`, `ArmoryConfig`, `StateChange`
//! - Domain types: `Player`, `ArmorPiece`, `Leaderboard`, `LeaderboardEntry`, `Passage`
//! - Storage: `FixedDir`, `PlatformDirs`, `Unresolved`
//! - Error handling: `Error`, `Result`

// Core application types
pub use crate::armory::{Armory, StateChange};
pub use crate::config::{ArmoryConfig, ArmoryConfigBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Domain types
pub use crate::leaderboard::{Leaderboard, LeaderboardEntry};
pub use crate::passage::Passage;
pub use crate::player::{ArmorPiece, Player};

// Scripture
pub use crate::scripture::{JsonDirSource, Translation};

// Storage locations
pub use crate::storage::{FixedDir, PlatformDirs, Unresolved};
