//! The Armory coordinator.
//!
//! `Armory` owns the game state:
//! - the scripture text provider (loaded in the background, not saved)
//! - the player profile (saved to `Player.json`)
//! - the leaderboard (saved to `Leaderboard.json`)
//!
//! Every change to the player or leaderboard goes through
//! [`Armory::mutate_player`] or [`Armory::mutate_leaderboard`], which write
//! the document to disk before returning and then notify subscribers.
//!
//! ## Example
//!
//! ```ignore
//! use armory::prelude::*;
//!
//! let config = ArmoryConfig::builder()
//!     .resolver(FixedDir::new("/tmp/armory"))
//!     .build();
//! let mut armory = Armory::with_config(Player::new(), Leaderboard::new(), config);
//!
//! armory.add_passage("John 3:16".parse()?);
//! armory.high_score("Quiz", 25);
//! ```

mod autosave;
mod intents;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::ArmoryConfig;
use crate::leaderboard::Leaderboard;
use crate::player::Player;
use crate::scripture::TextProvider;
use crate::storage::{DocumentKind, DocumentStore};

/// Which part of the state changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Player,
    Leaderboard,
}

impl StateChange {
    pub fn document(&self) -> DocumentKind {
        match self {
            Self::Player => DocumentKind::Player,
            Self::Leaderboard => DocumentKind::Leaderboard,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct Armory {
    pub(crate) text: TextProvider,
    pub(crate) player: Player,
    pub(crate) leaderboard: Leaderboard,
    pub(crate) store: DocumentStore,
    pub(crate) clock: Arc<dyn Clock>,
    subscribers: Vec<Sender<StateChange>>,
}

impl Armory {
    /// Create with default configuration.
    ///
    /// `player` and `leaderboard` are used only when no saved document can
    /// be restored.
    pub fn new(player: Player, leaderboard: Leaderboard) -> Self {
        Self::with_config(player, leaderboard, ArmoryConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(player: Player, leaderboard: Leaderboard, config: ArmoryConfig) -> Self {
        let store = DocumentStore::new(config.resolver, config.app_id);
        match store.dir() {
            Some(dir) => debug!("Save directory: {}", dir.display()),
            None => info!("No application support directory, progress will not be saved"),
        }

        let player = store.restore::<Player>().unwrap_or_else(|| {
            debug!("Using default player");
            player
        });
        let leaderboard = store.restore::<Leaderboard>().unwrap_or_else(|| {
            debug!("Using default leaderboard");
            leaderboard
        });

        let mut text = TextProvider::new(config.translation, config.source);
        text.load();

        Self {
            text,
            player,
            leaderboard,
            store,
            clock: config.clock,
            subscribers: Vec::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn text(&self) -> &TextProvider {
        &self.text
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Whether the scripture text has finished loading
    pub fn is_loaded(&self) -> bool {
        self.text.is_loaded()
    }

    /// Replace the player and save it
    pub fn set_player(&mut self, player: Player) {
        self.mutate_player(|p| *p = player);
    }

    /// Replace the leaderboard and save it
    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.mutate_leaderboard(|b| *b = leaderboard);
    }

    /// Receive a [`StateChange`] after every saved mutation.
    ///
    /// Dropped receivers are forgotten on the next change.
    pub fn subscribe(&mut self) -> Receiver<StateChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Apply a change to the player, then save and notify
    pub(crate) fn mutate_player<T>(&mut self, f: impl FnOnce(&mut Player) -> T) -> T {
        let out = f(&mut self.player);
        self.changed(StateChange::Player);
        out
    }

    pub(crate) fn mutate_leaderboard<T>(&mut self, f: impl FnOnce(&mut Leaderboard) -> T) -> T {
        let out = f(&mut self.leaderboard);
        self.changed(StateChange::Leaderboard);
        out
    }

    /// Like `mutate_player`, but nothing is saved when `f` fails
    pub(crate) fn try_mutate_player<T, E>(
        &mut self,
        f: impl FnOnce(&mut Player) -> Result<T, E>,
    ) -> Result<T, E> {
        let out = f(&mut self.player)?;
        self.changed(StateChange::Player);
        Ok(out)
    }

    fn changed(&mut self, change: StateChange) {
        self.autosave(change);
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }
}
