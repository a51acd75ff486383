//! Saving after each mutation.
//!
//! Failures are logged and swallowed: the in-memory state has already
//! changed and stays authoritative until the next successful save.

use std::path::PathBuf;

use tracing::{debug, error};

use super::{Armory, StateChange};
use crate::error::{Error, Result};
use crate::storage::DocumentKind;

impl Armory {
    /// Write the changed document to disk
    pub(crate) fn autosave(&self, change: StateChange) {
        let result = match change {
            StateChange::Player => self.store.save(&self.player),
            StateChange::Leaderboard => self.store.save(&self.leaderboard),
        };
        log_save_result(change.document(), result);
    }
}

fn log_save_result(kind: DocumentKind, result: Result<Option<PathBuf>>) {
    match result {
        Ok(Some(path)) => debug!("Saved {} to {}", kind, path.display()),
        Ok(None) => debug!("No save directory, {} kept in memory only", kind),
        Err(e @ Error::CreateDir { .. }) => {
            error!("Could not create save directory for {}: {}", kind, e)
        }
        Err(e @ Error::Encode { .. }) => error!("Could not encode {}: {}", kind, e),
        Err(e) => error!("Could not save {}: {}", kind, e),
    }
}
