use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::{DirectoryResolver, Document, DocumentKind};
use crate::error::{Error, Result};

/// Reads and writes documents under `<root>/<app_id>/`
#[derive(Debug, Clone)]
pub struct DocumentStore {
    resolver: Arc<dyn DirectoryResolver>,
    app_id: String,
}

impl DocumentStore {
    pub fn new(resolver: Arc<dyn DirectoryResolver>, app_id: impl Into<String>) -> Self {
        Self {
            resolver,
            app_id: app_id.into(),
        }
    }

    /// Application directory, resolved fresh on every call
    pub fn dir(&self) -> Option<PathBuf> {
        self.resolver
            .app_support_dir()
            .map(|root| root.join(&self.app_id))
    }

    pub fn path_for(&self, kind: DocumentKind) -> Option<PathBuf> {
        self.dir().map(|dir| dir.join(kind.file_name()))
    }

    /// Create the directory (and any missing parents) if it does not exist
    pub fn ensure_dir(dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        debug!("Creating save directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }

    /// Write a document, replacing the previous file.
    ///
    /// Returns `Ok(None)` without touching the disk when no application
    /// directory can be resolved.
    pub fn save<D: Document>(&self, document: &D) -> Result<Option<PathBuf>> {
        let Some(path) = self.path_for(D::KIND) else {
            return Ok(None);
        };

        if let Some(dir) = path.parent() {
            Self::ensure_dir(dir)?;
        }

        let bytes = document.to_bytes()?;
        fs::write(&path, bytes).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }

    /// Read a previously saved document.
    ///
    /// Missing, unreadable and malformed files all yield `None`; only the
    /// latter two are logged as warnings.
    pub fn restore<D: Document>(&self) -> Option<D> {
        let path = self.path_for(D::KIND)?;
        Self::restore_from_path(&path)
    }

    pub fn restore_from_path<D: Document>(path: &Path) -> Option<D> {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved {} at {}", D::KIND, path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match D::from_bytes(&bytes) {
            Ok(document) => {
                debug!("Restored {} from {}", D::KIND, path.display());
                Some(document)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::{Leaderboard, LeaderboardEntry};
    use crate::player::Player;
    use crate::storage::{FixedDir, Unresolved};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(Arc::new(FixedDir::new(dir.path())), "Armory")
    }

    #[test]
    fn test_path_layout() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(
            store.path_for(DocumentKind::Leaderboard).unwrap(),
            temp.path().join("Armory").join("Leaderboard.json")
        );
    }

    #[test]
    fn test_save_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let store = DocumentStore::new(
            Arc::new(FixedDir::new(temp.path().join("a").join("b"))),
            "Armory",
        );

        let path = store.save(&Player::with_gems(5)).unwrap().unwrap();
        assert!(path.is_file());
        assert!(temp.path().join("a/b/Armory").is_dir());
    }

    #[test]
    fn test_save_then_restore() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut board = Leaderboard::new();
        board.append(LeaderboardEntry::new("Quiz", 12));
        store.save(&board).unwrap();

        let restored: Leaderboard = store.restore().unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&Player::with_gems(1_000_000)).unwrap();
        let path = store.save(&Player::with_gems(1)).unwrap().unwrap();

        let restored: Player = DocumentStore::restore_from_path(&path).unwrap();
        assert_eq!(restored.gems(), 1);
    }

    #[test]
    fn test_restore_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(store_in(&temp).restore::<Player>().is_none());
    }

    #[test]
    fn test_restore_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let path = store.path_for(DocumentKind::Player).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"{\"gems\": 4").unwrap();

        assert!(store.restore::<Player>().is_none());
    }

    #[test]
    fn test_unresolved_root_skips_save() {
        let store = DocumentStore::new(Arc::new(Unresolved), "Armory");
        assert!(store.dir().is_none());
        assert!(store.save(&Player::new()).unwrap().is_none());
        assert!(store.restore::<Player>().is_none());
    }

    #[test]
    fn test_create_dir_failure() {
        let temp = TempDir::new().unwrap();
        // A regular file where the root directory should be
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let store = DocumentStore::new(Arc::new(FixedDir::new(&blocker)), "Armory");

        let err = store.save(&Player::new()).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }
}
