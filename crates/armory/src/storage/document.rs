use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, IntoStaticStr};

use crate::error::{Error, Result};

/// Extension of saved document files
pub const DOCUMENT_EXTENSION: &str = "json";

/// The documents the coordinator persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum DocumentKind {
    Player,
    Leaderboard,
}

impl DocumentKind {
    /// File name inside the application directory, e.g. `Player.json`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self, DOCUMENT_EXTENSION)
    }
}

/// An aggregate saved in full as one JSON file
pub trait Document: Serialize + DeserializeOwned {
    const KIND: DocumentKind;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|source| Error::Encode {
            kind: Self::KIND,
            source,
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
