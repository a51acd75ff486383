use std::path::PathBuf;

use thiserror::Error;

use crate::player::ArmorPiece;
use crate::storage::DocumentKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create save directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {kind} document: {source}")]
    Encode {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid passage reference: {0}")]
    InvalidPassage(String),

    #[error("Unknown translation: {0}")]
    UnknownTranslation(String),

    #[error("Failed to load scripture text: {0}")]
    TextLoad(String),

    #[error("Not enough gems: need {needed}, have {available}")]
    InsufficientGems { needed: u32, available: u32 },

    #[error("{0} is already at the maximum level")]
    ArmorMaxed(ArmorPiece),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Error::CreateDir { source, .. } | Error::Write { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
