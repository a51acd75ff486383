use std::fmt;
use std::path::PathBuf;

/// Supplies the per-user application support directory that save files
/// live under.
pub trait DirectoryResolver: fmt::Debug + Send + Sync {
    /// `None` when the platform has no such directory; saving is then
    /// skipped.
    fn app_support_dir(&self) -> Option<PathBuf>;
}

/// The platform data directory (`~/Library/Application Support` on macOS,
/// `$XDG_DATA_HOME` on Linux, `%APPDATA%` on Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirs;

impl DirectoryResolver for PlatformDirs {
    fn app_support_dir(&self) -> Option<PathBuf> {
        dirs::data_dir()
    }
}

/// A fixed root directory
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl FixedDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl DirectoryResolver for FixedDir {
    fn app_support_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// No directory at all. State lives in memory only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl DirectoryResolver for Unresolved {
    fn app_support_dir(&self) -> Option<PathBuf> {
        None
    }
}
