//! Coordinator configuration.
//!
//! Storage location, clock and scripture source are injected here so that
//! tests and the CLI can redirect them.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::scripture::{InMemorySource, ScriptureSource, Translation};
use crate::storage::{DirectoryResolver, PlatformDirs};

/// Name of the directory created under the application support root
pub const DEFAULT_APP_ID: &str = "Armory";

/// Configuration for the Armory coordinator
#[derive(Debug, Clone)]
pub struct ArmoryConfig {
    /// Subdirectory of the application support root holding save files
    pub app_id: String,
    /// Translation loaded at startup
    pub translation: Translation,
    pub resolver: Arc<dyn DirectoryResolver>,
    pub source: Arc<dyn ScriptureSource>,
    pub clock: Arc<dyn Clock>,
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            translation: Translation::default(),
            resolver: Arc::new(PlatformDirs),
            source: Arc::new(InMemorySource::armor_of_god()),
            clock: Arc::new(SystemClock),
        }
    }
}

impl ArmoryConfig {
    /// Create a new configuration builder
    pub fn builder() -> ArmoryConfigBuilder {
        ArmoryConfigBuilder::default()
    }
}

/// Builder for ArmoryConfig
#[derive(Debug, Clone, Default)]
pub struct ArmoryConfigBuilder {
    app_id: Option<String>,
    translation: Option<Translation>,
    resolver: Option<Arc<dyn DirectoryResolver>>,
    source: Option<Arc<dyn ScriptureSource>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ArmoryConfigBuilder {
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn translation(mut self, translation: Translation) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Set where the application support root is looked up
    pub fn resolver<R: DirectoryResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn source<S: ScriptureSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Build the configuration
    pub fn build(self) -> ArmoryConfig {
        let default = ArmoryConfig::default();
        ArmoryConfig {
            app_id: self.app_id.unwrap_or(default.app_id),
            translation: self.translation.unwrap_or(default.translation),
            resolver: self.resolver.unwrap_or(default.resolver),
            source: self.source.unwrap_or(default.source),
            clock: self.clock.unwrap_or(default.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FixedDir;
    use std::path::PathBuf;

    #[test]
    fn test_builder_defaults() {
        let config = ArmoryConfig::builder().build();
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert_eq!(config.translation, Translation::Kjv);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ArmoryConfig::builder()
            .app_id("ArmoryTest")
            .translation(Translation::Web)
            .resolver(FixedDir::new("/tmp/armory"))
            .build();

        assert_eq!(config.app_id, "ArmoryTest");
        assert_eq!(config.translation, Translation::Web);
        assert_eq!(
            config.resolver.app_support_dir(),
            Some(PathBuf::from("/tmp/armory"))
        );
    }
}
