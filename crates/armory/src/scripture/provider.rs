use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::{ScriptureSource, ScriptureText, Translation};
use crate::passage::Passage;

/// Holds one translation, loaded in the background.
///
/// `load()` returns immediately; `is_loaded()` turns true once the loader
/// thread has published the text. A failed load is logged and leaves the
/// provider unloaded. Dropping the provider cancels a pending load.
#[derive(Debug)]
pub struct TextProvider {
    translation: Translation,
    source: Arc<dyn ScriptureSource>,
    text: Arc<RwLock<Option<ScriptureText>>>,
    loaded: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    loader: Option<JoinHandle<()>>,
}

impl TextProvider {
    pub fn new(translation: Translation, source: Arc<dyn ScriptureSource>) -> Self {
        Self {
            translation,
            source,
            text: Arc::new(RwLock::new(None)),
            loaded: Arc::new(AtomicBool::new(false)),
            cancelled: Arc::new(AtomicBool::new(false)),
            loader: None,
        }
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Start loading on a background thread. No-op while a load is running
    /// or after the text has been loaded.
    pub fn load(&mut self) {
        if self.is_loaded() || self.is_pending() {
            debug!("{} load already done or in progress", self.translation);
            return;
        }

        self.cancelled.store(false, Ordering::SeqCst);
        let translation = self.translation;
        let source = Arc::clone(&self.source);
        let text = Arc::clone(&self.text);
        let loaded = Arc::clone(&self.loaded);
        let cancelled = Arc::clone(&self.cancelled);

        self.loader = Some(thread::spawn(move || {
            let fetched = match source.fetch(translation) {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!("Failed to load {}: {}", translation, e);
                    return;
                }
            };

            // cancel() takes the same lock, so the check and the publish
            // cannot interleave with it
            let mut guard = match text.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if cancelled.load(Ordering::SeqCst) {
                debug!("{} load cancelled", translation);
                return;
            }
            let count = fetched.len();
            *guard = Some(fetched);
            loaded.store(true, Ordering::SeqCst);
            drop(guard);
            info!("Loaded {} ({} verses)", translation, count);
        }));
    }

    /// Readiness flag, read on every call
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// True while the loader thread is still running
    pub fn is_pending(&self) -> bool {
        self.loader.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Make a running load discard its result.
    ///
    /// Once this returns, the pending load will not publish. A load that
    /// already published stays loaded.
    pub fn cancel(&self) {
        if !self.is_pending() {
            return;
        }
        let _guard = match self.text.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Passage text, `None` until loaded or if a verse is missing
    pub fn passage_text(&self, passage: &Passage) -> Option<String> {
        let guard = self.text.read().ok()?;
        guard.as_ref()?.passage_text(passage)
    }
}

impl Drop for TextProvider {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::scripture::InMemorySource;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::{Duration, Instant};

    /// Blocks `fetch` until the test releases it
    #[derive(Debug)]
    struct GatedSource {
        gate: Mutex<Receiver<()>>,
        inner: InMemorySource,
    }

    impl GatedSource {
        fn new() -> (Self, Sender<()>) {
            let (tx, rx) = mpsc::channel();
            let source = Self {
                gate: Mutex::new(rx),
                inner: InMemorySource::armor_of_god(),
            };
            (source, tx)
        }
    }

    impl ScriptureSource for GatedSource {
        fn fetch(&self, translation: Translation) -> Result<ScriptureText> {
            if let Ok(gate) = self.gate.lock() {
                let _ = gate.recv_timeout(Duration::from_secs(5));
            }
            self.inner.fetch(translation)
        }
    }

    fn wait_until_idle(provider: &TextProvider) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while provider.is_pending() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_load_sets_ready_flag() {
        let (source, release) = GatedSource::new();
        let mut provider = TextProvider::new(Translation::Kjv, Arc::new(source));
        provider.load();
        assert!(!provider.is_loaded());

        release.send(()).unwrap();
        wait_until_idle(&provider);
        assert!(provider.is_loaded());

        let passage: Passage = "Ephesians 6:11".parse().unwrap();
        assert!(provider.passage_text(&passage).unwrap().contains("whole armour"));
    }

    #[test]
    fn test_failed_load_stays_unloaded() {
        let mut provider =
            TextProvider::new(Translation::Bbe, Arc::new(InMemorySource::armor_of_god()));
        provider.load();
        wait_until_idle(&provider);
        assert!(!provider.is_loaded());

        let passage: Passage = "Ephesians 6:11".parse().unwrap();
        assert!(provider.passage_text(&passage).is_none());
    }

    #[test]
    fn test_cancel_discards_result() {
        let (source, release) = GatedSource::new();
        let mut provider = TextProvider::new(Translation::Kjv, Arc::new(source));
        provider.load();
        provider.cancel();

        release.send(()).unwrap();
        wait_until_idle(&provider);
        assert!(!provider.is_loaded());
    }

    #[test]
    fn test_cancel_while_publish_blocked() {
        let (source, release) = GatedSource::new();
        let mut provider = TextProvider::new(Translation::Kjv, Arc::new(source));
        provider.load();

        // Hold the text lock so the loader finishes fetching and then waits
        // at the publish step
        let held = provider.text.write().unwrap();
        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(50));
        provider.cancelled.store(true, Ordering::SeqCst);
        drop(held);

        wait_until_idle(&provider);
        assert!(!provider.is_loaded());
        assert!(provider.text.read().unwrap().is_none());
    }

    #[test]
    fn test_cancel_after_load_keeps_text() {
        let mut provider =
            TextProvider::new(Translation::Kjv, Arc::new(InMemorySource::armor_of_god()));
        provider.load();
        wait_until_idle(&provider);
        provider.cancel();
        assert!(provider.is_loaded());
    }

    #[test]
    fn test_load_is_idempotent_once_loaded() {
        let mut provider =
            TextProvider::new(Translation::Kjv, Arc::new(InMemorySource::armor_of_god()));
        provider.load();
        wait_until_idle(&provider);
        assert!(provider.is_loaded());

        provider.load();
        assert!(!provider.is_pending());
        assert!(provider.is_loaded());
    }
}
