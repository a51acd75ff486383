//! Scripture text.
//!
//! Text is supplied by a [`ScriptureSource`] per [`Translation`] and held by
//! a [`TextProvider`], which loads it on a background thread.

mod provider;

pub use provider::*;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, Result};
use crate::passage::Passage;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Translation {
    /// King James Version
    #[default]
    #[strum(serialize = "KJV")]
    Kjv,
    /// World English Bible
    #[strum(serialize = "WEB")]
    Web,
    /// American Standard Version
    #[strum(serialize = "ASV")]
    Asv,
    /// Bible in Basic English
    #[strum(serialize = "BBE")]
    Bbe,
}

impl Translation {
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::UnknownTranslation(name.to_string()))
    }

    /// File stem used by [`JsonDirSource`], e.g. `kjv`
    pub fn file_stem(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }
}

/// One verse as stored in a translation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

type VerseKey = (String, u32, u32);

fn verse_key(book: &str, chapter: u32, verse: u32) -> VerseKey {
    (book.to_lowercase(), chapter, verse)
}

/// A loaded translation
#[derive(Debug, Clone, Default)]
pub struct ScriptureText {
    verses: BTreeMap<VerseKey, String>,
}

impl ScriptureText {
    pub fn from_verses(verses: impl IntoIterator<Item = Verse>) -> Self {
        let verses = verses
            .into_iter()
            .map(|v| (verse_key(&v.book, v.chapter, v.verse), v.text))
            .collect();
        Self { verses }
    }

    pub fn verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.verses
            .get(&verse_key(book, chapter, verse))
            .map(String::as_str)
    }

    /// Text of every verse in the passage joined by spaces, or `None` if any
    /// verse is missing. Book names match case-insensitively.
    pub fn passage_text(&self, passage: &Passage) -> Option<String> {
        let parts = passage
            .verses()
            .map(|v| self.verse(&passage.book, passage.chapter, v))
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join(" "))
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Where translation text comes from. Called from the loader thread.
pub trait ScriptureSource: fmt::Debug + Send + Sync {
    fn fetch(&self, translation: Translation) -> Result<ScriptureText>;
}

/// Reads `<dir>/<translation>.json`, a JSON array of [`Verse`]
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, translation: Translation) -> PathBuf {
        self.dir.join(format!("{}.json", translation.file_stem()))
    }
}

impl ScriptureSource for JsonDirSource {
    fn fetch(&self, translation: Translation) -> Result<ScriptureText> {
        let path = self.path_for(translation);
        debug!("Reading {} text from {}", translation, path.display());

        let content = fs::read(&path)?;
        let verses: Vec<Verse> = serde_json::from_slice(&content)?;
        if verses.is_empty() {
            return Err(Error::TextLoad(format!("{} has no verses", path.display())));
        }
        Ok(ScriptureText::from_verses(verses))
    }
}

/// Verses held in memory, keyed by translation
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    translations: HashMap<Translation, Vec<Verse>>,
}

/// First verse of [`ARMOR_OF_GOD_KJV`]
const ARMOR_OF_GOD_FIRST_VERSE: u32 = 10;

/// Ephesians 6:10-17 (KJV)
const ARMOR_OF_GOD_KJV: [&str; 8] = [
    "Finally, my brethren, be strong in the Lord, and in the power of his might.",
    "Put on the whole armour of God, that ye may be able to stand against the wiles of the devil.",
    "For we wrestle not against flesh and blood, but against principalities, against powers, \
     against the rulers of the darkness of this world, against spiritual wickedness in high \
     places.",
    "Wherefore take unto you the whole armour of God, that ye may be able to withstand in the \
     evil day, and having done all, to stand.",
    "Stand therefore, having your loins girt about with truth, and having on the breastplate of \
     righteousness;",
    "And your feet shod with the preparation of the gospel of peace;",
    "Above all, taking the shield of faith, wherewith ye shall be able to quench all the fiery \
     darts of the wicked.",
    "And take the helmet of salvation, and the sword of the Spirit, which is the word of God:",
];

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verses(mut self, translation: Translation, verses: Vec<Verse>) -> Self {
        self.translations.entry(translation).or_default().extend(verses);
        self
    }

    /// The armor of God passage, available when no text directory is set up
    pub fn armor_of_god() -> Self {
        let verses = (ARMOR_OF_GOD_FIRST_VERSE..)
            .zip(ARMOR_OF_GOD_KJV)
            .map(|(verse, text)| Verse {
                book: "Ephesians".to_string(),
                chapter: 6,
                verse,
                text: text.to_string(),
            })
            .collect();
        Self::new().with_verses(Translation::Kjv, verses)
    }
}

impl ScriptureSource for InMemorySource {
    fn fetch(&self, translation: Translation) -> Result<ScriptureText> {
        match self.translations.get(&translation) {
            Some(verses) => Ok(ScriptureText::from_verses(verses.iter().cloned())),
            None => Err(Error::TextLoad(format!("no {} text available", translation))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_translation_parse() {
        assert_eq!("kjv".parse::<Translation>().unwrap(), Translation::Kjv);
        assert_eq!("WEB".parse::<Translation>().unwrap(), Translation::Web);
        assert!(matches!(
            Translation::from_name("NIV"),
            Err(Error::UnknownTranslation(_))
        ));
        assert_eq!(Translation::from_name(" asv ").unwrap(), Translation::Asv);
        assert_eq!(Translation::Bbe.file_stem(), "bbe");
    }

    #[test]
    fn test_passage_text_joins_verses() {
        let text = InMemorySource::armor_of_god()
            .fetch(Translation::Kjv)
            .unwrap();
        let passage: Passage = "ephesians 6:16-17".parse().unwrap();
        let joined = text.passage_text(&passage).unwrap();
        assert!(joined.starts_with("Above all"));
        assert!(joined.ends_with("word of God:"));
    }

    #[test]
    fn test_armor_of_god_verses_numbered() {
        let text = InMemorySource::armor_of_god()
            .fetch(Translation::Kjv)
            .unwrap();
        assert_eq!(text.len(), 8);
        assert!(text.verse("Ephesians", 6, 10).unwrap().starts_with("Finally"));
        assert!(text.verse("Ephesians", 6, 12).unwrap().ends_with("in high places."));
        assert!(!text.verse("Ephesians", 6, 12).unwrap().contains("  "));
    }

    #[test]
    fn test_passage_text_missing_verse() {
        let text = InMemorySource::armor_of_god()
            .fetch(Translation::Kjv)
            .unwrap();
        let passage: Passage = "Ephesians 6:17-18".parse().unwrap();
        assert!(text.passage_text(&passage).is_none());
    }

    #[test]
    fn test_in_memory_missing_translation() {
        let err = InMemorySource::armor_of_god()
            .fetch(Translation::Web)
            .unwrap_err();
        assert!(matches!(err, Error::TextLoad(_)));
    }

    #[test]
    fn test_json_dir_source() {
        let temp = TempDir::new().unwrap();
        let verses = vec![Verse {
            book: "John".to_string(),
            chapter: 11,
            verse: 35,
            text: "Jesus wept.".to_string(),
        }];
        fs::write(
            temp.path().join("web.json"),
            serde_json::to_vec(&verses).unwrap(),
        )
        .unwrap();

        let source = JsonDirSource::new(temp.path());
        let text = source.fetch(Translation::Web).unwrap();
        assert_eq!(text.verse("John", 11, 35), Some("Jesus wept."));

        let err = source.fetch(Translation::Kjv).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_json_dir_source_empty_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("kjv.json"), b"[]").unwrap();
        let err = JsonDirSource::new(temp.path())
            .fetch(Translation::Kjv)
            .unwrap_err();
        assert!(matches!(err, Error::TextLoad(_)));
    }
}
