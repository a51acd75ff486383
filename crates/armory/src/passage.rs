//! Scripture passage references.
//!
//! A passage covers a contiguous verse range inside one chapter, written
//! the usual way: `John 3:16` or `1 John 4:7-8`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A verse range within a single chapter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPassage")]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
}

/// Unchecked form read from saved files
#[derive(Deserialize)]
struct RawPassage {
    book: String,
    chapter: u32,
    start_verse: u32,
    end_verse: u32,
}

impl TryFrom<RawPassage> for Passage {
    type Error = Error;

    fn try_from(raw: RawPassage) -> Result<Self> {
        Self::new(&raw.book, raw.chapter, raw.start_verse, raw.end_verse)
    }
}

impl Passage {
    /// Create a passage, rejecting empty books and inverted or zero ranges
    pub fn new(book: &str, chapter: u32, start_verse: u32, end_verse: u32) -> Result<Self> {
        let book = book.trim();
        if book.is_empty() || chapter == 0 || start_verse == 0 || end_verse < start_verse {
            return Err(Error::InvalidPassage(format!(
                "{} {}:{}-{}",
                book, chapter, start_verse, end_verse
            )));
        }
        Ok(Self {
            book: book.to_string(),
            chapter,
            start_verse,
            end_verse,
        })
    }

    /// Single-verse passage
    pub fn verse(book: &str, chapter: u32, verse: u32) -> Result<Self> {
        Self::new(book, chapter, verse, verse)
    }

    /// Canonical reference string, also used as the review-log key
    pub fn reference(&self) -> String {
        self.to_string()
    }

    pub fn verses(&self) -> impl Iterator<Item = u32> {
        self.start_verse..=self.end_verse
    }

    pub fn verse_count(&self) -> u32 {
        self.end_verse - self.start_verse + 1
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_verse == self.end_verse {
            write!(f, "{} {}:{}", self.book, self.chapter, self.start_verse)
        } else {
            write!(
                f,
                "{} {}:{}-{}",
                self.book, self.chapter, self.start_verse, self.end_verse
            )
        }
    }
}

impl FromStr for Passage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPassage(s.to_string());
        let s = s.trim();

        // Book names may contain spaces ("1 John", "Song of Solomon")
        let (book, location) = s.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
        let (chapter, verses) = location.split_once(':').ok_or_else(invalid)?;
        let (start, end) = match verses.split_once('-') {
            Some((start, end)) => (start, end),
            None => (verses, verses),
        };

        let chapter = chapter.trim().parse().map_err(|_| invalid())?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;

        Self::new(book, chapter, start, end).map_err(|_| invalid())
    }
}
