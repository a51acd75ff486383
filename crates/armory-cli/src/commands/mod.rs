//! CLI command implementations.

pub mod passages;
pub mod play;
pub mod scores;
pub mod status;

use anyhow::{Context, Result};
use armory::Passage;

/// Join reference words from the command line ("John", "3:16") and parse
pub fn parse_reference(words: &[String]) -> Result<Passage> {
    let reference = words.join(" ");
    reference.parse().with_context(|| {
        format!(
            "Expected a reference like \"John 3:16-18\", got {:?}",
            reference
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_joins_words() {
        let words: Vec<String> = ["Song", "of", "Solomon", "2:4"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let passage = parse_reference(&words).unwrap();
        assert_eq!(passage.book, "Song of Solomon");
    }

    #[test]
    fn test_parse_reference_error_mentions_input() {
        let err = parse_reference(&["Genesis".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Genesis"));
    }
}
