//! Sentence segmentation and text normalization.
//!
//! Sentences are split on runs of terminal punctuation. Fragments of 10
//! characters or fewer are dropped so abbreviations and list markers do not
//! surface as sentences of their own.

use lazy_static::lazy_static;
use regex::Regex;

/// Fragments at or below this trimmed length are not real sentences.
const MIN_SENTENCE_LEN: usize = 10;

lazy_static! {
    /// Runs of terminal punctuation that end a sentence.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+").unwrap();

    /// Everything that is not a word character or whitespace.
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();

    /// Runs of whitespace, for collapsing.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Split raw text into ordered sentence strings.
///
/// Degenerate input is fine: empty or punctuation-free text yields zero or
/// one sentence, never an error.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_LEN)
        .map(str::to_string)
        .collect()
}

/// Canonical form used for exact sentence matching: lower-cased, punctuation
/// stripped, whitespace collapsed.
pub fn normalize_sentence(sentence: &str) -> String {
    let lowered = sentence.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    WHITESPACE.replace_all(stripped.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let text = "You agree to these terms. We may change them at any time! Questions are welcome?";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "You agree to these terms".to_string(),
                "We may change them at any time".to_string(),
                "Questions are welcome".to_string(),
            ]
        );
    }

    #[test]
    fn test_drops_short_fragments() {
        // "Inc" and "Sec. 2" style fragments are under the length floor.
        let text = "Acme Inc. provides this service under the following terms. Sec. 2.";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["provides this service under the following terms".to_string()]
        );
    }

    #[test]
    fn test_punctuation_runs_are_one_boundary() {
        let sentences = split_sentences("Is this really the final version?! It certainly appears to be.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
        assert!(split_sentences("...!!!???").is_empty());
    }

    #[test]
    fn test_punctuation_free_input_is_one_sentence() {
        let sentences = split_sentences("this text never terminates properly");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_normalize_strips_case_punctuation_whitespace() {
        assert_eq!(
            normalize_sentence("  The Company,  collects YOUR data  "),
            "the company collects your data"
        );
        assert_eq!(
            normalize_sentence("The company collects your data"),
            normalize_sentence("THE  COMPANY: collects your \"data\"")
        );
    }

}
