//! Structural counts and cross-document comparison.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{StructuralMetrics, StructureComparison};

/// Complexity-sum movements inside this dead zone are "similar complexity".
const COMPLEXITY_DEAD_ZONE: f64 = 5.0;

lazy_static! {
    /// Blank-line paragraph separator.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Count paragraphs: blank-line-separated blocks, empty ones dropped.
pub fn paragraph_count(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count()
}

/// Compute structural metrics for one document. `sentence_count` comes from
/// the segmenter.
pub fn analyze(text: &str, sentence_count: usize) -> StructuralMetrics {
    let word_count = text.split_whitespace().count();
    let paragraph_count = paragraph_count(text);
    let character_count = text.chars().count();

    let avg_words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };
    let avg_sentences_per_paragraph = if paragraph_count == 0 {
        0.0
    } else {
        sentence_count as f64 / paragraph_count as f64
    };

    StructuralMetrics {
        word_count,
        sentence_count,
        paragraph_count,
        character_count,
        avg_words_per_sentence,
        avg_sentences_per_paragraph,
    }
}

/// Compare two documents' structure.
pub fn compare(doc_a: StructuralMetrics, doc_b: StructuralMetrics) -> StructureComparison {
    let length_change_percent = if doc_a.character_count == 0 {
        0.0
    } else {
        let raw = (doc_b.character_count as f64 - doc_a.character_count as f64)
            / doc_a.character_count as f64
            * 100.0;
        (raw * 100.0).round() / 100.0
    };

    let complexity_a = doc_a.avg_words_per_sentence + doc_a.avg_sentences_per_paragraph;
    let complexity_b = doc_b.avg_words_per_sentence + doc_b.avg_sentences_per_paragraph;
    let complexity = if complexity_b - complexity_a > COMPLEXITY_DEAD_ZONE {
        "more complex"
    } else if complexity_a - complexity_b > COMPLEXITY_DEAD_ZONE {
        "less complex"
    } else {
        "similar complexity"
    };

    StructureComparison {
        word_delta: doc_b.word_count as i64 - doc_a.word_count as i64,
        sentence_delta: doc_b.sentence_count as i64 - doc_a.sentence_count as i64,
        paragraph_delta: doc_b.paragraph_count as i64 - doc_a.paragraph_count as i64,
        character_delta: doc_b.character_count as i64 - doc_a.character_count as i64,
        length_change_percent,
        complexity: complexity.to_string(),
        doc_a,
        doc_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph_counting() {
        assert_eq!(paragraph_count("one block only"), 1);
        assert_eq!(paragraph_count("first block\n\nsecond block"), 2);
        // Whitespace-only separator lines still split; empty blocks drop.
        assert_eq!(paragraph_count("first\n   \nsecond\n\n\n\nthird"), 3);
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("\n\n\n"), 0);
    }

    #[test]
    fn test_analyze_counts() {
        let text = "Alpha beta gamma delta.\n\nEpsilon zeta eta theta.";
        let metrics = analyze(text, 2);
        assert_eq!(metrics.word_count, 8);
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.avg_words_per_sentence, 4.0);
        assert_eq!(metrics.avg_sentences_per_paragraph, 1.0);
    }

    #[test]
    fn test_analyze_degenerate_input() {
        let metrics = analyze("", 0);
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.avg_words_per_sentence, 0.0);
        assert_eq!(metrics.avg_sentences_per_paragraph, 0.0);
    }

    #[test]
    fn test_length_change_percent_relative_to_a() {
        let a = analyze("aaaa", 1); // 4 chars
        let b = analyze("aaaaaa", 1); // 6 chars
        let comparison = compare(a, b);
        assert_eq!(comparison.length_change_percent, 50.0);
        assert_eq!(comparison.character_delta, 2);
    }

    #[test]
    fn test_length_change_guards_empty_a() {
        let comparison = compare(analyze("", 0), analyze("something new", 1));
        assert_eq!(comparison.length_change_percent, 0.0);
    }

    #[test]
    fn test_complexity_dead_zone() {
        // 10 words/sentence + 1 sentence/paragraph on each side.
        let a = analyze("one two three four five six seven eight nine ten.", 1);
        let b = analyze("uno dos tres cuatro cinco seis siete ocho nueve diez.", 1);
        let comparison = compare(a, b);
        assert_eq!(comparison.complexity, "similar complexity");
    }

    #[test]
    fn test_complexity_increase_detected() {
        let a = analyze("short one here.", 1);
        let b = analyze(
            "this single sentence runs on and on with many words piled together \
             until the average blows straight past the threshold.",
            1,
        );
        let comparison = compare(a, b);
        assert_eq!(comparison.complexity, "more complex");
    }
}
