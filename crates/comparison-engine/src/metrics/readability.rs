//! Flesch Reading Ease estimation and cross-document comparison.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ReadabilityComparison, ReadabilityMetrics};

/// Score gap at which the comparator calls the change significant.
const SIGNIFICANT_SCORE_DELTA: i32 = 10;

lazy_static! {
    /// Vowel-cluster runs used as the syllable estimate.
    static ref VOWEL_CLUSTERS: Regex = Regex::new(r"[aeiouy]+").unwrap();
}

/// Estimate syllables in one word: vowel-cluster runs, minus one for a
/// trailing silent "e", never less than one for a non-empty word.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if letters.is_empty() {
        return 0;
    }

    let mut clusters = VOWEL_CLUSTERS.find_iter(&letters).count();
    if letters.ends_with('e') {
        clusters = clusters.saturating_sub(1);
    }
    clusters.max(1)
}

/// Flesch Reading Ease: `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`.
/// Returns 0 when there are no words or no sentences.
pub fn flesch_score(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    206.835 - 1.015 * (words as f64 / sentences as f64) - 84.6 * (syllables as f64 / words as f64)
}

/// Bucket a Flesch score into one of seven reading levels.
pub fn reading_level(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy"
    } else if score >= 80.0 {
        "Easy"
    } else if score >= 70.0 {
        "Fairly Easy"
    } else if score >= 60.0 {
        "Standard"
    } else if score >= 50.0 {
        "Fairly Difficult"
    } else if score >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}

/// Compute readability metrics for one document. `sentence_count` comes from
/// the segmenter so the whole engine agrees on what a sentence is.
pub fn analyze(text: &str, sentence_count: usize) -> ReadabilityMetrics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let syllable_count: usize = words.iter().map(|w| estimate_syllables(w)).sum();
    let score = flesch_score(words.len(), sentence_count, syllable_count);

    ReadabilityMetrics {
        word_count: words.len(),
        sentence_count,
        syllable_count,
        flesch_score: score.round() as i32,
        reading_level: reading_level(score).to_string(),
    }
}

/// Compare two documents' readability.
pub fn compare(doc_a: ReadabilityMetrics, doc_b: ReadabilityMetrics) -> ReadabilityComparison {
    let score_delta = doc_b.flesch_score - doc_a.flesch_score;
    let word_count_delta = doc_b.word_count as i64 - doc_a.word_count as i64;

    let verdict = if score_delta > 0 { "simpler" } else { "more complex" };

    let recommendation = if score_delta <= -SIGNIFICANT_SCORE_DELTA {
        "The revised document is significantly harder to read; consider shortening sentences and simplifying wording."
    } else if score_delta >= SIGNIFICANT_SCORE_DELTA {
        "The revised document is significantly easier to read."
    } else {
        "Readability is broadly comparable between the two versions."
    };

    ReadabilityComparison {
        doc_a,
        doc_b,
        score_delta,
        word_count_delta,
        verdict: verdict.to_string(),
        recommendation: recommendation.to_string(),
    }
}
