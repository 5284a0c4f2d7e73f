//! Greedy sentence-level content matching between two documents.
//!
//! Each sentence of document A is resolved, in document order, to the first
//! exact normalized match in B, else to the highest-scoring partial match
//! above the similarity threshold, else declared unique to A. The pass is
//! deliberately greedy rather than a global optimal assignment: results can
//! depend on sentence order, and duplicated near-identical sentences in A may
//! resolve to the same B sentence via the exact search.

use std::collections::HashSet;

use shared_types::{ContentComparison, ExactMatch, PartialMatch, UniqueSentence};

use crate::segment::normalize_sentence;
use crate::similarity::jaccard;

/// A pair is a partial match only when its similarity is strictly above this.
pub const PARTIAL_MATCH_THRESHOLD: f64 = 0.70;

/// Classify every sentence of both documents into exact / partial / unique.
///
/// Counts in the result are exact totals; the exemplar lists are capped at
/// [`ContentComparison::EXEMPLAR_CAP`] entries each.
pub fn match_sentences(sentences_a: &[String], sentences_b: &[String]) -> ContentComparison {
    let normalized_b: Vec<String> = sentences_b
        .iter()
        .map(|s| normalize_sentence(s))
        .collect();

    // B positions already chosen as an exact or partial target.
    let mut used_b: HashSet<usize> = HashSet::new();

    let mut exact = Vec::new();
    let mut partial = Vec::new();
    let mut unique_a = Vec::new();

    for (position_a, sentence_a) in sentences_a.iter().enumerate() {
        let normalized_a = normalize_sentence(sentence_a);

        // Exact search scans all of B, first occurrence wins. A B sentence
        // can satisfy more than one exact search when A repeats itself.
        if let Some(position_b) = normalized_b.iter().position(|n| *n == normalized_a) {
            exact.push(ExactMatch {
                position_a,
                position_b,
                text: sentence_a.clone(),
            });
            used_b.insert(position_b);
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (position_b, sentence_b) in sentences_b.iter().enumerate() {
            if used_b.contains(&position_b) {
                continue;
            }
            let score = jaccard(sentence_a, sentence_b);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position_b, score));
            }
        }

        match best {
            Some((position_b, score)) if score > PARTIAL_MATCH_THRESHOLD => {
                partial.push(PartialMatch {
                    position_a,
                    position_b,
                    similarity: score,
                    text_a: sentence_a.clone(),
                    text_b: sentences_b[position_b].clone(),
                });
                used_b.insert(position_b);
            }
            _ => unique_a.push(UniqueSentence {
                position: position_a,
                text: sentence_a.clone(),
            }),
        }
    }

    let unique_b: Vec<UniqueSentence> = sentences_b
        .iter()
        .enumerate()
        .filter(|(position, _)| !used_b.contains(position))
        .map(|(position, text)| UniqueSentence {
            position,
            text: text.clone(),
        })
        .collect();

    let mut result = ContentComparison {
        sentence_count_a: sentences_a.len(),
        sentence_count_b: sentences_b.len(),
        exact_count: exact.len(),
        partial_count: partial.len(),
        unique_a_count: unique_a.len(),
        unique_b_count: unique_b.len(),
        exact,
        partial,
        unique_a,
        unique_b,
    };

    result.exact.truncate(ContentComparison::EXEMPLAR_CAP);
    result.partial.truncate(ContentComparison::EXEMPLAR_CAP);
    result.unique_a.truncate(ContentComparison::EXEMPLAR_CAP);
    result.unique_b.truncate(ContentComparison::EXEMPLAR_CAP);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let a = sentences(&["The Company collects your data."]);
        let b = sentences(&["the company, collects YOUR data"]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.exact_count, 1);
        assert_eq!(result.partial_count, 0);
        assert_eq!(result.unique_a_count, 0);
        assert_eq!(result.unique_b_count, 0);
    }

    #[test]
    fn test_every_a_sentence_classified_exactly_once() {
        let a = sentences(&[
            "You must accept these terms before using the service.",
            "We reserve the right to suspend accounts for any violation of policy.",
            "Something entirely different lives in this sentence only.",
        ]);
        let b = sentences(&[
            "You must accept these terms before using the service.",
            "We reserve the right to suspend accounts for violation of policy.",
        ]);
        let result = match_sentences(&a, &b);
        assert_eq!(
            result.exact_count + result.partial_count + result.unique_a_count,
            a.len()
        );
    }

    #[test]
    fn test_exact_count_bounded_by_smaller_document() {
        let a = sentences(&[
            "Payments are processed on the first of each month.",
            "Payments are processed on the first of each month.",
        ]);
        let b = sentences(&["Payments are processed on the first of each month."]);
        let result = match_sentences(&a, &b);
        // Duplicated A sentences both hit the same B target; the total still
        // reflects both, which is the accepted greedy behavior.
        assert_eq!(result.exact_count, 2);
        assert_eq!(result.unique_b_count, 0);
    }

    #[test]
    fn test_similarity_at_threshold_is_unique_not_partial() {
        // 7 shared words of 10 distinct: Jaccard is exactly 0.70, which does
        // not clear the strict > 0.70 bar.
        let a = sentences(&["data privacy consent license warranty damages notice alpha beta gamma"]);
        let b = sentences(&["data privacy consent license warranty damages notice"]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.partial_count, 0);
        assert_eq!(result.unique_a_count, 1);
        assert_eq!(result.unique_b_count, 1);
    }

    #[test]
    fn test_similarity_above_threshold_is_partial() {
        // 8 shared words of 10 distinct: Jaccard 0.80.
        let a = sentences(&["data privacy consent license warranty damages notice alpha beta gamma"]);
        let b = sentences(&["data privacy consent license warranty damages notice alpha"]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.partial_count, 1);
        assert!(result.partial[0].similarity > PARTIAL_MATCH_THRESHOLD);
        assert!(result.partial[0].similarity < 1.0);
        assert_eq!(result.unique_b_count, 0);
    }

    #[test]
    fn test_expanded_sentence_lands_as_unique() {
        // 5 shared of 11 distinct tokens (0.45): an expanded rewrite is not
        // similar enough to count as a partial match.
        let a = sentences(&["The company collects your data"]);
        let b = sentences(&[
            "The company collects your data and shares it with third parties",
        ]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.exact_count, 0);
        assert_eq!(result.partial_count, 0);
        assert_eq!(result.unique_a_count, 1);
        assert_eq!(result.unique_b_count, 1);
    }

    #[test]
    fn test_unmatched_b_sentences_are_unique_to_b() {
        let a = sentences(&["Refunds are issued within thirty days of cancellation."]);
        let b = sentences(&[
            "Refunds are issued within thirty days of cancellation.",
            "Arbitration is mandatory for all disputes arising under this agreement.",
        ]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.unique_b_count, 1);
        assert_eq!(result.unique_b[0].position, 1);
    }

    #[test]
    fn test_exemplar_lists_are_capped_but_counts_exact() {
        let a: Vec<String> = (0..15)
            .map(|i| format!("Completely unique sentence number {i} about topic {i}"))
            .collect();
        let b = sentences(&["Nothing here resembles the other document at all."]);
        let result = match_sentences(&a, &b);
        assert_eq!(result.unique_a_count, 15);
        assert_eq!(result.unique_a.len(), ContentComparison::EXEMPLAR_CAP);
    }

    #[test]
    fn test_empty_documents() {
        let result = match_sentences(&[], &[]);
        assert_eq!(result.exact_count, 0);
        assert_eq!(result.partial_count, 0);
        assert_eq!(result.unique_a_count, 0);
        assert_eq!(result.unique_b_count, 0);
    }
}
