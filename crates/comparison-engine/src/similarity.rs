//! Set-based similarity between two pieces of text.

use std::collections::HashSet;

/// Jaccard index over lower-cased whitespace-delimited word sets:
/// `|A ∩ B| / |A ∪ B|`. Duplicates and word order are ignored. Defined as 0
/// when both sets are empty. Symmetric, in [0.0, 1.0].
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
    let set_b: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();

    intersection as f64 / union as f64
}

/// Whole-document similarity as a rounded percentage.
pub fn overall_similarity_percent(a: &str, b: &str) -> u32 {
    (jaccard(a, b) * 100.0).round() as u32
}
