//! Legal term frequency comparison.
//!
//! A fixed vocabulary is counted with whole-word, case-insensitive matching;
//! "liability" does not count toward "liabilities". The vocabulary carries no
//! stemming on purpose: each surface form is its own term.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{TermComparison, TermCount, TermEntry};

/// The fixed legal vocabulary, in reporting order.
pub const VOCABULARY: &[&str] = &[
    "liability",
    "liable",
    "indemnify",
    "indemnification",
    "arbitration",
    "warranty",
    "disclaimer",
    "termination",
    "terminate",
    "privacy",
    "consent",
    "damages",
    "jurisdiction",
    "governing",
    "dispute",
    "confidential",
    "severability",
    "waiver",
    "waive",
    "refund",
    "subscription",
    "license",
    "copyright",
    "trademark",
    "breach",
    "negligence",
    "compensation",
    "notice",
    "amendment",
    "binding",
];

/// Entries must clear this significance bar to be reported as significant.
const SIGNIFICANCE_FLOOR: f64 = 0.5;

/// How many terms each ranked list carries.
const TOP_TERMS: usize = 10;

lazy_static! {
    /// One whole-word matcher per vocabulary term, compiled once.
    static ref TERM_MATCHERS: Vec<(&'static str, Regex)> = VOCABULARY
        .iter()
        .map(|term| {
            let pattern = format!(r"(?i)\b{term}\b");
            (*term, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Count whole-word occurrences of every vocabulary term in both documents
/// and derive the per-term difference and significance.
pub fn compare_terms(text_a: &str, text_b: &str) -> TermComparison {
    let mut entries = Vec::new();

    for (term, matcher) in TERM_MATCHERS.iter() {
        let count_a = matcher.find_iter(text_a).count() as u64;
        let count_b = matcher.find_iter(text_b).count() as u64;
        if count_a == 0 && count_b == 0 {
            continue;
        }

        let difference = count_b as i64 - count_a as i64;
        let total = count_a + count_b;
        let significance = difference.unsigned_abs() as f64 / total as f64;

        entries.push(TermEntry {
            term: (*term).to_string(),
            count_a,
            count_b,
            difference,
            significance,
        });
    }

    let top_terms_a = rank_by_count(&entries, |e| e.count_a);
    let top_terms_b = rank_by_count(&entries, |e| e.count_b);

    let mut significant: Vec<TermEntry> = entries
        .iter()
        .filter(|e| e.significance > SIGNIFICANCE_FLOOR)
        .cloned()
        .collect();
    significant.sort_by(|x, y| y.significance.total_cmp(&x.significance));
    significant.truncate(TOP_TERMS);

    TermComparison {
        entries,
        top_terms_a,
        top_terms_b,
        significant,
    }
}

fn rank_by_count(entries: &[TermEntry], count: impl Fn(&TermEntry) -> u64) -> Vec<TermCount> {
    let mut ranked: Vec<TermCount> = entries
        .iter()
        .filter(|e| count(e) > 0)
        .map(|e| TermCount {
            term: e.term.clone(),
            count: count(e),
        })
        .collect();
    // Stable sort keeps vocabulary order among ties.
    ranked.sort_by(|x, y| y.count.cmp(&x.count));
    ranked.truncate(TOP_TERMS);
    ranked
}
