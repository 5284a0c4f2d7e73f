//! Clause categorization: tagging sentences with legal topics.
//!
//! Categories are data, not code: each is a name plus an ordered list of
//! detector patterns, compiled once. A sentence belongs to a category when at
//! least one detector matches, and may belong to several categories.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ClauseComparison;

/// (category name, detector patterns)
const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Privacy & Data",
        &[
            r"(?i)\bpersonal\s+(data|information)\b",
            r"(?i)\bprivacy\b",
            r"(?i)\bdata\s+(collection|processing|sharing|retention)\b",
            r"(?i)\bcookies?\b",
            r"(?i)\btracking\b",
        ],
    ),
    (
        "Liability & Risk",
        &[
            r"(?i)\bliab(le|ility|ilities)\b",
            r"(?i)\bindemnif\w+\b",
            r"(?i)\bhold\s+harmless\b",
            r"(?i)\bdamages\b",
            r"(?i)\bnegligence\b",
        ],
    ),
    (
        "Termination",
        &[
            r"(?i)\bterminat\w+\b",
            r"(?i)\bsuspend\w*\b",
            r"(?i)\bcancel\w*\b",
            r"(?i)\bdiscontinu\w+\b",
        ],
    ),
    (
        "Payments & Fees",
        &[
            r"(?i)\bpayments?\b",
            r"(?i)\bfees?\b",
            r"(?i)\bbilling\b",
            r"(?i)\brefunds?\b",
            r"(?i)\bsubscriptions?\b",
            r"(?i)\bcharges?\b",
        ],
    ),
    (
        "Dispute Resolution",
        &[
            r"(?i)\barbitration\b",
            r"(?i)\bdisputes?\b",
            r"(?i)\bclass\s+action\b",
            r"(?i)\bgoverning\s+law\b",
            r"(?i)\bjurisdiction\b",
            r"(?i)\bmediation\b",
        ],
    ),
    (
        "User Content & License",
        &[
            r"(?i)\blicens\w+\b",
            r"(?i)\buser\s+content\b",
            r"(?i)\bintellectual\s+property\b",
            r"(?i)\bcopyright\b",
            r"(?i)\btrademark\b",
        ],
    ),
    (
        "Modifications",
        &[
            r"(?i)\bmodif\w+\b",
            r"(?i)\bamend\w*\b",
            r"(?i)\bchanges?\s+to\s+(these\s+)?terms\b",
            r"(?i)\bupdate\w*\s+(these\s+)?terms\b",
        ],
    ),
    (
        "Warranties & Disclaimers",
        &[
            r"(?i)\bwarrant\w*\b",
            r"(?i)\bas\s+is\b",
            r"(?i)\bdisclaim\w*\b",
            r"(?i)\bguarantees?\b",
        ],
    ),
];

lazy_static! {
    /// Category table with detectors compiled once at startup.
    static ref CATEGORIES: Vec<(&'static str, Vec<Regex>)> = CATEGORY_TABLE
        .iter()
        .map(|(name, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect();
            (*name, compiled)
        })
        .collect();
}

/// Names of all clause categories, in table order.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// Tag both documents' sentences and report per-category counts and content.
pub fn compare_clauses(
    sentences_a: &[String],
    sentences_b: &[String],
) -> Vec<ClauseComparison> {
    CATEGORIES
        .iter()
        .map(|(name, detectors)| {
            let matched_a = matching_sentences(sentences_a, detectors);
            let matched_b = matching_sentences(sentences_b, detectors);
            ClauseComparison {
                category: (*name).to_string(),
                count_a: matched_a.len(),
                count_b: matched_b.len(),
                delta: matched_b.len() as i64 - matched_a.len() as i64,
                sentences_a: matched_a,
                sentences_b: matched_b,
            }
        })
        .collect()
}

fn matching_sentences(sentences: &[String], detectors: &[Regex]) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| detectors.iter().any(|d| d.is_match(sentence)))
        .cloned()
        .collect()
}
