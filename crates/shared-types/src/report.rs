//! Serializable report model for document comparison.
//!
//! Every type here is a plain value object: derived synchronously for a
//! single comparison, safe to serialize, and never shared mutably.

/// Top-level result of comparing two documents.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComparisonReport {
    pub metadata: ReportMetadata,
    pub content: ContentComparison,
    pub terms: TermComparison,
    pub clauses: Vec<ClauseComparison>,
    pub risk: RiskComparison,
    pub readability: ReadabilityComparison,
    pub structure: StructureComparison,
    pub diff: DiffReport,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// Caller-supplied label for document A (e.g. a filename). Never parsed.
    pub label_a: String,
    pub label_b: String,
    /// Whole-document Jaccard similarity, as a rounded percentage.
    pub overall_similarity_percent: u32,
}

// ============================================================================
// Content matching
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExactMatch {
    /// Zero-based sentence position in document A.
    pub position_a: usize,
    /// Zero-based sentence position in document B.
    pub position_b: usize,
    pub text: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartialMatch {
    pub position_a: usize,
    pub position_b: usize,
    /// Jaccard similarity of the two sentences, in (0.70, 1.0].
    pub similarity: f64,
    pub text_a: String,
    pub text_b: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UniqueSentence {
    pub position: usize,
    pub text: String,
}

/// Sentence-level match summary. Counts are exact totals; the exemplar lists
/// are capped at [`ContentComparison::EXEMPLAR_CAP`] entries each.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContentComparison {
    pub sentence_count_a: usize,
    pub sentence_count_b: usize,
    pub exact_count: usize,
    pub partial_count: usize,
    pub unique_a_count: usize,
    pub unique_b_count: usize,
    pub exact: Vec<ExactMatch>,
    pub partial: Vec<PartialMatch>,
    pub unique_a: Vec<UniqueSentence>,
    pub unique_b: Vec<UniqueSentence>,
}

impl ContentComparison {
    pub const EXEMPLAR_CAP: usize = 10;
}

// ============================================================================
// Term frequency
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub count_a: u64,
    pub count_b: u64,
    /// Signed difference, `count_b - count_a`.
    pub difference: i64,
    /// `|difference| / (count_a + count_b)`, 0 when both counts are zero.
    pub significance: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TermComparison {
    /// Every vocabulary term present in at least one document, vocabulary order.
    pub entries: Vec<TermEntry>,
    /// Top 10 terms by raw count in document A.
    pub top_terms_a: Vec<TermCount>,
    pub top_terms_b: Vec<TermCount>,
    /// Top 10 entries with significance > 0.5, most significant first.
    pub significant: Vec<TermEntry>,
}

// ============================================================================
// Clause categories
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClauseComparison {
    pub category: String,
    pub count_a: usize,
    pub count_b: usize,
    /// `count_b - count_a`.
    pub delta: i64,
    pub sentences_a: Vec<String>,
    pub sentences_b: Vec<String>,
}

// ============================================================================
// Risk findings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Ordinal used for cross-document comparison; absence of a finding is 0.
    pub fn ordinal(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskFinding {
    pub label: String,
    pub severity: Severity,
    /// Total number of pattern matches across the whole document.
    pub occurrences: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RiskChange {
    Increased,
    Decreased,
    Unchanged,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskChangeEntry {
    pub label: String,
    pub severity_a: Option<Severity>,
    pub severity_b: Option<Severity>,
    pub change: RiskChange,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskComparison {
    pub findings_a: Vec<RiskFinding>,
    pub findings_b: Vec<RiskFinding>,
    pub aggregate_a: Severity,
    pub aggregate_b: Severity,
    pub recommendation_a: String,
    pub recommendation_b: String,
    /// One entry per finding label present in either document, rule order.
    pub changes: Vec<RiskChangeEntry>,
}

// ============================================================================
// Readability & structure
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReadabilityMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Flesch Reading Ease, rounded to the nearest integer.
    pub flesch_score: i32,
    pub reading_level: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReadabilityComparison {
    pub doc_a: ReadabilityMetrics,
    pub doc_b: ReadabilityMetrics,
    /// `doc_b.flesch_score - doc_a.flesch_score`.
    pub score_delta: i32,
    pub word_count_delta: i64,
    /// "simpler" or "more complex" (document B relative to A).
    pub verdict: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StructuralMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub character_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_sentences_per_paragraph: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StructureComparison {
    pub doc_a: StructuralMetrics,
    pub doc_b: StructuralMetrics,
    pub word_delta: i64,
    pub sentence_delta: i64,
    pub paragraph_delta: i64,
    pub character_delta: i64,
    /// Character-count change as a percentage of document A's length.
    pub length_change_percent: f64,
    /// "more complex", "less complex" or "similar complexity".
    pub complexity: String,
}

// ============================================================================
// Structural diff
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DiffTag {
    Added,
    Removed,
    Unchanged,
}

/// 1-based inclusive line range on one side of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

/// A maximal run of consecutive lines sharing one tag. `lines_a` is `None`
/// for added runs and `lines_b` is `None` for removed runs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LineDiffRun {
    pub tag: DiffTag,
    /// The run's lines joined by `\n`.
    pub content: String,
    pub lines_a: Option<LineSpan>,
    pub lines_b: Option<LineSpan>,
}

/// A maximal run of consecutive word tokens sharing one tag.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WordDiffRun {
    pub tag: DiffTag,
    pub content: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DiffStats {
    pub added_lines: usize,
    pub removed_lines: usize,
    pub unchanged_lines: usize,
    pub total_lines: usize,
    /// `(added + removed) / total * 100`, rounded to 2 decimals; 0 when
    /// total is 0.
    pub change_percent: f64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DiffReport {
    pub line_runs: Vec<LineDiffRun>,
    pub word_runs: Vec<WordDiffRun>,
    pub stats: DiffStats,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_severity_ordinals_are_ordered() {
        assert!(Severity::Low.ordinal() < Severity::Medium.ordinal());
        assert!(Severity::Medium.ordinal() < Severity::High.ordinal());
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ComparisonReport {
            metadata: ReportMetadata {
                label_a: "old.txt".into(),
                label_b: "new.txt".into(),
                overall_similarity_percent: 87,
            },
            content: ContentComparison {
                sentence_count_a: 1,
                sentence_count_b: 1,
                exact_count: 1,
                partial_count: 0,
                unique_a_count: 0,
                unique_b_count: 0,
                exact: vec![ExactMatch {
                    position_a: 0,
                    position_b: 0,
                    text: "The service may be terminated at any time.".into(),
                }],
                partial: vec![],
                unique_a: vec![],
                unique_b: vec![],
            },
            terms: TermComparison {
                entries: vec![],
                top_terms_a: vec![],
                top_terms_b: vec![],
                significant: vec![],
            },
            clauses: vec![],
            risk: RiskComparison {
                findings_a: vec![],
                findings_b: vec![],
                aggregate_a: Severity::Low,
                aggregate_b: Severity::Low,
                recommendation_a: String::new(),
                recommendation_b: String::new(),
                changes: vec![],
            },
            readability: ReadabilityComparison {
                doc_a: ReadabilityMetrics {
                    word_count: 8,
                    sentence_count: 1,
                    syllable_count: 12,
                    flesch_score: 72,
                    reading_level: "Fairly Easy".into(),
                },
                doc_b: ReadabilityMetrics {
                    word_count: 8,
                    sentence_count: 1,
                    syllable_count: 12,
                    flesch_score: 72,
                    reading_level: "Fairly Easy".into(),
                },
                score_delta: 0,
                word_count_delta: 0,
                verdict: "simpler".into(),
                recommendation: String::new(),
            },
            structure: StructureComparison {
                doc_a: StructuralMetrics {
                    word_count: 8,
                    sentence_count: 1,
                    paragraph_count: 1,
                    character_count: 42,
                    avg_words_per_sentence: 8.0,
                    avg_sentences_per_paragraph: 1.0,
                },
                doc_b: StructuralMetrics {
                    word_count: 8,
                    sentence_count: 1,
                    paragraph_count: 1,
                    character_count: 42,
                    avg_words_per_sentence: 8.0,
                    avg_sentences_per_paragraph: 1.0,
                },
                word_delta: 0,
                sentence_delta: 0,
                paragraph_delta: 0,
                character_delta: 0,
                length_change_percent: 0.0,
                complexity: "similar complexity".into(),
            },
            diff: DiffReport {
                line_runs: vec![],
                word_runs: vec![],
                stats: DiffStats {
                    added_lines: 0,
                    removed_lines: 0,
                    unchanged_lines: 1,
                    total_lines: 1,
                    change_percent: 0.0,
                },
                summary: "The documents are identical.".into(),
            },
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata.overall_similarity_percent, 87);
        assert_eq!(back.content.exact_count, 1);
        assert_eq!(back.diff.summary, "The documents are identical.");
    }
}
