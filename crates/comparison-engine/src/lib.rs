//! Document comparison and risk analysis engine.
//!
//! Compares two plain-text legal documents and produces one deterministic,
//! JSON-serializable [`ComparisonReport`]: sentence-level content matching,
//! legal term frequency, clause categorization, risk pattern findings,
//! readability and structural metrics, and a line/word structural diff.
//!
//! The engine performs no I/O. Text extraction, narrative summarization and
//! persistence are the caller's concern; this crate takes two strings and
//! two opaque labels and hands back a value object.

pub mod diff;
pub mod error;
pub mod lexical;
pub mod matcher;
pub mod metrics;
pub mod segment;
pub mod similarity;

use shared_types::{ComparisonReport, ReportMetadata};
use tracing::{debug, info_span};

pub use error::EngineError;

/// Inputs above this size are rejected. Sentence matching and diff alignment
/// are O(n·m) in their unit counts.
pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Stateless comparison engine. All pattern tables are compiled once,
/// process-wide; the engine itself holds nothing, so one value can be shared
/// freely across threads and every call is independent.
pub struct ComparisonEngine;

impl ComparisonEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare two documents. Labels are opaque report metadata (typically
    /// the original filenames) and are never parsed.
    ///
    /// Degenerate text (empty, no sentences, no words) produces a report
    /// with zeroed ratios; the only error is an input over [`MAX_INPUT_BYTES`].
    pub fn compare(
        &self,
        text_a: &str,
        text_b: &str,
        label_a: &str,
        label_b: &str,
    ) -> Result<ComparisonReport, EngineError> {
        check_size(text_a, label_a)?;
        check_size(text_b, label_b)?;

        let span = info_span!("compare", label_a, label_b);
        let _guard = span.enter();

        let sentences_a = segment::split_sentences(text_a);
        let sentences_b = segment::split_sentences(text_b);
        debug!(
            sentences_a = sentences_a.len(),
            sentences_b = sentences_b.len(),
            "segmented documents"
        );

        let content = matcher::match_sentences(&sentences_a, &sentences_b);
        debug!(
            exact = content.exact_count,
            partial = content.partial_count,
            "matched sentences"
        );

        let terms = lexical::terms::compare_terms(text_a, text_b);
        let clauses = lexical::clauses::compare_clauses(&sentences_a, &sentences_b);
        let risk = lexical::risk::compare_risk(text_a, text_b);
        debug!(
            findings_a = risk.findings_a.len(),
            findings_b = risk.findings_b.len(),
            "assessed risk patterns"
        );

        let readability = metrics::readability::compare(
            metrics::readability::analyze(text_a, sentences_a.len()),
            metrics::readability::analyze(text_b, sentences_b.len()),
        );
        let structure = metrics::structure::compare(
            metrics::structure::analyze(text_a, sentences_a.len()),
            metrics::structure::analyze(text_b, sentences_b.len()),
        );

        let diff = diff::diff_documents(text_a, text_b);

        Ok(ComparisonReport {
            metadata: ReportMetadata {
                label_a: label_a.to_string(),
                label_b: label_b.to_string(),
                overall_similarity_percent: similarity::overall_similarity_percent(text_a, text_b),
            },
            content,
            terms,
            clauses,
            risk,
            readability,
            structure,
            diff,
        })
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn check_size(text: &str, label: &str) -> Result<(), EngineError> {
    if text.len() > MAX_INPUT_BYTES {
        return Err(EngineError::InputTooLarge {
            label: label.to_string(),
            size: text.len(),
            max: MAX_INPUT_BYTES,
        });
    }
    Ok(())
}

/// Convenience wrapper over a throwaway [`ComparisonEngine`].
pub fn compare(
    text_a: &str,
    text_b: &str,
    label_a: &str,
    label_b: &str,
) -> Result<ComparisonReport, EngineError> {
    ComparisonEngine::new().compare(text_a, text_b, label_a, label_b)
}
