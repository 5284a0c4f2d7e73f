pub mod report;

pub use report::{
    ClauseComparison, ComparisonReport, ContentComparison, DiffReport, DiffStats, DiffTag,
    ExactMatch, LineDiffRun, LineSpan, PartialMatch, ReadabilityComparison, ReadabilityMetrics,
    ReportMetadata, RiskChange, RiskChangeEntry, RiskComparison, RiskFinding, Severity,
    StructuralMetrics, StructureComparison, TermComparison, TermCount, TermEntry, UniqueSentence,
    WordDiffRun,
};
