//! Lexical feature extraction: term frequency, clause categorization and
//! risk pattern assessment. Each pass is driven by its own static pattern
//! table, compiled once and shared read-only.

pub mod clauses;
pub mod risk;
pub mod terms;
