//! Readability and structural document metrics.

pub mod readability;
pub mod structure;
