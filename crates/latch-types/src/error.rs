// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────
//! Errors for the fallible host-side helpers.
//!
//! The kernel itself is total: construction and evaluation have no
//! error path. Only config loading and divergence measurement can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatchError {
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Divergence inputs were empty after truncation to equal length.
    #[error("empty distribution: nothing to compare")]
    EmptyDistribution,

    /// Divergence inputs contained negative or non-finite entries.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
}

pub type LatchResult<T> = Result<T, LatchError>;
