use crate::types::ShingleLength;

/// How `DiceSimilarity` resolves a comparison in which neither string yields a single shingle,
/// leaving the coefficient's denominator at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// `1.0` if the raw strings are equal, otherwise `0.0`.
    CompareInputs,
    /// Propagate `f64::NAN`, matching the unguarded formula.
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceSimilarityConfig {
    pub shingle_length: ShingleLength,
    pub degenerate_policy: DegeneratePolicy,
}

/// Options for scoring a CSV of `left,right` string pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchScoringConfig {
    pub shingle_length: ShingleLength,
    /// Input is gzip-compressed
    pub gzip: bool,
    /// Write `1 - similarity` instead of similarity
    pub distance: bool,
}
