use crate::types::ShingleLength;

pub const DEFAULT_SHINGLE_LENGTH: ShingleLength = 3;

/// Header names of batch input and output CSV files.
pub const LEFT_COLUMN_HEADER: &str = "left";
pub const RIGHT_COLUMN_HEADER: &str = "right";
pub const SCORE_COLUMN_HEADER: &str = "score";
