use crate::constants::DEFAULT_SHINGLE_LENGTH;
use crate::models::{BatchScoringConfig, DegeneratePolicy, DiceSimilarityConfig};

pub const DEFAULT_DICE_SIMILARITY_CONFIG: &DiceSimilarityConfig = &DiceSimilarityConfig {
    shingle_length: DEFAULT_SHINGLE_LENGTH,
    degenerate_policy: DegeneratePolicy::CompareInputs,
};

pub const DEFAULT_BATCH_SCORING_CONFIG: &BatchScoringConfig = &BatchScoringConfig {
    shingle_length: DEFAULT_SHINGLE_LENGTH,
    gzip: false,
    distance: false,
};
