mod config;
pub use config::{DEFAULT_BATCH_SCORING_CONFIG, DEFAULT_DICE_SIMILARITY_CONFIG};
mod constants;
pub use constants::{
    DEFAULT_SHINGLE_LENGTH, LEFT_COLUMN_HEADER, RIGHT_COLUMN_HEADER, SCORE_COLUMN_HEADER,
};
pub mod models;
pub use models::{
    BatchScoringConfig, DegeneratePolicy, DiceSimilarity, DiceSimilarityConfig, Error, ShingleSet,
    StringSimilarity,
};
pub mod types;
pub use types::{BooleanVector, Score, Shingle, ShingleId, ShingleLength, ShingleRef, StringPair};
pub mod utils;
pub use utils::{
    dice_coefficient, extract_shingles, read_string_pairs_from_gzip_reader,
    read_string_pairs_from_reader, score_csv, score_string_pairs,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Computes the Sørensen-Dice similarity of `s1` and `s2` using the default configuration
/// (3-char shingles).
pub fn dice_similarity(s1: &str, s2: &str) -> Score {
    DiceSimilarity::default().similarity(s1, s2)
}

/// Computes the Sørensen-Dice similarity of `s1` and `s2` over shingles of `shingle_length`
/// chars.
pub fn dice_similarity_with_shingle_length(
    s1: &str,
    s2: &str,
    shingle_length: ShingleLength,
) -> Result<Score, Error> {
    let dice = DiceSimilarity::new(shingle_length)?;

    Ok(dice.similarity(s1, s2))
}
