use crate::types::{Score, StringPair};
use crate::StringSimilarity;

/// Scores each pair in order, returning one similarity per pair.
pub fn score_string_pairs<S: StringSimilarity>(
    string_similarity: &S,
    string_pairs: &[StringPair],
) -> Vec<Score> {
    string_pairs
        .iter()
        .map(|(left, right)| string_similarity.similarity(left, right))
        .collect()
}
