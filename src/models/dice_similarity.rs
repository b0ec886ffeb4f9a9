use crate::config::DEFAULT_DICE_SIMILARITY_CONFIG;
use crate::types::{Score, ShingleLength};
use crate::utils::dice_coefficient;
use crate::{DegeneratePolicy, DiceSimilarityConfig, Error, ShingleSet, StringSimilarity};
use log::debug;

/// Sørensen-Dice coefficient, also known as Sørensen index, Dice's coefficient or
/// Czekanowski's binary (non-quantitative) index.
///
/// Both strings are converted to boolean sets of `k`-shingles over a shared vocabulary and
/// compared as `2|A ∩ B| / (|A| + |B|)`. Shingles are counted once regardless of how often they
/// occur.
///
/// Note: the derived distance does not satisfy the triangle inequality.
#[derive(Debug, Clone, Copy)]
pub struct DiceSimilarity {
    config: DiceSimilarityConfig,
}

impl DiceSimilarity {
    /// Returns `Error::InvalidConfiguration` if `shingle_length` is `0`.
    pub fn new(shingle_length: ShingleLength) -> Result<Self, Error> {
        Self::with_config(DiceSimilarityConfig {
            shingle_length,
            ..*DEFAULT_DICE_SIMILARITY_CONFIG
        })
    }

    pub fn with_config(config: DiceSimilarityConfig) -> Result<Self, Error> {
        if config.shingle_length < 1 {
            return Err(Error::InvalidConfiguration(format!(
                "shingle length must be at least 1, got {}",
                config.shingle_length
            )));
        }

        Ok(DiceSimilarity { config })
    }

    pub fn shingle_length(&self) -> ShingleLength {
        self.config.shingle_length
    }

    pub fn config(&self) -> &DiceSimilarityConfig {
        &self.config
    }

    fn resolve_degenerate(&self, s1: &str, s2: &str) -> Score {
        match self.config.degenerate_policy {
            DegeneratePolicy::CompareInputs => {
                if s1 == s2 {
                    1.0
                } else {
                    0.0
                }
            }
            DegeneratePolicy::NotANumber => Score::NAN,
        }
    }
}

impl Default for DiceSimilarity {
    fn default() -> Self {
        DiceSimilarity {
            config: *DEFAULT_DICE_SIMILARITY_CONFIG,
        }
    }
}

impl StringSimilarity for DiceSimilarity {
    fn similarity(&self, s1: &str, s2: &str) -> Score {
        // A fresh vocabulary per comparison; nothing leaks between calls
        let mut shingle_set = ShingleSet::with_validated_length(self.config.shingle_length);

        shingle_set.parse(s1);
        shingle_set.parse(s2);

        let v1 = shingle_set.boolean_vector_of(s1);
        let v2 = shingle_set.boolean_vector_of(s2);

        match dice_coefficient(&v1, &v2) {
            Some(score) => score,
            None => {
                debug!(
                    "No shingles of length {} in either input; applying {:?}",
                    self.config.shingle_length, self.config.degenerate_policy
                );
                self.resolve_degenerate(s1, s2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let dice = DiceSimilarity::new(2).unwrap();

        // AB BC CD DE DF FG
        // 1  1  1  1  0  0
        // 1  1  1  0  1  1
        // => 2 x 3 / (4 + 5) = 6/9
        assert_eq!(dice.similarity("ABCDE", "ABCDFG"), 2.0 * 3.0 / 9.0);
    }

    #[test]
    fn test_default_shingle_length() {
        assert_eq!(DiceSimilarity::default().shingle_length(), 3);
        assert_eq!(
            DiceSimilarity::default().config().degenerate_policy,
            DegeneratePolicy::CompareInputs
        );
    }

    #[test]
    fn test_rejects_zero_length() {
        assert!(matches!(
            DiceSimilarity::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_degenerate_compare_inputs() {
        let dice = DiceSimilarity::default();

        assert_eq!(dice.similarity("A", "B"), 0.0);
        assert_eq!(dice.similarity("AB", "AB"), 1.0);
        assert_eq!(dice.similarity("", ""), 1.0);
    }

    #[test]
    fn test_degenerate_not_a_number() {
        let dice = DiceSimilarity::with_config(DiceSimilarityConfig {
            shingle_length: 3,
            degenerate_policy: DegeneratePolicy::NotANumber,
        })
        .unwrap();

        assert!(dice.similarity("A", "B").is_nan());
        assert!(dice.distance("A", "B").is_nan());
    }

    #[test]
    fn test_one_side_too_short() {
        let dice = DiceSimilarity::default();
        assert_eq!(dice.similarity("AB", "ABCDEF"), 0.0);
    }

    #[test]
    fn test_distance_complements_similarity() {
        let dice = DiceSimilarity::new(2).unwrap();
        let similarity = dice.similarity("ABCDE", "ABCDFG");
        assert_eq!(dice.distance("ABCDE", "ABCDFG"), 1.0 - similarity);
    }
}
