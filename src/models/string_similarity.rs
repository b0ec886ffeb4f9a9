use crate::types::Score;

/// A normalized string similarity, where `1.0` means identical and `0.0` means nothing shared.
pub trait StringSimilarity {
    fn similarity(&self, s1: &str, s2: &str) -> Score;

    /// The complement of `similarity`. Implementations are not required to satisfy the
    /// triangle inequality, so this is not necessarily a metric.
    fn distance(&self, s1: &str, s2: &str) -> Score {
        1.0 - self.similarity(s1, s2)
    }
}
