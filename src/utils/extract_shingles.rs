use crate::types::{Shingle, ShingleLength};

/// Extracts every `k`-length window of `text`, in order of starting offset.
///
/// Windows are measured in `char`s (Unicode scalar values), not bytes. Repeated windows are
/// returned once per occurrence; callers wanting set semantics dedupe themselves.
///
/// Returns an empty vector when `text` holds fewer than `k` chars or when `k` is `0`.
pub fn extract_shingles(text: &str, k: ShingleLength) -> Vec<Shingle> {
    if k == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();

    if chars.len() < k {
        return Vec::new();
    }

    chars
        .windows(k)
        .map(|window| window.iter().collect::<Shingle>())
        .collect()
}
