use crate::types::Score;

/// Calculate the Sørensen-Dice coefficient `2|A ∩ B| / (|A| + |B|)` between two boolean
/// membership vectors built over the same vocabulary.
///
/// Returns `None` if the vectors differ in length, or if neither vector has a single `true`
/// position (the coefficient is undefined there).
pub fn dice_coefficient(v1: &[bool], v2: &[bool]) -> Option<Score> {
    if v1.len() != v2.len() {
        return None;
    }

    let (intersection, sum) = v1
        .iter()
        .zip(v2)
        .fold((0usize, 0usize), |(inter, sum), (&a, &b)| {
            (inter + (a && b) as usize, sum + a as usize + b as usize)
        });

    if sum == 0 {
        return None;
    }

    Some(2.0 * intersection as Score / sum as Score)
}
