use crate::types::{BooleanVector, Shingle, ShingleId, ShingleLength, ShingleRef};
use crate::utils::extract_shingles;
use crate::Error;
use log::trace;
use std::collections::HashMap;

/// Maps the distinct `k`-shingles seen across one or more `parse` calls to sequential IDs.
///
/// The vocabulary only grows; there is no reset. A `ShingleSet` is meant to live for a single
/// comparison, so reusing one across unrelated comparisons keeps every shingle from every
/// earlier call and lengthens all subsequently computed vectors.
#[derive(Debug, Clone)]
pub struct ShingleSet {
    k: ShingleLength,
    shingle_map: HashMap<Shingle, ShingleId>,
    reverse_shingle_map: Vec<Shingle>,
}

impl ShingleSet {
    /// Creates an empty vocabulary for shingles of `k` chars.
    ///
    /// Returns `Error::InvalidConfiguration` if `k` is `0`.
    pub fn new(k: ShingleLength) -> Result<Self, Error> {
        if k < 1 {
            return Err(Error::InvalidConfiguration(format!(
                "shingle length must be at least 1, got {}",
                k
            )));
        }

        Ok(Self::with_validated_length(k))
    }

    /// Skips the length check for callers which validated `k` at their own construction.
    pub(crate) fn with_validated_length(k: ShingleLength) -> Self {
        debug_assert!(k >= 1);

        ShingleSet {
            k,
            shingle_map: HashMap::new(),
            reverse_shingle_map: Vec::new(),
        }
    }

    /// Adds every shingle of `text` which is not already present, assigning each the next
    /// sequential ID. Strings shorter than `k` leave the vocabulary unchanged.
    pub fn parse(&mut self, text: &str) {
        for shingle in extract_shingles(text, self.k) {
            self.upsert_shingle(shingle);
        }

        trace!(
            "Parsed {} chars; vocabulary holds {} shingles",
            text.chars().count(),
            self.len()
        );
    }

    /// Returns one flag per vocabulary entry, `true` where the entry occurs in `text`.
    ///
    /// Shingles of `text` missing from the vocabulary are not representable and are ignored;
    /// parse every string whose shingles should count before querying.
    pub fn boolean_vector_of(&self, text: &str) -> BooleanVector {
        let mut boolean_vector = vec![false; self.len()];

        for shingle in extract_shingles(text, self.k) {
            if let Some(shingle_id) = self.get_shingle_id(&shingle) {
                boolean_vector[shingle_id] = true;
            }
        }

        boolean_vector
    }

    fn upsert_shingle(&mut self, shingle: Shingle) -> ShingleId {
        if let Some(&shingle_id) = self.shingle_map.get(&shingle) {
            shingle_id
        } else {
            let shingle_id = self.reverse_shingle_map.len();
            self.shingle_map.insert(shingle.clone(), shingle_id);
            self.reverse_shingle_map.push(shingle);
            shingle_id
        }
    }

    /// Gets the ID for a shingle, or None if the shingle is not present
    pub fn get_shingle_id(&self, shingle: &ShingleRef) -> Option<ShingleId> {
        self.shingle_map.get(shingle).copied()
    }

    pub fn get_shingle_by_id(&self, shingle_id: ShingleId) -> Option<&ShingleRef> {
        self.reverse_shingle_map
            .get(shingle_id)
            .map(|shingle| shingle.as_str())
    }

    /// Iterates the vocabulary in ID order.
    pub fn shingles(&self) -> impl Iterator<Item = &ShingleRef> {
        self.reverse_shingle_map.iter().map(|shingle| shingle.as_str())
    }

    pub fn shingle_length(&self) -> ShingleLength {
        self.k
    }

    /// Gets the total number of unique shingles
    pub fn len(&self) -> usize {
        self.reverse_shingle_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse_shingle_map.is_empty()
    }
}
