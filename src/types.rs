// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a shingle as an owned `String`. A shingle is a run of exactly `k` consecutive
/// `char`s taken from a source string.
pub type Shingle = String;

/// Represents a borrowed view of a shingle as a `str`. This is used when ownership is not required.
pub type ShingleRef = str;

/// A unique identifier for a shingle, represented as a `usize`. Identifiers are assigned in
/// insertion order and double as positions within a `BooleanVector`.
pub type ShingleId = usize;

/// The window length `k`, counted in `char`s.
pub type ShingleLength = usize;

/// Per-vocabulary-entry membership flags for a single string. Position `i` is `true` if the
/// vocabulary's `i`-th shingle occurs in the string.
pub type BooleanVector = Vec<bool>;

/// A normalized similarity (or distance) score.
pub type Score = f64;

/// A pair of strings to be compared, as read from batch input.
pub type StringPair = (String, String);
