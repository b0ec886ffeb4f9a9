pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";

/// File name, relative to `TEST_DATA_FILES_DIRECTORY`.
pub const TEST_STRING_PAIRS_CSV_FILE: &str = "string_pairs.csv";

/// Tolerance used when comparing computed scores against hand-derived fractions.
pub const SCORE_EPSILON: f64 = 1e-12;

/// Strings exercised by the property tests. Covers empty input, input shorter than the default
/// shingle length, repeated shingles, and non-ASCII text.
pub const SAMPLE_STRINGS: &[&str] = &[
    "",
    "A",
    "AB",
    "ABC",
    "ABCAB",
    "ABCDE",
    "ABCDFG",
    "night",
    "nacht",
    "Jonathan Smith",
    "John Smith",
    "Smith, Jonathan",
    "aaaaaa",
    "résumé",
    "resume",
    "東京都渋谷区",
    "東京都新宿区",
];
