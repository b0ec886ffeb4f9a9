use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod constants;
use constants::{SCORE_EPSILON, TEST_DATA_FILES_DIRECTORY};

/// Compresses `text` with gzip, for exercising compressed-input readers.
pub fn gzip_bytes(text: &str) -> io::Result<Vec<u8>> {
    let mut compressed_data = Vec::new();

    {
        let mut encoder = GzEncoder::new(&mut compressed_data, Compression::default());
        encoder.write_all(text.as_bytes())?;
        encoder.finish()?;
    }

    Ok(compressed_data)
}

/// Reads a file from `TEST_DATA_FILES_DIRECTORY` into a string.
pub fn read_fixture(file_name: &str) -> String {
    let file_path = Path::new(TEST_DATA_FILES_DIRECTORY).join(file_name);

    fs::read_to_string(&file_path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", file_path, e))
}

/// Asserts two scores agree to within `SCORE_EPSILON`.
pub fn assert_score_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < SCORE_EPSILON,
        "expected score {}, got {}",
        expected,
        actual
    );
}

/// Every ordered pair drawn from `strings`, including each string paired with itself.
pub fn all_pairs<'a>(strings: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    strings
        .iter()
        .flat_map(|&a| strings.iter().map(move |&b| (a, b)))
        .collect()
}
