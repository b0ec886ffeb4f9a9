use shingle_dice::{
    read_string_pairs_from_gzip_reader, read_string_pairs_from_reader, score_string_pairs,
    DiceSimilarity,
};
use std::io::Cursor;
use test_utils::constants::TEST_STRING_PAIRS_CSV_FILE;
use test_utils::{assert_score_eq, gzip_bytes, read_fixture};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_fixture_file() {
        let csv = read_fixture(TEST_STRING_PAIRS_CSV_FILE);
        let string_pairs = read_string_pairs_from_reader(Cursor::new(csv)).unwrap();

        assert_eq!(string_pairs.len(), 4);
        assert_eq!(string_pairs[2].0, "Smith, Jonathan");

        let scores = score_string_pairs(&DiceSimilarity::default(), &string_pairs);

        assert_score_eq(scores[0], 4.0 / 7.0);
        assert_score_eq(scores[1], 0.0);
        assert_score_eq(scores[2], 0.72);
        assert_score_eq(scores[3], 0.0);
    }

    #[test]
    fn test_gzip_fixture_matches_plain() {
        let csv = read_fixture(TEST_STRING_PAIRS_CSV_FILE);
        let compressed = gzip_bytes(&csv).unwrap();

        let plain = read_string_pairs_from_reader(Cursor::new(csv)).unwrap();
        let decompressed = read_string_pairs_from_gzip_reader(Cursor::new(compressed)).unwrap();

        assert_eq!(plain, decompressed);
    }

    #[test]
    fn test_empty_body() {
        let string_pairs = read_string_pairs_from_reader(Cursor::new("left,right\n")).unwrap();
        assert!(string_pairs.is_empty());
    }
}
