pub mod dice_coefficient;
pub use dice_coefficient::dice_coefficient;

pub mod extract_shingles;
pub use extract_shingles::extract_shingles;

pub mod read_string_pairs;
pub use read_string_pairs::{read_string_pairs_from_gzip_reader, read_string_pairs_from_reader};

pub mod score_csv;
pub use score_csv::score_csv;

pub mod score_string_pairs;
pub use score_string_pairs::score_string_pairs;
