pub mod config;
pub use config::{BatchScoringConfig, DegeneratePolicy, DiceSimilarityConfig};

pub mod dice_similarity;
pub use dice_similarity::DiceSimilarity;

pub mod error;
pub use error::Error;

pub mod shingle_set;
pub use shingle_set::ShingleSet;

pub mod string_similarity;
pub use string_similarity::StringSimilarity;
