use crate::constants::{LEFT_COLUMN_HEADER, RIGHT_COLUMN_HEADER, SCORE_COLUMN_HEADER};
use crate::utils::{
    read_string_pairs_from_gzip_reader, read_string_pairs_from_reader, score_string_pairs,
};
use crate::{BatchScoringConfig, DiceSimilarity, Error};
use log::info;
use std::io::{Read, Write};

/// Reads `left,right` string pairs from `reader` and writes `left,right,score` CSV to `writer`,
/// with scores formatted to six decimal places. Returns the number of pairs scored.
///
/// Fails with `Error::InvalidConfiguration` before reading any input if the shingle length is
/// `0`.
pub fn score_csv<R: Read, W: Write>(
    config: &BatchScoringConfig,
    reader: R,
    writer: W,
) -> Result<usize, Error> {
    let dice = DiceSimilarity::new(config.shingle_length)?;

    let string_pairs = if config.gzip {
        read_string_pairs_from_gzip_reader(reader)?
    } else {
        read_string_pairs_from_reader(reader)?
    };

    info!(
        "Scoring {} pairs with shingle length {}",
        string_pairs.len(),
        dice.shingle_length()
    );

    let scores = score_string_pairs(&dice, &string_pairs);

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([LEFT_COLUMN_HEADER, RIGHT_COLUMN_HEADER, SCORE_COLUMN_HEADER])?;

    for ((left, right), score) in string_pairs.iter().zip(scores) {
        let score = if config.distance { 1.0 - score } else { score };
        let formatted_score = format!("{:.6}", score);
        writer.write_record([left.as_str(), right.as_str(), formatted_score.as_str()])?;
    }

    writer.flush()?;

    Ok(string_pairs.len())
}
