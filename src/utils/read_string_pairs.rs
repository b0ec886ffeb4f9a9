use crate::constants::{LEFT_COLUMN_HEADER, RIGHT_COLUMN_HEADER};
use crate::types::StringPair;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::io::Read;

/// Reads `left,right` string pairs from CSV. Columns are located by header name, so extra
/// columns and column order do not matter.
pub fn read_string_pairs_from_reader<R: Read>(reader: R) -> Result<Vec<StringPair>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    };

    let left_index = column_index(LEFT_COLUMN_HEADER)?;
    let right_index = column_index(RIGHT_COLUMN_HEADER)?;

    let mut string_pairs = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let field = |index: usize, name: &str| {
            record.get(index).map(|value| value.to_string()).ok_or_else(|| {
                Error::ParserError(format!("Missing '{}' field in record {:?}", name, record))
            })
        };

        string_pairs.push((
            field(left_index, LEFT_COLUMN_HEADER)?,
            field(right_index, RIGHT_COLUMN_HEADER)?,
        ));
    }

    Ok(string_pairs)
}

/// Same as `read_string_pairs_from_reader`, for gzip-compressed CSV.
pub fn read_string_pairs_from_gzip_reader<R: Read>(reader: R) -> Result<Vec<StringPair>, Error> {
    read_string_pairs_from_reader(GzDecoder::new(reader))
}
