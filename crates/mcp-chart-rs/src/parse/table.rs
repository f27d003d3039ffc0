use ::csv::ReaderBuilder;

use crate::error::{ChartError, Result};

/// Split CSV text into a trimmed header row and the raw data rows.
///
/// Rows may have differing lengths; short rows are handled by the caller.
pub fn parse_csv(raw: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.trim().as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if rows.len() < 2 {
        return Err(ChartError::InsufficientRows);
    }

    let data_rows = rows.split_off(1);
    let header = rows
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    Ok((header, data_rows))
}
