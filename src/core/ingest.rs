use crate::domain::model::FeedbackRow;
use crate::utils::error::Result;
use std::path::Path;

pub const DEFAULT_ROW_LIMIT: usize = 1000;

/// Reads at most `row_limit` records from the CSV at `path`, in file order.
///
/// The record iterator is taken up to the limit, so the tail of a large file
/// is never parsed. Ragged rows fail the whole read: downstream column
/// resolution depends on stable header/column correspondence. The caller owns
/// the file lifecycle.
pub fn read_rows(path: &Path, row_limit: usize) -> Result<Vec<FeedbackRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(false).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records().take(row_limit) {
        let record = record?;
        let columns = headers
            .iter()
            .map(str::to_string)
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(FeedbackRow { columns });
    }

    Ok(rows)
}
