//! CSV export of crawl results

use crate::output::OutputResult;
use crate::state::{Record, CSV_HEADERS};
use std::io::Write;
use std::path::Path;

/// Writes records to `path` as CSV, replacing any existing file
///
/// The header row is always written, even for an empty batch. Fields are
/// comma-separated and quoted when they contain commas, quotes or newlines.
///
/// # Example
///
/// ```no_run
/// use biz_scraper::output::export_csv;
/// use biz_scraper::state::Record;
/// use std::path::Path;
///
/// let records = vec![Record::unavailable("https://example.com")];
/// export_csv(&records, Path::new("business_info.csv")).unwrap();
/// ```
pub fn export_csv(records: &[Record], path: &Path) -> OutputResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;

    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Writes records as CSV to any writer
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> OutputResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads records back from a CSV file written by [`export_csv`]
pub fn read_csv(path: &Path) -> OutputResult<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader.deserialize().collect::<Result<Vec<Record>, _>>()?;
    Ok(records)
}
