//! CSV persistence for raw and cleaned datasets
//!
//! Both files are UTF-8, comma-delimited, with a header row and standard
//! quoting for embedded separators.

use crate::cleaner::CleanedDataset;
use crate::crawler::RawPropertyRecord;
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes raw records to `path`, creating the parent directory if needed
///
/// The header is taken from the field names of the first record.
pub fn write_raw_csv(path: &Path, records: &[RawPropertyRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes a cleaned dataset as CSV to any writer
///
/// The header follows [`CleanedDataset::columns`], so a dropped project_name
/// column is absent from both the header and the rows.
pub fn write_cleaned_csv<W: Write>(dataset: &CleanedDataset, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Renders a cleaned dataset to an in-memory CSV buffer
pub fn render_cleaned_csv(dataset: &CleanedDataset) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_cleaned_csv(dataset, &mut buffer)?;
    Ok(buffer)
}
