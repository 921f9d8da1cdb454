//! Writes the record set to a delimited file, header-first, UTF-8.

use log::*;
use std::{fs, path::Path};

use crate::{error::Result, pipeline::records::ChangelogRecord};

/// Fixed column schema of the output table.
pub const HEADER: [&str; 6] =
    ["ID", "Title", "Labels", "URL", "Description", "Ranking"];

/// Write records as CSV at `path`, creating the destination directory if
/// missing and truncating any existing file. The header row is always
/// written, even for an empty record set. No append, no merge: a re-run
/// discards prior manual edits to the Ranking column.
pub fn write_records(
    path: &Path,
    records: &[ChangelogRecord],
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    debug!("wrote {} records to {}", records.len(), path.display());

    Ok(())
}
