use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use csv::Writer;

use super::{ExportRow, SpreadsheetSink};
use crate::{errors::ExportError, utils::paths::staging_path};

/// Writes export rows as CSV records, one `label,value` record per row.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
        }
    }

    /// Flushes buffered records and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, ExportError> {
        Ok(self.writer.into_inner()?)
    }
}

impl<W: Write> SpreadsheetSink for CsvSink<W> {
    fn write_rows(&mut self, rows: &[ExportRow]) -> Result<(), ExportError> {
        for row in rows {
            self.writer
                .write_record([row.label.as_str(), row.value.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Renders rows to an in-memory CSV document.
pub fn rows_to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut sink = CsvSink::new(Vec::new());
    sink.write_rows(rows)?;
    let bytes = sink.into_inner()?;
    String::from_utf8(bytes)
        .map_err(|err| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Writes rows to `path` atomically by staging to a temporary file.
pub fn save_rows(path: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = staging_path(path);
    let staged = write_staged(&tmp, rows)
        .and_then(|()| fs::rename(&tmp, path).map_err(ExportError::from));
    if let Err(err) = staged {
        tracing::warn!(path = %tmp.display(), error = %err, "export failed, discarding staged file");
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "exported spreadsheet");
    Ok(())
}

fn write_staged(tmp: &Path, rows: &[ExportRow]) -> Result<(), ExportError> {
    let mut sink = CsvSink::new(File::create(tmp)?);
    sink.write_rows(rows)?;
    sink.into_inner()?.sync_all()?;
    Ok(())
}
