//! CSV serialization of projected export rows.

use std::io::Write;

use tracing::debug;

use crate::columns::{ExportAudience, visible_columns};
use crate::error::Result;
use crate::row::CaseExportRow;

/// Writes the audience-filtered export as CSV: one header record built
/// from the visible column names, then one record per case. Returns the
/// number of case records written.
pub fn write_csv<W: Write>(
    writer: W,
    audience: ExportAudience,
    rows: &[CaseExportRow],
) -> Result<usize> {
    let columns = visible_columns(audience);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns.iter().map(|column| column.name))?;
    for row in rows {
        csv_writer.write_record(columns.iter().map(|column| column.value(row)))?;
    }
    csv_writer.flush()?;
    debug!(
        audience = %audience,
        columns = columns.len(),
        records = rows.len(),
        "export written"
    );
    Ok(rows.len())
}

/// Renders the export to an in-memory string, mainly for previews and
/// tests.
pub fn csv_string(audience: ExportAudience, rows: &[CaseExportRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, audience, rows)?;
    Ok(String::from_utf8(buffer)?)
}
