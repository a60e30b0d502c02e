//! CSV output of sampled variables.

use std::path::Path;

use bdl_client::Variable;
use serde::Serialize;
use tracing::debug;

use crate::error::ExportError;

/// Header row of the output file.
pub const CSV_HEADER: [&str; 2] = ["variable_id", "nazwa_zmiennej"];

/// One data row. Field order must match `CSV_HEADER`.
#[derive(Debug, Serialize)]
struct VariableRow<'a> {
    id: &'a str,
    name: &'a str,
}

impl<'a> From<&'a Variable> for VariableRow<'a> {
    fn from(var: &'a Variable) -> Self {
        Self {
            id: &var.id,
            name: &var.name,
        }
    }
}

/// Write `records` to `path` as a two-column CSV file.
///
/// The file is created or truncated, so writing the same records twice
/// leaves identical content. The header is written even when `records`
/// is empty.
pub fn write_variables_csv(path: &Path, records: &[Variable]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for var in records {
        writer.serialize(VariableRow::from(var))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "Wrote variables CSV");
    Ok(())
}
