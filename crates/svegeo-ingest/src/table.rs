use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::raw::RawFile;

/// A parsed CSV file: the first record as header, everything after it as
/// data rows. Cells are kept verbatim, with no trimming and no BOM
/// stripping, so a malformed header stays observable in the parsed view.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Position of a column in the header, by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    /// Cell value at (data row, column), reading cells missing from short
    /// rows as the empty string.
    pub fn value(&self, row_index: usize, column_index: usize) -> &str {
        self.rows[row_index]
            .get(column_index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parse a loaded file into a header and data rows.
///
/// The reader is flexible: rows may be shorter or longer than the header,
/// and the row-shape checks decide what to make of that. Fully blank lines
/// yield no record.
pub fn parse_csv_table(raw: &RawFile) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.text().as_bytes());
    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: raw.path.clone(),
            source,
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    let mut table = CsvTable::default();
    if !records.is_empty() {
        table.header = records.remove(0);
        table.rows = records;
    }
    Ok(table)
}
