//! Header-plus-records CSV table shared by the collector and labeler.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Result, TweetsenseError};

/// An ordered header and rows of string cells, one cell per header column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`column_index`](Self::column_index), but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| TweetsenseError::MissingColumn(name.to_string()))
    }

    /// Cells of one column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Read a comma-separated file whose first line is the header.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())?;

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(TweetsenseError::MissingHeader);
        }

        let mut table = Self::new(headers);
        for record in reader.records() {
            let record: StringRecord = record?;
            table.rows.push(record.iter().map(String::from).collect());
        }

        tracing::debug!(
            path = %path.as_ref().display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "Read table"
        );
        Ok(table)
    }

    /// Write the header then every row. An empty table still gets its header.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path.as_ref())?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        tracing::debug!(
            path = %path.as_ref().display(),
            rows = self.rows.len(),
            "Wrote table"
        );
        Ok(())
    }
}
