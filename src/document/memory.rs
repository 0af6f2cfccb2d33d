// In-memory documents for exercising the converter without a workbook file.

use std::collections::BTreeMap;
use std::io::{Read, Seek};

use super::{Document, Row, Sheet, SpreadsheetParser};

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub sheets: Vec<Option<MemorySheet>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    pub name: String,
    pub max_row: usize,
    pub rows: BTreeMap<usize, Row>,
}

impl MemorySheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Adds a row starting at column 0 and raises `max_row` to cover it.
    pub fn with_row(self, index: usize, cells: &[&str]) -> Self {
        self.with_row_at(index, 0, cells)
    }

    pub fn with_row_at(mut self, index: usize, first_col: usize, cells: &[&str]) -> Self {
        let cells = cells.iter().map(|c| c.to_string()).collect();
        self.rows.insert(index, Row::new(first_col, cells));
        self.max_row = self.max_row.max(index);
        self
    }

    pub fn with_max_row(mut self, max_row: usize) -> Self {
        self.max_row = max_row;
        self
    }
}

impl Document for MemoryDocument {
    type Sheet = MemorySheet;

    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn sheet(&self, index: usize) -> Option<&MemorySheet> {
        self.sheets.get(index).and_then(Option::as_ref)
    }
}

impl Sheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_row(&self) -> usize {
        self.max_row
    }

    fn row(&self, index: usize) -> Option<Row> {
        self.rows.get(&index).cloned()
    }
}

/// Hands out a copy of its document, or fails to open when it has none.
#[derive(Debug, Clone, Default)]
pub struct MemoryParser {
    pub document: Option<MemoryDocument>,
}

impl MemoryParser {
    pub fn new(sheets: Vec<MemorySheet>) -> Self {
        Self {
            document: Some(MemoryDocument {
                sheets: sheets.into_iter().map(Some).collect(),
            }),
        }
    }

    pub fn broken() -> Self {
        Self { document: None }
    }
}

impl SpreadsheetParser for MemoryParser {
    type Document = MemoryDocument;
    type Error = String;

    fn open<R: Read + Seek>(&self, _reader: R) -> Result<MemoryDocument, String> {
        self.document
            .clone()
            .ok_or_else(|| "not a spreadsheet".to_string())
    }
}
