use std::io::{Read, Seek};

use crate::convert::Converter;
use crate::convert::clean::wrap_csv_cell;
use crate::document::{Document, Sheet, SpreadsheetParser};
use crate::error::{ConvertError, Result};

impl<P: SpreadsheetParser> Converter<P> {
    /// Renders one sheet as CSV, one record per present row.
    ///
    /// Every field is wrapped in double quotes; quotes inside a cell are not
    /// escaped. Unlike [`Converter::text`], the last row index (`max_row`) is
    /// not visited.
    pub fn csv<R: Read + Seek>(&self, reader: R, sheet_index: usize) -> Result<Vec<u8>> {
        let Some(document) = self.open(reader) else {
            return Ok(Vec::new());
        };

        let sheet = document
            .sheet(sheet_index)
            .ok_or(ConvertError::SheetNotFound(sheet_index))?;

        let mut rows = Vec::new();
        for row_index in 0..sheet.max_row() {
            let Some(row) = sheet.row(row_index) else {
                continue;
            };

            let columns: Vec<String> = (row.first_col()..row.last_col())
                .map(|col| wrap_csv_cell(row.cell_text(col)))
                .collect();

            rows.push(columns.join(","));
        }

        Ok(rows.join("\n").into_bytes())
    }
}
