use std::io::{Read, Seek};

use crate::convert::Converter;
use crate::convert::clean::clean_cell;
use crate::document::{Document, Sheet, SpreadsheetParser};

impl<P: SpreadsheetParser> Converter<P> {
    /// Collects the text of every non-empty cell across all sheets.
    ///
    /// Emptiness is judged before cleaning, so a whitespace-only cell shows
    /// up as an empty string.
    pub fn cells<R: Read + Seek>(&self, reader: R) -> Vec<String> {
        let mut cells = Vec::new();

        let Some(document) = self.open(reader) else {
            return cells;
        };

        for index in 0..document.sheet_count() {
            let Some(sheet) = document.sheet(index) else {
                continue;
            };

            for row_index in 0..=sheet.max_row() {
                let Some(row) = sheet.row(row_index) else {
                    continue;
                };

                for col in row.first_col()..row.last_col() {
                    let text = row.cell_text(col);
                    if !text.is_empty() {
                        cells.push(clean_cell(text));
                    }
                }
            }
        }

        log::debug!("Collected {} cells", cells.len());
        cells
    }
}
