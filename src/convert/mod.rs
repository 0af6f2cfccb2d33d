//! Text, CSV, and cell-list renderings of a spreadsheet.
//!
//! A [`Converter`] owns the parser and opens a fresh document for every call.
//! A source that fails to open is treated as having nothing to extract: the
//! operations return empty output instead of an error.

mod budget;
mod cells;
mod clean;
mod csv;
mod text;

pub use clean::clean_cell;

use std::io::{Read, Seek, Write};

use crate::document::SpreadsheetParser;
use crate::error::Result;
use crate::excel::CalamineParser;

#[derive(Debug, Clone, Default)]
pub struct Converter<P> {
    parser: P,
}

impl<P: SpreadsheetParser> Converter<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    fn open<R: Read + Seek>(&self, reader: R) -> Option<P::Document> {
        match self.parser.open(reader) {
            Ok(document) => Some(document),
            Err(err) => {
                log::debug!("Spreadsheet could not be opened, nothing to extract: {err}");
                None
            }
        }
    }
}

/// Writes at most `size` bytes of text rendering to `writer`, returning the
/// number of bytes written.
///
/// The whole file is required even for partial extraction. Corrupted or
/// non-xls input yields `Ok(0)`.
pub fn xls_to_text<R, W>(reader: R, writer: &mut W, size: i64) -> Result<u64>
where
    R: Read + Seek,
    W: Write + ?Sized,
{
    Converter::new(CalamineParser::xls()).text(reader, writer, size)
}

/// Renders the sheet at `sheet_index` as CSV.
pub fn xls_to_csv<R: Read + Seek>(reader: R, sheet_index: usize) -> Result<Vec<u8>> {
    Converter::new(CalamineParser::xls()).csv(reader, sheet_index)
}

/// Every non-empty cell of every sheet, cleaned, in reading order.
pub fn xls_to_cells<R: Read + Seek>(reader: R) -> Vec<String> {
    Converter::new(CalamineParser::xls()).cells(reader)
}
