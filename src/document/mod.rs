//! Read-only view of a spreadsheet as the converter consumes it.
//!
//! A [`SpreadsheetParser`] turns a seekable byte source into a [`Document`].
//! Everything past that point is iteration: sheets by index, rows by index,
//! cells by column. Any parser able to answer those questions can drive the
//! converter.

mod row;

#[cfg(test)]
pub(crate) mod memory;

pub use row::Row;

use std::fmt::Display;
use std::io::{Read, Seek};

pub trait SpreadsheetParser {
    type Document: Document;
    type Error: Display;

    fn open<R: Read + Seek>(&self, reader: R) -> Result<Self::Document, Self::Error>;
}

pub trait Document {
    type Sheet: Sheet;

    fn sheet_count(&self) -> usize;

    /// Sheets the parser could not load are absent even when `index` is in range.
    fn sheet(&self, index: usize) -> Option<&Self::Sheet>;
}

pub trait Sheet {
    fn name(&self) -> &str;

    /// Index of the last row, zero-based.
    fn max_row(&self) -> usize;

    /// `None` for rows that hold no cells at all.
    fn row(&self, index: usize) -> Option<Row>;
}
