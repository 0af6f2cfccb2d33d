//! Searchable text out of legacy Excel workbooks.
//!
//! The workbook is decoded by [`calamine`]; this crate walks sheets, rows and
//! cells and renders them as budgeted plain text, CSV, or a flat cell list.

pub mod convert;
pub mod document;
pub mod error;
pub mod excel;
pub mod export;
pub mod sniff;

pub use convert::{Converter, xls_to_cells, xls_to_csv, xls_to_text};
pub use error::{ConvertError, Result};
pub use excel::{CalamineParser, SourceFormat};
pub use sniff::is_file_xls;
