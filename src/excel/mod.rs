mod cell;
mod workbook;

pub use cell::cell_text;
pub use workbook::{CalamineParser, SourceFormat, Workbook, Worksheet};
