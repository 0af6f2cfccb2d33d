use calamine::{Data, Range, Reader, Xls, open_workbook_auto_from_rs};
use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

use crate::document::{Document, Row, Sheet, SpreadsheetParser};
use crate::excel::cell_text;

/// Which container formats the parser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// Legacy compound binary `.xls` only.
    #[default]
    Xls,
    /// Whatever calamine recognizes: xls, xlsx, xlsb or ods.
    Auto,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineParser {
    format: SourceFormat,
}

impl CalamineParser {
    pub fn new(format: SourceFormat) -> Self {
        Self { format }
    }

    pub fn xls() -> Self {
        Self::new(SourceFormat::Xls)
    }

    pub fn auto() -> Self {
        Self::new(SourceFormat::Auto)
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

impl SpreadsheetParser for CalamineParser {
    type Document = Workbook;
    type Error = calamine::Error;

    fn open<R: Read + Seek>(&self, mut reader: R) -> Result<Workbook, calamine::Error> {
        match self.format {
            SourceFormat::Xls => {
                let mut workbook = Xls::new(reader)?;
                Ok(Workbook::load(&mut workbook))
            }
            SourceFormat::Auto => {
                // Format detection needs a cloneable reader
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))?;
                Ok(Workbook::load(&mut workbook))
            }
        }
    }
}

/// Every worksheet of a calamine workbook, loaded up front.
pub struct Workbook {
    sheets: Vec<Option<Worksheet>>,
}

pub struct Worksheet {
    name: String,
    range: Range<Data>,
}

impl Workbook {
    fn load<RS, W>(workbook: &mut W) -> Self
    where
        RS: Read + Seek,
        W: Reader<RS>,
        W::Error: Display,
    {
        let sheet_names = workbook.sheet_names();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            match workbook.worksheet_range(&name) {
                Ok(range) => sheets.push(Some(Worksheet { name, range })),
                Err(err) => {
                    log::warn!("Unable to read worksheet {name:?}, skipping it: {err}");
                    sheets.push(None);
                }
            }
        }

        Self { sheets }
    }
}

impl Document for Workbook {
    type Sheet = Worksheet;

    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn sheet(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get(index).and_then(Option::as_ref)
    }
}

impl Sheet for Worksheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_row(&self) -> usize {
        self.range.end().map_or(0, |(row, _)| row as usize)
    }

    fn row(&self, index: usize) -> Option<Row> {
        let (start_row, start_col) = self.range.start()?;
        let offset = index.checked_sub(start_row as usize)?;
        let cells = self.range.rows().nth(offset)?;

        let texts: Vec<String> = cells.iter().map(cell_text).collect();

        // Trim to the populated extent of the row
        let first = texts.iter().position(|text| !text.is_empty())?;
        let last = texts.iter().rposition(|text| !text.is_empty())?;

        let texts = texts.into_iter().take(last + 1).skip(first).collect();
        Some(Row::new(start_col as usize + first, texts))
    }
}
