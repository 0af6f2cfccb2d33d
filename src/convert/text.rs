use std::io::{Read, Seek, Write};

use crate::convert::Converter;
use crate::convert::budget::BudgetWriter;
use crate::convert::clean::{clean_cell, sheet_title};
use crate::document::{Document, Row, Sheet, SpreadsheetParser};
use crate::error::{ConvertError, Result};

impl<P: SpreadsheetParser> Converter<P> {
    /// Writes a plain-text rendering of every sheet to `writer`, stopping once
    /// `size` bytes have been written. Returns the number of bytes written.
    ///
    /// A source that does not open yields `Ok(0)`. A failing sink aborts the
    /// extraction with [`ConvertError::Write`].
    pub fn text<R, W>(&self, reader: R, writer: &mut W, size: i64) -> Result<u64>
    where
        R: Read + Seek,
        W: Write + ?Sized,
    {
        let Some(document) = self.open(reader) else {
            return Ok(0);
        };

        let mut out = BudgetWriter::new(writer, size);

        for index in 0..document.sheet_count() {
            let Some(sheet) = document.sheet(index) else {
                continue;
            };

            let title = sheet_title(sheet.name(), index, sheet.max_row());
            if emit(&mut out, title.as_bytes())? {
                return Ok(out.written());
            }

            for row_index in 0..=sheet.max_row() {
                let Some(row) = sheet.row(row_index) else {
                    continue;
                };

                if emit(&mut out, row_text(&row).as_bytes())? {
                    return Ok(out.written());
                }
            }
        }

        log::debug!("Extracted {} bytes of text", out.written());
        Ok(out.written())
    }
}

// Returns true once the budget is spent
fn emit<W: Write + ?Sized>(out: &mut BudgetWriter<'_, W>, chunk: &[u8]) -> Result<bool> {
    out.write_chunk(chunk).map_err(|source| ConvertError::Write {
        written: out.written(),
        source,
    })?;

    Ok(out.is_exhausted())
}

fn row_text(row: &Row) -> String {
    let mut text = String::new();

    for col in row.first_col()..row.last_col() {
        let cell = row.cell_text(col);
        if cell.is_empty() {
            continue;
        }

        if col > row.first_col() {
            text.push_str(", ");
        }
        text.push_str(&clean_cell(cell));
    }

    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::memory::{MemoryDocument, MemoryParser, MemorySheet};
    use std::io::{self, Cursor};

    fn example_parser() -> MemoryParser {
        MemoryParser::new(vec![
            MemorySheet::new("Sheet1")
                .with_row(0, &["A", "B"])
                .with_row(1, &["C", ""]),
        ])
    }

    fn two_sheet_parser() -> MemoryParser {
        MemoryParser::new(vec![
            MemorySheet::new("Prices")
                .with_row(0, &["Item", "Cost"])
                .with_row(2, &["Tea", "3"]),
            MemorySheet::new("Notes").with_row(0, &["multi\r\nline ", " padded "]),
        ])
    }

    fn render(parser: MemoryParser, size: i64) -> (Vec<u8>, u64) {
        let mut sink = Vec::new();
        let written = Converter::new(parser)
            .text(Cursor::new(Vec::new()), &mut sink, size)
            .unwrap();
        (sink, written)
    }

    #[test]
    fn test_example_workbook() {
        let (out, written) = render(example_parser(), i64::MAX);
        assert_eq!(out, b"Sheet \"Sheet1\" (1 rows):\nA, B\nC\n");
        assert_eq!(written, out.len() as u64);
    }

    #[test]
    fn test_later_sheets_get_a_blank_line_and_rows_are_cleaned() {
        let (out, _) = render(two_sheet_parser(), i64::MAX);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sheet \"Prices\" (2 rows):\nItem, Cost\nTea, 3\n\
             \nSheet \"Notes\" (0 rows):\nmulti line, padded\n"
        );
    }

    #[test]
    fn test_every_budget_yields_an_exact_prefix() {
        let (full, _) = render(two_sheet_parser(), i64::MAX);

        for size in 0..=(full.len() as i64 + 3) {
            let (out, written) = render(two_sheet_parser(), size);
            let expected = &full[..full.len().min(size as usize)];
            assert_eq!(out, expected, "budget {size}");
            assert_eq!(written, expected.len() as u64, "budget {size}");
        }
    }

    #[test]
    fn test_non_positive_budget_writes_nothing() {
        for size in [0, -1, i64::MIN] {
            let (out, written) = render(example_parser(), size);
            assert!(out.is_empty());
            assert_eq!(written, 0);
        }
    }

    #[test]
    fn test_unopenable_source_is_silently_empty() {
        let (out, written) = render(MemoryParser::broken(), 1000);
        assert!(out.is_empty());
        assert_eq!(written, 0);
    }

    #[test]
    fn test_absent_sheets_and_rows_are_skipped() {
        let mut document = MemoryDocument::default();
        document.sheets.push(None);
        document.sheets.push(Some(
            MemorySheet::new("Second")
                .with_row(3, &["x"])
                .with_max_row(5),
        ));
        let parser = MemoryParser {
            document: Some(document),
        };

        let (out, _) = render(parser, i64::MAX);
        assert_eq!(out, b"\nSheet \"Second\" (5 rows):\nx\n");
    }

    #[test]
    fn test_separator_follows_column_position() {
        let parser = MemoryParser::new(vec![
            MemorySheet::new("S")
                .with_row(0, &["a", "", "", "b"])
                .with_row(1, &["", "c"])
                .with_row(2, &["", "", ""]),
        ]);

        let (out, _) = render(parser, i64::MAX);
        assert_eq!(out, b"Sheet \"S\" (2 rows):\na, b\n, c\n\n");
    }

    #[test]
    fn test_write_error_aborts_and_reports_progress() {
        struct FailAfter {
            accepted: Vec<u8>,
            limit: usize,
        }

        impl Write for FailAfter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.accepted.len() + buf.len() > self.limit {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
                }
                self.accepted.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = FailAfter {
            accepted: Vec::new(),
            limit: 27,
        };
        let result =
            Converter::new(example_parser()).text(Cursor::new(Vec::new()), &mut sink, i64::MAX);

        match result {
            Err(ConvertError::Write { written, source }) => {
                assert_eq!(written, 25);
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected write error, got {other:?}"),
        }
        assert_eq!(sink.accepted, b"Sheet \"Sheet1\" (1 rows):\n");
    }
}
