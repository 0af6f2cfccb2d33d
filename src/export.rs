use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::convert::Converter;
use crate::excel::{CalamineParser, SourceFormat};
use crate::sniff::{XLS_SIGNATURE, is_file_xls};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Text,
    Csv,
    Cells,
    Json,
    Sniff,
}

impl FromStr for OutputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputMode::Text),
            "csv" => Ok(OutputMode::Csv),
            "cells" => Ok(OutputMode::Cells),
            "json" => Ok(OutputMode::Json),
            "sniff" => Ok(OutputMode::Sniff),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub mode: OutputMode,
    /// Byte budget for text output
    pub max_bytes: i64,
    /// Zero-based sheet for CSV output
    pub sheet: usize,
    pub format: SourceFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Text,
            max_bytes: i64::MAX,
            sheet: 0,
            format: SourceFormat::Xls,
        }
    }
}

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

/// Converts the workbook at `path` according to `options` and writes the result to `out`.
pub fn export_file<W: Write + ?Sized>(
    path: &Path,
    options: &ExportOptions,
    out: &mut W,
) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let converter = Converter::new(CalamineParser::new(options.format));

    match options.mode {
        OutputMode::Sniff => {
            let mut head = Vec::with_capacity(XLS_SIGNATURE.len());
            file.take(XLS_SIGNATURE.len() as u64)
                .read_to_end(&mut head)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            writeln!(out, "{}", is_file_xls(&head))?;
        }
        OutputMode::Text => {
            let written = converter.text(BufReader::new(file), out, options.max_bytes)?;
            log::info!("Wrote {} bytes of text from {}", written, path.display());
        }
        OutputMode::Csv => {
            let csv = converter.csv(BufReader::new(file), options.sheet)?;
            out.write_all(&csv)?;
            if !csv.is_empty() {
                writeln!(out)?;
            }
        }
        OutputMode::Cells => {
            for cell in converter.cells(BufReader::new(file)) {
                writeln!(out, "{}", cell)?;
            }
        }
        OutputMode::Json => {
            let cells = converter.cells(BufReader::new(file));
            writeln!(out, "{}", serialize_to_json(&cells)?)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
