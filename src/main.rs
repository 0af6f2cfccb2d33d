use anyhow::Result;
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use xls2txt::SourceFormat;
use xls2txt::export::{self, ExportOptions, OutputMode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spreadsheet file path
    #[arg(required = true)]
    file_path: PathBuf,

    /// Output mode: 'text', 'csv', 'cells', 'json' (cells as a JSON array) or 'sniff'
    #[arg(long, short = 'm', default_value = "text")]
    mode: String,

    /// Maximum number of bytes written in text mode
    #[arg(long, short = 'b', default_value_t = i64::MAX, allow_negative_numbers = true)]
    max_bytes: i64,

    /// Zero-based index of the sheet to convert in csv mode
    #[arg(long, short = 's', default_value = "0")]
    sheet: usize,

    /// Accept any workbook format calamine detects (xlsx, xlsb, ods), not only legacy xls
    #[arg(long, short = 'a')]
    any_format: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mode = match OutputMode::from_str(&cli.mode) {
        Ok(mode) => mode,
        Err(_) => anyhow::bail!("Invalid output mode: {}", cli.mode),
    };

    let options = ExportOptions {
        mode,
        max_bytes: cli.max_bytes,
        sheet: cli.sheet,
        format: if cli.any_format {
            SourceFormat::Auto
        } else {
            SourceFormat::Xls
        },
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    export::export_file(&cli.file_path, &options, &mut out)?;
    out.flush()?;

    Ok(())
}
