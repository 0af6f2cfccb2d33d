use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("sheet doesn't exist: index {0}")]
    SheetNotFound(usize),

    /// The sink failed mid-extraction; `written` bytes reached it before that.
    #[error("failed to write extracted text after {written} bytes: {source}")]
    Write {
        written: u64,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
