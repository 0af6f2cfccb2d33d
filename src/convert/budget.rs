use std::io::{self, Write};

/// Forwards chunks to a sink until a byte budget runs out.
///
/// A chunk longer than the remaining budget is cut to fit, the budget is
/// charged before the write is issued, and a non-positive budget admits
/// nothing at all.
pub struct BudgetWriter<'a, W: Write + ?Sized> {
    sink: &'a mut W,
    remaining: u64,
    written: u64,
}

impl<'a, W: Write + ?Sized> BudgetWriter<'a, W> {
    pub fn new(sink: &'a mut W, size: i64) -> Self {
        Self {
            sink,
            remaining: u64::try_from(size).unwrap_or(0),
            written: 0,
        }
    }

    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        let allowed = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        let mut chunk = &chunk[..chunk.len().min(allowed)];
        self.remaining -= chunk.len() as u64;

        while !chunk.is_empty() {
            match self.sink.write(chunk) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => {
                    self.written += n as u64;
                    chunk = &chunk[n..];
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}
