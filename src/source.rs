use std::io::BufRead;

use crate::prelude::*;

/// Produces the text tokens a session consumes.
pub trait TokenSource {
    /// Blocks until the next token is available.
    /// Returns `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>>;
}

/// One token per line, with surrounding whitespace stripped.
///
/// Invalid UTF-8 is replaced rather than failing the read,
/// so that such a line is rejected as a token instead of ending the session.
pub struct LineSource<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> TokenSource for LineSource<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        self.line.clear();
        let n_bytes = self
            .reader
            .read_until(b'\n', &mut self.line)
            .context("failed to read the next line")?;
        match n_bytes {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&self.line).trim().to_string())),
        }
    }
}
