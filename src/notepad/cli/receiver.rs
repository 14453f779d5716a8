use notepad::error::{NotepadError, Result};
use std::io::BufRead;

/// Source of raw input lines.
pub trait Receiver {
    /// Reads one line, without its trailing whitespace.
    ///
    /// Fails with [`NotepadError::EndOfInput`] once the stream is exhausted.
    fn receive(&mut self) -> Result<String>;
}

pub struct InputReceiver<R: BufRead> {
    reader: R,
}

impl<R: BufRead> InputReceiver<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Receiver for InputReceiver<R> {
    fn receive(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(NotepadError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}
