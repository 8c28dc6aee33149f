//! Writer for the combined output format.
//!
//! Every entry is the file's path relative to the scan root, a colon and a line
//! break, the file contents exactly as read, then two line breaks:
//!
//! ```text
//! src/app.py:
//! print("hi")
//!
//!
//! ```
//!
//! Line endings are expected to be `\n` already (see [`normalize_newlines`]);
//! nothing else in the contents is altered, so a file that already ends in a
//! newline is followed by three line breaks in total.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// Sequential writer of combined entries into any [`Write`] sink.
#[derive(Debug)]
pub struct CombinedWriter<W: Write> {
    inner: W,
    entries: usize,
}

impl<W: Write> CombinedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, entries: 0 }
    }

    /// Appends one file's header, contents and separator.
    pub fn write_entry(&mut self, relative_path: &Path, contents: &str) -> io::Result<()> {
        writeln!(self.inner, "{}:", relative_path.display())?;
        self.inner.write_all(contents.as_bytes())?;
        self.inner.write_all(b"\n\n")?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
