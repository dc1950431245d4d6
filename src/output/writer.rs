// src/output/writer.rs

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;

/// Blank lines written between grouping passes.
pub const PASS_SEPARATOR: &str = "\n\n";

/// Sequential writer for the poem file.
///
/// The underlying handle is held for the whole run and closed when the
/// writer is dropped, including when a run aborts halfway. Every block is
/// flushed before the next command starts.
#[derive(Debug)]
pub struct OutputWriter<W: Write> {
    sink: W,
    blocks: usize,
}

impl OutputWriter<File> {
    /// Open `path` for writing.
    ///
    /// `append = false` truncates an existing file; `true` keeps its contents
    /// and adds after them.
    pub fn open(path: impl AsRef<Path>, append: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut opts = OpenOptions::new();
        opts.create(true);
        if append {
            opts.append(true);
        } else {
            opts.write(true).truncate(true);
        }
        let file = opts.open(path)?;
        debug!(path = %path.display(), append, "opened output file");
        Ok(Self::new(file))
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, blocks: 0 }
    }

    /// Append `text` followed by a newline, unless it already ends in one.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.sink.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.sink.write_all(b"\n")?;
        }
        self.sink.flush()?;
        self.blocks += 1;
        Ok(())
    }

    pub fn write_separator(&mut self) -> Result<()> {
        self.sink.write_all(PASS_SEPARATOR.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Number of captured blocks written so far (separators excluded).
    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_added_only_when_missing() -> Result<()> {
        let mut w = OutputWriter::new(Vec::new());
        w.write("remember\nrememberer")?;
        w.write("not\nnot\n")?;
        w.write("")?;
        assert_eq!(w.blocks_written(), 3);

        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, "remember\nrememberer\nnot\nnot\n\n");
        Ok(())
    }

    #[test]
    fn separator_is_two_newlines() -> Result<()> {
        let mut w = OutputWriter::new(Vec::new());
        w.write("a")?;
        w.write_separator()?;
        assert_eq!(w.blocks_written(), 1);
        assert_eq!(w.into_inner(), b"a\n\n\n");
        Ok(())
    }
}
