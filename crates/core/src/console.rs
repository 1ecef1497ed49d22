// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::io::{self, Write};

/// A `Write` wrapper that expands `\n` to `\r\n` while the terminal is in
/// raw mode, so output started by [`crate::abort::KeypressAbort`] stays
/// aligned. Passes bytes through untouched otherwise.
pub struct CrlfWriter<W: Write> {
    inner: W,
    force: Option<bool>,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, force: None }
    }

    /// Always (or never) translate, regardless of the terminal mode.
    pub fn with_translation(inner: W, translate: bool) -> Self {
        Self {
            inner,
            force: Some(translate),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn translating(&self) -> bool {
        match self.force {
            Some(translate) => translate,
            None => crossterm::terminal::is_raw_mode_enabled().unwrap_or(false),
        }
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.translating() {
            return self.inner.write(buf);
        }

        match buf.iter().position(|b| *b == b'\n') {
            Some(0) => {
                self.inner.write_all(b"\r\n")?;
                Ok(1)
            }
            Some(newline) => self.inner.write(&buf[..newline]),
            None => self.inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_writer_translates() {
        let mut writer = CrlfWriter::with_translation(Vec::new(), true);
        writer.write_all(b"one\ntwo\n\nthree").unwrap();
        assert_eq!(writer.into_inner(), b"one\r\ntwo\r\n\r\nthree");
    }

    #[test]
    fn test_crlf_writer_passthrough() {
        let mut writer = CrlfWriter::with_translation(Vec::new(), false);
        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(writer.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn test_crlf_writer_formatted_lines() {
        let mut writer = CrlfWriter::with_translation(Vec::new(), true);
        writeln!(writer, "Pid of this process: {}", 42).unwrap();
        assert_eq!(writer.into_inner(), b"Pid of this process: 42\r\n");
    }
}
