//! Bounds-checked walking of the in-memory index buffer.
//!
//! Every read is validated against the buffer length and fails with a
//! `Format` error carrying the byte offset, instead of slicing past the
//! end.

use probe_common::{ProbeError, ProbeResult};

/// A validated read cursor over the index buffer.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    path: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8], path: &'a str) -> Self {
        Self { buf, pos: 0, path }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn err(&self, reason: impl Into<String>) -> ProbeError {
        ProbeError::format(self.path, self.pos, reason)
    }

    fn take(&mut self, n: usize) -> ProbeResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.err(format!(
                "truncated: need {} bytes, {} remain",
                n,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Skip `n` bytes (reserved/opaque regions).
    pub fn skip(&mut self, n: usize) -> ProbeResult<()> {
        self.take(n).map(|_| ())
    }

    /// Move to an absolute offset, which must not be behind the current
    /// position or past the end.
    pub fn seek_to(&mut self, offset: usize) -> ProbeResult<()> {
        if offset < self.pos || offset > self.buf.len() {
            return Err(self.err(format!("invalid seek target {}", offset)));
        }
        self.pos = offset;
        Ok(())
    }

    pub fn read_u8(&mut self) -> ProbeResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> ProbeResult<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> ProbeResult<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> ProbeResult<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f64(&mut self) -> ProbeResult<f64> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read a u16-length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> ProbeResult<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| self.err(format!("string is not valid UTF-8: {}", e)))
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> ProbeResult<&'a [u8]> {
        self.take(n)
    }
}
