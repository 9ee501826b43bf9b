//! The XDR byte-stream reader.

use crate::error::{Error, Result};

/// Reads XDR items from a byte slice, maintaining a cursor position.
///
/// Reads are strict: padding must be zero and a decode is only complete
/// once [`XdrReader::ensure_input_consumed`] succeeds.
#[derive(Debug, Clone)]
pub struct XdrReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        XdrReader { input, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed portion of the input buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Fails with [`Error::TrailingBytes`] unless every byte was read.
    pub fn ensure_input_consumed(&self) -> Result<()> {
        match self.remaining().len() {
            0 => Ok(()),
            remaining => Err(Error::TrailingBytes { remaining }),
        }
    }

    /// Consume exactly `n` bytes, returning a slice. Fails with UnexpectedEof.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEof)?;
        let slice = self.input.get(self.pos..end).ok_or(Error::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take(N)?
            .try_into()
            .map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.take_array().map(u32::from_be_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.take_array().map(i32::from_be_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.take_array().map(u64::from_be_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.take_array().map(i64::from_be_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.take_array().map(f32::from_be_bytes)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.take_array().map(f64::from_be_bytes)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(Error::InvalidBool(v)),
        }
    }

    /// Read a length prefix, rejecting anything above `max`.
    pub fn read_length(&mut self, max: u32) -> Result<u32> {
        let len = self.read_u32()?;
        if len > max {
            return Err(Error::LengthOverflow {
                max,
                got: len as usize,
            });
        }
        Ok(len)
    }

    /// Read `n` bytes of data plus their 0–3 padding bytes.
    /// Returns a slice into the original input (zero-copy).
    pub fn read_fixed_opaque(&mut self, n: usize) -> Result<&'a [u8]> {
        let data = self.take(n)?;
        let remainder = n % 4;
        if remainder != 0 {
            let padding = self.take(4 - remainder)?;
            if padding.iter().any(|&b| b != 0) {
                return Err(Error::InvalidPadding);
            }
        }
        Ok(data)
    }

    /// Read a variable-length opaque or string:
    /// 4-byte length n (at most `max`), then n bytes + padding.
    pub fn read_var_opaque(&mut self, max: u32) -> Result<&'a [u8]> {
        let n = self.read_length(max)? as usize;
        self.read_fixed_opaque(n)
    }
}
