//! The XDR byte-stream writer.
//!
//! ## Wire format summary
//! - All values are big-endian (network byte order)
//! - All items are padded to a multiple of 4 bytes
//! - Integers: 4 bytes (signed or unsigned), Hyper: 8 bytes
//! - Floats: IEEE 754, 4 bytes; Doubles: 8 bytes
//! - Variable-length opaque: 4-byte length prefix + data + 0–3 zero-padding bytes
//! - Fixed-length opaque: data + 0–3 zero-padding bytes, no prefix

use crate::error::{Error, Result};

/// Accumulates the XDR encoding of one value.
///
/// ```rust
/// use xdr_types::XdrWriter;
///
/// let mut writer = XdrWriter::new();
/// writer.write_u32(42);
/// writer.write_var_opaque(b"abc", u32::MAX).unwrap();
/// assert_eq!(writer.finalize(), [0, 0, 0, 42, 0, 0, 0, 3, b'a', b'b', b'c', 0]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct XdrWriter {
    buf: Vec<u8>,
}

impl XdrWriter {
    pub fn new() -> Self {
        XdrWriter { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        XdrWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the accumulated buffer.
    pub fn finalize(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// XDR bool: 4-byte unsigned int, 0 or 1.
    pub fn write_bool(&mut self, v: bool) {
        self.write_u32(u32::from(v));
    }

    /// Write a length prefix after checking it against `max`.
    pub fn write_length(&mut self, len: usize, max: u32) -> Result<()> {
        match u32::try_from(len) {
            Ok(n) if n <= max => {
                self.write_u32(n);
                Ok(())
            }
            _ => Err(Error::LengthOverflow { max, got: len }),
        }
    }

    /// Write `bytes` followed by enough zero bytes to reach a 4-byte boundary.
    pub fn write_fixed_opaque(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        let remainder = bytes.len() % 4;
        if remainder != 0 {
            self.buf.extend_from_slice(&[0u8; 3][..4 - remainder]);
        }
    }

    /// XDR variable-length opaque: 4-byte length + padded data.
    pub fn write_var_opaque(&mut self, bytes: &[u8], max: u32) -> Result<()> {
        self.write_length(bytes.len(), max)?;
        self.write_fixed_opaque(bytes);
        Ok(())
    }
}
