//! Opaque data and strings (RFC 4506 §4.9–4.11).
//!
//! Fixed-length opaque is XDR's term for a raw byte array whose size is part
//! of the type. It is encoded as the raw bytes followed only by 0–3 zero
//! padding bytes — **no length prefix**. Variable-length opaque and strings
//! prefix the data with a 4-byte length, bounded by the definition's maximum.
//!
//! ```text
//! fixed:    | byte 0 | ... | byte N-1 |  r×0  |
//! variable: |  length N  | byte 0 | ... | byte N-1 |  r×0  |
//!                                    where (N + r) % 4 == 0
//! ```

use crate::MAX_LENGTH;
use crate::contract::{Xdr, XdrType};
use crate::error::{Error, Result};
use crate::reader::XdrReader;
use crate::writer::XdrWriter;

/// Fixed-length opaque data of exactly `length` bytes.
///
/// ```rust
/// use xdr_types::{FixedOpaque, XdrType};
///
/// let handle = FixedOpaque::new(5);
/// let bytes = handle.to_xdr(&vec![1, 2, 3, 4, 5], "raw").unwrap();
/// assert_eq!(bytes.as_bytes(), [1, 2, 3, 4, 5, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedOpaque {
    length: u32,
}

impl FixedOpaque {
    pub fn new(length: u32) -> Self {
        FixedOpaque { length }
    }

    pub fn length(&self) -> u32 {
        self.length
    }
}

impl XdrType for FixedOpaque {
    type Value = Vec<u8>;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Vec<u8>> {
        Ok(reader.read_fixed_opaque(self.length as usize)?.to_vec())
    }

    fn write(&self, value: &Vec<u8>, writer: &mut XdrWriter) -> Result<()> {
        if !self.is_valid(value) {
            return Err(Error::LengthMismatch {
                expected: self.length,
                got: value.len(),
            });
        }
        writer.write_fixed_opaque(value);
        Ok(())
    }

    fn is_valid(&self, value: &Vec<u8>) -> bool {
        value.len() == self.length as usize
    }
}

/// Variable-length opaque data of at most `max_length` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarOpaque {
    max_length: u32,
}

impl VarOpaque {
    pub fn new(max_length: u32) -> Self {
        VarOpaque { max_length }
    }

    pub fn unbounded() -> Self {
        VarOpaque::new(MAX_LENGTH)
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }
}

impl Default for VarOpaque {
    fn default() -> Self {
        VarOpaque::unbounded()
    }
}

impl XdrType for VarOpaque {
    type Value = Vec<u8>;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Vec<u8>> {
        Ok(reader.read_var_opaque(self.max_length)?.to_vec())
    }

    fn write(&self, value: &Vec<u8>, writer: &mut XdrWriter) -> Result<()> {
        writer.write_var_opaque(value, self.max_length)
    }

    fn is_valid(&self, value: &Vec<u8>) -> bool {
        value.len() <= self.max_length as usize
    }
}

/// XDR string of at most `max_length` bytes. Decoded strings must be UTF-8.
///
/// ```rust
/// use xdr_types::{XdrString, XdrType};
///
/// let name = XdrString::new(8);
/// assert!(name.is_valid(&"NFS4".to_string()));
/// assert!(!name.is_valid(&"too long for it".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XdrString {
    max_length: u32,
}

impl XdrString {
    pub fn new(max_length: u32) -> Self {
        XdrString { max_length }
    }

    pub fn unbounded() -> Self {
        XdrString::new(MAX_LENGTH)
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }
}

impl Default for XdrString {
    fn default() -> Self {
        XdrString::unbounded()
    }
}

impl XdrType for XdrString {
    type Value = String;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<String> {
        let bytes = reader.read_var_opaque(self.max_length)?;
        let s = std::str::from_utf8(bytes).map_err(|_| Error::InvalidString)?;
        Ok(s.to_owned())
    }

    fn write(&self, value: &String, writer: &mut XdrWriter) -> Result<()> {
        writer.write_var_opaque(value.as_bytes(), self.max_length)
    }

    fn is_valid(&self, value: &String) -> bool {
        value.len() <= self.max_length as usize
    }
}

impl Xdr for String {
    type Definition = XdrString;

    fn xdr_definition() -> XdrString {
        XdrString::unbounded()
    }
}
