//! Arrays and optional data (RFC 4506 §4.12, §4.19).
//!
//! Each definition wraps the definition of its element type, so the same
//! configured value decides both the element encoding and the bounds.

use crate::MAX_LENGTH;
use crate::contract::{Xdr, XdrType};
use crate::error::{Error, Result};
use crate::reader::XdrReader;
use crate::writer::XdrWriter;

fn read_elements<T: XdrType>(
    child: &T,
    count: u32,
    reader: &mut XdrReader<'_>,
) -> Result<Vec<T::Value>> {
    // The count comes off the wire; never reserve more than the input could hold.
    let mut items = Vec::with_capacity((count as usize).min(reader.remaining().len()));
    for _ in 0..count {
        items.push(child.read(reader)?);
    }
    Ok(items)
}

fn write_elements<T: XdrType>(child: &T, items: &[T::Value], writer: &mut XdrWriter) -> Result<()> {
    items.iter().try_for_each(|item| child.write(item, writer))
}

/// Fixed-length array: exactly `length` elements, no count prefix.
///
/// ```rust
/// use xdr_types::{FixedArray, Int, XdrType};
///
/// let pair = FixedArray::new(Int, 2);
/// let bytes = pair.to_xdr(&vec![1, 2], "raw").unwrap();
/// assert_eq!(bytes.as_bytes(), [0, 0, 0, 1, 0, 0, 0, 2]);
/// assert!(!pair.is_valid(&vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T> {
    child: T,
    length: u32,
}

impl<T: XdrType> FixedArray<T> {
    pub fn new(child: T, length: u32) -> Self {
        FixedArray { child, length }
    }

    pub fn child(&self) -> &T {
        &self.child
    }

    pub fn length(&self) -> u32 {
        self.length
    }
}

impl<T: XdrType> XdrType for FixedArray<T> {
    type Value = Vec<T::Value>;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        read_elements(&self.child, self.length, reader)
    }

    fn write(&self, value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        if value.len() != self.length as usize {
            return Err(Error::LengthMismatch {
                expected: self.length,
                got: value.len(),
            });
        }
        write_elements(&self.child, value, writer)
    }

    fn is_valid(&self, value: &Self::Value) -> bool {
        value.len() == self.length as usize && value.iter().all(|v| self.child.is_valid(v))
    }
}

/// Variable-length array: 4-byte count (at most `max_length`) + elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarArray<T> {
    child: T,
    max_length: u32,
}

impl<T: XdrType> VarArray<T> {
    pub fn new(child: T, max_length: u32) -> Self {
        VarArray { child, max_length }
    }

    pub fn unbounded(child: T) -> Self {
        VarArray::new(child, MAX_LENGTH)
    }

    pub fn child(&self) -> &T {
        &self.child
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }
}

impl<T: XdrType> XdrType for VarArray<T> {
    type Value = Vec<T::Value>;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        let count = reader.read_length(self.max_length)?;
        read_elements(&self.child, count, reader)
    }

    fn write(&self, value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        writer.write_length(value.len(), self.max_length)?;
        write_elements(&self.child, value, writer)
    }

    fn is_valid(&self, value: &Self::Value) -> bool {
        value.len() <= self.max_length as usize && value.iter().all(|v| self.child.is_valid(v))
    }
}

/// Optional data: 4-byte bool discriminant (0 = none, 1 = some) + value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    child: T,
}

impl<T: XdrType> Optional<T> {
    pub fn new(child: T) -> Self {
        Optional { child }
    }

    pub fn child(&self) -> &T {
        &self.child
    }
}

impl<T: XdrType> XdrType for Optional<T> {
    type Value = Option<T::Value>;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        match reader.read_u32()? {
            0 => Ok(None),
            1 => self.child.read(reader).map(Some),
            v => Err(Error::InvalidOption(v)),
        }
    }

    fn write(&self, value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        match value {
            None => {
                writer.write_bool(false);
                Ok(())
            }
            Some(inner) => {
                writer.write_bool(true);
                self.child.write(inner, writer)
            }
        }
    }

    fn is_valid(&self, value: &Self::Value) -> bool {
        value.as_ref().is_none_or(|v| self.child.is_valid(v))
    }
}

impl<T: Xdr> Xdr for Vec<T> {
    type Definition = VarArray<T::Definition>;

    fn xdr_definition() -> Self::Definition {
        VarArray::unbounded(T::xdr_definition())
    }
}

impl<T: Xdr> Xdr for Option<T> {
    type Definition = Optional<T::Definition>;

    fn xdr_definition() -> Self::Definition {
        Optional::new(T::xdr_definition())
    }
}
