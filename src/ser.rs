//! serde serialization into an [`XdrWriter`].
//!
//! | Rust / serde type | XDR encoding |
//! |-------------------|--------------|
//! | `bool`            | 4-byte unsigned int: 0 (false) or 1 (true) |
//! | `i8`, `i16`, `i32` | 4-byte signed int (sign-extended) |
//! | `i64`             | 8-byte hyper integer |
//! | `u8`, `u16`, `u32` | 4-byte unsigned int (zero-extended) |
//! | `u64`             | 8-byte unsigned hyper integer |
//! | `f32` / `f64`     | 4 / 8-byte IEEE 754 float |
//! | `char`            | 4-byte unsigned int (Unicode scalar) |
//! | `&str`, `String`, bytes | 4-byte length + data + 0-3 zero-padding bytes |
//! | `Option<T>`       | 4-byte bool discriminant + optional encoded T |
//! | `()` / unit struct | 0 bytes (XDR void) |
//! | Enum variant      | 4-byte discriminant (variant index) + encoded arm |
//! | `Vec<T>` / seq / map | 4-byte count + encoded elements |
//! | Tuple / struct    | fields encoded consecutively (no count prefix) |

use crate::MAX_LENGTH;
use crate::error::{Error, Result};
use crate::writer::XdrWriter;
use serde::ser::{self, Serialize};
use std::io::Write;

/// Serialize `value` into a freshly allocated `Vec<u8>` of XDR bytes.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut writer = XdrWriter::new();
    value.serialize(&mut writer)?;
    Ok(writer.finalize())
}

/// Serialize `value` as XDR bytes into any `Write` sink.
///
/// The encoding is built in memory first, so nothing reaches `sink` when
/// serialization fails.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(mut sink: W, value: &T) -> Result<()> {
    let bytes = to_bytes(value)?;
    sink.write_all(&bytes)?;
    Ok(())
}

impl ser::Serializer for &mut XdrWriter {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.write_bool(v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i32(i32::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i32(i32::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.write_i32(v);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.write_i64(v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u32(u32::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u32(u32::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.write_u32(v);
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.write_u64(v);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.write_f32(v);
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.write_f64(v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.serialize_u32(u32::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.write_var_opaque(v.as_bytes(), MAX_LENGTH)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.write_var_opaque(v, MAX_LENGTH)
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_bool(false)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        self.write_bool(true);
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        self.serialize_u32(variant_index)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.write_u32(variant_index);
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        let len = len.ok_or(Error::LengthRequired)?;
        self.write_length(len, MAX_LENGTH)?;
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.write_u32(variant_index);
        Ok(self)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        let len = len.ok_or(Error::LengthRequired)?;
        self.write_length(len, MAX_LENGTH)?;
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.write_u32(variant_index);
        Ok(self)
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

// ── Compound serializer impls ──────────────────────────────────────────────

macro_rules! forward_compound {
    ($trait:ident :: $method:ident) => {
        impl ser::$trait for &mut XdrWriter {
            type Ok = ();
            type Error = Error;

            fn $method<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
                value.serialize(&mut **self)
            }

            fn end(self) -> Result<()> {
                Ok(())
            }
        }
    };
    ($trait:ident :: $method:ident, keyed) => {
        impl ser::$trait for &mut XdrWriter {
            type Ok = ();
            type Error = Error;

            fn $method<T: Serialize + ?Sized>(
                &mut self,
                _key: &'static str,
                value: &T,
            ) -> Result<()> {
                value.serialize(&mut **self)
            }

            fn end(self) -> Result<()> {
                Ok(())
            }
        }
    };
}

forward_compound!(SerializeSeq::serialize_element);
forward_compound!(SerializeTuple::serialize_element);
forward_compound!(SerializeTupleStruct::serialize_field);
forward_compound!(SerializeTupleVariant::serialize_field);
forward_compound!(SerializeStruct::serialize_field, keyed);
forward_compound!(SerializeStructVariant::serialize_field, keyed);

impl ser::SerializeMap for &mut XdrWriter {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        key.serialize(&mut **self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
