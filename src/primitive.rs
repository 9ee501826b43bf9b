//! Built-in primitive types (RFC 4506 §4.1–4.8).
//!
//! | Definition      | Rust value | XDR encoding |
//! |-----------------|------------|--------------|
//! | `Int`           | `i32`      | 4-byte signed int |
//! | `UnsignedInt`   | `u32`      | 4-byte unsigned int |
//! | `Hyper`         | `i64`      | 8-byte hyper integer |
//! | `UnsignedHyper` | `u64`      | 8-byte unsigned hyper integer |
//! | `Float`         | `f32`      | 4-byte IEEE 754 single-precision float |
//! | `Double`        | `f64`      | 8-byte IEEE 754 double-precision float |
//! | `Bool`          | `bool`     | 4-byte unsigned int: 0 (false) or 1 (true) |
//! | `Void`          | `()`       | 0 bytes |

use crate::contract::{Xdr, XdrPrimitive};
use crate::error::Result;
use crate::reader::XdrReader;
use crate::writer::XdrWriter;

macro_rules! xdr_primitive {
    ($(#[$meta:meta])* $name:ident => $value:ty, $read:ident, $write:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl XdrPrimitive for $name {
            type Value = $value;

            fn read(reader: &mut XdrReader<'_>) -> Result<$value> {
                reader.$read()
            }

            fn write(value: &$value, writer: &mut XdrWriter) -> Result<()> {
                writer.$write(*value);
                Ok(())
            }

            // Every bit pattern of the Rust type has an encoding.
            fn is_valid(_value: &$value) -> bool {
                true
            }
        }

        impl Xdr for $value {
            type Definition = $name;

            fn xdr_definition() -> $name {
                $name
            }
        }
    };
}

xdr_primitive!(
    /// XDR signed integer — 4 bytes, big-endian, two's complement
    Int => i32, read_i32, write_i32
);
xdr_primitive!(
    /// XDR unsigned integer — 4 bytes, big-endian
    UnsignedInt => u32, read_u32, write_u32
);
xdr_primitive!(
    /// XDR hyper integer — 8 bytes, big-endian, two's complement
    Hyper => i64, read_i64, write_i64
);
xdr_primitive!(
    /// XDR unsigned hyper integer — 8 bytes, big-endian
    UnsignedHyper => u64, read_u64, write_u64
);
xdr_primitive!(
    /// XDR single-precision float — IEEE 754, 4 bytes
    Float => f32, read_f32, write_f32
);
xdr_primitive!(
    /// XDR double-precision float — IEEE 754, 8 bytes
    Double => f64, read_f64, write_f64
);
xdr_primitive!(
    /// XDR boolean — 4-byte unsigned int, 0 or 1
    Bool => bool, read_bool, write_bool
);

/// XDR void — 0 bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Void;

impl XdrPrimitive for Void {
    type Value = ();

    fn read(_reader: &mut XdrReader<'_>) -> Result<()> {
        Ok(())
    }

    fn write(_value: &(), _writer: &mut XdrWriter) -> Result<()> {
        Ok(())
    }

    fn is_valid(_value: &()) -> bool {
        true
    }
}

impl Xdr for () {
    type Definition = Void;

    fn xdr_definition() -> Void {
        Void
    }
}
