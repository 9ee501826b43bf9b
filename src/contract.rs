//! The type contract every XDR type implements.
//!
//! There is a single entry point, [`XdrType`], with two kinds of
//! implementors:
//!
//! - **Primitives** are stateless unit markers (`Int`, `Bool`, ...). They
//!   implement [`XdrPrimitive`] with associated functions and pick up
//!   [`XdrType`] through a blanket impl, so the marker value *is* the type:
//!   `Int.to_xdr(&42, "hex")`.
//! - **Composites** are configured definitions (`VarArray::new(Int, 10)`)
//!   that carry the structural metadata their encoding needs and implement
//!   [`XdrType`] directly.
//!
//! Values whose type owns a definition implement [`Xdr`], which adds the
//! value-bound surface (`value.to_xdr(f)`, `T::from_xdr(input, f)`). Both
//! surfaces end up in the same `read` / `write` calls.

use crate::error::{Error, Result};
use crate::format::{Encoded, EncodingFormat};
use crate::reader::XdrReader;
use crate::writer::XdrWriter;
use tracing::{debug, error, trace};

/// Contract for a configured XDR type definition.
///
/// `read` and `write` fail with [`Error::NotImplemented`] unless overridden.
/// `is_valid` has no default: every definition decides what it accepts.
pub trait XdrType {
    type Value;

    /// Read one value from `reader`.
    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        let _ = reader;
        Err(Error::not_implemented::<Self>("read"))
    }

    /// Append the encoding of `value` to `writer`.
    fn write(&self, value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        let _ = (value, writer);
        Err(Error::not_implemented::<Self>("write"))
    }

    /// Whether `value` can be encoded by this definition.
    fn is_valid(&self, value: &Self::Value) -> bool;

    /// Encode `value` in the requested format.
    ///
    /// The format is resolved before anything is written, so an unknown
    /// tag fails with [`Error::InvalidFormat`] without calling `write`.
    fn to_xdr<F>(&self, value: &Self::Value, format: F) -> Result<Encoded>
    where
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        let format = format.try_into()?;
        let mut writer = XdrWriter::new();
        self.write(value, &mut writer)?;
        let buffer = writer.finalize();
        trace!(
            ty = std::any::type_name::<Self>(),
            %format,
            bytes = buffer.len(),
            "encoded xdr value"
        );
        Ok(format.present(buffer))
    }

    /// Decode a value, requiring the input to be consumed exactly.
    fn from_xdr<I, F>(&self, input: I, format: F) -> Result<Self::Value>
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        let format = format.try_into()?;
        let bytes = format.materialize(&input)?;
        let mut reader = XdrReader::new(&bytes);
        let value = self.read(&mut reader)?;
        reader.ensure_input_consumed()?;
        trace!(
            ty = std::any::type_name::<Self>(),
            %format,
            bytes = bytes.len(),
            "decoded xdr value"
        );
        Ok(value)
    }

    /// Whether `input` holds a valid encoding. Never fails.
    ///
    /// Contract violations are reported as `false` too, and logged at
    /// `error` level. Use [`XdrType::check_xdr`] to have them surface.
    fn validate_xdr<I, F>(&self, input: I, format: F) -> bool
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        match self.from_xdr(input, format) {
            Ok(_) => true,
            Err(err) => {
                if err.is_contract_violation() {
                    error!(error = %err, "contract violation masked by validate_xdr");
                } else {
                    debug!(error = %err, "xdr input rejected");
                }
                false
            }
        }
    }

    /// Like [`XdrType::validate_xdr`], but contract violations are returned
    /// as errors instead of being reported as invalid data.
    fn check_xdr<I, F>(&self, input: I, format: F) -> Result<bool>
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        match self.from_xdr(input, format) {
            Ok(_) => Ok(true),
            Err(err) if err.is_contract_violation() => Err(err),
            Err(err) => {
                debug!(error = %err, "xdr input rejected");
                Ok(false)
            }
        }
    }
}

/// Contract for stateless primitive types, dispatched on the type alone.
///
/// Primitive values carry no structural metadata, so `read` / `write` /
/// `is_valid` are associated functions. Implementors are unit structs and
/// become [`XdrType`]s through the blanket impl below.
pub trait XdrPrimitive {
    type Value;

    fn read(reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        let _ = reader;
        Err(Error::not_implemented::<Self>("read"))
    }

    fn write(value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        let _ = (value, writer);
        Err(Error::not_implemented::<Self>("write"))
    }

    fn is_valid(value: &Self::Value) -> bool;
}

impl<P: XdrPrimitive> XdrType for P {
    type Value = P::Value;

    fn read(&self, reader: &mut XdrReader<'_>) -> Result<Self::Value> {
        <P as XdrPrimitive>::read(reader)
    }

    fn write(&self, value: &Self::Value, writer: &mut XdrWriter) -> Result<()> {
        <P as XdrPrimitive>::write(value, writer)
    }

    fn is_valid(&self, value: &Self::Value) -> bool {
        <P as XdrPrimitive>::is_valid(value)
    }
}

/// Value-bound surface: a Rust type that knows its own XDR definition.
///
/// ```rust
/// use xdr_types::Xdr;
///
/// let hex = 42i32.to_xdr("hex").unwrap();
/// assert_eq!(hex, "0000002a");
/// assert_eq!(i32::from_xdr(&hex, "hex").unwrap(), 42);
/// ```
pub trait Xdr: Sized {
    type Definition: XdrType<Value = Self>;

    fn xdr_definition() -> Self::Definition;

    fn to_xdr<F>(&self, format: F) -> Result<Encoded>
    where
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        Self::xdr_definition().to_xdr(self, format)
    }

    fn from_xdr<I, F>(input: I, format: F) -> Result<Self>
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        Self::xdr_definition().from_xdr(input, format)
    }

    fn validate_xdr<I, F>(input: I, format: F) -> bool
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        Self::xdr_definition().validate_xdr(input, format)
    }

    fn check_xdr<I, F>(input: I, format: F) -> Result<bool>
    where
        I: AsRef<[u8]>,
        F: TryInto<EncodingFormat>,
        Error: From<F::Error>,
    {
        Self::xdr_definition().check_xdr(input, format)
    }

    /// Whether this value passes its definition's checks.
    fn is_valid_xdr(&self) -> bool {
        Self::xdr_definition().is_valid(self)
    }
}
