use crate::format::EncodingFormat;
use serde::{de, ser};
use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding, decoding or presenting XDR data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A custom error message from serde
    #[error("{0}")]
    Message(String),

    /// A contract method was called on a type that never implemented it
    #[error("{operation} is not implemented for {type_name}")]
    NotImplemented {
        type_name: &'static str,
        operation: &'static str,
    },

    /// The format tag is not one of "raw", "hex", "base64"
    #[error(r#"invalid format {0}, must be one of "raw", "hex", "base64""#)]
    InvalidFormat(String),

    /// Hex or base64 text could not be turned back into bytes
    #[error("malformed {format} input: {reason}")]
    MalformedInput {
        format: EncodingFormat,
        reason: String,
    },

    /// Attempted to read past the end of the input buffer
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Decoding finished before the end of the input buffer
    #[error("{remaining} unconsumed trailing byte(s)")]
    TrailingBytes { remaining: usize },

    /// A sequence or map length was not known ahead of time (XDR requires it)
    #[error(
        "sequence length must be known before serialization (XDR requires a length prefix)"
    )]
    LengthRequired,

    /// A string contained non-UTF-8 bytes
    #[error("string contains invalid bytes")]
    InvalidString,

    /// The boolean encoding was neither 0 nor 1
    #[error("invalid boolean encoding: {0} (must be 0 or 1)")]
    InvalidBool(u32),

    /// An optional value had an invalid discriminant (must be 0 or 1)
    #[error("invalid optional discriminant: {0} (must be 0 or 1)")]
    InvalidOption(u32),

    /// Data exceeded the declared maximum length
    #[error("length {got} exceeds maximum {max}")]
    LengthOverflow { max: u32, got: usize },

    /// Fixed-length data had the wrong length
    #[error("length {got} does not match fixed length {expected}")]
    LengthMismatch { expected: u32, got: usize },

    /// A decoded integer does not fit the requested Rust type
    #[error("integer out of range for {0}")]
    IntegerOutOfRange(&'static str),

    /// Padding bytes were non-zero
    #[error("non-zero padding bytes")]
    InvalidPadding,

    /// XDR does not support this serde data model type
    #[error("XDR does not support type: {0}")]
    Unsupported(&'static str),

    /// An I/O error occurred during writing
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn not_implemented<T: ?Sized>(operation: &'static str) -> Self {
        Error::NotImplemented {
            type_name: std::any::type_name::<T>(),
            operation,
        }
    }

    /// A programming defect: an abstract contract method was reached.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }

    /// The caller supplied an unknown format tag.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidFormat(_))
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
