//! # xdr-types
//!
//! XDR (eXternal Data Representation, RFC 4506) type contracts, with raw,
//! hex and base64 presentation of the encoded bytes.
//!
//! ## Overview
//!
//! XDR is the wire encoding used by ONC RPC protocols such as NFS. All values
//! are big-endian (network byte order), and every item occupies a multiple of
//! 4 bytes (padded with zeroes as needed).
//!
//! Every type implements one contract, [`XdrType`]: `read`, `write` and
//! `is_valid`, from which `to_xdr`, `from_xdr`, `validate_xdr` and
//! `check_xdr` are provided.
//!
//! - Primitives ([`Int`], [`Hyper`], [`Bool`], ...) are unit markers that
//!   implement [`XdrPrimitive`]; the marker doubles as the definition.
//! - Composites ([`XdrString`], [`VarArray`], [`Optional`], ...) are
//!   configured definitions carrying their bounds and element types.
//! - Rust values that know their definition implement [`Xdr`] and get the
//!   same operations bound to the value.
//! - Any serde type can be used through [`Serde`].
//!
//! ## Example
//!
//! ```rust
//! use xdr_types::{Int, VarArray, Xdr, XdrType};
//!
//! // Bound to a definition
//! let ids = VarArray::new(Int, 16);
//! let hex = ids.to_xdr(&vec![1, 2], "hex").unwrap();
//! assert_eq!(hex, "000000020000000100000002");
//! assert_eq!(ids.from_xdr(&hex, "hex").unwrap(), vec![1, 2]);
//!
//! // Bound to a value
//! let raw = 42u32.to_xdr("raw").unwrap();
//! assert_eq!(raw.as_bytes(), [0, 0, 0, 42]);
//!
//! // Trailing bytes are rejected
//! assert!(!u32::validate_xdr([0u8, 0, 0, 42, 0], "raw"));
//! ```

pub mod array;
pub mod contract;
pub mod de;
pub mod error;
pub mod format;
pub mod opaque;
pub mod primitive;
pub mod reader;
pub mod ser;
pub mod serde_type;
pub mod writer;

/// Largest length an XDR length prefix can carry.
pub const MAX_LENGTH: u32 = u32::MAX;

pub use array::{FixedArray, Optional, VarArray};
pub use contract::{Xdr, XdrPrimitive, XdrType};
pub use de::{from_bytes, from_bytes_partial};
pub use error::{Error, Result};
pub use format::{Encoded, EncodingFormat};
pub use opaque::{FixedOpaque, VarOpaque, XdrString};
pub use primitive::{Bool, Double, Float, Hyper, Int, UnsignedHyper, UnsignedInt, Void};
pub use reader::XdrReader;
pub use ser::{to_bytes, to_writer};
pub use serde_type::Serde;
pub use writer::XdrWriter;

pub use serde::{Deserialize, Serialize};
