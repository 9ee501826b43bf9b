//! Presentation formats for encoded XDR buffers.
//!
//! An XDR value always encodes to a canonical byte buffer. This module maps
//! that buffer to and from the presentation a caller asked for:
//!
//! | Format   | `present`                 | `materialize`          |
//! |----------|---------------------------|------------------------|
//! | `raw`    | the buffer itself         | the input itself       |
//! | `hex`    | lowercase hexadecimal text| parses hex text        |
//! | `base64` | standard, padded base64   | parses standard base64 |
//!
//! ```rust
//! use xdr_types::{Encoded, EncodingFormat};
//!
//! let hex = EncodingFormat::Hex.present(vec![0, 0, 0, 42]);
//! assert_eq!(hex, Encoded::Text("0000002a".into()));
//! assert_eq!(&*EncodingFormat::Hex.materialize(&hex).unwrap(), &[0, 0, 0, 42]);
//! ```

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How an encoded buffer is presented to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EncodingFormat {
    #[default]
    Raw,
    Hex,
    Base64,
}

impl EncodingFormat {
    pub const ALL: [EncodingFormat; 3] = [
        EncodingFormat::Raw,
        EncodingFormat::Hex,
        EncodingFormat::Base64,
    ];

    /// The literal tag for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            EncodingFormat::Raw => "raw",
            EncodingFormat::Hex => "hex",
            EncodingFormat::Base64 => "base64",
        }
    }

    /// Turn a finalized buffer into this presentation.
    pub fn present(self, buffer: Vec<u8>) -> Encoded {
        match self {
            EncodingFormat::Raw => Encoded::Raw(buffer),
            EncodingFormat::Hex => Encoded::Text(hex::encode(buffer)),
            EncodingFormat::Base64 => Encoded::Text(STANDARD.encode(buffer)),
        }
    }

    /// Recover the raw buffer from input in this presentation.
    ///
    /// Raw input is borrowed as is; text input is parsed into a new buffer.
    pub fn materialize<I: AsRef<[u8]> + ?Sized>(self, input: &I) -> Result<Cow<'_, [u8]>> {
        let input = input.as_ref();
        match self {
            EncodingFormat::Raw => Ok(Cow::Borrowed(input)),
            EncodingFormat::Hex => hex::decode(input)
                .map(Cow::Owned)
                .map_err(|e| self.malformed(e)),
            EncodingFormat::Base64 => STANDARD
                .decode(input)
                .map(Cow::Owned)
                .map_err(|e| self.malformed(e)),
        }
    }

    fn malformed(self, reason: impl fmt::Display) -> Error {
        Error::MalformedInput {
            format: self,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for EncodingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw" => Ok(EncodingFormat::Raw),
            "hex" => Ok(EncodingFormat::Hex),
            "base64" => Ok(EncodingFormat::Base64),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

impl TryFrom<&str> for EncodingFormat {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&String> for EncodingFormat {
    type Error = Error;

    fn try_from(s: &String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for EncodingFormat {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// An encoded value in its requested presentation.
///
/// Both variants expose their bytes through [`AsRef<[u8]>`], so an `Encoded`
/// can be handed straight back to a decoder with the same format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoded {
    Raw(Vec<u8>),
    Text(String),
}

impl Encoded {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Encoded::Raw(bytes) => bytes,
            Encoded::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Encoded::Raw(bytes) => bytes,
            Encoded::Text(text) => text.into_bytes(),
        }
    }

    /// The text of a hex or base64 presentation.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Encoded::Raw(_) => None,
            Encoded::Text(text) => Some(text),
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Encoded::Raw(_) => None,
            Encoded::Text(text) => Some(text),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Encoded::Text(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Encoded> for Vec<u8> {
    fn from(encoded: Encoded) -> Self {
        encoded.into_bytes()
    }
}

impl PartialEq<[u8]> for Encoded {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Encoded {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Encoded {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}
