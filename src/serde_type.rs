use crate::contract::XdrPrimitive;
use crate::error::Result;
use crate::reader::XdrReader;
use crate::writer::XdrWriter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Definition for any serde type, encoded with the RFC 4506 mapping of
/// [`crate::ser`] and [`crate::de`].
///
/// Dispatch is static: the definition carries no state beyond `T`.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use xdr_types::{Serde, Xdr};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct FileHandle {
///     inode: u64,
///     generation: u32,
/// }
///
/// impl Xdr for FileHandle {
///     type Definition = Serde<Self>;
///
///     fn xdr_definition() -> Serde<Self> {
///         Serde::new()
///     }
/// }
///
/// let fh = FileHandle { inode: 7, generation: 1 };
/// let text = fh.to_xdr("base64").unwrap();
/// assert_eq!(FileHandle::from_xdr(&text, "base64").unwrap(), fh);
/// ```
pub struct Serde<T>(PhantomData<fn() -> T>);

impl<T> Serde<T> {
    pub const fn new() -> Self {
        Serde(PhantomData)
    }
}

impl<T> Default for Serde<T> {
    fn default() -> Self {
        Serde::new()
    }
}

impl<T> Clone for Serde<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Serde<T> {}

impl<T> fmt::Debug for Serde<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serde<{}>", std::any::type_name::<T>())
    }
}

impl<T: Serialize + DeserializeOwned> XdrPrimitive for Serde<T> {
    type Value = T;

    fn read(reader: &mut XdrReader<'_>) -> Result<T> {
        T::deserialize(reader)
    }

    fn write(value: &T, writer: &mut XdrWriter) -> Result<()> {
        value.serialize(writer)
    }

    /// A value is valid when it has an XDR encoding at all, e.g. every
    /// sequence it contains reports its length.
    fn is_valid(value: &T) -> bool {
        value.serialize(&mut XdrWriter::new()).is_ok()
    }
}
