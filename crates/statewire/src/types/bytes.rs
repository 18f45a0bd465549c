//! Sized leaf kinds that take the whole frame: raw bytes and UTF-8 strings.

use std::ops::Deref;

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{Decode, Encode};

/// An opaque byte payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl Decode for Bytes {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, _path: Path) -> Result<Self, StateError> {
        Ok(Bytes(reader.read_to_end().to_vec()))
    }
}

impl Decode for String {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, _path: Path) -> Result<Self, StateError> {
        Ok(reader.read_str_to_end("string")?.to_owned())
    }
}

impl Encode for Bytes {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(&self.0);
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_bytes(self.as_bytes());
        Ok(())
    }
}
