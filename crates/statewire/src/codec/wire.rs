//! Field keys, wire types and length-delimited framing.
//!
//! A field key is an unsigned varint packing `tag << 3 | wire_type`. Only two
//! wire types exist: `Varint` (0) and `Sized` (2).

use std::fmt;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_TAG, WIRE_TYPE_BITS, WIRE_TYPE_MASK};

/// On-wire shape of a field payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Self-delimiting integer or boolean.
    Varint = 0,
    /// Length-prefixed bytes: a string, raw bytes or a nested frame.
    Sized = 2,
}

impl WireType {
    /// Parses the low bits of a key.
    pub fn from_u32(value: u32) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(WireType::Varint),
            2 => Ok(WireType::Sized),
            _ => Err(DecodeError::InvalidWireType { value }),
        }
    }

    /// Returns the wire code.
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireType::Varint => f.write_str("varint"),
            WireType::Sized => f.write_str("sized"),
        }
    }
}

/// Packs a tag and wire type into a key.
pub fn pack_key(tag: u32, wire_type: WireType) -> Result<u32, EncodeError> {
    if tag > MAX_TAG {
        return Err(EncodeError::TagTooLarge { tag, max: MAX_TAG });
    }
    Ok(tag << WIRE_TYPE_BITS | wire_type.value())
}

/// Splits a key into its tag and wire type.
pub fn unpack_key(key: u32) -> Result<(u32, WireType), DecodeError> {
    let wire_type = WireType::from_u32(key & WIRE_TYPE_MASK)?;
    Ok((key >> WIRE_TYPE_BITS, wire_type))
}

// =============================================================================
// DECODING
// =============================================================================

impl<'a> Reader<'a> {
    /// Reads a field key.
    pub fn read_key(&mut self) -> Result<(u32, WireType), DecodeError> {
        let key = self.read_u32("key")?;
        unpack_key(key)
    }

    /// Reads the length prefix of a sized payload.
    pub fn read_size(&mut self) -> Result<usize, DecodeError> {
        let size = self.read_varint("size")?;
        usize::try_from(size).map_err(|_| DecodeError::LengthOverflow { size })
    }

    /// Reads a length prefix and returns a reader over exactly that many bytes.
    ///
    /// The parent advances past the whole payload immediately.
    pub fn nested(&mut self) -> Result<Reader<'a>, DecodeError> {
        let size = self.read_size()?;
        let bytes = self.read_bytes(size, "sized payload")?;
        Ok(Reader::new(bytes))
    }

    /// Skips one field payload of the given wire type.
    ///
    /// Sized payloads are expected to be already framed, so skipping one
    /// drains the reader.
    pub fn skip_field(&mut self, wire_type: WireType) -> Result<(), DecodeError> {
        match wire_type {
            WireType::Varint => self.read_bool("skipped varint").map(|_| ()),
            WireType::Sized => {
                self.skip_to_end();
                Ok(())
            }
        }
    }
}

// =============================================================================
// ENCODING
// =============================================================================

impl Writer {
    /// Writes a field key.
    pub fn write_key(&mut self, tag: u32, wire_type: WireType) -> Result<(), EncodeError> {
        let key = pack_key(tag, wire_type)?;
        self.write_varint(key as u64);
        Ok(())
    }

    /// Writes a varint field: key then value.
    pub fn write_varint_field(&mut self, tag: u32, value: u64) -> Result<(), EncodeError> {
        self.write_key(tag, WireType::Varint)?;
        self.write_varint(value);
        Ok(())
    }

    /// Writes a sized field: key, length prefix, payload.
    pub fn write_sized_field(&mut self, tag: u32, payload: &[u8]) -> Result<(), EncodeError> {
        self.write_key(tag, WireType::Sized)?;
        self.write_sized(payload);
        Ok(())
    }
}
