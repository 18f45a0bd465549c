//! Writing state values back to the wire format.

use crate::codec::{WireType, Writer};
use crate::error::EncodeError;
use crate::state::Decode;

/// A field or element kind that can be written back to the wire.
///
/// `encode` writes the value's frame content without a length prefix, so the
/// output is exactly what [`Decode::decode`] reads from an already-framed
/// reader.
pub trait Encode: Decode {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError>;
}

/// Writes a value embedded in a larger frame.
///
/// Sized kinds get a length prefix; varint kinds are written in place.
pub fn encode_nested<T: Encode>(value: &T, writer: &mut Writer) -> Result<(), EncodeError> {
    match T::WIRE_TYPE {
        WireType::Sized => writer.write_nested(|nested| value.encode(nested)),
        WireType::Varint => value.encode(writer),
    }
}

/// Writes a keyed struct field.
///
/// A sized field with an empty payload is omitted: it decodes to the same
/// default the node starts from.
pub fn encode_field<T: Encode>(
    writer: &mut Writer,
    tag: u32,
    value: &T,
) -> Result<(), EncodeError> {
    match T::WIRE_TYPE {
        WireType::Varint => {
            writer.write_key(tag, WireType::Varint)?;
            value.encode(writer)
        }
        WireType::Sized => {
            let mut payload = Writer::new();
            value.encode(&mut payload)?;
            if !payload.is_empty() {
                writer.write_key(tag, WireType::Sized)?;
                writer.write_sized(payload.as_bytes());
            }
            Ok(())
        }
    }
}

/// Encodes a whole value as an unframed buffer.
pub fn encode_to_vec<T: Encode>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    value.encode(&mut writer)?;
    Ok(writer.into_bytes())
}
