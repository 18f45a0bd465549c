//! Optional values.

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{Decode, Encode, decode_nested, encode_nested};

/// An optional value is a sized payload: empty means `None`, otherwise it
/// holds one nested value addressed at tag 0.
impl<T: Decode> Decode for Option<T> {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError> {
        if reader.end_of_stream() {
            return Ok(None);
        }
        decode_nested(reader, path.nested(0)).map(Some)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Some(value) => encode_nested(value, writer),
            None => Ok(()),
        }
    }
}
