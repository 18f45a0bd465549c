//! Varint kinds: unsigned and zigzag-signed integers and booleans.

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{Decode, Encode};

macro_rules! impl_varint_decode {
    ($($ty:ty => $read:ident),* $(,)?) => {
        $(
            impl Decode for $ty {
                const WIRE_TYPE: WireType = WireType::Varint;

                #[inline]
                fn decode(reader: &mut Reader<'_>, _path: Path) -> Result<Self, StateError> {
                    Ok(reader.$read(stringify!($ty))?)
                }
            }
        )*
    };
}

impl_varint_decode! {
    u8 => read_u8,
    u16 => read_u16,
    u32 => read_u32,
    u64 => read_u64,
    i8 => read_i8,
    i16 => read_i16,
    i32 => read_i32,
    i64 => read_i64,
    bool => read_bool,
}

macro_rules! impl_varint_encode {
    ($($ty:ty => $write:ident($wide:ty)),* $(,)?) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
                    writer.$write(<$wide>::from(*self));
                    Ok(())
                }
            }
        )*
    };
}

impl_varint_encode! {
    u8 => write_varint(u64),
    u16 => write_varint(u64),
    u32 => write_varint(u64),
    u64 => write_varint(u64),
    i8 => write_signed_varint(i64),
    i16 => write_signed_varint(i64),
    i32 => write_signed_varint(i64),
    i64 => write_signed_varint(i64),
    bool => write_bool(bool),
}
