//! Binary encoding/decoding for statewire.
//!
//! This module implements the wire format: varints, zigzag, field keys and
//! length-delimited framing.

pub mod primitives;
pub mod wire;

pub use primitives::{Reader, Writer, zigzag_decode, zigzag_encode};
pub use wire::{WireType, pack_key, unpack_key};
