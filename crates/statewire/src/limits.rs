//! Protocol constants for the statewire binary format.
//!
//! The decoder enforces no varint length cap: a varint ends at the
//! first byte without the continuation bit, and running out of bytes first is
//! reported as stream exhaustion.

/// Number of low bits of a field key that hold the wire type.
pub const WIRE_TYPE_BITS: u32 = 3;

/// Mask applied to a field key to extract its wire type.
pub const WIRE_TYPE_MASK: u32 = (1 << WIRE_TYPE_BITS) - 1;

/// Largest tag that fits in a 32-bit key next to the wire type (2^29 - 1).
pub const MAX_TAG: u32 = u32::MAX >> WIRE_TYPE_BITS;

/// Maximum encoded length of a 64-bit varint.
///
/// Only used to size the encoder's scratch buffer.
pub const MAX_VARINT_BYTES: usize = 10;

/// Continuation flag carried by every varint byte except the last.
pub const VARINT_CONTINUATION: u8 = 0x80;

/// Payload bits carried by each varint byte.
pub const VARINT_PAYLOAD: u8 = 0x7F;
