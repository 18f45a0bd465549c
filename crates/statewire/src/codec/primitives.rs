//! Primitive encoding/decoding for the statewire binary format.
//!
//! Implements the forward-only byte cursor, varints, zigzag and booleans.

use crate::error::DecodeError;
use crate::limits::{MAX_VARINT_BYTES, VARINT_CONTINUATION, VARINT_PAYLOAD};

// =============================================================================
// DECODING
// =============================================================================

/// Forward-only cursor over a byte slice.
///
/// A reader never seeks backwards. Nested readers produced by
/// [`Reader::nested`] own a disjoint, pre-sliced range of the parent's bytes,
/// so exhausting one never moves the parent.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the bytes left, without consuming them.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn end_of_stream(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single raw byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEof { context })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly `n` raw bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Advances past `n` bytes without materializing them.
    pub fn skip(&mut self, n: usize, context: &'static str) -> Result<(), DecodeError> {
        self.read_bytes(n, context).map(|_| ())
    }

    /// Consumes and returns every remaining byte.
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let bytes = self.remaining_bytes();
        self.pos = self.data.len();
        bytes
    }

    /// Drains the reader.
    pub fn skip_to_end(&mut self) {
        self.pos = self.data.len();
    }

    /// Reads an unsigned varint (little-endian base-128).
    ///
    /// No length cap is enforced; groups beyond the 64th bit are dropped.
    #[inline]
    pub fn read_varint(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift = 0u32;

        loop {
            let byte = self.read_byte(context)?;
            let group = (byte & VARINT_PAYLOAD) as u64;

            if let Some(bits) = group.checked_shl(shift) {
                result |= bits;
            }

            if byte & VARINT_CONTINUATION == 0 {
                return Ok(result);
            }
            shift = shift.saturating_add(7);
        }
    }

    /// Reads a signed varint (zigzag encoded).
    pub fn read_signed_varint(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        let unsigned = self.read_varint(context)?;
        Ok(zigzag_decode(unsigned))
    }

    /// Reads a boolean varint.
    ///
    /// Lenient: true if any 7-bit group is nonzero. Drains the whole
    /// continuation chain, which also makes it the varint skipper.
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        let mut value = false;

        loop {
            let byte = self.read_byte(context)?;
            value |= byte & VARINT_PAYLOAD != 0;

            if byte & VARINT_CONTINUATION == 0 {
                return Ok(value);
            }
        }
    }

    /// Reads a boolean varint that must be exactly 0 or 1.
    pub fn read_bool_strict(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        match self.read_varint(context)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { value }),
        }
    }

    /// Reads an unsigned varint narrowed to `u8`.
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        Ok(self.read_varint(context)? as u8)
    }

    /// Reads an unsigned varint narrowed to `u16`.
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(self.read_varint(context)? as u16)
    }

    /// Reads an unsigned varint narrowed to `u32`.
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(self.read_varint(context)? as u32)
    }

    /// Reads an unsigned varint.
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        self.read_varint(context)
    }

    /// Reads a zigzag varint narrowed to `i8`.
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_signed_varint(context)? as i8)
    }

    /// Reads a zigzag varint narrowed to `i16`.
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(self.read_signed_varint(context)? as i16)
    }

    /// Reads a zigzag varint narrowed to `i32`.
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(self.read_signed_varint(context)? as i32)
    }

    /// Reads a zigzag varint.
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        self.read_signed_varint(context)
    }

    /// Reads the remaining bytes as UTF-8.
    pub fn read_str_to_end(&mut self, context: &'static str) -> Result<&'a str, DecodeError> {
        std::str::from_utf8(self.read_to_end()).map_err(|_| DecodeError::InvalidUtf8 { context })
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single raw byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an unsigned varint (little-endian base-128).
    #[inline]
    pub fn write_varint(&mut self, mut value: u64) {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value as u8) & VARINT_PAYLOAD;
            value >>= 7;
            if value != 0 {
                byte |= VARINT_CONTINUATION;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a signed varint (zigzag encoded).
    pub fn write_signed_varint(&mut self, value: i64) {
        self.write_varint(zigzag_encode(value));
    }

    /// Writes a boolean as a one-byte varint.
    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(value as u8);
    }

    /// Writes a length-prefixed payload.
    pub fn write_sized(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
    }

    /// Encodes a nested frame with `f`, then writes it length-prefixed.
    pub fn write_nested<E>(
        &mut self,
        f: impl FnOnce(&mut Writer) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut nested = Writer::new();
        f(&mut nested)?;
        self.write_sized(nested.as_bytes());
        Ok(())
    }
}

// =============================================================================
// ZIGZAG ENCODING
// =============================================================================

/// Encodes a signed integer using zigzag encoding.
///
/// Maps negative numbers to odd positive numbers:
/// 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, 2 -> 4, ...
#[inline]
pub fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Decodes a zigzag-encoded unsigned integer back to signed.
#[inline]
pub fn zigzag_decode(n: u64) -> i64 {
    ((n >> 1) as i64) ^ (-((n & 1) as i64))
}
