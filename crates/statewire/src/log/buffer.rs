//! Stream framing for outgoing log entries.

use crate::codec::Writer;
use crate::error::EncodeError;
use crate::log::LogEntry;

/// Accumulates entries as a replay stream.
///
/// The stream is a run of length-prefixed entry frames, ready to be fed to
/// [`replay`](crate::replay).
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    writer: Writer,
    len: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: &LogEntry) -> Result<(), EncodeError> {
        self.writer.write_nested(|w| entry.encode(w))?;
        self.len += 1;
        Ok(())
    }

    /// Returns the number of buffered entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the encoded stream so far.
    pub fn bytes(&self) -> &[u8] {
        self.writer.as_bytes()
    }

    /// Takes the encoded stream and leaves the buffer empty.
    pub fn pluck(&mut self) -> Vec<u8> {
        self.len = 0;
        std::mem::take(&mut self.writer).into_bytes()
    }
}
