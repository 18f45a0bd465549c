//! Error types for statewire decoding, state mutation and encoding.

use thiserror::Error;

/// Error raised while reading the binary wire format.
///
/// Every variant is fatal for the decode call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("invalid wire type: {value} (expected 0 or 2)")]
    InvalidWireType { value: u32 },

    #[error("invalid bool value: {value} (expected 0 or 1)")]
    InvalidBool { value: u64 },

    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 { context: &'static str },

    #[error("length prefix {size} does not fit in memory")]
    LengthOverflow { size: u64 },

    #[error("unknown log entry variant: {tag}")]
    UnknownLogEntry { tag: u32 },
}

/// Error raised by a [`State`](crate::State) node while decoding into or
/// mutating a tree.
///
/// Wire faults are wrapped; the remaining variants are contract faults that a
/// well-formed stream never triggers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("index {index} out of range for list at `{path}` (len: {len})")]
    IndexOutOfRange { path: String, index: u32, len: usize },

    #[error("cannot pop from an empty list at `{path}`")]
    PopFromEmpty { path: String },

    #[error("key {key} not found in map at `{path}`")]
    KeyNotFound { path: String, key: u32 },

    #[error("`{operation}` is not supported by the node at `{path}`")]
    Unsupported {
        operation: &'static str,
        path: String,
    },
}

impl StateError {
    /// Builds an [`StateError::Unsupported`] for the node at `path`.
    pub fn unsupported(operation: &'static str, path: &crate::Path) -> Self {
        StateError::Unsupported {
            operation,
            path: path.to_string(),
        }
    }

    /// Returns true if the error came from reading past the end of a frame.
    pub fn is_eof(&self) -> bool {
        matches!(self, StateError::Decode(DecodeError::UnexpectedEof { .. }))
    }
}

/// Error that stopped a replay stream part-way.
///
/// Entries before the failing one were applied to the tree; their changes are
/// kept in `applied` so callers can still forward them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("replay stopped after {} change(s): {source}", .applied.len())]
pub struct ReplayError {
    pub applied: Vec<crate::Change>,
    pub source: StateError,
}

impl ReplayError {
    pub fn new(applied: Vec<crate::Change>, source: impl Into<StateError>) -> Self {
        Self {
            applied,
            source: source.into(),
        }
    }

    /// Returns true if the stream ended inside a frame.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }
}

/// Error raised while encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("tag {tag} exceeds maximum {max}")]
    TagTooLarge { tag: u32, max: u32 },
}
