//! statewire: schema-driven binary state codec with path-addressed replay.
//!
//! This crate decodes a compact tag/wire-type binary format into a live tree
//! of typed nodes, then keeps that tree in sync by applying a stream of small
//! log entries (field updates, list pushes and pops, map removals) instead of
//! re-sending the whole tree.
//!
//! # Overview
//!
//! - **Wire format**: varints, zigzag integers, `tag << 3 | wire_type` keys
//!   and length-prefixed framing
//! - **Paths**: every node knows its address, the tag sequence from the root
//! - **State contract**: schema bindings implement [`State`] and [`Decode`];
//!   [`replace`] drives the decode loop for all of them, and [`Encode`]
//!   writes a tree back out
//! - **Replay**: [`replay`] resolves each entry's path and mutates the
//!   addressed container in place, returning the [`Change`]s it made
//!
//! # Quick Start
//!
//! ```rust
//! use statewire::{Decode, LogBuffer, LogEntry, Path, Reader, StateList, replay};
//!
//! // Decode a list of zigzag integers
//! let data = [2, 4, 242, 20];
//! let mut numbers = StateList::<i32>::decode(&mut Reader::new(&data), Path::root()).unwrap();
//! assert_eq!(numbers.items(), &[1, 2, 1337]);
//!
//! // Push -3, then overwrite the first element with 4
//! let mut log = LogBuffer::new();
//! log.push(&LogEntry::list_push(&Path::root(), vec![5])).unwrap();
//! log.push(&LogEntry::update(&Path::root().nested(0), vec![8])).unwrap();
//!
//! let changes = replay(&mut numbers, &mut Reader::new(log.bytes())).unwrap();
//! assert_eq!(numbers.items(), &[4, 2, 1337, -3]);
//! assert_eq!(changes.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`codec`]: Reader, Writer, varints and field keys
//! - [`path`]: Node addresses
//! - [`state`]: The State contract, `replace`, encoding and change events
//! - [`types`]: Primitive, optional, list and map bindings
//! - [`log`]: Log entries, replay streams and the replay engine
//! - [`error`]: Error types
//! - [`limits`]: Wire format constants
//!
//! # Error Handling
//!
//! Malformed input (truncated frames, invalid wire types) is returned as an
//! error and aborts the current decode. A failed [`replay`] returns a
//! [`ReplayError`] holding the changes applied before the fault. Fields whose
//! wire type disagrees with the schema, unknown fields and stale replay
//! entries are skipped and reported through `tracing`.

pub mod codec;
pub mod error;
pub mod limits;
pub mod log;
pub mod path;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export commonly used types at crate root
pub use codec::{Reader, WireType, Writer};
pub use error::{DecodeError, EncodeError, ReplayError, StateError};
pub use log::{LogBuffer, LogEntry, LogEntryKind, replay, replay_entry};
pub use path::Path;
pub use state::{
    Change, ChangeKind, Decode, Encode, State, StateKind, decode_nested, deserialize,
    encode_field, encode_nested, encode_to_vec, get_nested, get_nested_mut, replace,
};
pub use types::{Bytes, StateList, StateMap};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
