//! Replay logs: entries, their stream framing and the replay engine.

mod buffer;
mod entry;
mod replay;

pub use buffer::LogBuffer;
pub use entry::{LogEntry, LogEntryKind};
pub use replay::{replay, replay_entry};
