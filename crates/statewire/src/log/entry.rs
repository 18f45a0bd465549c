//! Replay instructions and their binary layout.
//!
//! An entry is an enum-like frame: one variant tag varint, then the variant
//! body as keyed fields. Field 0 is always the target path, a sized run of
//! tag varints. `Update` and `ListPush` carry their payload in sized field 1;
//! `MapRemove` carries the key in varint field 1.

use std::fmt;

use crate::codec::{Reader, WireType, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::path::Path;
use crate::state::{Encode, encode_to_vec};

/// Variant tag of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEntryKind {
    Update = 0,
    ListPush = 8,
    ListPop = 9,
    MapRemove = 12,
}

impl LogEntryKind {
    pub fn from_u32(tag: u32) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(LogEntryKind::Update),
            8 => Ok(LogEntryKind::ListPush),
            9 => Ok(LogEntryKind::ListPop),
            12 => Ok(LogEntryKind::MapRemove),
            _ => Err(DecodeError::UnknownLogEntry { tag }),
        }
    }

    pub fn tag(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for LogEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntryKind::Update => f.write_str("update"),
            LogEntryKind::ListPush => f.write_str("list_push"),
            LogEntryKind::ListPop => f.write_str("list_pop"),
            LogEntryKind::MapRemove => f.write_str("map_remove"),
        }
    }
}

/// One replay instruction.
///
/// For `Update` the path addresses the replaced field itself; for the other
/// variants it addresses the container being mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Update { path: Vec<u32>, value: Vec<u8> },
    ListPush { path: Vec<u32>, item: Vec<u8> },
    ListPop { path: Vec<u32> },
    MapRemove { path: Vec<u32>, key: u32 },
}

impl LogEntry {
    pub fn update(path: &Path, value: impl Into<Vec<u8>>) -> Self {
        LogEntry::Update {
            path: path.tags(),
            value: value.into(),
        }
    }

    pub fn list_push(path: &Path, item: impl Into<Vec<u8>>) -> Self {
        LogEntry::ListPush {
            path: path.tags(),
            item: item.into(),
        }
    }

    /// Builds an `Update` whose payload is `value` encoded at the target.
    pub fn update_value<T: Encode>(path: &Path, value: &T) -> Result<Self, EncodeError> {
        Ok(Self::update(path, encode_to_vec(value)?))
    }

    /// Builds a `ListPush` whose payload is `item` encoded as a new element.
    pub fn list_push_value<T: Encode>(path: &Path, item: &T) -> Result<Self, EncodeError> {
        Ok(Self::list_push(path, encode_to_vec(item)?))
    }

    pub fn list_pop(path: &Path) -> Self {
        LogEntry::ListPop { path: path.tags() }
    }

    pub fn map_remove(path: &Path, key: u32) -> Self {
        LogEntry::MapRemove {
            path: path.tags(),
            key,
        }
    }

    pub fn kind(&self) -> LogEntryKind {
        match self {
            LogEntry::Update { .. } => LogEntryKind::Update,
            LogEntry::ListPush { .. } => LogEntryKind::ListPush,
            LogEntry::ListPop { .. } => LogEntryKind::ListPop,
            LogEntry::MapRemove { .. } => LogEntryKind::MapRemove,
        }
    }

    /// Returns the flattened target path.
    pub fn path(&self) -> &[u32] {
        match self {
            LogEntry::Update { path, .. }
            | LogEntry::ListPush { path, .. }
            | LogEntry::ListPop { path }
            | LogEntry::MapRemove { path, .. } => path,
        }
    }

    // =========================================================================
    // DECODING
    // =========================================================================

    /// Decodes one entry from a reader scoped to exactly its frame.
    ///
    /// Missing fields keep their defaults and unknown fields are skipped. An
    /// empty frame is an `Update` of the root with an empty value.
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let tag = if reader.end_of_stream() {
            0
        } else {
            reader.read_u32("log entry variant")?
        };
        let kind = LogEntryKind::from_u32(tag)?;

        let mut path = Vec::new();
        let mut payload = Vec::new();
        let mut key = 0;

        while !reader.end_of_stream() {
            match reader.read_key()? {
                (0, WireType::Sized) => path = read_path(&mut reader.nested()?)?,
                (1, WireType::Sized) if kind != LogEntryKind::MapRemove => {
                    payload = reader.nested()?.read_to_end().to_vec();
                }
                (1, WireType::Varint) if kind == LogEntryKind::MapRemove => {
                    key = reader.read_u32("map key")?;
                }
                (_, WireType::Sized) => {
                    reader.nested()?;
                }
                (_, WireType::Varint) => reader.skip_field(WireType::Varint)?,
            }
        }

        Ok(match kind {
            LogEntryKind::Update => LogEntry::Update {
                path,
                value: payload,
            },
            LogEntryKind::ListPush => LogEntry::ListPush {
                path,
                item: payload,
            },
            LogEntryKind::ListPop => LogEntry::ListPop { path },
            LogEntryKind::MapRemove => LogEntry::MapRemove { path, key },
        })
    }

    // =========================================================================
    // ENCODING
    // =========================================================================

    /// Encodes the entry frame, without its outer length prefix.
    pub fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_varint(self.kind().tag() as u64);

        let mut path = Writer::with_capacity(self.path().len());
        for &tag in self.path() {
            path.write_varint(tag as u64);
        }
        writer.write_sized_field(0, path.as_bytes())?;

        match self {
            LogEntry::Update { value: payload, .. } | LogEntry::ListPush { item: payload, .. } => {
                writer.write_sized_field(1, payload)
            }
            LogEntry::ListPop { .. } => Ok(()),
            LogEntry::MapRemove { key, .. } => writer.write_varint_field(1, *key as u64),
        }
    }

    /// Encodes the entry frame into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = Writer::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

fn read_path(reader: &mut Reader<'_>) -> Result<Vec<u32>, DecodeError> {
    let mut path = Vec::new();
    while !reader.end_of_stream() {
        path.push(reader.read_u32("log entry path")?);
    }
    Ok(path)
}
