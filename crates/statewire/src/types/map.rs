//! The replayable map container, keyed by `u32`.

use rustc_hash::FxHashMap;

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{Change, ChangeKind, Decode, Encode, State, deserialize, encode_nested};

/// A replayable map from `u32` keys to values.
///
/// The frame is struct-like: each entry is a keyed field whose tag is the map
/// key. Entry `k` lives at `path/k`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMap<T> {
    path: Path,
    entries: FxHashMap<u32, T>,
}

impl<T> StateMap<T> {
    /// Creates an empty map at `path`.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            entries: FxHashMap::default(),
        }
    }

    /// Inserts `value` at `key`, returning the previous value.
    ///
    /// State values should already be addressed at `path/key`.
    pub fn insert(&mut self, key: u32, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: u32) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> Vec<u32> {
        let mut keys: Vec<u32> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().map(|(&key, value)| (key, value))
    }
}

impl<T> Default for StateMap<T> {
    fn default() -> Self {
        Self::new(Path::root())
    }
}

impl<T: Decode> Decode for StateMap<T> {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError> {
        deserialize(Self::new(path), reader)
    }

    fn as_state(&self) -> Option<&dyn State> {
        Some(self)
    }

    fn as_state_mut(&mut self) -> Option<&mut dyn State> {
        Some(self)
    }
}

/// Entries are written in ascending key order, empty payloads included.
impl<T: Encode> Encode for StateMap<T> {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        for key in self.keys() {
            if let Some(value) = self.entries.get(&key) {
                writer.write_key(key, T::WIRE_TYPE)?;
                encode_nested(value, writer)?;
            }
        }
        Ok(())
    }
}

impl<T: Decode> State for StateMap<T> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, _key: u32) -> Option<WireType> {
        Some(T::WIRE_TYPE)
    }

    fn nested(&self, key: u32) -> Option<&dyn State> {
        self.entries.get(&key).and_then(Decode::as_state)
    }

    fn nested_mut(&mut self, key: u32) -> Option<&mut dyn State> {
        self.entries.get_mut(&key).and_then(Decode::as_state_mut)
    }

    fn replace_at(
        &mut self,
        key: u32,
        _wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(key);
        let value = T::decode(reader, path.clone())?;
        let kind = match self.entries.insert(key, value) {
            Some(_) => ChangeKind::Update,
            None => ChangeKind::MapInsert,
        };
        Ok(notify.then(|| Change::new(path, kind)))
    }

    fn replay_map_remove(&mut self, key: u32) -> Result<Change, StateError> {
        match self.entries.remove(&key) {
            Some(_) => Ok(Change::new(self.path.nested(key), ChangeKind::MapRemove)),
            None => Err(StateError::KeyNotFound {
                path: self.path.to_string(),
                key,
            }),
        }
    }
}
