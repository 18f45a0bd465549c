//! The replayable list container.
//!
//! Lists are addressed by element index and support the two list replay
//! operations, push and pop. A plain `Vec<T>` reuses the same frame for
//! read-only sequences.

use std::ops::Index;

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{Change, ChangeKind, Decode, Encode, State, decode_nested, encode_nested};

/// A replayable, ordered sequence of elements.
///
/// Element `i` lives at `path/i`. The frame is a run of elements with no
/// keys: varint kinds back to back, sized kinds each behind a length prefix.
/// Every element shares the wire type of `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateList<T> {
    path: Path,
    items: Vec<T>,
}

impl<T> StateList<T> {
    /// Creates an empty list at `path`.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            items: Vec::new(),
        }
    }

    /// Creates a list at `path` holding `items`.
    ///
    /// State elements should already be addressed at `path/i`.
    pub fn from_items(path: Path, items: Vec<T>) -> Self {
        Self { path, items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn next_tag(&self) -> u32 {
        self.items.len() as u32
    }
}

impl<T> Default for StateList<T> {
    fn default() -> Self {
        Self::new(Path::root())
    }
}

impl<T> Index<usize> for StateList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'l, T> IntoIterator for &'l StateList<T> {
    type Item = &'l T;
    type IntoIter = std::slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Decode> Decode for StateList<T> {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError> {
        let mut list = Self::new(path);
        while !reader.end_of_stream() {
            let item = decode_nested(reader, list.path.nested(list.next_tag()))?;
            list.items.push(item);
        }
        Ok(list)
    }

    fn as_state(&self) -> Option<&dyn State> {
        Some(self)
    }

    fn as_state_mut(&mut self) -> Option<&mut dyn State> {
        Some(self)
    }
}

impl<T: Decode> State for StateList<T> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, _tag: u32) -> Option<WireType> {
        Some(T::WIRE_TYPE)
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        self.items.get(tag as usize).and_then(Decode::as_state)
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        self.items.get_mut(tag as usize).and_then(Decode::as_state_mut)
    }

    fn replace_at(
        &mut self,
        tag: u32,
        _wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let len = self.items.len();
        let Some(slot) = self.items.get_mut(tag as usize) else {
            return Err(StateError::IndexOutOfRange {
                path: self.path.to_string(),
                index: tag,
                len,
            });
        };

        *slot = T::decode(reader, self.path.nested(tag))?;
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }

    fn replay_list_push(&mut self, reader: &mut Reader<'_>) -> Result<Change, StateError> {
        let path = self.path.nested(self.next_tag());
        let item = T::decode(reader, path.clone())?;
        self.items.push(item);
        Ok(Change::new(path, ChangeKind::ListPush))
    }

    fn replay_list_pop(&mut self) -> Result<Change, StateError> {
        if self.items.pop().is_none() {
            return Err(StateError::PopFromEmpty {
                path: self.path.to_string(),
            });
        }
        Ok(Change::new(
            self.path.nested(self.next_tag()),
            ChangeKind::ListPop,
        ))
    }
}

impl<T: Encode> Encode for StateList<T> {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        self.items
            .iter()
            .try_for_each(|item| encode_nested(item, writer))
    }
}

/// A read-only vector shares the list frame but is not addressable.
impl<T: Decode> Decode for Vec<T> {
    const WIRE_TYPE: WireType = WireType::Sized;

    fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError> {
        StateList::decode(reader, path).map(StateList::into_items)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        self.iter().try_for_each(|item| encode_nested(item, writer))
    }
}
