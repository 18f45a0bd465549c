//! The State contract and the universal `replace` decode.
//!
//! Every decodable node implements [`State`]. Schema-generated types only
//! need to fill in field tables (tag to wire type, tag to child, tag to
//! setter); [`replace`] drives the decode loop for all of them.

mod change;
mod encode;

pub use change::{Change, ChangeKind};
pub use encode::{Encode, encode_field, encode_nested, encode_to_vec};

use tracing::warn;

use crate::codec::{Reader, WireType};
use crate::error::StateError;
use crate::path::Path;

/// Shape of a node's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateKind {
    /// Keyed fields, read until the frame is exhausted.
    #[default]
    Struct,
    /// One variant tag varint, then the active variant's body.
    Enum,
}

/// Uniform decode, lookup and mutation interface of a tree node.
pub trait State {
    /// Returns this node's address.
    fn path(&self) -> &Path;

    /// Returns the frame shape. Enum-like nodes override this.
    fn kind(&self) -> StateKind {
        StateKind::Struct
    }

    /// Returns the wire type expected at `tag`, or `None` for unknown fields.
    fn wire_type(&self, tag: u32) -> Option<WireType>;

    /// Returns the child node owned at `tag`, if it is itself a State.
    fn nested(&self, _tag: u32) -> Option<&dyn State> {
        None
    }

    /// Mutable counterpart of [`State::nested`].
    fn nested_mut(&mut self, _tag: u32) -> Option<&mut dyn State> {
        None
    }

    /// Replaces the field at `tag` with a value decoded from `reader`.
    ///
    /// Unknown tags are skipped using `wire_type`. A change is returned only
    /// when `notify` is set.
    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError>;

    /// Appends one item decoded from `reader`.
    fn replay_list_push(&mut self, _reader: &mut Reader<'_>) -> Result<Change, StateError> {
        Err(StateError::unsupported("replay_list_push", self.path()))
    }

    /// Removes the last item.
    fn replay_list_pop(&mut self) -> Result<Change, StateError> {
        Err(StateError::unsupported("replay_list_pop", self.path()))
    }

    /// Removes the entry at `key`.
    fn replay_map_remove(&mut self, _key: u32) -> Result<Change, StateError> {
        Err(StateError::unsupported("replay_map_remove", self.path()))
    }
}

/// A field or element kind that can be decoded at a path.
///
/// `WIRE_TYPE` is fixed per kind: varint for integers and booleans, sized for
/// everything else. State kinds expose themselves through `as_state`.
pub trait Decode: Sized {
    const WIRE_TYPE: WireType;

    /// Decodes a value from an already-framed reader.
    fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError>;

    fn as_state(&self) -> Option<&dyn State> {
        None
    }

    fn as_state_mut(&mut self) -> Option<&mut dyn State> {
        None
    }
}

/// Decodes a value that is embedded in a larger frame.
///
/// Sized kinds are read through their length prefix; varint kinds are read
/// in place.
pub fn decode_nested<T: Decode>(reader: &mut Reader<'_>, path: Path) -> Result<T, StateError> {
    match T::WIRE_TYPE {
        WireType::Sized => T::decode(&mut reader.nested()?, path),
        WireType::Varint => T::decode(reader, path),
    }
}

/// Decodes `reader` into `state` without notifying, then returns it.
///
/// Generated types implement [`Decode::decode`] by passing a freshly built
/// default node here.
pub fn deserialize<S: State>(mut state: S, reader: &mut Reader<'_>) -> Result<S, StateError> {
    replace(&mut state, reader, false)?;
    Ok(state)
}

/// Decodes a whole frame into `state`, field by field.
///
/// Enum-like nodes read one variant tag and hand the rest of the frame to
/// that variant. Struct-like nodes loop over keyed fields until the frame is
/// exhausted; a field whose wire type disagrees with the expected one is
/// logged and skipped, and unknown fields are skipped by the node itself.
pub fn replace(
    state: &mut dyn State,
    reader: &mut Reader<'_>,
    notify: bool,
) -> Result<Vec<Change>, StateError> {
    let mut changes = Vec::new();

    if state.kind() == StateKind::Enum {
        let tag = if reader.end_of_stream() {
            0
        } else {
            reader.read_u32("variant tag")?
        };
        changes.extend(state.replace_at(tag, WireType::Sized, reader, notify)?);
        return Ok(changes);
    }

    while !reader.end_of_stream() {
        let (tag, wire_type) = reader.read_key()?;

        let mut nested;
        let field = match wire_type {
            WireType::Sized => {
                nested = reader.nested()?;
                &mut nested
            }
            WireType::Varint => &mut *reader,
        };

        if let Some(expected) = state.wire_type(tag) {
            if expected != wire_type {
                warn!(
                    path = %state.path().nested(tag),
                    %expected,
                    actual = %wire_type,
                    "wire type mismatch, skipping field"
                );
                field.skip_field(wire_type)?;
                continue;
            }
        }

        changes.extend(state.replace_at(tag, wire_type, field, notify)?);
    }

    Ok(changes)
}

/// Resolves a tag sequence from `root`.
pub fn get_nested<'s>(root: &'s dyn State, tags: &[u32]) -> Option<&'s dyn State> {
    tags.iter().try_fold(root, |node, &tag| node.nested(tag))
}

/// Resolves a tag sequence from `root` for mutation.
pub fn get_nested_mut<'s>(root: &'s mut dyn State, tags: &[u32]) -> Option<&'s mut dyn State> {
    tags.iter().try_fold(root, |node, &tag| node.nested_mut(tag))
}
