//! Hand-written schema bindings used by the tests.
//!
//! Each type is written the way generated code would be: a path, one field
//! per tag, and table-like `State` methods.

use crate::codec::{Reader, WireType, Writer};
use crate::error::{EncodeError, StateError};
use crate::path::Path;
use crate::state::{
    Change, ChangeKind, Decode, Encode, State, StateKind, deserialize, encode_field,
};
use crate::types::{StateList, StateMap};

/// Encodes a frame with `f`.
pub fn build(f: impl FnOnce(&mut Writer) -> Result<(), EncodeError>) -> Vec<u8> {
    let mut writer = Writer::new();
    f(&mut writer).unwrap();
    writer.into_bytes()
}

/// Three identical hints, a timestamp of 11111111 and 10 seconds to turn end.
pub fn action_message_bytes() -> Vec<u8> {
    let hint = [
        0, 1, 8, 1, 18, 3, 1, 2, 3, 26, 1, 1, 34, 1, 1, 42, 3, 1, 2, 3, 58, 1, 1, 66, 3, 1, 2, 3,
    ];
    let mut data = vec![0, 1, 18, 87];
    for _ in 0..3 {
        data.push(28);
        data.extend_from_slice(&hint);
    }
    data.extend_from_slice(&[24, 142, 171, 204, 10, 32, 20]);
    data
}

macro_rules! impl_state_decode {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Decode for $ty {
                const WIRE_TYPE: WireType = WireType::Sized;

                fn decode(reader: &mut Reader<'_>, path: Path) -> Result<Self, StateError> {
                    deserialize($ty::new(path), reader)
                }

                fn as_state(&self) -> Option<&dyn State> {
                    Some(self)
                }

                fn as_state_mut(&mut self) -> Option<&mut dyn State> {
                    Some(self)
                }
            }
        )*
    };
}

impl_state_decode!(Hello, CardPlayHint, ActionMessage, Action, EndTurn, Play, Inventory);

macro_rules! impl_state_encode {
    ($($ty:ident { $($tag:literal => $field:ident),* $(,)? }),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
                    $(encode_field(writer, $tag, &self.$field)?;)*
                    Ok(())
                }
            }
        )*
    };
}

impl_state_encode! {
    Hello { 0 => numbers, 1 => others },
    CardPlayHint {
        0 => card_id,
        1 => are_targets_predictable,
        2 => target_candidates,
        3 => num_options,
        4 => num_targets,
        5 => card_candidates,
        6 => num_cards,
        7 => min_num_cards,
        8 => position_candidates,
        9 => num_positions,
    },
    ActionMessage {
        0 => index,
        1 => actions,
        2 => card_play_hints,
        3 => timestamp,
        4 => time_to_turn_end,
    },
    EndTurn { 0 => forced },
    Play { 0 => card_id, 1 => targets },
    Inventory { 0 => slots, 1 => gold },
}

impl Encode for Action {
    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.write_varint(u64::from(self.tag()));
        match &self.variant {
            ActionVariant::EndTurn(end_turn) => end_turn.encode(writer),
            ActionVariant::Play(play) => play.encode(writer),
        }
    }
}

fn skip(reader: &mut Reader<'_>, wire_type: WireType) -> Result<Option<Change>, StateError> {
    reader.skip_field(wire_type)?;
    Ok(None)
}

// =============================================================================
// Hello
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Hello {
    path: Path,
    pub numbers: StateList<i32>,
    pub others: StateList<i32>,
}

impl Hello {
    pub fn new(path: Path) -> Self {
        Self {
            numbers: StateList::new(path.nested(0)),
            others: StateList::new(path.nested(1)),
            path,
        }
    }
}

impl State for Hello {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 | 1 => Some(WireType::Sized),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        match tag {
            0 => Some(&self.numbers),
            1 => Some(&self.others),
            _ => None,
        }
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        match tag {
            0 => Some(&mut self.numbers),
            1 => Some(&mut self.others),
            _ => None,
        }
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        match tag {
            0 => self.numbers = Decode::decode(reader, path)?,
            1 => self.others = Decode::decode(reader, path)?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}

// =============================================================================
// CardPlayHint
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CardPlayHint {
    path: Path,
    pub card_id: u32,
    pub are_targets_predictable: bool,
    pub target_candidates: StateList<u32>,
    pub num_options: Option<u32>,
    pub num_targets: Option<u32>,
    pub card_candidates: StateList<u32>,
    pub num_cards: Option<u32>,
    pub min_num_cards: Option<u32>,
    pub position_candidates: StateList<u32>,
    pub num_positions: Option<u32>,
}

impl CardPlayHint {
    pub fn new(path: Path) -> Self {
        Self {
            card_id: 0,
            are_targets_predictable: false,
            target_candidates: StateList::new(path.nested(2)),
            num_options: None,
            num_targets: None,
            card_candidates: StateList::new(path.nested(5)),
            num_cards: None,
            min_num_cards: None,
            position_candidates: StateList::new(path.nested(8)),
            num_positions: None,
            path,
        }
    }
}

impl State for CardPlayHint {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 | 1 => Some(WireType::Varint),
            2..=9 => Some(WireType::Sized),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        match tag {
            2 => Some(&self.target_candidates),
            5 => Some(&self.card_candidates),
            8 => Some(&self.position_candidates),
            _ => None,
        }
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        match tag {
            2 => Some(&mut self.target_candidates),
            5 => Some(&mut self.card_candidates),
            8 => Some(&mut self.position_candidates),
            _ => None,
        }
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        match tag {
            0 => self.card_id = Decode::decode(reader, path)?,
            1 => self.are_targets_predictable = Decode::decode(reader, path)?,
            2 => self.target_candidates = Decode::decode(reader, path)?,
            3 => self.num_options = Decode::decode(reader, path)?,
            4 => self.num_targets = Decode::decode(reader, path)?,
            5 => self.card_candidates = Decode::decode(reader, path)?,
            6 => self.num_cards = Decode::decode(reader, path)?,
            7 => self.min_num_cards = Decode::decode(reader, path)?,
            8 => self.position_candidates = Decode::decode(reader, path)?,
            9 => self.num_positions = Decode::decode(reader, path)?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}

// =============================================================================
// ActionMessage
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ActionMessage {
    path: Path,
    pub index: u32,
    pub actions: StateList<Action>,
    pub card_play_hints: StateList<CardPlayHint>,
    pub timestamp: i64,
    pub time_to_turn_end: i32,
}

impl ActionMessage {
    pub fn new(path: Path) -> Self {
        Self {
            index: 0,
            actions: StateList::new(path.nested(1)),
            card_play_hints: StateList::new(path.nested(2)),
            timestamp: 0,
            time_to_turn_end: 0,
            path,
        }
    }
}

impl State for ActionMessage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 | 3 | 4 => Some(WireType::Varint),
            1 | 2 => Some(WireType::Sized),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        match tag {
            1 => Some(&self.actions),
            2 => Some(&self.card_play_hints),
            _ => None,
        }
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        match tag {
            1 => Some(&mut self.actions),
            2 => Some(&mut self.card_play_hints),
            _ => None,
        }
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        match tag {
            0 => self.index = Decode::decode(reader, path)?,
            1 => self.actions = Decode::decode(reader, path)?,
            2 => self.card_play_hints = Decode::decode(reader, path)?,
            3 => self.timestamp = Decode::decode(reader, path)?,
            4 => self.time_to_turn_end = Decode::decode(reader, path)?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}

// =============================================================================
// Action (enum-like)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    path: Path,
    variant: ActionVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionVariant {
    EndTurn(EndTurn),
    Play(Play),
}

impl Action {
    pub fn new(path: Path) -> Self {
        Self {
            variant: ActionVariant::EndTurn(EndTurn::new(path.nested(0))),
            path,
        }
    }

    pub fn tag(&self) -> u32 {
        match self.variant {
            ActionVariant::EndTurn(_) => 0,
            ActionVariant::Play(_) => 1,
        }
    }

    pub fn as_play(&self) -> Option<&Play> {
        match &self.variant {
            ActionVariant::Play(play) => Some(play),
            ActionVariant::EndTurn(_) => None,
        }
    }
}

impl State for Action {
    fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> StateKind {
        StateKind::Enum
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 | 1 => Some(WireType::Sized),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        match (&self.variant, tag) {
            (ActionVariant::EndTurn(end_turn), 0) => Some(end_turn),
            (ActionVariant::Play(play), 1) => Some(play),
            _ => None,
        }
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        match (&mut self.variant, tag) {
            (ActionVariant::EndTurn(end_turn), 0) => Some(end_turn),
            (ActionVariant::Play(play), 1) => Some(play),
            _ => None,
        }
    }

    fn replace_at(
        &mut self,
        tag: u32,
        _wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        let variant = match tag {
            0 => ActionVariant::EndTurn(EndTurn::decode(reader, path.clone())?),
            1 => ActionVariant::Play(Play::decode(reader, path.clone())?),
            _ => {
                reader.skip_to_end();
                return Ok(None);
            }
        };
        let previous = self.tag();
        self.variant = variant;
        Ok(notify.then(|| Change::new(path, ChangeKind::Variant { previous })))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndTurn {
    path: Path,
    pub forced: bool,
}

impl EndTurn {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            forced: false,
        }
    }
}

impl State for EndTurn {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        (tag == 0).then_some(WireType::Varint)
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        match tag {
            0 => self.forced = Decode::decode(reader, self.path.nested(0))?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    path: Path,
    pub card_id: u32,
    pub targets: StateList<u32>,
}

impl Play {
    pub fn new(path: Path) -> Self {
        Self {
            card_id: 0,
            targets: StateList::new(path.nested(1)),
            path,
        }
    }
}

impl State for Play {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Sized),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        (tag == 1).then_some(&self.targets as &dyn State)
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        (tag == 1).then_some(&mut self.targets as &mut dyn State)
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        match tag {
            0 => self.card_id = Decode::decode(reader, path)?,
            1 => self.targets = Decode::decode(reader, path)?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}

// =============================================================================
// Inventory
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    path: Path,
    pub slots: StateMap<CardPlayHint>,
    pub gold: u64,
}

impl Inventory {
    pub fn new(path: Path) -> Self {
        Self {
            slots: StateMap::new(path.nested(0)),
            gold: 0,
            path,
        }
    }
}

impl State for Inventory {
    fn path(&self) -> &Path {
        &self.path
    }

    fn wire_type(&self, tag: u32) -> Option<WireType> {
        match tag {
            0 => Some(WireType::Sized),
            1 => Some(WireType::Varint),
            _ => None,
        }
    }

    fn nested(&self, tag: u32) -> Option<&dyn State> {
        (tag == 0).then_some(&self.slots as &dyn State)
    }

    fn nested_mut(&mut self, tag: u32) -> Option<&mut dyn State> {
        (tag == 0).then_some(&mut self.slots as &mut dyn State)
    }

    fn replace_at(
        &mut self,
        tag: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        notify: bool,
    ) -> Result<Option<Change>, StateError> {
        let path = self.path.nested(tag);
        match tag {
            0 => self.slots = Decode::decode(reader, path)?,
            1 => self.gold = Decode::decode(reader, path)?,
            _ => return skip(reader, wire_type),
        }
        Ok(notify.then(|| Change::update(&self.path, tag)))
    }
}
