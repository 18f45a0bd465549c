//! Field and element kinds.
//!
//! Primitives decode inline as varints. Everything else is a sized payload:
//! raw bytes, strings, optional values, read-only vectors and the two
//! replayable containers, [`StateList`] and [`StateMap`].

mod bytes;
mod list;
mod map;
mod option;
mod primitive;

pub use bytes::Bytes;
pub use list::StateList;
pub use map::StateMap;
