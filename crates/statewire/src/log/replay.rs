//! Applies replay streams to a live state tree.

use tracing::{debug, trace};

use crate::codec::Reader;
use crate::error::{DecodeError, ReplayError, StateError};
use crate::log::LogEntry;
use crate::state::{Change, ChangeKind, Decode, State, get_nested_mut};

/// Applies every entry of a replay stream to `root`, in order.
///
/// The stream is a run of length-prefixed entry frames. Entries with an
/// unknown variant, or whose path no longer resolves, are skipped. Contract
/// faults (an out-of-range list index, a pop from an empty list, a missing
/// map key, an operation the target does not support) and wire faults abort
/// the replay; the error carries the changes applied before the fault.
pub fn replay<S>(root: &mut S, reader: &mut Reader<'_>) -> Result<Vec<Change>, ReplayError>
where
    S: State + Decode,
{
    let mut changes = Vec::new();

    while !reader.end_of_stream() {
        let mut frame = match reader.nested() {
            Ok(frame) => frame,
            Err(err) => return Err(ReplayError::new(changes, err)),
        };
        let entry = match LogEntry::decode(&mut frame) {
            Ok(entry) => entry,
            Err(DecodeError::UnknownLogEntry { tag }) => {
                debug!(tag, "unknown log entry, skipping");
                continue;
            }
            Err(err) => return Err(ReplayError::new(changes, err)),
        };

        trace!(kind = %entry.kind(), path = ?entry.path(), "replaying log entry");
        match replay_entry(root, &entry) {
            Ok(change) => changes.extend(change),
            Err(err) => return Err(ReplayError::new(changes, err)),
        }
    }

    Ok(changes)
}

/// Applies one entry to `root`.
///
/// Returns `None` when the entry is stale: its path does not resolve, or the
/// updated tag is unknown to its container. An `Update` with an empty path
/// rebuilds the whole root at its own path.
pub fn replay_entry<S>(root: &mut S, entry: &LogEntry) -> Result<Option<Change>, StateError>
where
    S: State + Decode,
{
    match entry {
        LogEntry::Update { path, value } => {
            let Some((&tag, parent)) = path.split_last() else {
                let path = root.path().clone();
                *root = S::decode(&mut Reader::new(value), path.clone())?;
                return Ok(Some(Change::new(path, ChangeKind::Update)));
            };

            let Some(container) = resolve(root, entry, parent) else {
                return Ok(None);
            };
            let Some(wire_type) = container.wire_type(tag) else {
                debug!(kind = %entry.kind(), path = ?path, "unknown field, skipping log entry");
                return Ok(None);
            };
            container.replace_at(tag, wire_type, &mut Reader::new(value), true)
        }
        LogEntry::ListPush { path, item } => match resolve(root, entry, path) {
            Some(container) => container.replay_list_push(&mut Reader::new(item)).map(Some),
            None => Ok(None),
        },
        LogEntry::ListPop { path } => match resolve(root, entry, path) {
            Some(container) => container.replay_list_pop().map(Some),
            None => Ok(None),
        },
        LogEntry::MapRemove { path, key } => match resolve(root, entry, path) {
            Some(container) => container.replay_map_remove(*key).map(Some),
            None => Ok(None),
        },
    }
}

fn resolve<'s>(
    root: &'s mut dyn State,
    entry: &LogEntry,
    tags: &[u32],
) -> Option<&'s mut dyn State> {
    let container = get_nested_mut(root, tags);
    if container.is_none() {
        debug!(kind = %entry.kind(), path = ?entry.path(), "stale log entry, skipping");
    }
    container
}
