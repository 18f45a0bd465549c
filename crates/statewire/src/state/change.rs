//! Change values emitted by notifying mutations.

use crate::path::Path;

/// What happened at a changed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The node's value was replaced.
    Update,
    /// An enum-like node switched to the variant at the changed path; the
    /// previously active variant tag is kept.
    Variant { previous: u32 },
    /// An item was appended to a list.
    ListPush,
    /// The last item of a list was removed.
    ListPop,
    /// A new key was inserted into a map.
    MapInsert,
    /// A key was removed from a map.
    MapRemove,
}

/// One incremental change to a state tree.
///
/// `path` addresses the changed node itself (a field, a list item, a map
/// entry or an active variant); its parent is the container that was mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: Path,
    pub kind: ChangeKind,
}

impl Change {
    pub fn new(path: Path, kind: ChangeKind) -> Self {
        Self { path, kind }
    }

    /// A field update at `container/tag`.
    pub fn update(container: &Path, tag: u32) -> Self {
        Self::new(container.nested(tag), ChangeKind::Update)
    }

    /// Returns the path of the mutated container.
    pub fn container(&self) -> Option<&Path> {
        self.path.parent()
    }
}
