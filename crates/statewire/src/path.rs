//! Parent-linked addresses of nodes inside a state tree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable address of a node: the sequence of tags from the root.
///
/// Children share their parent chain, so deriving a nested path is cheap and
/// never mutates the parent. The root has neither parent nor tag and renders
/// as the empty string; any other path renders as `/t1/t2/.../tn`.
#[derive(Clone, Default)]
pub struct Path(Option<Arc<Link>>);

struct Link {
    parent: Path,
    tag: u32,
    depth: usize,
}

impl Path {
    /// Returns the root path.
    pub fn root() -> Self {
        Path(None)
    }

    /// Builds a path from a root-to-leaf tag sequence.
    pub fn from_tags(tags: &[u32]) -> Self {
        tags.iter().fold(Path::root(), |path, &tag| path.nested(tag))
    }

    /// Returns the child path at `tag`.
    pub fn nested(&self, tag: u32) -> Self {
        Path(Some(Arc::new(Link {
            parent: self.clone(),
            tag,
            depth: self.depth() + 1,
        })))
    }

    /// Returns the parent path, or `None` at the root.
    pub fn parent(&self) -> Option<&Path> {
        self.0.as_ref().map(|link| &link.parent)
    }

    /// Returns the last tag, or `None` at the root.
    pub fn tag(&self) -> Option<u32> {
        self.0.as_ref().map(|link| link.tag)
    }

    /// Returns the number of tags in the path.
    pub fn depth(&self) -> usize {
        self.0.as_ref().map_or(0, |link| link.depth)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the tags from root to leaf.
    pub fn tags(&self) -> Vec<u32> {
        let mut tags = Vec::with_capacity(self.depth());
        let mut current = self;
        while let Some(link) = &current.0 {
            tags.push(link.tag);
            current = &link.parent;
        }
        tags.reverse();
        tags
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        if self.depth() != other.depth() {
            return false;
        }
        let (mut a, mut b) = (self, other);
        loop {
            match (&a.0, &b.0) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.tag != y.tag {
                        return false;
                    }
                    a = &x.parent;
                    b = &y.parent;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tags().hash(state);
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        // Unlink iteratively; dropping a long chain recursively overflows the stack.
        let mut next = self.0.take();
        while let Some(link) = next {
            next = match Arc::try_unwrap(link) {
                Ok(mut link) => link.parent.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags() {
            write!(f, "/{}", tag)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({:?})", self.to_string())
    }
}
