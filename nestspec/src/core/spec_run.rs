//! Per-pass records for declared specs.

use std::panic::Location;

use crate::core::path::Path;

/// A spec declared during one pass.
///
/// Records live in the pass arena and are dropped with it; `parent` is an
/// index into that arena, never an owning link.
#[derive(Debug, Clone)]
pub struct SpecRun {
    pub name: String,
    pub parent: Option<usize>,
    pub path: Path,
    /// Children declared under this spec so far in the current pass.
    pub child_count: usize,
    /// Declared without a body.
    pub pending: bool,
    pub declared_at: &'static Location<'static>,
}

impl SpecRun {
    /// Push a new record onto `arena`, numbering it after its parent's
    /// already-declared children. Returns its arena index.
    pub fn declare(
        arena: &mut Vec<SpecRun>,
        name: String,
        parent: Option<usize>,
        pending: bool,
        declared_at: &'static Location<'static>,
    ) -> usize {
        let path = match parent {
            Some(index) => {
                let parent = &mut arena[index];
                let path = parent.path.append(parent.child_count);
                parent.child_count += 1;
                path
            }
            None => Path::root(),
        };
        arena.push(SpecRun {
            name,
            parent,
            path,
            child_count: 0,
            pending,
            declared_at,
        });
        arena.len() - 1
    }

    pub fn is_on_target_path(&self, target: &Path) -> bool {
        self.path.is_on(target)
    }

    pub fn is_target(&self, target: &Path) -> bool {
        self.path == *target
    }

    /// Indices from `index` up to its root, innermost first.
    pub fn ancestry(arena: &[SpecRun], index: usize) -> Vec<usize> {
        let mut chain = vec![index];
        let mut current = arena[index].parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = arena[parent].parent;
        }
        chain
    }
}
