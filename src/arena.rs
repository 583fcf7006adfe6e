use core::num::NonZero;
use std::mem;

use static_assertions::assert_eq_size;

use crate::ast::MathKind;
use crate::error::LatexError;

/// Handle to an element in the [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct NodeRef(NonZero<usize>);

// The `NonZero` niche keeps parent links the size of a plain index.
assert_eq_size!(NodeRef, Option<NodeRef>);

#[derive(Debug)]
struct Element {
    kind: MathKind,
    parent: Option<NodeRef>,
    children: Vec<NodeRef>,
}

/// Owning store for all elements of one translation.
///
/// Every structural operation of the parser (append, close, pop) goes
/// through here. Handles are plain indices, so the pop-and-rewrap moves of
/// the scripting rules never run into borrow conflicts. Elements are only
/// ever added; detached shells stay in the store until the whole arena is
/// dropped after serialization.
#[derive(Debug)]
pub struct Arena {
    nodes: Vec<Element>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        // One dummy element at index zero, so that all handed-out indices
        // are non-zero and `NodeRef` can use `NonZero<usize>`.
        Arena {
            nodes: vec![Element {
                kind: MathKind::Space,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn push(&mut self, kind: MathKind) -> NodeRef {
        let index = self.nodes.len();
        self.nodes.push(Element {
            kind,
            parent: None,
            children: Vec::new(),
        });
        debug_assert!(index != 0, "NodeRef index should never be zero");
        // SAFETY: the vector starts with one dummy element, so `index` is non-zero.
        NodeRef(unsafe { NonZero::<usize>::new_unchecked(index) })
    }

    fn get(&self, reference: NodeRef) -> &Element {
        debug_assert!(reference.0.get() < self.nodes.len());
        // SAFETY: we only hand out valid references and never delete elements.
        unsafe { self.nodes.get(reference.0.get()).unwrap_unchecked() }
    }

    fn get_mut(&mut self, reference: NodeRef) -> &mut Element {
        debug_assert!(reference.0.get() < self.nodes.len());
        // SAFETY: we only hand out valid references and never delete elements.
        unsafe { self.nodes.get_unchecked_mut(reference.0.get()) }
    }

    pub fn kind(&self, node: NodeRef) -> &MathKind {
        &self.get(node).kind
    }

    pub fn kind_mut(&mut self, node: NodeRef) -> &mut MathKind {
        &mut self.get_mut(node).kind
    }

    pub fn children(&self, node: NodeRef) -> &[NodeRef] {
        &self.get(node).children
    }

    /// Room for more children?
    pub fn is_full(&self, node: NodeRef) -> bool {
        let element = self.get(node);
        element.children.len() >= element.kind.arity()
    }

    /// Attach `child` to `node` and return the insertion point for whatever
    /// comes next: `node` itself if it still has room, otherwise the nearest
    /// ancestor that does.
    pub fn append(&mut self, node: NodeRef, child: NodeRef) -> Result<NodeRef, LatexError> {
        debug_assert!(!self.is_full(node), "append target must not be full");
        self.get_mut(child).parent = Some(node);
        self.get_mut(node).children.push(child);
        self.first_vacant(node)
    }

    /// Remove and return the last child. The scripting rules re-wrap the
    /// removed node right away.
    pub fn pop_last_child(&mut self, node: NodeRef) -> Option<NodeRef> {
        let child = self.get_mut(node).children.pop()?;
        self.get_mut(child).parent = None;
        Some(child)
    }

    /// Detach all children of `node`, for adoption by a replacement node.
    pub fn take_children(&mut self, node: NodeRef) -> Vec<NodeRef> {
        mem::take(&mut self.get_mut(node).children)
    }

    /// Close `node`: return the first non-full strict ancestor, or `None` if
    /// the walk runs off the root.
    pub fn close(&self, node: NodeRef) -> Option<NodeRef> {
        let mut node = self.get(node).parent?;
        while self.is_full(node) {
            node = self.get(node).parent?;
        }
        Some(node)
    }

    fn first_vacant(&self, mut node: NodeRef) -> Result<NodeRef, LatexError> {
        while self.is_full(node) {
            match self.get(node).parent {
                Some(parent) => node = parent,
                None => return Err(LatexError::Structural("root element has overflowed")),
            }
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::MathKind;

    #[test]
    fn append_stays_on_vacant_node() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let x = arena.push(MathKind::Identifier('x'));
        let cursor = arena.append(row, x).unwrap();
        assert_eq!(cursor, row);
        assert_eq!(arena.children(row), &[x]);
    }

    #[test]
    fn append_walks_out_of_full_node() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let sqrt = arena.push(MathKind::Sqrt);
        arena.append(row, sqrt).unwrap();
        let x = arena.push(MathKind::Identifier('x'));
        // The square root is 1-ary, so the cursor must move back to the row.
        let cursor = arena.append(sqrt, x).unwrap();
        assert_eq!(cursor, row);
        assert!(arena.is_full(sqrt));
        assert!(!arena.is_full(row));
    }

    #[test]
    fn append_walks_multiple_levels() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let frac = arena.push(MathKind::Frac);
        arena.append(row, frac).unwrap();
        let num = arena.push(MathKind::Number('1'));
        assert_eq!(arena.append(frac, num).unwrap(), frac);
        let sqrt = arena.push(MathKind::Sqrt);
        arena.append(frac, sqrt).unwrap();
        let x = arena.push(MathKind::Identifier('x'));
        // Filling the sqrt fills the fraction as well; the first vacant
        // ancestor is the row.
        assert_eq!(arena.append(sqrt, x).unwrap(), row);
    }

    #[test]
    fn append_past_full_root_is_structural_error() {
        let mut arena = Arena::new();
        let sqrt = arena.push(MathKind::Sqrt);
        let x = arena.push(MathKind::Identifier('x'));
        assert_eq!(
            arena.append(sqrt, x),
            Err(LatexError::Structural("root element has overflowed"))
        );
    }

    #[test]
    fn pop_last_child() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        let a = arena.push(MathKind::Identifier('a'));
        let b = arena.push(MathKind::Identifier('b'));
        arena.append(row, a).unwrap();
        arena.append(row, b).unwrap();
        assert_eq!(arena.pop_last_child(row), Some(b));
        assert_eq!(arena.children(row), &[a]);
        assert_eq!(arena.pop_last_child(row), Some(a));
        assert_eq!(arena.pop_last_child(row), None);
    }

    #[test]
    fn close_returns_first_vacant_ancestor() {
        let mut arena = Arena::new();
        let outer = arena.push(MathKind::Row);
        let frac = arena.push(MathKind::Frac);
        arena.append(outer, frac).unwrap();
        let first = arena.push(MathKind::Row);
        arena.append(frac, first).unwrap();
        // The fraction still has an open slot.
        assert_eq!(arena.close(first), Some(frac));
        let second = arena.push(MathKind::Row);
        arena.append(frac, second).unwrap();
        // Now the fraction is full, so closing skips to the outer row.
        assert_eq!(arena.close(second), Some(outer));
    }

    #[test]
    fn close_runs_off_the_root() {
        let mut arena = Arena::new();
        let row = arena.push(MathKind::Row);
        assert_eq!(arena.close(row), None);
    }
}
