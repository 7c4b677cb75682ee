use core::iter::FusedIterator;
use core::ptr;

use super::{list::SingleList, node::Node};

/// A read-only forward iterator over a [`SingleList`].
///
/// The iterator is a position in the chain: it compares by node identity,
/// with the exhausted position equal to every other exhausted position.
/// Cloning it re-reads the same chain, so traversal is multi-pass.
pub struct Iter<'a, T> {
    pub(super) node: Option<&'a Node<T>>,
}

/// A mutable forward iterator over a [`SingleList`].
///
/// Widens into an [`Iter`] at the same position via `From`; the opposite
/// conversion does not exist.
pub struct IterMut<'a, T> {
    pub(super) node: Option<&'a mut Node<T>>,
}

/// A consuming iterator that drains a [`SingleList`] front to back.
pub struct IntoIter<T> {
    pub(super) list: SingleList<T>,
}

impl<T> Iter<'_, T> {
    fn node_ptr(&self) -> Option<*const Node<T>> {
        self.node.map(ptr::from_ref)
    }
}

impl<T> IterMut<'_, T> {
    fn node_ptr(&self) -> Option<*const Node<T>> {
        self.node.as_deref().map(ptr::from_ref)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Advances past the current node, or returns `None` at the end of the
    /// chain. Past-the-end advancement stays at the end rather than being
    /// undefined.
    fn next(&mut self) -> Option<&'a T> {
        self.node.take().map(|node| {
            self.node = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.node.take().map(|node| {
            self.node = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front_node().map(|node| node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { node: self.node }
    }
}

impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    /// Widens a mutable iterator into a read-only one at the same position.
    fn from(iter: IterMut<'a, T>) -> Self {
        Iter {
            node: iter.node.map(|node| &*node),
        }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node_ptr() == other.node_ptr()
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> PartialEq for IterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node_ptr() == other.node_ptr()
    }
}

impl<T> Eq for IterMut<'_, T> {}

impl<T> PartialEq<IterMut<'_, T>> for Iter<'_, T> {
    fn eq(&self, other: &IterMut<'_, T>) -> bool {
        self.node_ptr() == other.node_ptr()
    }
}

impl<T> PartialEq<Iter<'_, T>> for IterMut<'_, T> {
    fn eq(&self, other: &Iter<'_, T>) -> bool {
        self.node_ptr() == other.node_ptr()
    }
}
