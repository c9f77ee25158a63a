//! Positions inside a [`SingleLinkedList`](crate::SingleLinkedList).
//!
//! A position refers to the sentinel (before-begin), a real node, or the end.
//! [`Cursor`] is the read-only flavor and [`CursorMut`] the mutable one. Both
//! borrow the list, so a position can never outlive the node it refers to, and a
//! mutable cursor is the only handle on its list while it exists. That lets
//! `insert_after` and `erase_after` relink the chain directly.

use std::fmt::{self, Debug};
use std::ops::{Deref, DerefMut};
use std::{mem, ptr};

use crate::error::ListError;
use crate::linked_list::{Link, Node};

enum Slot<'a, T> {
    BeforeBegin(&'a Link<T>),
    Node(&'a Node<T>),
    End,
}

impl<'a, T> Slot<'a, T> {
    fn from_link(link: &'a Link<T>) -> Slot<'a, T> {
        match link.as_deref() {
            Some(node) => Slot::Node(node),
            None => Slot::End,
        }
    }

    /// Address used for position equality. The end position of every list is
    /// the same null address.
    fn identity(&self) -> *const () {
        match self {
            Slot::BeforeBegin(head) => *head as *const Link<T> as *const (),
            Slot::Node(node) => *node as *const Node<T> as *const (),
            Slot::End => ptr::null(),
        }
    }
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<T: Debug> Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::BeforeBegin(_) => f.write_str("BeforeBegin"),
            Slot::Node(node) => f.debug_tuple("Node").field(&node.value).finish(),
            Slot::End => f.write_str("End"),
        }
    }
}

/// Read-only position in a list.
pub struct Cursor<'a, T> {
    slot: Slot<'a, T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn before_begin(head: &'a Link<T>) -> Cursor<'a, T> {
        Cursor {
            slot: Slot::BeforeBegin(head),
        }
    }

    pub(crate) fn at(link: &'a Link<T>) -> Cursor<'a, T> {
        Cursor {
            slot: Slot::from_link(link),
        }
    }

    pub(crate) fn end() -> Cursor<'a, T> {
        Cursor { slot: Slot::End }
    }

    /// Whether this is the sentinel position.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.slot, Slot::BeforeBegin(_))
    }

    /// Whether this is the position past the last element.
    pub fn is_end(&self) -> bool {
        matches!(self.slot, Slot::End)
    }

    /// Advances to the following position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        self.slot = match self.slot {
            Slot::BeforeBegin(head) => Slot::from_link(head),
            Slot::Node(node) => Slot::from_link(&node.next),
            Slot::End => panic!("cannot advance: {}", ListError::EndPosition),
        };
    }

    pub fn try_get(&self) -> Result<&'a T, ListError> {
        match self.slot {
            Slot::Node(node) => Ok(&node.value),
            Slot::BeforeBegin(_) => Err(ListError::BeforeBegin),
            Slot::End => Err(ListError::EndPosition),
        }
    }

    /// The value at this position.
    ///
    /// # Panics
    ///
    /// Panics at the before-begin and end positions.
    pub fn get(&self) -> &'a T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("cannot dereference: {}", err),
        }
    }

    pub fn current(&self) -> Option<&'a T> {
        self.try_get().ok()
    }

    /// The value one position ahead, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut next = *self;
        if next.is_end() {
            return None;
        }
        next.move_next();
        next.current()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.slot).finish()
    }
}

enum SlotMut<'a, T> {
    BeforeBegin(&'a mut Link<T>),
    Node(&'a mut Node<T>),
    End,
}

impl<'a, T> SlotMut<'a, T> {
    fn from_link(link: &'a mut Link<T>) -> SlotMut<'a, T> {
        match link.as_deref_mut() {
            Some(node) => SlotMut::Node(node),
            None => SlotMut::End,
        }
    }

    /// The link owning whatever comes after this position.
    fn next_link(&mut self) -> Result<&mut Link<T>, ListError> {
        match self {
            SlotMut::BeforeBegin(head) => Ok(&mut **head),
            SlotMut::Node(node) => Ok(&mut node.next),
            SlotMut::End => Err(ListError::EndPosition),
        }
    }

    fn as_slot(&self) -> Slot<'_, T> {
        match self {
            SlotMut::BeforeBegin(head) => Slot::BeforeBegin(&**head),
            SlotMut::Node(node) => Slot::Node(&**node),
            SlotMut::End => Slot::End,
        }
    }
}

/// Mutable position in a list. Holds the list's element count so insertions and
/// removals keep it in step.
pub struct CursorMut<'a, T> {
    slot: SlotMut<'a, T>,
    size: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn before_begin(head: &'a mut Link<T>, size: &'a mut usize) -> CursorMut<'a, T> {
        CursorMut {
            slot: SlotMut::BeforeBegin(head),
            size,
        }
    }

    pub(crate) fn at(link: &'a mut Link<T>, size: &'a mut usize) -> CursorMut<'a, T> {
        CursorMut {
            slot: SlotMut::from_link(link),
            size,
        }
    }

    pub(crate) fn end(size: &'a mut usize) -> CursorMut<'a, T> {
        CursorMut {
            slot: SlotMut::End,
            size,
        }
    }

    /// A read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            slot: self.slot.as_slot(),
        }
    }

    /// Whether this is the sentinel position.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.slot, SlotMut::BeforeBegin(_))
    }

    /// Whether this is the position past the last element.
    pub fn is_end(&self) -> bool {
        matches!(self.slot, SlotMut::End)
    }

    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        self.slot = match mem::replace(&mut self.slot, SlotMut::End) {
            SlotMut::BeforeBegin(head) => SlotMut::from_link(head),
            SlotMut::Node(node) => SlotMut::from_link(&mut node.next),
            SlotMut::End => panic!("cannot advance: {}", ListError::EndPosition),
        };
    }

    pub fn try_get(&self) -> Result<&T, ListError> {
        self.as_cursor().try_get()
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T, ListError> {
        match &mut self.slot {
            SlotMut::Node(node) => Ok(&mut node.value),
            SlotMut::BeforeBegin(_) => Err(ListError::BeforeBegin),
            SlotMut::End => Err(ListError::EndPosition),
        }
    }

    /// # Panics
    ///
    /// Panics at the before-begin and end positions.
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("cannot dereference: {}", err),
        }
    }

    /// # Panics
    ///
    /// Panics at the before-begin and end positions.
    pub fn get_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(value) => value,
            Err(err) => panic!("cannot dereference: {}", err),
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.try_get().ok()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut().ok()
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        let link = self.slot.next_link().ok()?;
        link.as_deref_mut().map(|node| &mut node.value)
    }

    /// Links a new node holding `value` right after this position and returns
    /// the position of the new node. The cursor itself stays put.
    pub fn try_insert_after(&mut self, value: T) -> Result<Cursor<'_, T>, ListError> {
        let link = self.slot.next_link()?;
        let next = link.take();
        *self.size += 1;
        let node = link.insert(Box::new(Node::new(value, next)));
        Ok(Cursor {
            slot: Slot::Node(&**node),
        })
    }

    /// # Panics
    ///
    /// Panics if the cursor is at the end position.
    pub fn insert_after(&mut self, value: T) -> Cursor<'_, T> {
        match self.try_insert_after(value) {
            Ok(inserted) => inserted,
            Err(err) => panic!("cannot insert: {}", err),
        }
    }

    /// Unlinks the node after this position. Returns its value together with the
    /// position of the node that followed it (or the end position).
    pub fn try_erase_after(&mut self) -> Result<(T, Cursor<'_, T>), ListError> {
        if *self.size == 0 {
            return Err(ListError::EmptyList);
        }
        let link = self.slot.next_link()?;
        let node = link.take().ok_or(ListError::NoSuccessor)?;
        let Node { value, next } = *node;
        *link = next;
        *self.size -= 1;
        Ok((value, Cursor::at(&*link)))
    }

    /// Drops the node after this position and returns the position that now
    /// follows the cursor. On an empty list this is a no-op returning the end
    /// position.
    ///
    /// # Panics
    ///
    /// Panics on a non-empty list when nothing follows this position.
    pub fn erase_after(&mut self) -> Cursor<'_, T> {
        match self.try_erase_after() {
            Ok((_, following)) => following,
            Err(ListError::EmptyList) => Cursor::end(),
            Err(err) => panic!("cannot erase: {}", err),
        }
    }

    fn identity(&self) -> *const () {
        self.slot.as_slot().identity()
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.slot.as_slot()).finish()
    }
}

impl<T> Cursor<'_, T> {
    fn identity(&self) -> *const () {
        self.slot.identity()
    }
}

macro_rules! impl_position_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<'a, 'b, T> PartialEq<$rhs<'b, T>> for $lhs<'a, T> {
            fn eq(&self, other: &$rhs<'b, T>) -> bool {
                ptr::eq(self.identity(), other.identity())
            }
        }
    };
}

impl_position_eq!(Cursor, Cursor);
impl_position_eq!(Cursor, CursorMut);
impl_position_eq!(CursorMut, Cursor);
impl_position_eq!(CursorMut, CursorMut);

impl<T> Eq for Cursor<'_, T> {}

impl<T> Eq for CursorMut<'_, T> {}
