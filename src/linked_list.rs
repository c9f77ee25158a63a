use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::mem;

use crate::cursor::{Cursor, CursorMut};
use crate::iter::{IntoIter, Iter, IterMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// A singly linked list.
///
/// `head` plays the part of the sentinel: a valueless slot standing before the
/// first element. Every node is owned by exactly one predecessor slot.
pub struct SingleLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) size: usize,
}

impl<T> SingleLinkedList<T> {
    pub fn new() -> SingleLinkedList<T> {
        SingleLinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.get_size()
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    pub fn push_front(&mut self, value: T) {
        let new_node = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.size -= 1;
        Some(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Drops every element. Nodes are unlinked one at a time so long lists do not
    /// recurse through `Box` destructors.
    pub fn clear(&mut self) {
        if self.size > 0 {
            log::trace!("clearing {} nodes", self.size);
        }
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }

    /// Exchanges the contents of two lists without touching any node.
    pub fn swap(&mut self, other: &mut SingleLinkedList<T>) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.size, &mut other.size);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.size)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.size)
    }

    /// Position of the sentinel. Inserting after it prepends.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(&self.head)
    }

    /// Position of the first element, or the end position if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::at(&self.head)
    }

    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(&mut self.head, &mut self.size)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::at(&mut self.head, &mut self.size)
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::end(&mut self.size)
    }
}

/// Free-standing form of [`SingleLinkedList::swap`].
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        SingleLinkedList::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    /// Appends after the current last element, keeping input order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        for value in iter {
            let node = tail.insert(Box::new(Node::new(value, None)));
            tail = &mut node.next;
            self.size += 1;
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SingleLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SingleLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: the replacement chain is fully built before `self` changes,
    /// so a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        log::trace!("replacing {} nodes with a copy of {}", self.size, source.size);
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get_size() == other.get_size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SingleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = &self.head;
        let mut first = true;
        while let Some(node) = current {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", node.value)?;
            first = false;
            current = &node.next;
        }
        Ok(())
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn to_vec<T: Clone>(list: &SingleLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn hash_of<T: Hash>(list: &SingleLinkedList<T>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_list_is_empty() {
        let list: SingleLinkedList<u32> = SingleLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.get_size(), 0);
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn from_sequence_keeps_order() {
        let list = SingleLinkedList::from([1, 2, 3, 4]);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.get_size(), 4);

        let list: SingleLinkedList<String> = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(to_vec(&list), vec!["a", "b"]);

        let list: SingleLinkedList<u8> = (0..0).collect();
        assert!(list.is_empty());
    }

    #[test]
    fn push_front_then_front() {
        let mut list = SingleLinkedList::new();
        for i in 1..12 {
            list.push_front(i);
            assert_eq!(list.front(), Some(&i));
            assert_eq!(list.get_size(), i as usize);
        }
        assert_eq!(to_vec(&list), (1..12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn pop_front_removes_first() {
        let mut list = SingleLinkedList::from([1, 2, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(to_vec(&list), vec![2, 3]);
        assert_eq!(list.get_size(), 2);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.get_size(), 0);
    }

    #[test]
    fn front_mut_edits_in_place() {
        let mut list = SingleLinkedList::from([1, 2]);
        if let Some(value) = list.front_mut() {
            *value = 10;
        }
        assert_eq!(to_vec(&list), vec![10, 2]);
    }

    #[test]
    fn clear_resets_count() {
        let mut list = SingleLinkedList::from([1, 2, 3]);
        list.clear();
        assert_eq!(list.get_size(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);

        list.clear();
        assert_eq!(list.get_size(), 0);

        list.push_front(5);
        assert_eq!(to_vec(&list), vec![5]);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let mut list = SingleLinkedList::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_eq!(list.get_size(), 200_000);
        drop(list);
    }

    #[test]
    fn clone_is_deep() {
        let original = SingleLinkedList::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.get_size(), 3);

        copy.push_front(0);
        if let Some(value) = copy.iter_mut().nth(2) {
            *value = 20;
        }
        assert_eq!(to_vec(&original), vec![1, 2, 3]);
        assert_eq!(to_vec(&copy), vec![0, 1, 20, 3]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = SingleLinkedList::from(["x".to_string(), "y".to_string()]);
        let mut target = SingleLinkedList::from(vec!["a".to_string(); 5]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.get_size(), 2);

        target.pop_front();
        assert_eq!(source.get_size(), 2);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = SingleLinkedList::from([1, 2, 3]);
        let mut b = SingleLinkedList::from([9]);
        let first_a = a.front().map(|v| v as *const i32);

        a.swap(&mut b);
        assert_eq!(to_vec(&a), vec![9]);
        assert_eq!(a.get_size(), 1);
        assert_eq!(to_vec(&b), vec![1, 2, 3]);
        assert_eq!(b.get_size(), 3);
        // Nodes moved, not copied.
        assert_eq!(b.front().map(|v| v as *const i32), first_a);

        swap(&mut a, &mut b);
        assert_eq!(to_vec(&a), vec![1, 2, 3]);
        assert_eq!(to_vec(&b), vec![9]);
    }

    #[test]
    fn equality() {
        let a = SingleLinkedList::from([1, 2, 3]);
        assert_eq!(a, SingleLinkedList::from([1, 2, 3]));
        assert_ne!(a, SingleLinkedList::from([1, 2]));
        assert_ne!(a, SingleLinkedList::from([1, 2, 4]));
        assert_eq!(SingleLinkedList::<i32>::new(), SingleLinkedList::new());
    }

    fn l(values: &[i32]) -> SingleLinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn lexicographic_ordering() {
        assert!(l(&[1, 2, 3]) < l(&[1, 2, 4]));
        assert!(l(&[1, 2]) < l(&[1, 2, 3]));
        assert!(l(&[]) < l(&[1]));
        assert!(l(&[2]) > l(&[1, 9, 9]));
        assert!(l(&[1, 2, 3]) <= l(&[1, 2, 3]));
        assert!(l(&[1, 2, 3]) >= l(&[1, 2, 3]));
        assert!(!(l(&[1, 2, 3]) > l(&[1, 2, 3])));
        assert!(l(&[1, 3]) >= l(&[1, 2, 3]));
        assert_eq!(l(&[1, 2]).cmp(&l(&[1, 2])), Ordering::Equal);
    }

    #[test]
    fn float_ordering_is_partial() {
        let a = SingleLinkedList::from([1.0, f64::NAN]);
        let b = SingleLinkedList::from([1.0, 2.0]);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b) && a != b);
    }

    #[test]
    fn equal_lists_hash_equal() {
        let a = SingleLinkedList::from([1, 2, 3]);
        let b: SingleLinkedList<_> = (1..=3).collect();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn extend_appends_at_back() {
        let mut list = SingleLinkedList::from([1, 2]);
        list.extend(vec![3, 4]);
        list.extend(&[5]);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.get_size(), 5);
    }

    #[test]
    fn formatting() {
        let list = SingleLinkedList::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(list.to_string(), "1 2 3");
        assert_eq!(SingleLinkedList::<u8>::new().to_string(), "");
    }
}
