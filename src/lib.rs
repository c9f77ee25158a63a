//! A singly linked list with a before-begin sentinel.
//!
//! ```
//! use single_linked_list::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([2, 3]);
//! list.push_front(1);
//! let mut cursor = list.before_begin_mut();
//! cursor.insert_after(0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```

pub mod cursor;
pub mod error;
pub mod iter;
pub mod linked_list;

pub use cursor::{Cursor, CursorMut};
pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut};
pub use linked_list::{swap, SingleLinkedList};
