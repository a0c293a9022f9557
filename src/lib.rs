//! This crate provides a singly-linked list of `i32` with owned nodes, and
//! forward cursors to walk and edit it.
//!
//! The [`ForwardList`] allows inserting and erasing elements after any given
//! position in constant time. In compromise, reaching a position takes
//! *O*(*n*) time, and the list can only be walked from front to back.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 4]);
//!
//! let mut cursor = list.begin();
//! cursor.move_next().unwrap();
//! cursor.insert_after(3).unwrap(); // insert 3 after 2, and move onto it
//! assert_eq!(cursor.current(), Some(&3));
//!
//! assert_eq!(cursor.erase_after(), Ok(4)); // erase 4, and move to the end
//! assert!(cursor.is_end());
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗      ╔═══════════╗      ╔═══════════╗                ╔═══════════╗
//! ║   head    ║ ───→ ║   value   ║  ┌─→ ║   value   ║  ┌─→ ┄┄ ───→   ║   value   ║
//! ╟───────────╢      ╟───────────╢  │   ╟───────────╢  │             ╟───────────╢
//! ║   (len)   ║      ║   next    ║ ─┘   ║   next    ║ ─┘             ║   next    ║ ─→ None
//! ╚═══════════╝      ╚═══════════╝      ╚═══════════╝                ╚═══════════╝
//!  ForwardList           Node 0             Node 1                     Node n - 1
//! ```
//! The `ForwardList` contains:
//! - an owning link `head` to the first node, or `None` if the list is empty;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! forward_list = { default-features = false }
//! ```
//!
//! Each node is allocated on heap and owns the next node. The last node's
//! `next` is `None`, which is also the *end position* of the list: a position
//! that references no node.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. They
//! walk the list from front to back and are fused. [`IterMut`] provides
//! mutability of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] view a list at a position. In a
//! list with length *n*, there are *n* + 1 positions for a cursor: the *n*
//! nodes and the end position. Cursors only move forward, and moving past
//! the end position is an error.
//!
//! A cursor borrows its list, so a list cannot be edited while a cursor into
//! it is alive (except through that [`CursorMut`]). Cursors compare equal
//! when they stand at the same node, and a [`Position`] records where a
//! cursor stands without borrowing the list.
//!
//! The free functions [`advance`], [`distance`], [`find`] and [`cfind`] work
//! on cursors, and [`ForwardCursor`] is the trait they are generic over.
//!
//! ## Examples
//!
//! ```
//! use forward_list::{cfind, distance, ForwardList};
//!
//! let list = ForwardList::from([5, 6, 7]);
//! let found = cfind(list.cbegin(), list.cend(), 7);
//! assert_eq!(distance(list.cbegin(), found), 2);
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![&7]);
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] edits the list after its position:
//! - [`insert_after`]: insert a new element after the cursor;
//! - [`erase_after`]: erase the element after the cursor;
//! - [`splice_after`]: move all elements of another list after the cursor.
//!
//! All three fail with an [`Error`] instead of touching the list when the
//! cursor is at the end position.
//!
//! # Algorithms
//!
//! [`ForwardList`] has whole-list algorithms: [`sort`], [`merge`],
//! [`reverse`], [`unique`], [`remove`], [`remove_if`] and [`resize`].
//! Each of them relinks the existing nodes, except `sort`, which rebuilds
//! the list from a sorted buffer.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([3, 1, 3, 2, 1]);
//! list.sort();
//! assert_eq!(list.unique(), 2);
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![3, 2, 1]);
//! ```
//!
//! The [`util`] module holds helpers to print lists and fill them with
//! random values.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `trace` events from the algorithms,
//! and `debug` events when a cursor operation is rejected. No subscriber is
//! installed by the crate.
//!
//! [`insert_after`]: crate::CursorMut::insert_after
//! [`erase_after`]: crate::CursorMut::erase_after
//! [`splice_after`]: crate::CursorMut::splice_after
//! [`sort`]: crate::ForwardList::sort
//! [`merge`]: crate::ForwardList::merge
//! [`reverse`]: crate::ForwardList::reverse
//! [`unique`]: crate::ForwardList::unique
//! [`remove`]: crate::ForwardList::remove
//! [`remove_if`]: crate::ForwardList::remove_if
//! [`resize`]: crate::ForwardList::resize

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorIter, CursorIterMut, CursorMut, ForwardCursor, Position};
#[doc(inline)]
pub use list::is_sorted;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::ForwardList;
#[doc(inline)]
pub use traversal::{advance, cfind, distance, find};

pub mod error;
pub mod list;
pub mod traversal;
pub mod util;
