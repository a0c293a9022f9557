use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::{ForwardList, Node};

/// A read-only cursor over a `ForwardList`.
///
/// A `Cursor` references one node of the list, or no node at all, which is
/// the end position (one past the last node). In a list with length *n*,
/// there are *n* + 1 valid locations for the cursor.
///
/// The cursor borrows the list, so the list cannot be modified while the
/// cursor is alive and a cursor can never dangle.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end position
/// of the list is denoted by `#`).
/// ```
/// use forward_list::ForwardList;
///
/// // Create a list: [ A B C #]
/// let list = ForwardList::from([1, 2, 3]);
///
/// // Create a cursor at start: [|A B C #]
/// let mut cursor = list.cbegin();
/// assert_eq!(cursor.current(), Some(&1));
///
/// // Move cursor forward: [ A|B C #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&2));
///
/// // Move cursor to the end: [ A B C|#]
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor, list.cend());
///
/// // A forward cursor cannot move past the end.
/// assert!(cursor.move_next().is_err());
/// ```
///
/// ```compile_fail
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from([1, 2, 3]);
/// let cursor = list.cbegin();
/// // Won't compile, because list is already borrowed immutably.
/// list.pop_front();
/// println!("{:?}", cursor.current());
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    current: Option<&'a Node>,
}

/// A cursor over a `ForwardList` with editing operations.
///
/// A `CursorMut` can move forward and mutate the list at its position:
/// values can be inserted after it, the node after it can be erased and
/// another list can be spliced in after it. It borrows the list exclusively,
/// so at most one `CursorMut` exists per list.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from([1, 2, 3]);
/// let mut cursor = list.begin();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a> {
    current: Option<&'a mut Node>,
    #[cfg(feature = "length")]
    len: &'a mut usize,
}

/// The location of a cursor, kept for comparison only.
///
/// A `Position` never borrows the list and cannot be used to read it. It is
/// the `last` bound of a range when the range starts at a [`CursorMut`].
///
/// # Examples
///
/// ```
/// use forward_list::{ForwardList, Position};
///
/// let list = ForwardList::from([1, 2]);
/// assert_eq!(list.end(), Position::END);
/// assert_eq!(list.cend().position(), Position::END);
/// assert_ne!(list.cbegin().position(), Position::END);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(Option<NonNull<Node>>);

impl Position {
    /// The end position, shared by all lists.
    pub const END: Position = Position(None);

    fn of(node: Option<&Node>) -> Self {
        Position(node.map(NonNull::from))
    }

    /// Returns `true` if this is the end position.
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// Navigation shared by [`Cursor`] and [`CursorMut`].
///
/// Both flavors move the same way; the free functions [`advance`] and
/// [`find`] accept either.
///
/// [`advance`]: crate::advance
/// [`find`]: crate::find
pub trait ForwardCursor {
    /// Returns the position of the cursor.
    fn position(&self) -> Position;

    /// Returns the value at the cursor, or `None` at the end position.
    fn value(&self) -> Option<&i32>;

    /// Move the cursor to the next node (or to the end position).
    ///
    /// Returns `Err(Error::PastTheEnd)` without moving if the cursor is
    /// already at the end position.
    fn move_next(&mut self) -> Result<()>;

    /// Returns `true` if the cursor is at the end position.
    fn is_end(&self) -> bool {
        self.position().is_end()
    }
}

fn rejected(error: Error) -> Error {
    debug!(%error, "rejected cursor operation");
    error
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a> $CURSOR<'a> {
            pub(crate) fn node(&self) -> Option<&Node> {
                self.current.as_deref()
            }
        }

        impl<'a> $CURSOR<'a> {
            /// Returns the position of the cursor.
            pub fn position(&self) -> Position {
                Position::of(self.node())
            }

            /// Returns `true` if the cursor is at the end position.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Provides a reference to the value after the cursor, or `None`
            /// if the cursor is at the last node or at the end position.
            pub fn peek_next(&self) -> Option<&i32> {
                let next = self.node()?.next.as_deref()?;
                Some(&next.value)
            }
        }

        /// Compare cursors by identity: cursors are equal when they reference
        /// the same node, or are both at the end position.
        impl<'a> PartialEq<Position> for $CURSOR<'a> {
            fn eq(&self, other: &Position) -> bool {
                self.position() == *other
            }
        }

        impl<'a> fmt::Debug for $CURSOR<'a> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($CURSOR))
                    .field(&self.node().map(|node| node.value))
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a> Cursor<'a> {
    pub(crate) fn new(current: Option<&'a Node>) -> Self {
        Self { current }
    }

    /// Provides a reference to the value at the cursor, or `None` if the
    /// cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([1, 2, 3]);
    /// assert_eq!(list.cbegin().current(), Some(&1));
    /// assert_eq!(list.cend().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a i32> {
        self.current.map(|node| &node.value)
    }

    /// Move the cursor to the next node (or to the end position).
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] if the cursor is already at the end
    /// position. The cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        let node = self.current.ok_or_else(|| rejected(Error::PastTheEnd))?;
        self.current = node.next.as_deref();
        Ok(())
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<'a> Eq for Cursor<'a> {}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(
        current: Option<&'a mut Node>,
        #[cfg(feature = "length")] len: &'a mut usize,
    ) -> Self {
        Self {
            current,
            #[cfg(feature = "length")]
            len,
        }
    }

    fn add_len(&mut self, _added: usize) {
        #[cfg(feature = "length")]
        {
            *self.len += _added;
        }
    }

    fn sub_len(&mut self, _removed: usize) {
        #[cfg(feature = "length")]
        {
            *self.len -= _removed;
        }
    }

    /// Provides a reference to the value at the cursor, or `None` if the
    /// cursor is at the end position.
    pub fn current(&self) -> Option<&i32> {
        self.node().map(|node| &node.value)
    }

    /// Provides a mutable reference to the value at the cursor, or `None` if
    /// the cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let mut cursor = list.begin();
    /// cursor.move_next().unwrap();
    /// if let Some(x) = cursor.current_mut() {
    ///     *x = 20;
    /// }
    /// assert_eq!(list.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut i32> {
        self.current.as_deref_mut().map(|node| &mut node.value)
    }

    /// Move the cursor to the next node (or to the end position).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] if the cursor is already at the end
    /// position. The cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        let node = self
            .current
            .take()
            .ok_or_else(|| rejected(Error::PastTheEnd))?;
        self.current = node.next.as_deref_mut();
        Ok(())
    }

    /// Inserts `value` after the node at the cursor, and moves the cursor to
    /// the inserted node.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] if the cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 3]);
    /// let mut cursor = list.begin();
    /// cursor.insert_after(2).unwrap();
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.peek_next(), Some(&3));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, value: i32) -> Result<()> {
        let node = self
            .current
            .take()
            .ok_or_else(|| rejected(Error::PastTheEnd))?;
        let next = node.next.take();
        let inserted = node.next.insert(Node::new(value, next));
        self.current = Some(&mut **inserted);
        self.add_len(1);
        Ok(())
    }

    /// Erases the node after the cursor and returns its value. The cursor
    /// moves to the node now following its old position (or to the end
    /// position).
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] if the cursor is at the end position, or
    /// [`Error::NoSuccessor`] if it is at the last node. The cursor does not
    /// move.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{Error, ForwardList};
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let mut cursor = list.begin();
    /// assert_eq!(cursor.erase_after(), Ok(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.erase_after(), Err(Error::NoSuccessor));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// ```
    pub fn erase_after(&mut self) -> Result<i32> {
        let node = self
            .current
            .take()
            .ok_or_else(|| rejected(Error::PastTheEnd))?;
        match node.next.take() {
            Some(mut erased) => {
                node.next = erased.next.take();
                self.current = node.next.as_deref_mut();
                self.sub_len(1);
                Ok(erased.value)
            }
            None => {
                self.current = Some(node);
                Err(rejected(Error::NoSuccessor))
            }
        }
    }

    /// Moves all nodes of `other` after the node at the cursor, without
    /// copying. `other` becomes empty; the cursor does not move.
    ///
    /// `other` cannot be the list the cursor belongs to, since the cursor
    /// borrows it exclusively.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other` (to find its last node).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] if the cursor is at the end position, or
    /// [`Error::EmptySource`] if `other` is empty. Neither list changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let mut other = ForwardList::from([9, 8]);
    ///
    /// list.begin().splice_after(&mut other).unwrap();
    ///
    /// assert_eq!(list.to_vec(), vec![1, 9, 8, 2, 3]);
    /// assert!(other.is_empty());
    /// ```
    pub fn splice_after(&mut self, other: &mut ForwardList) -> Result<()> {
        if self.current.is_none() {
            return Err(rejected(Error::PastTheEnd));
        }
        let detached = other
            .detach_all_nodes()
            .ok_or_else(|| rejected(Error::EmptySource))?;
        #[cfg(feature = "length")]
        self.add_len(detached.len);
        let mut front = detached.front;
        if let Some(node) = self.current.as_deref_mut() {
            let mut link = &mut front.next;
            while let Some(next) = link {
                link = &mut next.next;
            }
            *link = node.next.take();
            node.next = Some(front);
        }
        trace!("spliced a list after the cursor");
        Ok(())
    }
}

impl<'a> PartialEq<Cursor<'a>> for Position {
    fn eq(&self, other: &Cursor<'a>) -> bool {
        *self == other.position()
    }
}

impl<'a> ForwardCursor for Cursor<'a> {
    fn position(&self) -> Position {
        Cursor::position(self)
    }

    fn value(&self) -> Option<&i32> {
        self.current()
    }

    fn move_next(&mut self) -> Result<()> {
        Cursor::move_next(self)
    }
}

impl<'a> ForwardCursor for CursorMut<'a> {
    fn position(&self) -> Position {
        CursorMut::position(self)
    }

    fn value(&self) -> Option<&i32> {
        self.current()
    }

    fn move_next(&mut self) -> Result<()> {
        CursorMut::move_next(self)
    }
}

/// An iterator over the values from a [`Cursor`] to the end of the list.
#[derive(Clone)]
pub struct CursorIter<'a> {
    cursor: Cursor<'a>,
}

/// A mutable iterator over the values from a [`CursorMut`] to the end of
/// the list.
pub struct CursorIterMut<'a> {
    current: Option<&'a mut Node>,
}

impl<'a> CursorIter<'a> {
    pub fn into_cursor(self) -> Cursor<'a> {
        self.cursor
    }

    pub fn peek(&self) -> Option<&'a i32> {
        self.cursor.current()
    }
}

impl<'a> CursorIterMut<'a> {
    pub fn peek(&mut self) -> Option<&mut i32> {
        self.current.as_deref_mut().map(|node| &mut node.value)
    }
}

impl<'a> Iterator for CursorIter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.current();
        // Moving fails only at the end position, where `current` is `None`.
        let _ = self.cursor.move_next();
        current
    }
}

impl<'a> Iterator for CursorIterMut<'a> {
    type Item = &'a mut i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref_mut();
        Some(&mut node.value)
    }
}

/// Convert the cursor to an iterator over the rest of the list.
impl<'a> IntoIterator for Cursor<'a> {
    type Item = &'a i32;
    type IntoIter = CursorIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

/// Convert the cursor to a mutable iterator over the rest of the list.
impl<'a> IntoIterator for CursorMut<'a> {
    type Item = &'a mut i32;
    type IntoIter = CursorIterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIterMut {
            current: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ForwardList, ForwardCursor, Position};

    #[test]
    fn cursor_navigation() {
        let list = ForwardList::from([1, 2, 3]);
        let mut cursor = list.cbegin();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.peek_next(), Some(&2));

        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&2));
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.peek_next(), None);
        assert!(cursor.move_next().is_ok());
        assert!(cursor.is_end());
        assert_eq!(cursor, list.cend());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_must_not_move_past_end() {
        let list = ForwardList::new();
        let mut cursor = list.cbegin();
        assert_eq!(cursor.move_next(), Err(Error::PastTheEnd));
        assert_eq!(cursor, list.cend());

        let mut list = ForwardList::from([1]);
        let mut cursor = list.begin();
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.move_next(), Err(Error::PastTheEnd));
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_identity() {
        let list = ForwardList::from([7, 7]);
        let first = list.cbegin();
        let mut second = first;
        assert_eq!(first, second);

        // Equal values, different nodes.
        second.move_next().unwrap();
        assert_eq!(first.current(), second.current());
        assert_ne!(first, second);

        // End cursors of different lists compare equal.
        let other = ForwardList::from([7]);
        assert_eq!(list.cend(), other.cend());
        assert_eq!(Position::END, list.cend());
        assert_ne!(list.cbegin().position(), other.cbegin().position());
    }

    #[test]
    fn cursor_next_follows_head() {
        let list = ForwardList::from([4, 5, 6]);
        let mut cursor = list.cbegin();
        cursor.move_next().unwrap();
        let second = list.head_node().and_then(|node| node.next.as_deref());
        assert_eq!(cursor.current(), second.map(|node| &node.value));
    }

    #[test]
    fn cursor_mut_insert_after() {
        let mut list = ForwardList::from([1, 2, 3]);
        let mut cursor = list.begin();
        assert!(cursor.insert_after(69).is_ok());
        assert_eq!(cursor.current(), Some(&69));
        assert!(cursor.insert_after(70).is_ok());
        assert_eq!(list.to_vec(), vec![1, 69, 70, 2, 3]);
        assert_eq!(list.len(), 5);

        let mut cursor = list.begin();
        while !cursor.is_end() {
            cursor.move_next().unwrap();
        }
        assert_eq!(cursor.insert_after(0), Err(Error::PastTheEnd));
        assert_eq!(list.len(), 5);

        let mut list = ForwardList::new();
        assert_eq!(list.begin().insert_after(1), Err(Error::PastTheEnd));
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_mut_erase_after() {
        let mut list = ForwardList::from([1, 2, 3, 4]);
        let mut cursor = list.begin();
        let expected = cursor.peek_next().copied();
        assert_eq!(cursor.erase_after().ok(), expected);
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.erase_after(), Ok(4));
        assert!(cursor.is_end());
        assert_eq!(cursor.erase_after(), Err(Error::PastTheEnd));
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_eq!(list.len(), 2);

        let mut list = ForwardList::from([1]);
        let mut cursor = list.begin();
        assert_eq!(cursor.erase_after(), Err(Error::NoSuccessor));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn cursor_mut_splice_after() {
        fn test_splice<const N: usize, const M: usize>(
            list: [i32; N],
            other: [i32; M],
            at: usize,
            spliced: &[i32],
        ) {
            let mut list = ForwardList::from(list);
            let mut other = ForwardList::from(other);
            let (len, other_len) = (list.len(), other.len());
            let mut cursor = list.begin();
            crate::advance(&mut cursor, at as isize).unwrap();
            assert!(cursor.splice_after(&mut other).is_ok());
            assert_eq!(list.to_vec(), spliced);
            assert_eq!(list.len(), len + other_len);
            assert_eq!(list.len(), crate::distance(list.cbegin(), list.cend()));
            assert!(other.is_empty());
            assert_eq!(other.len(), 0);
        }
        test_splice([1, 2, 3], [9, 8], 0, &[1, 9, 8, 2, 3]);
        test_splice([1, 2, 3], [9, 8], 1, &[1, 2, 9, 8, 3]);
        test_splice([1, 2, 3], [9, 8], 2, &[1, 2, 3, 9, 8]);
        test_splice([1], [9], 0, &[1, 9]);
        test_splice([1], [9, 8, 7, 6], 0, &[1, 9, 8, 7, 6]);
    }

    #[test]
    fn cursor_mut_splice_rejected() {
        let mut list = ForwardList::from([1, 2]);
        let mut empty = ForwardList::new();
        assert_eq!(list.begin().splice_after(&mut empty), Err(Error::EmptySource));
        assert_eq!(list.to_vec(), vec![1, 2]);

        let mut other = ForwardList::from([3]);
        let mut nothing = ForwardList::new();
        assert_eq!(nothing.begin().splice_after(&mut other), Err(Error::PastTheEnd));
        assert_eq!(other.to_vec(), vec![3]);
        assert!(nothing.is_empty());
    }

    #[test]
    fn cursor_iterators() {
        let mut list = ForwardList::from([1, 2, 3, 4]);
        let mut cursor = list.cbegin();
        cursor.move_next().unwrap();
        assert_eq!(cursor.into_iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(list.cend().into_iter().next(), None);

        let mut cursor = list.begin();
        cursor.move_next().unwrap();
        cursor.move_next().unwrap();
        cursor.into_iter().for_each(|x| *x *= 10);
        assert_eq!(list.to_vec(), vec![1, 2, 30, 40]);
    }

    #[test]
    fn cursor_trait_dispatch() {
        fn walk<C: ForwardCursor>(mut cursor: C) -> Vec<i32> {
            let mut values = Vec::new();
            while let Some(&value) = cursor.value() {
                values.push(value);
                cursor.move_next().unwrap();
            }
            assert!(cursor.is_end());
            values
        }
        let mut list = ForwardList::from([5, 6]);
        assert_eq!(walk(list.cbegin()), vec![5, 6]);
        assert_eq!(walk(list.begin()), vec![5, 6]);
    }
}
