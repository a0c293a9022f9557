use std::fmt::{self, Debug, Formatter};

use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::is_sorted;

/// The `ForwardList` is a singly-linked list of `i32` with owned nodes.
/// It allows inserting and erasing elements after any given position in
/// constant time. In compromise, reaching a position takes *O*(*n*) time,
/// and the list can only be walked front to back.
///
/// The `ForwardList` contains:
/// - an owning link `head` to the first node, or `None` if it is empty;
/// - a length field `len` indicating the length of the list. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// forward_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `first..last`: a half-open range of positions, left inclusive and right
///   exclusive (probably the end position);
/// - a *link* is an `Option<Box<Node>>`: either the list head or the `next`
///   field of a node.
pub struct ForwardList {
    head: Link,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

/// A chain detached from a list, used in splicing and merging.
///
/// The chain is never empty: an empty list detaches to `None`.
pub(crate) struct DetachedNodes {
    pub(crate) front: Box<Node>,
    #[cfg(feature = "length")]
    pub(crate) len: usize,
}

// private methods
impl ForwardList {
    pub(crate) fn head_link(&mut self) -> &mut Link {
        &mut self.head
    }

    pub(crate) fn head_node(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Returns the link at index `at`, i.e. the link whose node (if any) is
    /// the `at`-th node. Stops at the tail link if `at >= len`.
    pub(crate) fn link_at(&mut self, at: usize) -> &mut Link {
        let mut link = &mut self.head;
        for _ in 0..at {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Returns the `None` link after the last node (the head if empty).
    pub(crate) fn tail_link(&mut self) -> &mut Link {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes> {
        let front = self.head.take()?;
        #[cfg(feature = "length")]
        let len = std::mem::take(&mut self.len);
        Some(DetachedNodes {
            front,
            #[cfg(feature = "length")]
            len,
        })
    }

    pub(crate) fn add_len(&mut self, _added: usize) {
        #[cfg(feature = "length")]
        {
            self.len += _added;
        }
    }

    pub(crate) fn sub_len(&mut self, _removed: usize) {
        #[cfg(feature = "length")]
        {
            self.len -= _removed;
        }
    }
}

impl ForwardList {
    /// Create an empty `ForwardList`.
    ///
    /// # Examples
    /// ```
    /// use forward_list::ForwardList;
    /// let list = ForwardList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `ForwardList` is empty, i.e. `cbegin() == cend()`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front(42);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `ForwardList`.
    ///
    /// # Complexity
    ///
    /// With the `length` feature this operation computes in *O*(1) time,
    /// otherwise it walks the list in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.len(), forward_list::distance(list.cbegin(), list.cend()));
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        crate::distance(self.cbegin(), self.cend())
    }

    /// Removes all elements from the `ForwardList`. Calling it on an empty
    /// list does nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Replaces the contents of the list with `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([420, 420]);
    /// list.assign(3, 69);
    /// assert_eq!(list.to_vec(), vec![69, 69, 69]);
    /// ```
    pub fn assign(&mut self, count: usize, value: i32) {
        self.clear();
        (0..count).for_each(|_| self.push_front(value));
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&i32> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.front_mut(), None);
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut i32> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Node::new(value, next));
        self.add_len(1);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<i32> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.sub_len(1);
        Some(node.value)
    }

    /// Provides a read-only cursor at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([1, 2, 3]);
    /// assert_eq!(list.cbegin().current(), Some(&1));
    /// assert_eq!(ForwardList::new().cbegin(), ForwardList::new().cend());
    /// ```
    pub fn cbegin(&self) -> Cursor<'_> {
        Cursor::new(self.head.as_deref())
    }

    /// Provides a read-only cursor at the end position. It references no node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([1, 2, 3]);
    /// assert_eq!(list.cend().current(), None);
    /// ```
    pub fn cend(&self) -> Cursor<'_> {
        Cursor::new(None)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let mut cursor = list.begin();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn begin(&mut self) -> CursorMut<'_> {
        CursorMut::new(
            self.head.as_deref_mut(),
            #[cfg(feature = "length")]
            &mut self.len,
        )
    }

    /// Returns the end position of the list.
    ///
    /// A [`Position`] does not borrow the list, so it can bound a range that
    /// starts at a [`CursorMut`].
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{find, ForwardList};
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let last = list.end();
    /// let found = find(list.begin(), last, 7);
    /// assert_eq!(found.position(), last);
    /// ```
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }
}

impl Debug for ForwardList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for ForwardList {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    pub(crate) fn new(value: i32, next: Link) -> Box<Self> {
        Box::new(Node { value, next })
    }
}

/// Unlink the chain iteratively, so that dropping a long chain does not
/// recurse once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Drop for ForwardList {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::list::ForwardList;

    #[test]
    fn list_create() {
        let mut list = ForwardList::new();
        assert!(list.is_empty());
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop_long_chain() {
        let mut list = ForwardList::new();
        (0..1_000_000).for_each(|i| list.push_front(i));
        drop(list);

        // A detached chain must also unlink iteratively.
        let mut list = ForwardList::new();
        (0..1_000_000).for_each(|i| list.push_front(i));
        let detached = list.detach_all_nodes();
        assert!(list.is_empty());
        drop(detached);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = ForwardList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);

        list.push_front(420);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&420));

        list.assign(10, 69);
        list.push_front(-1);
        assert_eq!(list.len(), 11);
        assert_eq!(list.front(), Some(&-1));

        assert_eq!(list.pop_front(), Some(-1));
        assert_eq!(list.len(), 10);
        assert_eq!(list.pop_front(), Some(69));
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn list_assign() {
        let mut list = ForwardList::new();
        list.assign(10, 69);
        assert_eq!(list.len(), 10);
        assert!(list.iter().all(|&x| x == 69));

        let mut list = ForwardList::from([420; 5]);
        list.assign(10, 69);
        assert_eq!(list.len(), 10);
        assert!(list.iter().all(|&x| x == 69));

        list.assign(0, 1);
        assert!(list.is_empty());
    }

    #[test]
    fn list_clear() {
        let mut list = ForwardList::new();
        list.clear();
        assert!(list.is_empty());
        assert!(list.head_node().is_none());

        let mut list = ForwardList::from([420; 5]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn list_front_is_head() {
        let mut list = ForwardList::from([3, 1, 4]);
        assert_eq!(list.front(), list.head_node().map(|node| &node.value));
        *list.front_mut().unwrap() = 9;
        assert_eq!(list.to_vec(), vec![9, 1, 4]);
    }

    #[test]
    fn list_links() {
        let mut list = ForwardList::from([0, 1, 2]);
        assert_eq!(list.link_at(1).as_ref().map(|node| node.value), Some(1));
        assert!(list.link_at(3).is_none());
        assert!(list.link_at(10).is_none());
        assert!(list.tail_link().is_none());

        let mut list = ForwardList::new();
        assert!(list.tail_link().is_none());
    }

    #[test]
    fn list_detach_and_attach() {
        let mut list = ForwardList::from([5, 6, 7]);
        let detached = list.detach_all_nodes().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.detach_all_nodes().is_none());

        #[cfg(feature = "length")]
        assert_eq!(detached.len, 3);
        assert_eq!(detached.front.value, 5);
    }
}
