use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::list::{ForwardList, Link, Node};

/// An iterator over the elements of a `ForwardList`.
///
/// The `Iter` walks the chain by shared references, so the list cannot be
/// written while it is alive.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    current: Option<&'a Node>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a ForwardList) -> Self {
        Self {
            current: list.head_node(),
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }
}

impl<'a> fmt::Debug for Iter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    /// Return the current value and move to the next node, or return `None`
    /// at the end of the list.
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&node.value)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

/// A mutable iterator over the elements of a `ForwardList`.
///
/// `IterMut` provides mutability of the values, but not of the links.
///
/// # Examples
///
/// `ForwardList` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a> {
    current: Option<&'a mut Node>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(list: &'a mut ForwardList) -> Self {
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            current: list.head_link().as_deref_mut(),
            #[cfg(feature = "length")]
            len,
        }
    }
}

impl<'a> fmt::Debug for IterMut<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut node = self.current.as_deref();
        while let Some(current) = node {
            f.field(&current.value);
            node = current.next.as_deref();
        }
        f.finish()
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref_mut();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut node.value)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a> ExactSizeIterator for IterMut<'a> {}

impl<'a> FusedIterator for IterMut<'a> {}

/// An owning iterator over the elements of a `ForwardList`.
///
/// This `struct` is created by the [`into_iter`] method on [`ForwardList`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: ForwardList::into_iter
pub struct IntoIter {
    list: ForwardList,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for ForwardList {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a ForwardList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ForwardList {
    type Item = &'a mut i32;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl FromIterator<i32> for ForwardList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

/// Appends the values at the back of the list, in order.
impl Extend<i32> for ForwardList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link: &mut Link = self.tail_link();
        for value in iter {
            link = &mut link.insert(Node::new(value, None)).next;
            added += 1;
        }
        self.add_len(added);
    }
}

impl<'a> Extend<&'a i32> for ForwardList {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
