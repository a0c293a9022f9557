use std::cmp::Ordering;

use tracing::trace;

use crate::list::cursor::Cursor;
use crate::list::ForwardList;

/// Returns `true` if the values in `first..last` are in non-descending order.
/// An empty range is sorted.
///
/// `last` must be reachable from `first`.
///
/// # Examples
///
/// ```
/// use forward_list::{is_sorted, ForwardList};
///
/// let list = ForwardList::from([1, 2, 2, 5, 0]);
/// let mut last = list.cbegin();
/// forward_list::advance(&mut last, 4).unwrap();
///
/// assert!(is_sorted(list.cbegin(), last));
/// assert!(!is_sorted(list.cbegin(), list.cend()));
/// ```
pub fn is_sorted<'a>(first: Cursor<'a>, last: Cursor<'a>) -> bool {
    let mut cursor = first;
    let mut prev = None;
    while cursor != last {
        let Some(value) = cursor.current() else {
            break;
        };
        if prev.map_or(false, |prev| prev > value) {
            return false;
        }
        prev = Some(value);
        if cursor.move_next().is_err() {
            break;
        }
    }
    true
}

impl ForwardList {
    /// Sorts the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The values are copied out, sorted in a buffer, and rebuilt into a new
    /// chain of nodes that replaces the old one. Sorting an empty list
    /// allocates nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* \* log(*n*)) time and
    /// *O*(*n*) extra memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([3, 1, 2]);
    /// list.sort();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert!(list.is_sorted());
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([5, 4, 1, 3, 2]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&i32, &i32) -> Ordering,
    {
        if self.is_empty() {
            return;
        }
        let mut values = self.to_vec();
        values.sort_by(compare);
        let len = values.len();
        let mut sorted = ForwardList::from(values);
        self.swap(&mut sorted);
        trace!(len, "sorted list");
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([-5, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(list.to_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&i32) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Returns `true` if the whole list is in non-descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// assert!(ForwardList::new().is_sorted());
    /// assert!(ForwardList::from([1, 1, 2]).is_sorted());
    /// assert!(!ForwardList::from([2, 1]).is_sorted());
    /// ```
    pub fn is_sorted(&self) -> bool {
        is_sorted(self.cbegin(), self.cend())
    }
}
