use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::list::{ForwardList, Link, Node};

mod merge;
mod sort;

pub use sort::is_sorted;

impl PartialEq for ForwardList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for ForwardList {}

impl PartialOrd for ForwardList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ForwardList {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl Clone for ForwardList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl Hash for ForwardList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl From<&[i32]> for ForwardList {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[i32; N]> for ForwardList {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<i32>> for ForwardList {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl From<ForwardList> for Vec<i32> {
    fn from(list: ForwardList) -> Self {
        list.into_iter().collect()
    }
}

impl ForwardList {
    /// Returns `true` if the `ForwardList` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &i32) -> bool {
        self.iter().any(|e| e == x)
    }

    /// Copies the values of the list into a `Vec`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from([3, 1, 2]);
    /// assert_eq!(list.to_vec(), vec![3, 1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }

    /// Builds a list holding the values of `values`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list = ForwardList::from_slice(&[3, 1, 2]);
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(ForwardList::from_slice(&list.to_vec()), list);
    /// ```
    pub fn from_slice(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Exchanges the contents of the list with `other`. No node is touched.
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
    /// let mut list1 = ForwardList::from([1, 2]);
    /// let mut list2 = ForwardList::from([3]);
    /// list1.swap(&mut list2);
    /// assert_eq!(list1.to_vec(), vec![3]);
    /// assert_eq!(list2.to_vec(), vec![1, 2]);
    /// ```
    pub fn swap(&mut self, other: &mut ForwardList) {
        std::mem::swap(self, other);
    }

    /// Reverses the order of the elements in place, by relinking the nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Removes all elements equal to `value`, and returns the number of
    /// elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([4, 2, 4, 7, 4]);
    /// assert_eq!(list.remove(4), 3);
    /// assert_eq!(list.to_vec(), vec![2, 7]);
    /// ```
    pub fn remove(&mut self, value: i32) -> usize {
        self.remove_if(|&x| x == value)
    }

    /// Removes all elements for which `predicate` returns `true`, and returns
    /// the number of elements removed.
    ///
    /// The list is walked once; the relative order of the remaining
    /// elements is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from_iter(0..20);
    /// assert_eq!(list.remove_if(|x| x % 5 == 0), 4);
    /// assert_eq!(list.len(), 16);
    /// assert!(!list.contains(&15));
    /// ```
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&i32) -> bool,
    {
        let mut removed = 0;
        let mut link = &mut self.head;
        while let Some(mut node) = link.take() {
            if predicate(&node.value) {
                *link = node.next.take();
                removed += 1;
            } else {
                link = &mut link.insert(node).next;
            }
        }
        self.sub_len(removed);
        trace!(removed, "removed matching elements");
        removed
    }

    /// Removes consecutive duplicate elements, keeping the first element of
    /// each run of equal elements. Returns the number of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 1, 2, 3, 3, 3, 4, 1]);
    /// assert_eq!(list.unique(), 3);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 1]);
    /// ```
    pub fn unique(&mut self) -> usize {
        let mut removed = 0;
        if let Some(mut node) = self.head.as_deref_mut() {
            loop {
                match node.next.take() {
                    None => break,
                    Some(mut next) if next.value == node.value => {
                        node.next = next.next.take();
                        removed += 1;
                    }
                    Some(next) => node = &mut **node.next.insert(next),
                }
            }
        }
        self.sub_len(removed);
        trace!(removed, "removed consecutive duplicates");
        removed
    }

    /// Resizes the list to `count` elements, appending zeroes if it grows.
    /// See [`resize_value`](ForwardList::resize_value).
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([69; 2]);
    /// list.resize(4);
    /// assert_eq!(list.to_vec(), vec![69, 69, 0, 0]);
    /// ```
    pub fn resize(&mut self, count: usize) {
        self.resize_value(count, 0);
    }

    /// Resizes the list to `count` elements. Does nothing if `count` equals
    /// the length.
    ///
    /// If the list is longer than `count`, it is reduced to its first `count`
    /// elements. If it is shorter, copies of `value` are appended at the
    /// back, after the existing elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// list.resize_value(5, 420);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 420, 420]);
    ///
    /// list.resize_value(2, 420);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn resize_value(&mut self, count: usize, value: i32) {
        let len = self.len();
        match count.cmp(&len) {
            Ordering::Equal => {}
            Ordering::Less => {
                *self.link_at(count) = None;
                self.sub_len(len - count);
            }
            Ordering::Greater => {
                let mut link = self.tail_link();
                for _ in len..count {
                    link = &mut link.insert(Node::new(value, None)).next;
                }
                self.add_len(count - len);
            }
        }
        trace!(from = len, to = count, "resized list");
    }
}
