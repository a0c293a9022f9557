use tracing::trace;

use crate::list::{ForwardList, Link};

impl ForwardList {
    /// Merges the sorted list `other` into this sorted list, leaving `other`
    /// empty.
    ///
    /// No node is allocated or freed: the nodes of `other` are relinked into
    /// this list. The merge is stable: of two equal elements, the one of this
    /// list comes first. If either list is not sorted, all elements are still
    /// moved, in an unspecified order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 3, 5]);
    /// let mut other = ForwardList::from([2, 4]);
    /// list.merge(&mut other);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut ForwardList) {
        let Some(detached) = other.detach_all_nodes() else {
            return;
        };
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }

        let mut left = self.head.take();
        let mut right: Link = Some(detached.front);
        let mut link = &mut self.head;
        loop {
            let from_right = match (&left, &right) {
                (Some(l), Some(r)) => r.value < l.value,
                _ => break,
            };
            let source = if from_right { &mut right } else { &mut left };
            let Some(mut node) = source.take() else {
                break;
            };
            *source = node.next.take();
            link = &mut link.insert(node).next;
        }
        *link = left.or(right);
        trace!(len = self.len(), "merged lists");
    }
}
