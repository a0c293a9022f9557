//! Generic algorithms over forward cursors, independent of [`ForwardList`].
//!
//! [`ForwardList`]: crate::ForwardList

use tracing::debug;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, ForwardCursor, Position};

/// Moves `cursor` forward by `n` nodes.
///
/// # Errors
///
/// Returns [`Error::NegativeAdvance`] if `n` is negative, since the list can
/// only be walked forward, or [`Error::PastTheEnd`] if the end position is
/// reached before `n` steps were taken (the cursor is then left at the end
/// position).
///
/// # Examples
///
/// ```
/// use forward_list::{advance, Error, ForwardList};
///
/// let list = ForwardList::from([1, 2, 3]);
/// let mut cursor = list.cbegin();
/// advance(&mut cursor, 2).unwrap();
/// assert_eq!(cursor.current(), Some(&3));
/// assert_eq!(advance(&mut cursor, -1), Err(Error::NegativeAdvance(-1)));
/// ```
pub fn advance<C: ForwardCursor>(cursor: &mut C, n: isize) -> Result<()> {
    if n < 0 {
        debug!(n, "cannot advance a forward cursor backward");
        return Err(Error::NegativeAdvance(n));
    }
    (0..n).try_for_each(|_| cursor.move_next())
}

/// Returns the number of steps from `first` to `last`.
///
/// `last` must be reachable from `first` by moving forward. This is not
/// checked in release builds, where an unreachable `last` counts the steps
/// to the end position instead.
///
/// # Examples
///
/// ```
/// use forward_list::{distance, ForwardList};
///
/// let list = ForwardList::from([1, 2, 3]);
/// assert_eq!(distance(list.cbegin(), list.cend()), 3);
/// ```
pub fn distance<'a>(mut first: Cursor<'a>, last: Cursor<'a>) -> usize {
    let mut count = 0;
    while first != last {
        if first.move_next().is_err() {
            debug_assert!(false, "`last` is not reachable from `first`");
            break;
        }
        count += 1;
    }
    count
}

/// Returns the first cursor in `first..last` whose value equals `value`,
/// or a cursor at `last` if there is none.
///
/// Accepts both cursor flavors; `last` is given as a [`Position`] so that a
/// [`CursorMut`](crate::CursorMut) range can be bounded.
///
/// # Examples
///
/// ```
/// use forward_list::{find, ForwardList};
///
/// let mut list = ForwardList::from([1, 2, 3]);
/// let last = list.end();
/// let mut found = find(list.begin(), last, 2);
/// *found.current_mut().unwrap() = 20;
/// assert_eq!(list.to_vec(), vec![1, 20, 3]);
/// ```
pub fn find<C: ForwardCursor>(mut first: C, last: Position, value: i32) -> C {
    while first.position() != last {
        if first.value() == Some(&value) || first.move_next().is_err() {
            break;
        }
    }
    first
}

/// Read-only [`find`], bounded by another cursor.
///
/// # Examples
///
/// ```
/// use forward_list::{cfind, ForwardList};
///
/// let list = ForwardList::from([1, 2, 3, 4, 5]);
/// assert_eq!(cfind(list.cbegin(), list.cend(), 3).current(), Some(&3));
/// assert_eq!(cfind(list.cbegin(), list.cend(), -1), list.cend());
/// ```
pub fn cfind<'a>(first: Cursor<'a>, last: Cursor<'a>, value: i32) -> Cursor<'a> {
    find(first, last.position(), value)
}

#[cfg(test)]
mod tests {
    use crate::{advance, cfind, distance, find, Error, ForwardList};

    #[test]
    fn advance_forward() {
        let mut list = ForwardList::from([0, 1, 2, 3, 4]);
        let mut cursor = list.cbegin();
        assert!(advance(&mut cursor, 0).is_ok());
        assert_eq!(cursor.current(), Some(&0));
        assert!(advance(&mut cursor, 3).is_ok());
        assert_eq!(cursor.current(), Some(&3));
        assert!(advance(&mut cursor, 2).is_ok());
        assert!(cursor.is_end());
        assert_eq!(advance(&mut cursor, 1), Err(Error::PastTheEnd));

        let mut cursor = list.begin();
        assert!(advance(&mut cursor, 4).is_ok());
        assert_eq!(cursor.current(), Some(&4));
    }

    #[test]
    fn advance_rejects_backward() {
        let list = ForwardList::from([0, 1, 2]);
        let mut cursor = list.cbegin();
        advance(&mut cursor, 1).unwrap();
        assert_eq!(advance(&mut cursor, -1), Err(Error::NegativeAdvance(-1)));
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn advance_stops_at_end() {
        let list = ForwardList::from([0, 1]);
        let mut cursor = list.cbegin();
        assert_eq!(advance(&mut cursor, 5), Err(Error::PastTheEnd));
        assert_eq!(cursor, list.cend());
    }

    #[test]
    fn distance_counts_steps() {
        let list = ForwardList::new();
        assert_eq!(distance(list.cbegin(), list.cend()), 0);

        let list = ForwardList::from([9; 10]);
        assert_eq!(distance(list.cbegin(), list.cend()), 10);
        assert_eq!(distance(list.cbegin(), list.cbegin()), 0);

        let mut mid = list.cbegin();
        advance(&mut mid, 4).unwrap();
        assert_eq!(distance(list.cbegin(), mid), 4);
        assert_eq!(distance(mid, list.cend()), 6);
    }

    #[test]
    fn find_found_and_not_found() {
        let list = ForwardList::from([1, 2, 3, 4, 5]);
        assert_eq!(cfind(list.cbegin(), list.cend(), -1), list.cend());
        assert!(cfind(list.cbegin(), list.cend(), -1).current().is_none());

        let found = cfind(list.cbegin(), list.cend(), 3);
        assert_eq!(found.current(), Some(&3));
        assert_eq!(distance(list.cbegin(), found), 2);
    }

    #[test]
    fn find_first_match_within_range() {
        let list = ForwardList::from([5, 1, 5, 2, 5]);
        let found = cfind(list.cbegin(), list.cend(), 5);
        assert_eq!(found, list.cbegin());

        let mut first = list.cbegin();
        first.move_next().unwrap();
        let found = cfind(first, list.cend(), 5);
        assert_eq!(distance(list.cbegin(), found), 2);

        // The matches at indexes 2 and 4 lie outside `1..2`.
        let mut last = first;
        last.move_next().unwrap();
        assert_eq!(cfind(first, last, 5), last);
    }

    #[test]
    fn find_with_mutable_cursor() {
        let mut list = ForwardList::from([1, 2, 3]);
        let last = list.end();
        let found = find(list.begin(), last, 4);
        assert!(found.is_end());

        let mut found = find(list.begin(), last, 3);
        found.insert_after(4).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }
}
