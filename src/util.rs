//! Helpers around the list: filling it with random values and rendering it
//! as text.
//!
//! A list renders as its values joined by `" -> "` and terminated by
//! `"NULL"`, e.g. `1 -> 2 -> NULL`. An empty list renders as `NULL(Empty)`.

use std::fmt;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::list::cursor::Cursor;
use crate::{distance, ForwardList};

/// Returns a generator seeded from the wall clock.
///
/// The values it produces are not reproducible. Tests that need fixed values
/// should use [`StdRng::seed_from_u64`] instead.
pub fn randomize() -> StdRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    StdRng::seed_from_u64(seed)
}

/// Pushes `n` random values in `0..100` to the front of `list`.
///
/// # Examples
///
/// ```
/// use forward_list::util::{random_fill, randomize};
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::from([-1]);
/// random_fill(&mut list, 10, &mut randomize());
/// assert_eq!(list.len(), 11);
/// assert!(list.iter().take(10).all(|x| (0..100).contains(x)));
/// ```
pub fn random_fill<R: Rng + ?Sized>(list: &mut ForwardList, n: usize, rng: &mut R) {
    (0..n).for_each(|_| list.push_front(rng.random_range(0..100)));
}

impl fmt::Display for ForwardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NULL(Empty)");
        }
        self.iter().try_for_each(|value| write!(f, "{} -> ", value))?;
        f.write_str("NULL")
    }
}

/// Writes `list` to `w`, followed by a newline.
///
/// # Examples
///
/// ```
/// use forward_list::util::write_list;
/// use forward_list::ForwardList;
///
/// let mut out = Vec::new();
/// write_list(&mut out, &ForwardList::from([1, 2])).unwrap();
/// write_list(&mut out, &ForwardList::new()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1 -> 2 -> NULL\nNULL(Empty)\n");
/// ```
pub fn write_list<W: Write>(mut w: W, list: &ForwardList) -> io::Result<()> {
    writeln!(w, "{}", list)
}

/// Writes the values in `first..last` to `w`, terminated by `NULL` and a
/// newline. An empty range writes `NULL` alone.
///
/// # Examples
///
/// ```
/// use forward_list::util::write_range;
/// use forward_list::ForwardList;
///
/// let list = ForwardList::from([1, 2, 3]);
/// let mut last = list.cbegin();
/// last.move_next().unwrap();
///
/// let mut out = Vec::new();
/// write_range(&mut out, list.cbegin(), last).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1 -> NULL\n");
/// ```
pub fn write_range<'a, W: Write>(mut w: W, first: Cursor<'a>, last: Cursor<'a>) -> io::Result<()> {
    let mut cursor = first;
    while cursor != last {
        let Some(value) = cursor.current() else {
            break;
        };
        write!(w, "{} -> ", value)?;
        if cursor.move_next().is_err() {
            break;
        }
    }
    writeln!(w, "NULL")
}

/// Prints `list` to the standard output.
pub fn print_list(list: &ForwardList) -> io::Result<()> {
    write_list(io::stdout().lock(), list)
}

/// Prints the values in `first..last` to the standard output.
pub fn print_list_iterator<'a>(first: Cursor<'a>, last: Cursor<'a>) -> io::Result<()> {
    write_range(io::stdout().lock(), first, last)
}

/// Prints the number of elements of `list`, counted by walking it.
pub fn print_size(list: &ForwardList) -> io::Result<()> {
    writeln!(io::stdout().lock(), "Size: {}", distance(list.cbegin(), list.cend()))
}
