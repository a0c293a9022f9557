use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned when a cursor operation's precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The cursor is at the end position, which references no node.
    #[error("cursor is past the end of the list")]
    PastTheEnd,

    /// A forward-only cursor was asked to move backward.
    #[error("cannot advance a forward cursor by {0} steps")]
    NegativeAdvance(isize),

    /// `erase_after` was called on the last node.
    #[error("no node follows the cursor")]
    NoSuccessor,

    /// `splice_after` was called with an empty source list.
    #[error("cannot splice an empty list")]
    EmptySource,
}
