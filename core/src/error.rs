use crate::impl_display_by_debug;

/// Enums used to describe why a deque operation did not complete.
///
/// `Full` and `Empty` are expected boundary outcomes, not corruption. The
/// caller decides how to react.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DequeError {
    /// Push rejected, the deque has no room at that end.
    Full,
    /// Pop rejected, there is no element at that end.
    Empty,
    /// The configured retry budget ran out before the operation committed.
    Contended,
    /// The requested capacity is zero or too large to lay out.
    InvalidCapacity,
    /// The slot array could not be allocated.
    AllocationFailed,
}

impl_display_by_debug!(DequeError);

impl std::error::Error for DequeError {}
