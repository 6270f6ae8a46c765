use crate::impl_display_by_debug;

/// Default element capacity of a deque.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Largest supported element capacity.
///
/// The slot array holds `2 * capacity + 2` cells, which must stay indexable.
pub const MAX_CAPACITY: usize = (usize::MAX >> 2) - 1;

/// Enums used to select one end of the deque.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum End {
    /// The low-index end.
    Left,
    /// The high-index end.
    Right,
}

impl_display_by_debug!(End);
