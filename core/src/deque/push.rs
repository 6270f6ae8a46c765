use super::{inward, is_empty_of, outward, OracleDeque, Retry};
use crate::common::constants::End;
use crate::error::DequeError;
use crate::trace;
use std::sync::atomic::Ordering;

impl<'d, T> OracleDeque<'d, T> {
    /// Insert `element` at the left end.
    ///
    /// # Errors
    /// `Full` if `capacity` elements are already held or the left end has
    /// run out of slots, `Contended` if a retry budget is configured and ran
    /// out. The deque is left unchanged in both cases.
    pub fn left_push(&self, element: &'d T) -> Result<(), DequeError> {
        self.reserve()?;
        self.push(End::Left, element)
            .inspect_err(|_| self.release())
    }

    /// Insert `element` at the right end.
    ///
    /// # Errors
    /// see [`OracleDeque::left_push`].
    pub fn right_push(&self, element: &'d T) -> Result<(), DequeError> {
        self.reserve()?;
        self.push(End::Right, element)
            .inspect_err(|_| self.release())
    }

    fn push(&self, end: End, element: &'d T) -> Result<(), DequeError> {
        let mut retry = Retry::new(&self.config);
        loop {
            let k = self.oracle(end);
            let neighbour = inward(end, k);
            let previous = self.slots[neighbour].load();
            let current = self.slots[k].load();
            if !is_empty_of(end, previous) && is_empty_of(end, current) {
                if self.is_edge(end, k) {
                    trace!("{end} push rejected, slot array exhausted at {k}");
                    return Err(DequeError::Full);
                }
                // seal the neighbour first, then publish the element
                if self.slots[neighbour].compare_exchange(previous, previous.restamp())
                    && self.slots[k].compare_exchange(current, current.to_occupied(element))
                {
                    self.hint(end).store(outward(end, k), Ordering::Release);
                    return Ok(());
                }
            }
            retry.failed(end, "push")?;
        }
    }
}
