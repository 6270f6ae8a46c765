use super::{inward, is_empty_of, to_empty_of, OracleDeque, Retry};
use crate::common::constants::End;
use crate::error::DequeError;
use crate::trace;
use std::sync::atomic::Ordering;

impl<'d, T> OracleDeque<'d, T> {
    /// Remove and return the element at the left end.
    ///
    /// # Errors
    /// `Empty` if the left end holds no element, `Contended` if a retry
    /// budget is configured and ran out.
    pub fn left_pop(&self) -> Result<&'d T, DequeError> {
        self.pop(End::Left)
    }

    /// Remove and return the element at the right end.
    ///
    /// # Errors
    /// see [`OracleDeque::left_pop`].
    pub fn right_pop(&self) -> Result<&'d T, DequeError> {
        self.pop(End::Right)
    }

    fn pop(&self, end: End) -> Result<&'d T, DequeError> {
        let mut retry = Retry::new(&self.config);
        loop {
            let k = self.oracle(end);
            let neighbour = inward(end, k);
            let current = self.slots[neighbour].load();
            let next = self.slots[k].load();
            if !is_empty_of(end, current) && is_empty_of(end, next) {
                // SAFETY: occupied slots only ever hold addresses of `&'d T`.
                match unsafe { current.element::<T>() } {
                    // the other side's sentinel: both frontiers meet here
                    None => {
                        if self.slots[neighbour].load() == current {
                            trace!("{end} pop found the deque empty at {k}");
                            return Err(DequeError::Empty);
                        }
                    }
                    Some(element) => {
                        if self.slots[k].compare_exchange(next, to_empty_of(end, next))
                            && self.slots[neighbour]
                                .compare_exchange(current, to_empty_of(end, current))
                        {
                            self.hint(end).store(neighbour, Ordering::Release);
                            self.release();
                            return Ok(element);
                        }
                    }
                }
            }
            retry.failed(end, "pop")?;
        }
    }
}
