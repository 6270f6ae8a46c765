use crate::common::constants::{End, MAX_CAPACITY};
use crate::config::Config;
use crate::error::DequeError;
use crate::oracle;
use crate::slot::{AtomicSlot, Slot};
use crate::{info, trace, warn};
use crossbeam_utils::{Backoff, CachePadded};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

mod pop;

mod push;

#[cfg(test)]
mod tests;

/// What one slot held when it was read.
#[derive(Debug, Eq, PartialEq)]
pub enum SlotState<'d, T> {
    /// Empty, on the left side.
    LeftEmpty,
    /// Empty, on the right side.
    RightEmpty,
    /// Holding an element reference.
    Occupied(&'d T),
}

impl<T> Clone for SlotState<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotState<'_, T> {}

/// A fixed-capacity lock-free deque of `&'d T`.
///
/// The slot array has `2 * capacity + 2` cells. The left half starts as
/// `LeftEmpty`, the right half as `RightEmpty`, and the outermost cell of each
/// half is never occupied. An atomic size counter admits at most `capacity`
/// elements, so any split of `capacity` pushes between the two ends fits in a
/// fresh deque.
///
/// # Examples
///
/// ```
/// use oracle_deque_core::deque::OracleDeque;
/// use oracle_deque_core::error::DequeError;
///
/// let values = [1, 2, 3];
/// let deque = OracleDeque::new(4).expect("create deque failed");
/// for v in &values {
///     deque.left_push(v).expect("push failed");
/// }
/// assert_eq!(3, deque.len());
/// assert_eq!(Ok(&1), deque.right_pop());
/// assert_eq!(Ok(&3), deque.left_pop());
/// assert_eq!(Ok(&2), deque.left_pop());
/// assert_eq!(Err(DequeError::Empty), deque.left_pop());
/// ```
///
/// The deque is invariant in `'d`: a shared handle cannot be narrowed to a
/// shorter lifetime, so a reference pushed through it can never be popped
/// back out as a longer-lived one.
///
/// ```compile_fail
/// use oracle_deque_core::deque::OracleDeque;
///
/// fn shorten<'a>(deque: &OracleDeque<'static, String>, value: &'a String) {
///     let shorter: &OracleDeque<'a, String> = deque;
///     shorter.left_push(value).expect("push failed");
/// }
///
/// let deque: OracleDeque<'static, String> = OracleDeque::new(1).expect("create deque failed");
/// {
///     let value = String::from("short-lived");
///     shorten(&deque, &value);
/// }
/// let escaped: &'static String = deque.left_pop().expect("pop failed");
/// println!("{escaped}");
/// ```
#[derive(educe::Educe)]
#[educe(Debug)]
pub struct OracleDeque<'d, T> {
    #[educe(Debug(ignore))]
    slots: Box<[AtomicSlot]>,
    left_hint: CachePadded<AtomicUsize>,
    right_hint: CachePadded<AtomicUsize>,
    size: CachePadded<AtomicUsize>,
    config: Config,
    // `&'d T` is stored through `&self`, so `'d` must not shrink
    #[educe(Debug(ignore))]
    _marker: PhantomData<(&'d T, fn(&'d T))>,
}

impl<'d, T> OracleDeque<'d, T> {
    /// Create a new `OracleDeque` able to hold `capacity` elements, retrying
    /// without bound on contention.
    ///
    /// # Errors
    /// `InvalidCapacity` if `capacity` is zero or larger than
    /// `MAX_CAPACITY`, `AllocationFailed` if the slot array cannot be
    /// allocated.
    pub fn new(capacity: usize) -> Result<Self, DequeError> {
        Self::with_config(&Config::new(capacity))
    }

    /// Create a new `OracleDeque` from `config`.
    ///
    /// # Errors
    /// see [`OracleDeque::new`].
    pub fn with_config(config: &Config) -> Result<Self, DequeError> {
        let capacity = config.capacity();
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(DequeError::InvalidCapacity);
        }
        let len = capacity * 2 + 2;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| DequeError::AllocationFailed)?;
        slots.extend((0..len).map(|index| AtomicSlot::new(initial_slot(index, capacity, 0))));
        if !AtomicSlot::is_lock_free() {
            warn!("128-bit compare-and-swap is emulated on this platform");
        }
        info!("oracle-deque init with {config:?}");
        Ok(Self {
            slots: slots.into_boxed_slice(),
            left_hint: CachePadded::new(AtomicUsize::new(capacity)),
            right_hint: CachePadded::new(AtomicUsize::new(capacity + 1)),
            size: CachePadded::new(AtomicUsize::new(0)),
            config: *config,
            _marker: PhantomData,
        })
    }

    /// The number of elements the deque can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// The settings this deque was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Approximate number of elements held.
    ///
    /// Pushes are counted from the moment they are admitted, so the value may
    /// run ahead of what a concurrent pop can see.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size.load(Ordering::Acquire)
    }

    /// Returns `true` if no element is held or being pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read every slot, left to right.
    ///
    /// Slots are read one at a time, so under concurrent use the result
    /// need not match any single instant.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SlotState<'d, T>> {
        self.slots
            .iter()
            .map(|slot| {
                let slot = slot.load();
                // SAFETY: occupied slots only ever hold addresses of `&'d T`.
                match unsafe { slot.element::<T>() } {
                    Some(element) => SlotState::Occupied(element),
                    None if slot.is_left_empty() => SlotState::LeftEmpty,
                    None => SlotState::RightEmpty,
                }
            })
            .collect()
    }

    /// Hand back every reference still held, left end first, and reset the
    /// deque as [`OracleDeque::clear`] does.
    pub fn drain(&mut self) -> Vec<&'d T> {
        let held = self
            .slots
            .iter()
            // SAFETY: occupied slots only ever hold addresses of `&'d T`.
            .filter_map(|slot| unsafe { slot.load().element::<T>() })
            .collect();
        self.reset();
        held
    }

    /// Return the deque to its freshly constructed shape: every slot back to
    /// its half's sentinel, hints to the center, size to zero.
    ///
    /// Taking `&mut self` rules out any concurrent push or pop.
    pub fn clear(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        let capacity = self.capacity();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            // every write bumps the version, teardown included
            let version = slot.load().restamp().version();
            slot.reset(initial_slot(index, capacity, version));
        }
        *self.left_hint.get_mut() = capacity;
        *self.right_hint.get_mut() = capacity + 1;
        *self.size.get_mut() = 0;
        info!("oracle-deque cleared, capacity {capacity}");
    }

    fn hint(&self, end: End) -> &AtomicUsize {
        match end {
            End::Left => &self.left_hint,
            End::Right => &self.right_hint,
        }
    }

    fn oracle(&self, end: End) -> usize {
        oracle::locate(&self.slots, self.hint(end).load(Ordering::Acquire), end)
    }

    /// The outermost slot of `end`, never occupied.
    fn is_edge(&self, end: End, index: usize) -> bool {
        match end {
            End::Left => index == 0,
            End::Right => index == self.slots.len() - 1,
        }
    }

    /// Admit one more element, or report `Full` without touching any slot.
    fn reserve(&self) -> Result<(), DequeError> {
        let capacity = self.capacity();
        self.size
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |size| {
                (size < capacity).then_some(size + 1)
            })
            .map(|_| ())
            .map_err(|_| {
                trace!("push rejected, {capacity} elements held");
                DequeError::Full
            })
    }

    fn release(&self) {
        _ = self.size.fetch_sub(1, Ordering::AcqRel);
    }
}

fn initial_slot(index: usize, capacity: usize, version: u64) -> Slot {
    if index <= capacity {
        Slot::left_empty(version)
    } else {
        Slot::right_empty(version)
    }
}

/// The neighbour of `index` one step toward the interior.
fn inward(end: End, index: usize) -> usize {
    match end {
        End::Left => index + 1,
        End::Right => index - 1,
    }
}

/// The neighbour of `index` one step toward the outer edge.
fn outward(end: End, index: usize) -> usize {
    match end {
        End::Left => index - 1,
        End::Right => index + 1,
    }
}

fn is_empty_of(end: End, slot: Slot) -> bool {
    match end {
        End::Left => slot.is_left_empty(),
        End::Right => slot.is_right_empty(),
    }
}

fn to_empty_of(end: End, slot: Slot) -> Slot {
    match end {
        End::Left => slot.to_left_empty(),
        End::Right => slot.to_right_empty(),
    }
}

/// Counts failed attempts of one operation against the retry budget.
struct Retry<'c> {
    config: &'c Config,
    failures: usize,
    backoff: Backoff,
}

impl<'c> Retry<'c> {
    fn new(config: &'c Config) -> Self {
        Retry {
            config,
            failures: 0,
            backoff: Backoff::new(),
        }
    }

    fn failed(&mut self, end: End, operation: &str) -> Result<(), DequeError> {
        self.failures = self.failures.saturating_add(1);
        if let Some(max_retries) = self.config.max_retries() {
            if self.failures > max_retries {
                warn!("{end} {operation} gave up after {} attempts", self.failures);
                return Err(DequeError::Contended);
            }
        }
        if self.config.backoff() {
            self.backoff.spin();
        }
        Ok(())
    }
}
