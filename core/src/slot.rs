use portable_atomic::{AtomicU128, Ordering};

/// Versions live above the two tag bits of the high word, so they wrap
/// modulo 2^62.
const TAG_BITS: u32 = 2;

const TAG_MASK: u64 = (1 << TAG_BITS) - 1;

const VERSION_MASK: u64 = u64::MAX >> TAG_BITS;

/// Enums used to describe what a slot holds.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tag {
    /// Empty, last touched by left-side logic.
    LeftEmpty = 0,
    /// Empty, last touched by right-side logic.
    RightEmpty = 1,
    /// Holds one caller-owned element reference.
    Occupied = 2,
}

impl Tag {
    fn from_bits(bits: u64) -> Self {
        match bits & TAG_MASK {
            0 => Tag::LeftEmpty,
            1 => Tag::RightEmpty,
            _ => Tag::Occupied,
        }
    }
}

/// A snapshot of one cell: occupant plus version.
///
/// Two snapshots are equal only if both the occupant and the version match,
/// which is what every compare-and-swap on an [`AtomicSlot`] compares.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Slot {
    address: u64,
    tag: Tag,
    version: u64,
}

impl Slot {
    /// A left-side sentinel with the given version.
    #[must_use]
    pub const fn left_empty(version: u64) -> Self {
        Self::sentinel(Tag::LeftEmpty, version)
    }

    /// A right-side sentinel with the given version.
    #[must_use]
    pub const fn right_empty(version: u64) -> Self {
        Self::sentinel(Tag::RightEmpty, version)
    }

    const fn sentinel(tag: Tag, version: u64) -> Self {
        Self {
            address: 0,
            tag,
            version: version & VERSION_MASK,
        }
    }

    /// A slot holding `element` with the given version.
    #[must_use]
    pub fn occupied<T>(element: &T, version: u64) -> Self {
        Self {
            address: std::ptr::from_ref(element) as usize as u64,
            tag: Tag::Occupied,
            version: version & VERSION_MASK,
        }
    }

    /// What the slot holds.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Write counter of the slot.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the slot is a left-side sentinel.
    #[must_use]
    pub fn is_left_empty(&self) -> bool {
        Tag::LeftEmpty == self.tag
    }

    /// Whether the slot is a right-side sentinel.
    #[must_use]
    pub fn is_right_empty(&self) -> bool {
        Tag::RightEmpty == self.tag
    }

    /// Whether the slot holds an element.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        Tag::Occupied == self.tag
    }

    fn bumped(&self) -> u64 {
        self.version.wrapping_add(1) & VERSION_MASK
    }

    /// Same occupant, next version. Used to seal a neighbour before the
    /// second compare-and-swap of a transition.
    #[must_use]
    pub fn restamp(self) -> Self {
        Self {
            version: self.bumped(),
            ..self
        }
    }

    /// This slot rewritten as a left-side sentinel.
    #[must_use]
    pub fn to_left_empty(self) -> Self {
        Self::left_empty(self.bumped())
    }

    /// This slot rewritten as a right-side sentinel.
    #[must_use]
    pub fn to_right_empty(self) -> Self {
        Self::right_empty(self.bumped())
    }

    /// This slot rewritten to hold `element`.
    #[must_use]
    pub fn to_occupied<T>(self, element: &T) -> Self {
        Self::occupied(element, self.bumped())
    }

    /// The element reference held by this slot.
    ///
    /// # Safety
    /// An occupied slot must have been produced from a `&'d T` that is still
    /// alive for `'d`.
    pub(crate) unsafe fn element<'d, T>(&self) -> Option<&'d T> {
        if self.is_occupied() {
            let address = usize::try_from(self.address).ok()?;
            Some(&*(address as *const T))
        } else {
            None
        }
    }

    fn pack(self) -> u128 {
        let high = (self.version << TAG_BITS) | self.tag as u64;
        (u128::from(high) << 64) | u128::from(self.address)
    }

    fn unpack(word: u128) -> Self {
        let high = (word >> 64) as u64;
        Self {
            address: word as u64,
            tag: Tag::from_bits(high),
            version: high >> TAG_BITS,
        }
    }
}

/// One versioned cell, read and swapped as a single 128-bit word.
#[repr(transparent)]
#[derive(Debug)]
pub struct AtomicSlot(AtomicU128);

impl AtomicSlot {
    /// Create a new `AtomicSlot` holding `slot`.
    #[must_use]
    pub fn new(slot: Slot) -> Self {
        Self(AtomicU128::new(slot.pack()))
    }

    /// Whether the 128-bit compare-and-swap is native on this platform.
    #[must_use]
    pub fn is_lock_free() -> bool {
        AtomicU128::is_lock_free()
    }

    /// Read occupant and version together.
    #[must_use]
    pub fn load(&self) -> Slot {
        Slot::unpack(self.0.load(Ordering::Acquire))
    }

    /// Replace `current` by `new` if, and only if, neither the occupant nor
    /// the version changed since `current` was read.
    pub fn compare_exchange(&self, current: Slot, new: Slot) -> bool {
        self.0
            .compare_exchange(current.pack(), new.pack(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Overwrite the slot. Exclusive access makes a plain store safe.
    pub fn reset(&mut self, slot: Slot) {
        *self.0.get_mut() = slot.pack();
    }
}
