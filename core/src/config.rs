use crate::common::constants::DEFAULT_CAPACITY;

/// Construction and retry settings of an `OracleDeque`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Config {
    capacity: usize,
    max_retries: Option<usize>,
    backoff: bool,
}

impl Config {
    /// Create a new `Config` with unbounded retry and no backoff.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_retries: None,
            backoff: false,
        }
    }

    /// The number of elements the deque can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many failed attempts an operation tolerates before reporting
    /// `Contended`. `None` retries forever.
    #[must_use]
    pub fn max_retries(&self) -> Option<usize> {
        self.max_retries
    }

    /// Whether failed attempts spin with exponential backoff.
    #[must_use]
    pub fn backoff(&self) -> bool {
        self.backoff
    }

    /// Set the element capacity.
    pub fn set_capacity(&mut self, capacity: usize) -> &mut Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        self.capacity = capacity;
        self
    }

    /// Set the retry budget, `None` for unbounded.
    pub fn set_max_retries(&mut self, max_retries: Option<usize>) -> &mut Self {
        self.max_retries = max_retries;
        self
    }

    /// Enable or disable backoff between failed attempts.
    pub fn set_backoff(&mut self, backoff: bool) -> &mut Self {
        self.backoff = backoff;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
