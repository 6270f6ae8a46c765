#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    anonymous_parameters,
    bare_trait_objects,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_numeric_casts,
    unreachable_pub,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
)]
//! A fixed-capacity lock-free double-ended queue of borrowed elements.
//!
//! # Examples
//!
//! ```
//! use oracle_deque::{DequeError, OracleDeque};
//!
//! oracle_deque::init_log();
//! let jobs = ["build", "test", "ship"];
//! let deque = OracleDeque::new(jobs.len()).expect("create deque failed");
//! std::thread::scope(|s| {
//!     _ = s.spawn(|| deque.left_push(&jobs[0]));
//!     _ = s.spawn(|| deque.right_push(&jobs[1]));
//! });
//! deque.right_push(&jobs[2]).expect("push failed");
//! assert_eq!(Ok(&"ship"), deque.right_pop());
//! assert_eq!(2, deque.len());
//! _ = deque.left_pop().expect("pop failed");
//! _ = deque.left_pop().expect("pop failed");
//! assert_eq!(Err(DequeError::Empty), deque.left_pop());
//! ```

pub use oracle_deque_core::common::constants::{End, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use oracle_deque_core::common::init_log;
pub use oracle_deque_core::config::Config;
pub use oracle_deque_core::deque::{OracleDeque, SlotState};
pub use oracle_deque_core::error::DequeError;
