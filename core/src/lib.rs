#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    redundant_lifetimes,
    anonymous_parameters,
    bare_trait_objects,
    // elided_lifetimes_in_paths, // allow anonymous lifetime
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    // single_use_lifetimes, // TODO: fix lifetime names only used once
    // trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    // unsafe_code,
    unstable_features,
    // unused_crate_dependencies,
    unused_lifetimes,
    unused_macro_rules,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    variant_size_differences,

    clippy::all,
    // clippy::restriction,
    clippy::pedantic,
    // clippy::nursery, // It's still under development
    clippy::cargo,
)]
#![allow(
    // Some explicitly allowed Clippy lints, must have clear reason to allow
    clippy::blanket_clippy_restriction_lints, // allow clippy::restriction
    clippy::implicit_return, // actually omitting the return keyword is idiomatic Rust code
    clippy::module_name_repetitions, // repeation of module name in a struct name is not big deal
    clippy::multiple_crate_versions, // multi-version dependency crates is not able to fix
    clippy::missing_panics_doc, // only config setters assert
    clippy::shadow_same, // Not too much bad
    clippy::shadow_reuse, // Not too much bad
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::indexing_slicing,
    clippy::separated_literal_suffix, // conflicts with clippy::unseparated_literal_suffix
)]
//! A fixed-capacity lock-free double-ended queue.
//!
//! Every cell of the backing array is a versioned slot that is read and
//! swapped as one 128-bit word. Two best-effort hints point near the left and
//! right frontiers, and an oracle turns a possibly stale hint into a
//! candidate frontier index. Push and pop at either end are optimistic
//! retry loops: ask the oracle, re-validate both slots, then commit the
//! transition with two compare-and-swaps.
//!
//! The deque holds `&'d T` references. It never owns nor drops the elements.
//!
//! # Examples
//!
//! ```
//! use oracle_deque_core::deque::OracleDeque;
//! use oracle_deque_core::error::DequeError;
//!
//! let (a, b) = (1, 2);
//! let deque = OracleDeque::new(2).expect("create deque failed");
//! deque.left_push(&a).expect("push failed");
//! deque.right_push(&b).expect("push failed");
//! assert_eq!(deque.left_push(&a), Err(DequeError::Full));
//! assert_eq!(deque.right_pop(), Ok(&b));
//! assert_eq!(deque.right_pop(), Ok(&a));
//! assert_eq!(deque.left_pop(), Err(DequeError::Empty));
//! ```

/// Common traits and impl.
pub mod common;

/// Configuration for `OracleDeque`.
pub mod config;

/// Status and construction errors.
pub mod error;

/// Versioned slot representation.
pub mod slot;

/// Frontier locator.
pub mod oracle;

/// The deque itself.
pub mod deque;
