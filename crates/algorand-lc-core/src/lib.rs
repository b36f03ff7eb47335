// Path: crates/algorand-lc-core/src/lib.rs

//! # Algorand Light-Client Core Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in
//! non-test code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # Algorand Light-Client Core
//!
//! The three components described in spec.md §2:
//!
//! - [`commitment_history::CommitmentHistory`]: a fixed-capacity sliding
//!   window of block-interval commitments, keyed by protocol interval.
//! - [`oracle::Oracle`]: the stateful verifier of the incoming state-proof
//!   stream, owning a `CommitmentHistory`.
//! - [`transaction_verifier::verify_transaction`]: a pure function that
//!   checks a transaction's inclusion in a round covered by the verified
//!   window.
//!
//! Everything here is synchronous and CPU-bound (spec.md §5): no spawned
//! tasks, no timers, no I/O.

/// The sliding window of block-interval commitments (spec.md §4.1).
pub mod commitment_history;
/// The stateful state-proof stream verifier (spec.md §4.3).
pub mod oracle;
/// Transaction inclusion verification (spec.md §4.2).
pub mod transaction_verifier;

pub use commitment_history::CommitmentHistory;
pub use oracle::Oracle;
pub use transaction_verifier::verify_transaction;
