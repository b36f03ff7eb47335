//! # Algorand Light-Client Types
//!
//! Fixed-width data structures shared by the light-client core: digests,
//! rounds, seeds, the state-proof message record, and the transaction /
//! light-block-header inclusion proofs consumed from an Algorand node's
//! JSON responses.
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

/// Fixed- and variable-width digest types, and the narrowing conversion
/// between them.
pub mod digest;
/// Error types and the `ErrorCode` trait shared across the workspace.
pub mod error;
/// Wire-level records: `StateProofMessage`, `TransactionProof`,
/// `LightBlockHeaderProof`, `LightBlockHeader`.
pub mod message;

pub use digest::{Digest, GenericDigest, Seed};
pub use error::{ClimbError, ErrorCode, LightClientError};
pub use message::{LightBlockHeader, LightBlockHeaderProof, StateProofMessage, TransactionProof};

/// An Algorand round number.
pub type Round = u64;

/// Natural log of the proven weight, 16-bit fixed-point, as carried in a
/// `StateProofMessage`.
pub type LnProvenWeight = u64;

/// Protocol parameter bounding state-proof soundness (see spec.md §3).
pub const STRENGTH_TARGET: u64 = 256;
