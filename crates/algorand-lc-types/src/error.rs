// Path: crates/algorand-lc-types/src/error.rs
//! Error types for the Algorand light-client core.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an
/// error variant, independent of its human-readable `Display` text.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while reconstructing a Merkle-array root from a leaf,
/// an index, and a sibling-hash proof (`climb`, spec.md §4.2).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClimbError {
    /// `len(proof) != depth * 32`.
    #[error("proof length ({proof_len} bytes) does not match tree depth {depth} (expected {expected} bytes)")]
    ProofLengthTreeDepthMismatch {
        /// Length of the supplied proof buffer, in bytes.
        proof_len: usize,
        /// Claimed tree depth.
        depth: u64,
        /// `depth * 32`, the length the proof buffer should have had.
        expected: u64,
    },
    /// `depth == 0` but the proof buffer is non-empty.
    #[error("tree depth is 0 but the proof buffer is non-empty")]
    InvalidTreeDepth,
    /// `index >= 2^depth`.
    #[error("leaf index {index} is not smaller than 2^{depth}")]
    IndexDepthMismatch {
        /// The out-of-range leaf index.
        index: u64,
        /// The tree depth the index was checked against.
        depth: u64,
    },
    /// A computed node position was outside `{0, 1}` (defensive; should be
    /// unreachable given the bit-expansion in `getPositions`).
    #[error("internal error: node position outside {{0,1}}")]
    InvalidPosition,
}

impl ErrorCode for ClimbError {
    fn code(&self) -> &'static str {
        match self {
            Self::ProofLengthTreeDepthMismatch { .. } => "CLIMB_PROOF_LENGTH_MISMATCH",
            Self::InvalidTreeDepth => "CLIMB_INVALID_TREE_DEPTH",
            Self::IndexDepthMismatch { .. } => "CLIMB_INDEX_DEPTH_MISMATCH",
            Self::InvalidPosition => "CLIMB_INVALID_POSITION",
        }
    }
}

/// Errors raised by `Oracle` and `verify_transaction`, the two
/// operation-level entry points of the light-client core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightClientError {
    /// `txProof.hashtype != "sha256"`.
    #[error("unsupported transaction proof hash function: {0}")]
    UnsupportedHashFunction(String),
    /// Propagated from `climb` while reconstructing either the transaction
    /// root or the header root.
    #[error("Merkle-array path reconstruction failed: {0}")]
    Climb(#[from] ClimbError),
    /// The recomputed header root did not match the trusted commitment.
    #[error("recomputed header root does not match the expected block-interval commitment")]
    RootMismatch,
    /// `round < firstAttestedRound`.
    #[error("round {round} is earlier than the first attested round {first_attested_round}")]
    TooEarlyRound {
        /// The round that was requested.
        round: u64,
        /// The first round the history was constructed with.
        first_attested_round: u64,
    },
    /// The round's covering interval falls outside `[earliestInterval, nextInterval)`.
    #[error(
        "no state proof commitment covers round {round} (covering interval outside the retained window)"
    )]
    NoStateProofForRound {
        /// The round that was requested.
        round: u64,
    },
    /// Opaque failure surfaced by the external `StateProofVerifier`.
    #[error("state proof verification failed: {0}")]
    StateProofVerification(String),
    /// A `CommitmentHistory`/`Oracle` was constructed with a parameter that
    /// can never produce a usable window (`interval_size == 0` or
    /// `capacity == 0`).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An incoming `StateProofMessage` failed invariant I4: its attested
    /// round span does not equal the configured interval size, or its
    /// `FirstAttestedRound` is 0.
    #[error("malformed state proof message: {0}")]
    MalformedMessage(String),
}

impl ErrorCode for LightClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedHashFunction(_) => "LC_UNSUPPORTED_HASH_FUNCTION",
            Self::Climb(inner) => inner.code(),
            Self::RootMismatch => "LC_ROOT_MISMATCH",
            Self::TooEarlyRound { .. } => "LC_TOO_EARLY_ROUND",
            Self::NoStateProofForRound { .. } => "LC_NO_STATE_PROOF_FOR_ROUND",
            Self::StateProofVerification(_) => "LC_STATE_PROOF_VERIFICATION_FAILED",
            Self::InvalidConfiguration(_) => "LC_INVALID_CONFIGURATION",
            Self::MalformedMessage(_) => "LC_MALFORMED_MESSAGE",
        }
    }
}
