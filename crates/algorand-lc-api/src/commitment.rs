// Path: crates/algorand-lc-api/src/commitment.rs
//! The backing-store contract for a sliding window of block-interval
//! commitments.

use algorand_lc_types::{Digest, LightClientError, Round};

/// A fixed-capacity, ordered window mapping contiguous interval indices to
/// block-interval commitment digests.
///
/// `CommitmentHistory` (in `algorand-lc-core`) is the shipped
/// implementation; the trait exists so `Oracle` can be exercised in
/// tests against alternative backing stores (grounded on the teacher's
/// `StateTree` trait, which separates the key-value contract from any
/// one tree implementation).
pub trait CommitmentStore {
    /// Appends `commitment` at the next interval index, evicting the
    /// earliest entry if the window now exceeds capacity.
    fn insert_commitment(&mut self, commitment: Digest);

    /// Returns the commitment covering `round`, or an error identifying
    /// why no commitment is available (too early, or already evicted /
    /// not yet proven).
    fn get_commitment(&self, round: Round) -> Result<Digest, LightClientError>;
}
