// Path: crates/algorand-lc-core/src/commitment_history.rs
//! A fixed-capacity, ordered window of block-interval commitments.
//!
//! Grounded on `examples/original_source/oracle/commitmentHistory.go`,
//! the "most recent" of the source's several drifting copies (spec.md
//! §9): it carries `FirstAttestedRound`, which the older copies (e.g.
//! `utilities/commitmentHistory.go`) omit entirely.
//!
//! The source additionally applies a `round % intervalSize == 0 =>
//! coveringInterval -= 1` adjustment on top of the offset division. That
//! adjustment checks the *absolute* round against `intervalSize` while
//! `coveringInterval` itself is computed from the round's *offset* from
//! `FirstAttestedRound` — two different bases that only coincide when
//! `FirstAttestedRound` is itself interval-aligned, and even then only
//! for the earliest interval (the subtraction underflows there and is
//! masked by saturation). For any later interval it silently returns
//! the commitment one interval too early. See DESIGN.md for the worked
//! counterexample; this implementation omits the adjustment; floor
//! division of the round's offset by `intervalSize` already yields the
//! exact covering interval with no separate boundary case.

use std::collections::BTreeMap;

use algorand_lc_api::CommitmentStore;
use algorand_lc_types::{Digest, LightClientError, Round};

/// Sliding window mapping contiguous interval indices to block-interval
/// commitment digests.
///
/// Backed by a `BTreeMap` rather than the source's unordered Go map, so
/// the contiguous-range invariant (I1) and eviction boundary are easy to
/// state and to check in tests.
#[derive(Debug, Clone)]
pub struct CommitmentHistory {
    first_attested_round: Round,
    interval_size: u64,
    capacity: u64,
    earliest_interval: u64,
    next_interval: u64,
    data: BTreeMap<u64, Digest>,
}

impl CommitmentHistory {
    /// Builds an empty commitment history.
    ///
    /// `interval_size` must be non-zero and `capacity` must be non-zero;
    /// either violation returns
    /// [`LightClientError::InvalidConfiguration`] rather than producing a
    /// window that can never hold a commitment.
    pub fn new(
        first_attested_round: Round,
        interval_size: u64,
        capacity: u64,
    ) -> Result<Self, LightClientError> {
        if interval_size == 0 {
            return Err(LightClientError::InvalidConfiguration(
                "interval_size must be greater than 0".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(LightClientError::InvalidConfiguration(
                "capacity must be greater than 0".to_string(),
            ));
        }
        if first_attested_round == 0 {
            return Err(LightClientError::InvalidConfiguration(
                "first_attested_round must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            first_attested_round,
            interval_size,
            capacity,
            earliest_interval: 0,
            next_interval: 0,
            data: BTreeMap::new(),
        })
    }

    /// The first round this history was constructed to cover.
    pub fn first_attested_round(&self) -> Round {
        self.first_attested_round
    }

    /// The configured interval size.
    pub fn interval_size(&self) -> u64 {
        self.interval_size
    }

    /// The earliest interval currently retained.
    pub fn earliest_interval(&self) -> u64 {
        self.earliest_interval
    }

    /// The interval the next inserted commitment will occupy.
    pub fn next_interval(&self) -> u64 {
        self.next_interval
    }

    /// Number of commitments currently retained.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the history currently holds no commitments.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl CommitmentStore for CommitmentHistory {
    fn insert_commitment(&mut self, commitment: Digest) {
        self.data.insert(self.next_interval, commitment);
        self.next_interval += 1;

        if self.data.len() as u64 > self.capacity {
            self.data.remove(&self.earliest_interval);
            self.earliest_interval += 1;
        }
    }

    fn get_commitment(&self, round: Round) -> Result<Digest, LightClientError> {
        if round < self.first_attested_round {
            return Err(LightClientError::TooEarlyRound {
                round,
                first_attested_round: self.first_attested_round,
            });
        }

        // Intervals are contiguous, equal-sized, 0-indexed partitions of
        // the rounds starting at first_attested_round, so the covering
        // interval is exactly the floor of the round's offset divided by
        // interval_size — including for a round that sits exactly on an
        // interval boundary, which is already the first round of the
        // *next* interval under this indexing, not the last round of the
        // prior one.
        let offset = round - self.first_attested_round;
        let covering_interval = offset / self.interval_size;

        if covering_interval < self.earliest_interval || covering_interval >= self.next_interval {
            return Err(LightClientError::NoStateProofForRound { round });
        }

        self.data
            .get(&covering_interval)
            .copied()
            .ok_or(LightClientError::NoStateProofForRound { round })
    }
}
