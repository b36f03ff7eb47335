// Path: crates/algorand-lc-core/src/oracle.rs
//! The stateful verifier of the incoming state-proof stream.
//!
//! Grounded on `examples/original_source/oracle/oracle.go`, the newest of
//! the source's several drifting copies (spec.md §9).

use log::{debug, info, warn};

use algorand_lc_api::{CommitmentStore, StateProofVerifier};
use algorand_lc_types::{GenericDigest, LightClientError, Round, StateProofMessage};

use crate::commitment_history::CommitmentHistory;

/// Owns the verified window of block-interval commitments and the rolling
/// voters commitment / proven weight a state proof is checked against.
///
/// Generic over the backing store so tests can substitute a bare
/// `CommitmentStore` double; `algorand-lc-core` ships `CommitmentHistory`
/// as the default.
#[derive(Debug, Clone)]
pub struct Oracle<S: CommitmentStore = CommitmentHistory> {
    history: S,
    interval_size: u64,
    voters_commitment: GenericDigest,
    ln_proven_weight: u64,
}

impl Oracle<CommitmentHistory> {
    /// Builds an oracle backed by a fresh [`CommitmentHistory`], trusting
    /// `initial_voters_commitment` and `initial_ln_proven_weight` as the
    /// genesis values the first state proof is verified against.
    pub fn new(
        first_attested_round: Round,
        interval_size: u64,
        capacity: u64,
        initial_voters_commitment: GenericDigest,
        initial_ln_proven_weight: u64,
    ) -> Result<Self, LightClientError> {
        let history = CommitmentHistory::new(first_attested_round, interval_size, capacity)?;
        info!(
            "constructed oracle: first_attested_round={first_attested_round} interval_size={interval_size} capacity={capacity}"
        );
        Ok(Self {
            history,
            interval_size,
            voters_commitment: initial_voters_commitment,
            ln_proven_weight: initial_ln_proven_weight,
        })
    }
}

impl<S: CommitmentStore> Oracle<S> {
    /// Builds an oracle around an arbitrary backing store, for testing
    /// against doubles other than `CommitmentHistory`.
    pub fn with_store(
        history: S,
        interval_size: u64,
        initial_voters_commitment: GenericDigest,
        initial_ln_proven_weight: u64,
    ) -> Result<Self, LightClientError> {
        if interval_size == 0 {
            return Err(LightClientError::InvalidConfiguration(
                "interval_size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            history,
            interval_size,
            voters_commitment: initial_voters_commitment,
            ln_proven_weight: initial_ln_proven_weight,
        })
    }

    /// The rolling voters commitment the next state proof must verify
    /// against.
    pub fn voters_commitment(&self) -> &GenericDigest {
        &self.voters_commitment
    }

    /// The rolling proven weight (natural-log, 16-bit fixed point) the next
    /// state proof must verify against.
    pub fn ln_proven_weight(&self) -> u64 {
        self.ln_proven_weight
    }

    /// The configured block-interval size.
    pub fn interval_size(&self) -> u64 {
        self.interval_size
    }

    /// Returns the trusted block-interval commitment covering `round`.
    pub fn get_commitment(&self, round: Round) -> Result<algorand_lc_types::Digest, LightClientError> {
        self.history.get_commitment(round)
    }

    /// Verifies `encoded_proof` against `message` using `verifier`, and on
    /// success advances the commitment window by one interval and rolls
    /// forward the voters commitment / proven weight `message` attests to.
    ///
    /// Validates invariant I4 (the message's attested round span must equal
    /// the configured interval size) before invoking `verifier`, so a
    /// malformed message is rejected without paying for a signature check.
    /// Every fallible step — validation, then verification, then the
    /// commitment narrowing — runs before any mutation of `self`, so a
    /// rejected state proof leaves the oracle's state byte-for-byte
    /// unchanged (I3).
    pub fn advance_state<V: StateProofVerifier>(
        &mut self,
        verifier: &V,
        encoded_proof: &[u8],
        message: &StateProofMessage,
    ) -> Result<(), LightClientError> {
        if message.first_attested_round == 0 {
            warn!("rejected state proof message: first_attested_round is 0");
            return Err(LightClientError::MalformedMessage(
                "first_attested_round must be at least 1".to_string(),
            ));
        }

        let span = message.attested_round_span().ok_or_else(|| {
            warn!(
                "rejected state proof message: last_attested_round {} precedes first_attested_round {}",
                message.last_attested_round, message.first_attested_round
            );
            LightClientError::MalformedMessage(format!(
                "last_attested_round ({}) precedes first_attested_round ({})",
                message.last_attested_round, message.first_attested_round
            ))
        })?;
        if span != self.interval_size {
            warn!(
                "rejected state proof message: attested round span {span} does not match configured interval size {}",
                self.interval_size
            );
            return Err(LightClientError::MalformedMessage(format!(
                "attested round span ({span}) does not match configured interval size ({})",
                self.interval_size
            )));
        }

        verifier.verify(encoded_proof, message)?;

        let commitment = message.block_headers_commitment.to_digest()?;

        self.history.insert_commitment(commitment);
        self.voters_commitment = message.voters_commitment.clone();
        self.ln_proven_weight = message.ln_proven_weight;

        debug!(
            "accepted state proof for rounds {}..={}",
            message.first_attested_round, message.last_attested_round
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorand_lc_types::Digest;

    struct AcceptingVerifier;
    impl StateProofVerifier for AcceptingVerifier {
        fn verify(&self, _encoded_proof: &[u8], _message: &StateProofMessage) -> Result<(), LightClientError> {
            Ok(())
        }
    }

    struct RejectingVerifier;
    impl StateProofVerifier for RejectingVerifier {
        fn verify(&self, _encoded_proof: &[u8], _message: &StateProofMessage) -> Result<(), LightClientError> {
            Err(LightClientError::StateProofVerification(
                "signature did not verify".to_string(),
            ))
        }
    }

    fn sample_message(first: Round, last: Round) -> StateProofMessage {
        StateProofMessage {
            block_headers_commitment: GenericDigest::new(vec![0xAB; 32]),
            voters_commitment: GenericDigest::new(vec![0xCD; 32]),
            ln_proven_weight: 100,
            first_attested_round: first,
            last_attested_round: last,
        }
    }

    #[test]
    fn accepts_a_well_formed_message_and_advances_the_window() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        let message = sample_message(1, 8);

        oracle
            .advance_state(&AcceptingVerifier, b"proof-bytes", &message)
            .expect("verification should succeed");

        let commitment = oracle.get_commitment(1).expect("round 1 committed");
        assert_eq!(commitment, Digest::new([0xAB; 32]));
        assert_eq!(oracle.voters_commitment(), &GenericDigest::new(vec![0xCD; 32]));
        assert_eq!(oracle.ln_proven_weight(), 100);
    }

    #[test]
    fn p2_rejects_attested_round_span_mismatching_interval_size() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        let message = sample_message(1, 7); // span of 7, not 8

        let err = oracle
            .advance_state(&AcceptingVerifier, b"proof-bytes", &message)
            .unwrap_err();
        assert!(matches!(err, LightClientError::MalformedMessage(_)));
        assert!(oracle.get_commitment(1).is_err());
    }

    #[test]
    fn p3_rejects_zero_first_attested_round() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        let message = sample_message(0, 7);

        let err = oracle
            .advance_state(&AcceptingVerifier, b"proof-bytes", &message)
            .unwrap_err();
        assert!(matches!(err, LightClientError::MalformedMessage(_)));
    }

    #[test]
    fn rejects_last_attested_round_before_first_even_with_interval_size_one() {
        // interval_size = 1 is exactly the case where a saturating span
        // computation would wrongly accept this message as a span of 1.
        let mut oracle = Oracle::new(1, 1, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        let message = sample_message(9, 1);

        let err = oracle
            .advance_state(&AcceptingVerifier, b"proof-bytes", &message)
            .unwrap_err();
        assert!(matches!(err, LightClientError::MalformedMessage(_)));
        assert!(oracle.get_commitment(9).is_err());
    }

    #[test]
    fn i3_a_rejected_state_proof_leaves_state_untouched() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0xFF; 32]), 7).expect("construct");
        let message = sample_message(1, 8);

        let err = oracle
            .advance_state(&RejectingVerifier, b"proof-bytes", &message)
            .unwrap_err();
        assert!(matches!(err, LightClientError::StateProofVerification(_)));

        // Window, voters commitment, and proven weight are all unchanged.
        assert!(oracle.get_commitment(1).is_err());
        assert_eq!(oracle.voters_commitment(), &GenericDigest::new(vec![0xFF; 32]));
        assert_eq!(oracle.ln_proven_weight(), 7);
    }

    #[test]
    fn rejects_commitment_that_narrows_too_short() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        let mut message = sample_message(1, 8);
        message.block_headers_commitment = GenericDigest::new(vec![0xAB; 10]);

        let err = oracle
            .advance_state(&AcceptingVerifier, b"proof-bytes", &message)
            .unwrap_err();
        assert!(matches!(err, LightClientError::MalformedMessage(_)));
    }

    #[test]
    fn s5_two_successive_intervals_both_become_queryable() {
        let mut oracle = Oracle::new(1, 8, 4, GenericDigest::new(vec![0u8; 32]), 0).expect("construct");
        oracle
            .advance_state(&AcceptingVerifier, b"p1", &sample_message(1, 8))
            .expect("first interval verifies");

        let mut second = sample_message(9, 16);
        second.block_headers_commitment = GenericDigest::new(vec![0xEE; 32]);
        oracle
            .advance_state(&AcceptingVerifier, b"p2", &second)
            .expect("second interval verifies");

        assert_eq!(oracle.get_commitment(8).expect("round 8"), Digest::new([0xAB; 32]));
        assert_eq!(oracle.get_commitment(16).expect("round 16"), Digest::new([0xEE; 32]));
    }
}
