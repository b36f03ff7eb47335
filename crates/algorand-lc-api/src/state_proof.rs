// Path: crates/algorand-lc-api/src/state_proof.rs
//! The opaque external state-proof cryptographic verifier contract
//! (spec.md §4.4).

use algorand_lc_types::{LightClientError, StateProofMessage};

/// Verifies that an aggregate state-proof signature attests to a given
/// `StateProofMessage`, under a voters commitment and proven weight fixed
/// at construction time.
///
/// This is deliberately synchronous and `Send`-but-not-required-`Sync`:
/// spec.md §5 requires the light-client core to be single-threaded and
/// CPU-bound with no suspension points, so the seam to the (out-of-scope)
/// signature-aggregation subsystem is a plain function call, not an
/// async trait — unlike the teacher's `LightClient` trait, which talks to
/// a consensus engine that may itself perform I/O.
///
/// Every failure mode (invalid signature, insufficient weight, malformed
/// proof, failed coin check, or any other classification the external
/// verifier raises) is folded into
/// `LightClientError::StateProofVerification` by the caller: the core
/// treats them all as opaque and non-recoverable, per spec.md §4.4.
pub trait StateProofVerifier {
    /// Checks that `encoded_proof` is a valid aggregate signature over
    /// `message`, against this verifier's fixed voters commitment,
    /// proven weight, and strength target.
    fn verify(
        &self,
        encoded_proof: &[u8],
        message: &StateProofMessage,
    ) -> Result<(), LightClientError>;
}
