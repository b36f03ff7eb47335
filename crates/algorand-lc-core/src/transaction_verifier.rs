// Path: crates/algorand-lc-core/src/transaction_verifier.rs
//! Stateless verification that a transaction was confirmed in a specific
//! round, given two inclusion proofs and a trusted block-interval
//! commitment (spec.md §4.2).
//!
//! Grounded on
//! `examples/original_source/transactionverifier/transactionVerifier.go`,
//! the newest of the source's several copies (spec.md §9).

use algorand_lc_crypto::{climb, hash::light_block_header_leaf, transaction_leaf};
use algorand_lc_types::{
    Digest, LightBlockHeader, LightBlockHeaderProof, LightClientError, Round, Seed,
    TransactionProof,
};

const SUPPORTED_HASH_TYPE: &str = "sha256";

/// Verifies that `tx_hash` was confirmed in `round`, using:
/// - `tx_proof`: the transaction's inclusion proof into the transactions
///   vector commitment for its block.
/// - `hdr_proof`: the block's light-header inclusion proof into the
///   block-interval's vector commitment.
/// - `expected_commitment`: the trusted block-interval commitment for
///   `round`, as returned by [`crate::Oracle::get_commitment`].
///
/// Succeeds iff the recomputed header root equals `expected_commitment`.
pub fn verify_transaction(
    tx_hash: Digest,
    tx_proof: &TransactionProof,
    hdr_proof: &LightBlockHeaderProof,
    round: Round,
    genesis_hash: Digest,
    seed: Seed,
    expected_commitment: Digest,
) -> Result<(), LightClientError> {
    if tx_proof.hash_type != SUPPORTED_HASH_TYPE {
        return Err(LightClientError::UnsupportedHashFunction(
            tx_proof.hash_type.clone(),
        ));
    }

    let tx_leaf = transaction_leaf(&tx_hash, &tx_proof.stib_hash);
    let tx_root = climb(tx_leaf, tx_proof.idx, &tx_proof.proof, tx_proof.treedepth)?;

    let candidate_header = LightBlockHeader {
        round_number: round,
        genesis_hash,
        sha256_txn_commitment: tx_root,
        seed,
    };
    let hdr_leaf = light_block_header_leaf(&candidate_header);
    let hdr_root = climb(
        hdr_leaf,
        hdr_proof.index,
        &hdr_proof.proof,
        hdr_proof.treedepth,
    )?;

    if hdr_root.as_bytes() != expected_commitment.as_bytes() {
        return Err(LightClientError::RootMismatch);
    }
    Ok(())
}
