// Path: crates/algorand-lc-crypto/src/hash.rs
//! Domain-separated SHA-256 hashing for transaction leaves and light block
//! header leaves.

use algorand_lc_types::{Digest, LightBlockHeader};
use sha2::{Digest as _, Sha256};

/// Two-byte ASCII domain separator for a transaction's vector-commitment
/// leaf. Protocol constant; changing it silently breaks compatibility.
pub const TXN_MERKLE_LEAF_TAG: &[u8; 2] = b"TL";

/// Two-byte ASCII domain separator for a Merkle-array internal node.
/// Protocol constant; changing it silently breaks compatibility.
pub const MERKLE_ARRAY_NODE_TAG: &[u8; 2] = b"MA";

/// Computes the vector-commitment leaf for a transaction:
/// `SHA256("TL" || txHash || stibHash)`.
pub fn transaction_leaf(tx_hash: &Digest, stib_hash: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(TXN_MERKLE_LEAF_TAG);
    hasher.update(tx_hash.as_ref());
    hasher.update(stib_hash.as_ref());
    Digest::new(hasher.finalize().into())
}

/// Computes the vector-commitment leaf for a light block header:
/// `SHA256(canonicalEncode(header))`.
pub fn light_block_header_leaf(header: &LightBlockHeader) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(header.to_be_hashed());
    Digest::new(hasher.finalize().into())
}

/// Computes one Merkle-array internal node:
/// `SHA256("MA" || left || right)`.
pub fn internal_node(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(MERKLE_ARRAY_NODE_TAG);
    hasher.update(left.as_ref());
    hasher.update(right.as_ref());
    Digest::new(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorand_lc_types::Seed;

    #[test]
    fn transaction_leaf_matches_manual_preimage() {
        let tx_hash = Digest::new([0u8; 32]);
        let stib_hash = Digest::new([0u8; 32]);
        let leaf = transaction_leaf(&tx_hash, &stib_hash);

        let mut preimage = Vec::new();
        preimage.extend_from_slice(b"TL");
        preimage.extend_from_slice(&[0u8; 32]);
        preimage.extend_from_slice(&[0u8; 32]);
        let mut hasher = Sha256::new();
        hasher.update(&preimage);
        let expected = Digest::new(hasher.finalize().into());

        assert_eq!(leaf.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn internal_node_is_order_sensitive() {
        let left = Digest::new([1u8; 32]);
        let right = Digest::new([2u8; 32]);
        assert_ne!(
            internal_node(&left, &right).as_bytes(),
            internal_node(&right, &left).as_bytes()
        );
    }

    #[test]
    fn light_block_header_leaf_is_deterministic() {
        let header = LightBlockHeader {
            seed: Seed([9u8; 32]),
            round_number: 100,
            genesis_hash: Digest::new([1u8; 32]),
            sha256_txn_commitment: Digest::new([2u8; 32]),
        };
        assert_eq!(
            light_block_header_leaf(&header).as_bytes(),
            light_block_header_leaf(&header).as_bytes()
        );
    }
}
