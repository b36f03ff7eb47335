// Path: crates/algorand-lc-types/src/message.rs
//! Wire-level records consumed by the light-client core.

use serde::{Deserialize, Deserializer, Serialize};

use crate::digest::{Digest, GenericDigest, Seed};
use crate::{LnProvenWeight, Round};

/// The attested payload a state proof proves. Grounded on
/// `transactionverificationtypes.Message` in
/// `examples/original_source/oracle/oracle.go`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProofMessage {
    /// Vector-commitment root over the interval's light block headers.
    pub block_headers_commitment: GenericDigest,
    /// The voters commitment the *next* state proof will be verified
    /// against.
    pub voters_commitment: GenericDigest,
    /// Natural log of the proven weight, 16-bit fixed point.
    pub ln_proven_weight: LnProvenWeight,
    /// First round this message attests to.
    pub first_attested_round: Round,
    /// Last round this message attests to.
    pub last_attested_round: Round,
}

impl StateProofMessage {
    /// Number of rounds this message attests to (`last - first + 1`).
    ///
    /// Returns `None` if `last_attested_round < first_attested_round`,
    /// which is never a valid span: callers checking invariant I4 must
    /// treat that case as a malformed message rather than let arithmetic
    /// produce a value that could spuriously equal the configured
    /// interval size (as a saturating computation would for
    /// `interval_size == 1`).
    pub fn attested_round_span(&self) -> Option<u64> {
        if self.last_attested_round < self.first_attested_round {
            return None;
        }
        self.last_attested_round
            .checked_sub(self.first_attested_round)
            .and_then(|diff| diff.checked_add(1))
    }
}

/// A compact light block header, as committed to by the block-headers
/// vector commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightBlockHeader {
    /// The block's sortition seed.
    pub seed: Seed,
    /// The block's round number.
    pub round_number: Round,
    /// The hash of the genesis block.
    pub genesis_hash: Digest,
    /// SHA-256 vector-commitment root over the block's transactions.
    pub sha256_txn_commitment: Digest,
}

impl LightBlockHeader {
    /// Canonical byte encoding hashed to produce this header's leaf
    /// (`ToBeHashed` in the source).
    ///
    /// Encoded as a canonical MessagePack fixmap with string keys in
    /// ascending lexicographic order, matching the protocol's
    /// canonical-msgpack convention (sorted keys, compact integers). The
    /// exact upstream field tags are not available in this context (see
    /// DESIGN.md); what matters for the invariants this crate enforces is
    /// that the encoding is deterministic and injective over the four
    /// fields, which this hand-rolled encoder guarantees without pulling
    /// in a generic derive whose field order could silently drift.
    pub fn to_be_hashed(&self) -> Vec<u8> {
        // fixmap with 4 entries: 0x84, then (key, value) pairs sorted by key.
        let mut out = Vec::with_capacity(4 + 4 * (8 + 34));
        out.push(0x84);
        write_str(&mut out, "gh");
        write_bin32(&mut out, self.genesis_hash.as_bytes());
        write_str(&mut out, "rnd");
        write_uint(&mut out, self.round_number);
        write_str(&mut out, "seed");
        write_bin32(&mut out, self.seed.as_bytes());
        write_str(&mut out, "tc");
        write_bin32(&mut out, self.sha256_txn_commitment.as_bytes());
        out
    }
}

fn write_str(out: &mut Vec<u8>, s: &str) {
    // fixstr: 0xa0 | len, len <= 31 here for all our keys.
    out.push(0xa0 | (s.len() as u8));
    out.extend_from_slice(s.as_bytes());
}

fn write_bin32(out: &mut Vec<u8>, bytes: &[u8; 32]) {
    out.push(0xc4); // bin 8
    out.push(32);
    out.extend_from_slice(bytes);
}

fn write_uint(out: &mut Vec<u8>, value: u64) {
    out.push(0xcf); // uint 64
    out.extend_from_slice(&value.to_be_bytes());
}

/// A transaction's inclusion proof into the transactions vector
/// commitment (`GetTransactionProof` response shape).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionProof {
    /// Hash function the proof was built with; only `"sha256"` is
    /// accepted.
    #[serde(rename = "hashtype")]
    pub hash_type: String,
    /// The transaction's leaf index in the vector commitment.
    pub idx: u64,
    /// Flat concatenation of sibling hashes, leaf-to-root.
    #[serde(deserialize_with = "deserialize_base64", serialize_with = "serialize_base64")]
    pub proof: Vec<u8>,
    /// Depth of the vector commitment tree.
    pub treedepth: u64,
    /// SHA-256 of the transaction as encoded in the block ("stib" hash).
    #[serde(
        rename = "stibhash",
        deserialize_with = "deserialize_digest_base64",
        serialize_with = "serialize_digest_base64"
    )]
    pub stib_hash: Digest,
}

/// A light block header's inclusion proof into the block-headers vector
/// commitment (`GetLightBlockHeaderProof` response shape).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LightBlockHeaderProof {
    /// The header's leaf index in the vector commitment.
    pub index: u64,
    /// Flat concatenation of sibling hashes, leaf-to-root.
    #[serde(deserialize_with = "deserialize_base64", serialize_with = "serialize_base64")]
    pub proof: Vec<u8>,
    /// Depth of the vector commitment tree.
    pub treedepth: u64,
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    use base64::Engine;
    let s = String::deserialize(deserializer)?;
    base64::engine::general_purpose::STANDARD
        .decode(s)
        .map_err(serde::de::Error::custom)
}

fn serialize_base64<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use base64::Engine;
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
}

fn deserialize_digest_base64<'de, D>(deserializer: D) -> Result<Digest, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = deserialize_base64(deserializer)?;
    let array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| serde::de::Error::custom("stibhash must decode to exactly 32 bytes"))?;
    Ok(Digest::new(array))
}

fn serialize_digest_base64<S>(digest: &Digest, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serialize_base64(digest.as_bytes(), serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_proof_json_round_trip() {
        let json = r#"{
            "hashtype": "sha256",
            "idx": 5,
            "proof": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
            "treedepth": 3,
            "stibhash": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="
        }"#;
        let proof: TransactionProof = serde_json::from_str(json).expect("deserialize");
        assert_eq!(proof.hash_type, "sha256");
        assert_eq!(proof.idx, 5);
        assert_eq!(proof.treedepth, 3);
        assert_eq!(proof.proof.len(), 32);
    }

    #[test]
    fn light_block_header_to_be_hashed_is_deterministic() {
        let header = LightBlockHeader {
            seed: Seed([1u8; 32]),
            round_number: 42,
            genesis_hash: Digest::new([2u8; 32]),
            sha256_txn_commitment: Digest::new([3u8; 32]),
        };
        let a = header.to_be_hashed();
        let b = header.to_be_hashed();
        assert_eq!(a, b);
        assert_eq!(a[0], 0x84);
    }

    #[test]
    fn attested_round_span_matches_interval_size() {
        let msg = StateProofMessage {
            block_headers_commitment: GenericDigest::new(vec![0u8; 32]),
            voters_commitment: GenericDigest::new(vec![0u8; 32]),
            ln_proven_weight: 0,
            first_attested_round: 9,
            last_attested_round: 16,
        };
        assert_eq!(msg.attested_round_span(), Some(8));
    }

    #[test]
    fn attested_round_span_rejects_last_before_first() {
        let msg = StateProofMessage {
            block_headers_commitment: GenericDigest::new(vec![0u8; 32]),
            voters_commitment: GenericDigest::new(vec![0u8; 32]),
            ln_proven_weight: 0,
            first_attested_round: 9,
            last_attested_round: 1,
        };
        assert_eq!(msg.attested_round_span(), None);
    }
}
