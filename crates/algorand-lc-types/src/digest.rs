//! Path: crates/algorand-lc-types/src/digest.rs
//!
//! Fixed-width and variable-width digest types.
//!
//! The source mixes a fixed 32-byte `types.Digest` with a variable-length
//! `GenericDigest`, and narrows the latter into the former with a lossy
//! `copy(dst[:], src[:])` wherever a commitment crosses from the
//! state-proof message layer into the Merkle-array layer. We keep both
//! types distinct and make the narrowing conversion explicit and fallible
//! instead of silently truncating or zero-padding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::LightClientError;

/// A fixed 32-byte SHA-256 digest.
///
/// Used for every interior Merkle-array node, every transaction/header
/// leaf, and every entry stored in `CommitmentHistory`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// The all-zero digest, used as a placeholder and in tests.
    pub const ZERO: Digest = Digest([0u8; 32]);

    /// Builds a digest from a 32-byte array.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Borrows the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex_encode(&self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex_encode(&self.0))
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex_encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex_decode(&s).map_err(serde::de::Error::custom)?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("digest must be exactly 32 bytes"))?;
        Ok(Digest(array))
    }
}

/// A protocol-level digest of unspecified width, as carried by the voters
/// commitment and block-headers commitment fields of a `StateProofMessage`
/// before it is narrowed into a fixed-width `Digest`.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GenericDigest(pub Vec<u8>);

impl GenericDigest {
    /// Wraps raw bytes as a `GenericDigest`.
    pub fn new(bytes: Vec<u8>) -> Self {
        GenericDigest(bytes)
    }

    /// Narrows this digest into a fixed-width `Digest`.
    ///
    /// Mirrors the source's `copy(commitmentDigest[:], message.BlockHeadersCommitment)`
    /// (`examples/original_source/oracle/oracle.go`): bytes beyond the
    /// first 32 are dropped. Unlike the source, a digest shorter than 32
    /// bytes is rejected rather than silently zero-padded.
    pub fn to_digest(&self) -> Result<Digest, LightClientError> {
        if self.0.len() < 32 {
            return Err(LightClientError::MalformedMessage(format!(
                "commitment digest too short: {} bytes, need at least 32",
                self.0.len()
            )));
        }
        let prefix = self
            .0
            .get(..32)
            .ok_or_else(|| LightClientError::MalformedMessage("commitment digest too short".to_string()))?;
        let mut array = [0u8; 32];
        array.copy_from_slice(prefix);
        Ok(Digest(array))
    }
}

impl AsRef<[u8]> for GenericDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for GenericDigest {
    fn from(d: Digest) -> Self {
        GenericDigest(d.0.to_vec())
    }
}

impl fmt::Debug for GenericDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericDigest({})", hex_encode(&self.0))
    }
}

/// The block sortition seed attached to a light block header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub [u8; 32]);

impl Seed {
    /// Borrows the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", hex_encode(&self.0))
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn hex_decode(s: &str) -> Result<Vec<u8>, String> {
    if s.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(s.get(i..i + 2).ok_or("invalid hex slice")?, 16)
                .map_err(|e| e.to_string())
        })
        .collect()
}
