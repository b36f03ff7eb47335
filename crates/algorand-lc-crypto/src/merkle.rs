// Path: crates/algorand-lc-crypto/src/merkle.rs
//! Merkle-array ("vector commitment") path reconstruction.
//!
//! The index-to-position mapping here is MSB-first, *not* LSB-first — the
//! key difference between a vector commitment and an ordinary Merkle
//! tree (spec.md §9). One historical copy of the source iterates the
//! position array forward and another backward; the semantically correct
//! path is leaf-to-root with position `i` taken from bit `i` of the index
//! counting from the most significant bit of a `depth`-bit expansion.

use algorand_lc_types::{ClimbError, Digest};

use crate::hash::internal_node;

/// A node's position relative to its sibling on the leaf-to-root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePosition {
    /// The node is the left child of its parent.
    Left,
    /// The node is the right child of its parent.
    Right,
}

/// Maps a `depth`-bit leaf `index` to the sequence of positions on its
/// leaf-to-root path.
///
/// `positions[0]` is the leaf's position relative to its sibling;
/// `positions[i]` is the position of the node at height `i` above the
/// leaf. This is the big-endian (MSB-first) bit expansion of `index` in
/// exactly `depth` bits, read from the *least* significant bit upward —
/// equivalently, `positions[depth - 1 - k]` is bit `k` of `index` for
/// `k` in `0..depth`.
pub fn positions(index: u64, depth: u64) -> Result<Vec<NodePosition>, ClimbError> {
    if depth == 0 {
        return Err(ClimbError::InvalidTreeDepth);
    }
    if depth < 64 && index >= (1u64 << depth) {
        return Err(ClimbError::IndexDepthMismatch { index, depth });
    }

    let mut out = vec![NodePosition::Left; depth as usize];
    let mut remaining = index;
    // Walk the output backwards, peeling LSBs off `remaining` — the same
    // trick the source uses, which nets out to an MSB-first array.
    for slot in out.iter_mut().rev() {
        *slot = if remaining & 1 == 1 {
            NodePosition::Right
        } else {
            NodePosition::Left
        };
        remaining >>= 1;
    }
    Ok(out)
}

/// Reconstructs a Merkle-array root from a `leaf`, its `index`, a flat
/// sibling-hash `proof` buffer, and the tree's `depth`.
///
/// See spec.md §4.2 for the full edge-case table. In order:
/// 1. Empty proof with `depth == 0` returns the leaf unchanged (a
///    single-element commitment has no internal nodes).
/// 2. `len(proof) != depth * 32` is rejected with
///    `ProofLengthTreeDepthMismatch` — checked before `depth == 0` is
///    special-cased any further, matching the reference's
///    `computeVectorCommitmentRoot`, which checks proof length before
///    ever calling into `getVectorCommitmentPositions` (where the
///    `depth == 0` check actually lives). A non-empty proof with
///    `depth == 0` therefore surfaces as a length mismatch here, not
///    `InvalidTreeDepth` — spec.md permits either resolution but
///    requires picking one consistently.
/// 3. `index >= 2^depth` is rejected with `IndexDepthMismatch`.
pub fn climb(leaf: Digest, index: u64, proof: &[u8], depth: u64) -> Result<Digest, ClimbError> {
    const NODE_SIZE: usize = 32;

    if proof.is_empty() && depth == 0 {
        return Ok(leaf);
    }

    let expected_len = depth
        .checked_mul(NODE_SIZE as u64)
        .ok_or(ClimbError::ProofLengthTreeDepthMismatch {
            proof_len: proof.len(),
            depth,
            expected: u64::MAX,
        })?;
    if expected_len != proof.len() as u64 {
        return Err(ClimbError::ProofLengthTreeDepthMismatch {
            proof_len: proof.len(),
            depth,
            expected: expected_len,
        });
    }

    let path = positions(index, depth)?;

    let mut current = leaf;
    for (distance_from_leaf, position) in path.into_iter().enumerate() {
        let start = distance_from_leaf * NODE_SIZE;
        let sibling_bytes: [u8; 32] = proof
            .get(start..start + NODE_SIZE)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(ClimbError::ProofLengthTreeDepthMismatch {
                proof_len: proof.len(),
                depth,
                expected: expected_len,
            })?;
        let sibling = Digest::new(sibling_bytes);

        current = match position {
            NodePosition::Left => internal_node(&current, &sibling),
            NodePosition::Right => internal_node(&sibling, &current),
        };
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::internal_node;

    fn digest(byte: u8) -> Digest {
        Digest::new([byte; 32])
    }

    #[test]
    fn s1_single_leaf_commitment() {
        let leaf = digest(7);
        let root = climb(leaf, 0, &[], 0).expect("single-element commitment");
        assert_eq!(root.as_bytes(), leaf.as_bytes());
    }

    #[test]
    fn s2_depth_one_left_child() {
        let leaf = digest(1);
        let sibling = digest(2);
        let root = climb(leaf, 0, sibling.as_ref(), 1).expect("climb");
        assert_eq!(root.as_bytes(), internal_node(&leaf, &sibling).as_bytes());
    }

    #[test]
    fn s3_depth_one_right_child() {
        let leaf = digest(1);
        let sibling = digest(2);
        let root = climb(leaf, 1, sibling.as_ref(), 1).expect("climb");
        assert_eq!(root.as_bytes(), internal_node(&sibling, &leaf).as_bytes());
    }

    #[test]
    fn s4_depth_three_position_extraction() {
        let path = positions(5, 3).expect("positions");
        assert_eq!(
            path,
            vec![
                NodePosition::Right,
                NodePosition::Left,
                NodePosition::Right
            ]
        );
    }

    #[test]
    fn depth_zero_with_non_empty_proof_is_rejected_as_length_mismatch() {
        let leaf = digest(1);
        let err = climb(leaf, 0, &[0u8; 32], 0).unwrap_err();
        assert_eq!(
            err,
            ClimbError::ProofLengthTreeDepthMismatch {
                proof_len: 32,
                depth: 0,
                expected: 0,
            }
        );
    }

    #[test]
    fn positions_still_reports_invalid_tree_depth_directly() {
        // climb() never reaches getVectorCommitmentPositions for depth ==
        // 0 (the length check above always fires first), but positions()
        // itself is still a public entry point and must reject depth == 0
        // on its own.
        let err = positions(0, 0).unwrap_err();
        assert_eq!(err, ClimbError::InvalidTreeDepth);
    }

    #[test]
    fn proof_length_mismatch_is_rejected() {
        let leaf = digest(1);
        let err = climb(leaf, 0, &[0u8; 31], 1).unwrap_err();
        assert!(matches!(
            err,
            ClimbError::ProofLengthTreeDepthMismatch { .. }
        ));
    }

    #[test]
    fn index_at_boundary_is_accepted_and_overflow_rejected() {
        let depth = 3;
        assert!(positions(7, depth).is_ok()); // 2^3 - 1
        let err = positions(8, depth).unwrap_err(); // 2^3
        assert_eq!(err, ClimbError::IndexDepthMismatch { index: 8, depth });
    }

    #[test]
    fn full_depth_eight_tree_round_trips() {
        // Build a full depth-8 tree bottom-up, then reconstruct the root
        // for every leaf using the corresponding proof, and check all
        // reconstructed roots agree.
        let depth = 8u64;
        let leaf_count = 1usize << depth;
        let mut level: Vec<Digest> = (0..leaf_count)
            .map(|i| digest((i % 251) as u8))
            .collect();
        let mut levels = vec![level.clone()];
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len() / 2);
            for pair in level.chunks(2) {
                next.push(internal_node(&pair[0], &pair[1]));
            }
            levels.push(next.clone());
            level = next;
        }
        let root = level[0];

        for leaf_index in [0usize, 1, 127, 254, 255] {
            let mut proof = Vec::new();
            let mut idx = leaf_index;
            for lvl in levels.iter().take(levels.len() - 1) {
                let sibling_idx = idx ^ 1;
                proof.extend_from_slice(lvl[sibling_idx].as_ref());
                idx /= 2;
            }
            let reconstructed =
                climb(levels[0][leaf_index], leaf_index as u64, &proof, depth).expect("climb");
            assert_eq!(reconstructed.as_bytes(), root.as_bytes());
        }
    }
}
