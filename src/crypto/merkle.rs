//! Merkle root computation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of transaction ids
///
/// If the list is empty, returns zero hash.
/// If a level has an odd number of elements, the last one is paired with itself.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        let next_level = current_level
            .chunks(2)
            .map(|chunk| match chunk {
                [left, right] => hash_pair(left, right),
                [single] => hash_pair(single, single),
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();

        current_level = next_level;
    }

    current_level.first().copied().unwrap_or_else(Hash::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256d;

    fn make_hashes(n: usize) -> Vec<Hash> {
        (0..n).map(|i| sha256d(&i.to_le_bytes())).collect()
    }

    #[test]
    fn test_empty_merkle_root() {
        let root = compute_merkle_root(&[]);
        assert_eq!(root, Hash::zero());
    }

    #[test]
    fn test_single_element() {
        let hashes = make_hashes(1);
        let root = compute_merkle_root(&hashes);
        assert_eq!(root, hashes[0]);
    }

    #[test]
    fn test_two_elements() {
        let hashes = make_hashes(2);
        let root = compute_merkle_root(&hashes);
        let expected = hash_pair(&hashes[0], &hashes[1]);
        assert_eq!(root, expected);
    }

    #[test]
    fn test_odd_number_duplicates_last() {
        let hashes = make_hashes(3);
        let root = compute_merkle_root(&hashes);
        let expected = hash_pair(
            &hash_pair(&hashes[0], &hashes[1]),
            &hash_pair(&hashes[2], &hashes[2]),
        );
        assert_eq!(root, expected);
    }
}
