//! Test doubles for the external header hasher
//!
//! Shared by the unit tests and the integration suites under `tests/`.

use crate::consensus::{BlockHasher, DoubleSha256, HEADER_SIZE};
use crate::crypto::Hash;

/// X11 digests recorded from the reference node for the three genesis
/// headers, keyed by the exact serialized header
pub const RECORDED_DIGESTS: [(&str, &str); 3] = [
    (
        "010000000000000000000000000000000000000000000000000000000000000000000000e9f37e0104c71d229e67fdc226dd77ac842a58bbd4ddbf67e30dc2e3058dcb23b7c7145bf0ff0f1edd111c00",
        "00000b268c07975f407c81ea67e8a83295b292b1c740e671d8e03c20aaf7a33e",
    ),
    (
        "010000000000000000000000000000000000000000000000000000000000000000000000e9f37e0104c71d229e67fdc226dd77ac842a58bbd4ddbf67e30dc2e3058dcb235f40725af0ff0f1e76d70f00",
        "0000057453b4b8889d218a7a9264eb21e955757340205eaadedabba221d3e3f0",
    ),
    (
        "010000000000000000000000000000000000000000000000000000000000000000000000e9f37e0104c71d229e67fdc226dd77ac842a58bbd4ddbf67e30dc2e3058dcb23b7c7145bffff7f2001000000",
        "305a859f6f761609cc723461dce07a47ea1ed631f4212f6a38d938aa318d5c79",
    ),
];

/// Stands in for X11: recorded digests for known headers, SHA-256d otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceHasher;

impl BlockHasher for ReferenceHasher {
    fn hash_header(&self, header: &[u8; HEADER_SIZE]) -> Hash {
        let encoded = hex::encode(header);
        RECORDED_DIGESTS
            .iter()
            .find(|(known, _)| *known == encoded)
            .and_then(|(_, digest)| Hash::from_hex(digest).ok())
            .unwrap_or_else(|| DoubleSha256.hash_header(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_digests_parse() {
        for (header, digest) in RECORDED_DIGESTS {
            assert_eq!(hex::decode(header).unwrap().len(), HEADER_SIZE);
            assert!(Hash::from_hex(digest).is_ok());
        }
    }

    #[test]
    fn test_unknown_header_falls_back() {
        let header = [0u8; HEADER_SIZE];
        assert_eq!(
            ReferenceHasher.hash_header(&header),
            DoubleSha256.hash_header(&header)
        );
    }
}
