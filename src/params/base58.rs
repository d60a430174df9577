//! Address and key version prefixes
//!
//! Leading bytes that tag a Base58Check string with its role and network.
//! The byte values are compatibility-critical and must match every wallet
//! and explorer on the network.

use serde::Serialize;
use thiserror::Error;

/// What a Base58Check payload encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Address decoding errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Invalid base58check encoding: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("Prefix does not match {0:?} on this network")]
    WrongPrefix(Base58Type),
}

/// Version prefixes of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }

    /// Base58Check-encode `payload` behind this network's prefix for `kind`
    pub fn encode_check(&self, kind: Base58Type, payload: &[u8]) -> String {
        let mut data = self.get(kind).to_vec();
        data.extend_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    /// Decode a Base58Check string and strip this network's prefix for `kind`
    pub fn decode_check(&self, kind: Base58Type, encoded: &str) -> Result<Vec<u8>, AddressError> {
        let data = bs58::decode(encoded).with_check(None).into_vec()?;
        let prefix = self.get(kind);
        match data.strip_prefix(prefix) {
            Some(payload) => Ok(payload.to_vec()),
            None => Err(AddressError::WrongPrefix(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: Base58Prefixes = Base58Prefixes {
        pubkey_address: &[50],
        script_address: &[63],
        secret_key: &[80],
        ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
        ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
    };

    #[test]
    fn test_get_by_role() {
        assert_eq!(PREFIXES.get(Base58Type::PubkeyAddress), &[50]);
        assert_eq!(PREFIXES.get(Base58Type::ExtSecretKey), &[0x04, 0x88, 0xAD, 0xE4]);
    }

    #[test]
    fn test_known_address() {
        let payload: Vec<u8> = (0u8..20).collect();
        assert_eq!(
            PREFIXES.encode_check(Base58Type::PubkeyAddress, &payload),
            "M7uBSTV2qNDHDe2tHfNMqhFkZucgRMpJQk"
        );
    }

    #[test]
    fn test_decode_strips_prefix() {
        let payload = [7u8; 20];
        let encoded = PREFIXES.encode_check(Base58Type::ScriptAddress, &payload);
        assert!(encoded.starts_with('S'));
        assert_eq!(
            PREFIXES
                .decode_check(Base58Type::ScriptAddress, &encoded)
                .unwrap(),
            payload.to_vec()
        );
    }

    #[test]
    fn test_decode_rejects_other_role() {
        let encoded = PREFIXES.encode_check(Base58Type::ScriptAddress, &[7u8; 20]);
        assert!(matches!(
            PREFIXES.decode_check(Base58Type::PubkeyAddress, &encoded),
            Err(AddressError::WrongPrefix(Base58Type::PubkeyAddress))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut encoded = PREFIXES.encode_check(Base58Type::PubkeyAddress, &[1u8; 20]);
        let last = encoded.pop().unwrap();
        encoded.push(if last == '1' { '2' } else { '1' });
        assert!(matches!(
            PREFIXES.decode_check(Base58Type::PubkeyAddress, &encoded),
            Err(AddressError::Base58(_))
        ));
    }
}
