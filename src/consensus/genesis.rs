//! Genesis block generation
//!
//! Produces the single coinbase-only block that roots each network's chain.

use super::{Block, BlockHeader, Opcode, Script, Transaction};
use crate::constants::Amount;
use crate::crypto::Hash;

/// Constant pushed ahead of the timestamp text in the coinbase input
const GENESIS_SCRIPT_SIG_PREFIX: i64 = 31968473;

/// Text embedded in every MANO genesis coinbase
pub const GENESIS_TIMESTAMP: &str =
    "06/04/18 Bitcoin.com Taiwanese Miner Shot for Debt to Investors";

/// Public key the genesis reward is paid to
pub const GENESIS_OUTPUT_PUBKEY: &str = "043fc32e5547f16a9710d76fa543776c886fcec7fc52dff72a6c8072c132ae6aba33099e515c2ebdc7d8a1cc0adb5c26dc6c420b86d87d1fa2be0cfadfa5e6c990";

/// Build a genesis block.
///
/// The coinbase input script is `<31968473> <4> <timestamp>` and its only
/// output pays `reward` to `output_script`. Identical inputs always give a
/// byte-identical block.
pub fn create_genesis_block(
    timestamp: &str,
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_SIG_PREFIX)
        .push_script_num(4)
        .push_slice(timestamp.as_bytes());

    let coinbase = Transaction::coinbase(script_sig, reward, output_script);

    let mut block = Block::new(
        BlockHeader {
            version,
            prev_hash: Hash::zero(),
            merkle_root: Hash::zero(),
            time,
            bits,
            nonce,
        },
        vec![coinbase],
    );
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Build a genesis block with the MANO timestamp text and reward key
pub fn mano_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Result<Block, hex::FromHexError> {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY)?;
    let output_script = Script::new()
        .push_slice(&pubkey)
        .push_opcode(Opcode::CheckSig);

    Ok(create_genesis_block(
        GENESIS_TIMESTAMP,
        output_script,
        time,
        nonce,
        bits,
        version,
        reward,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;

    const EXPECTED_MERKLE_ROOT: &str =
        "23cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9";

    fn main_genesis() -> Block {
        mano_genesis_block(1528088503, 1839581, 0x1e0ffff0, 1, 10 * COIN).unwrap()
    }

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(main_genesis(), main_genesis());
        assert_eq!(main_genesis().header.to_bytes(), main_genesis().header.to_bytes());
    }

    #[test]
    fn test_genesis_merkle_root() {
        let genesis = main_genesis();
        assert_eq!(genesis.header.merkle_root.to_hex(), EXPECTED_MERKLE_ROOT);
        assert_eq!(genesis.transactions[0].txid().to_hex(), EXPECTED_MERKLE_ROOT);
    }

    #[test]
    fn test_genesis_coinbase_serialization() {
        let genesis = main_genesis();
        assert_eq!(
            hex::encode(genesis.transactions[0].to_bytes()),
            "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff\
             4704d9cce70101043f30362f30342f313820426974636f696e2e636f6d2054616977616e657365204d\
             696e65722053686f7420666f72204465627420746f20496e766573746f7273ffffffff0100ca9a3b00\
             0000004341043fc32e5547f16a9710d76fa543776c886fcec7fc52dff72a6c8072c132ae6aba33099e\
             515c2ebdc7d8a1cc0adb5c26dc6c420b86d87d1fa2be0cfadfa5e6c990ac00000000"
        );
    }

    #[test]
    fn test_genesis_header_bytes() {
        assert_eq!(
            hex::encode(main_genesis().header.to_bytes()),
            "0100000000000000000000000000000000000000000000000000000000000000000000\
             00e9f37e0104c71d229e67fdc226dd77ac842a58bbd4ddbf67e30dc2e3058dcb23b7c7\
             145bf0ff0f1edd111c00"
        );
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = main_genesis();
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);
        assert!(genesis.transactions[0].is_coinbase());
        assert_eq!(genesis.transactions[0].total_output_value(), 10 * COIN);
    }

    #[test]
    fn test_header_fields_do_not_touch_merkle_root() {
        let a = main_genesis();
        let b = mano_genesis_block(1, 2, 0x207fffff, 1, 10 * COIN).unwrap();
        assert_eq!(a.header.merkle_root, b.header.merkle_root);
        assert_ne!(a.header.to_bytes(), b.header.to_bytes());
    }

    #[test]
    fn test_reward_changes_merkle_root() {
        let a = main_genesis();
        let b = mano_genesis_block(1528088503, 1839581, 0x1e0ffff0, 1, 50 * COIN).unwrap();
        assert_ne!(a.header.merkle_root, b.header.merkle_root);
    }
}
