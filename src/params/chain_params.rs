//! The per-network parameter set
//!
//! One concrete value type for every network. Networks differ only in the
//! data they carry; the factories live in `mainnet`, `testnet` and
//! `regtest`.

use serde::Serialize;

use super::{Base58Prefixes, Base58Type, DnsSeed, Magic, Network, ParamsError};
use crate::consensus::{
    mano_genesis_block, Block, BlockHasher, CheckpointData, DeploymentPos, DeploymentTable,
};
use crate::constants::Amount;
use crate::crypto::Hash;

/// Height and hash at which BIP34 enforcement is pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bip34Pin {
    pub height: u32,
    pub hash: Hash,
}

/// Masternode payment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasternodeParams {
    pub payments_start_block: u32,
    pub payments_increase_block: u32,
    pub payments_increase_period: u32,
    pub minimum_confirmations: u32,
    /// Blocks an InstantSend lock is kept for
    pub instant_send_keep_lock: u32,
}

/// Budget and superblock schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GovernanceParams {
    pub budget_payments_start_block: u32,
    pub budget_payments_cycle_blocks: u32,
    pub budget_payments_window_blocks: u32,
    /// Seconds a proposal must exist before it can be funded
    pub budget_proposal_establishing_time: i64,
    pub superblock_start_block: u32,
    pub superblock_cycle: u32,
    pub min_quorum: u32,
    pub filter_elements: u32,
}

/// Parameters that influence chain consensus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash,
    pub subsidy_halving_interval: u32,
    pub masternode: MasternodeParams,
    pub governance: GovernanceParams,
    /// Block upgrade thresholds out of `majority_window` blocks
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// `None` where BIP34 is not necessarily active
    pub bip34: Option<Bip34Pin>,
    /// Highest allowed proof-of-work target
    pub pow_limit: Hash,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    /// Expected seconds between blocks
    pub pow_target_spacing: i64,
    /// Seconds per retarget period
    pub pow_target_timespan: i64,
    /// Signalling blocks needed for a generic deployment to lock in
    pub rule_change_activation_threshold: u32,
    /// Blocks per generic deployment voting period
    pub miner_confirmation_window: u32,
    pub deployments: DeploymentTable,
    /// The best chain should have at least this much work
    pub minimum_chain_work: Hash,
    /// Signatures in ancestors of this block are assumed valid
    pub default_assume_valid: Hash,
}

impl ConsensusParams {
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Voting window of a deployment, falling back to the network's window
    pub fn deployment_window(&self, pos: DeploymentPos) -> u32 {
        self.deployments[pos]
            .window_size
            .unwrap_or(self.miner_confirmation_window)
    }

    /// Lock-in threshold of a deployment, falling back to the network's threshold
    pub fn deployment_threshold(&self, pos: DeploymentPos) -> u32 {
        self.deployments[pos]
            .threshold
            .unwrap_or(self.rule_change_activation_threshold)
    }
}

/// Relay and mining policy switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodePolicy {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
}

/// Genesis constants of one network and the digests they must produce
pub(super) struct GenesisConstants {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
    pub expected_hash: &'static str,
    pub expected_merkle_root: &'static str,
}

impl GenesisConstants {
    /// Build the genesis block and verify it against the recorded digests
    pub fn build(
        &self,
        network: Network,
        hasher: &dyn BlockHasher,
    ) -> Result<(Block, Hash), ParamsError> {
        let genesis =
            mano_genesis_block(self.time, self.nonce, self.bits, self.version, self.reward)?;
        let hash = genesis.hash(hasher);

        let expected_hash = Hash::from_hex(self.expected_hash)?;
        if hash != expected_hash {
            tracing::error!(
                %network,
                expected = %expected_hash,
                actual = %hash,
                "genesis hash mismatch"
            );
            return Err(ParamsError::GenesisHashMismatch {
                network,
                expected: expected_hash,
                actual: hash,
            });
        }

        let expected_merkle_root = Hash::from_hex(self.expected_merkle_root)?;
        if genesis.header.merkle_root != expected_merkle_root {
            tracing::error!(
                %network,
                expected = %expected_merkle_root,
                actual = %genesis.header.merkle_root,
                "genesis merkle root mismatch"
            );
            return Err(ParamsError::GenesisMerkleRootMismatch {
                network,
                expected: expected_merkle_root,
                actual: genesis.header.merkle_root,
            });
        }

        Ok((genesis, hash))
    }
}

/// Everything a node needs to know about the network it runs on.
///
/// Built once per network and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    pub(super) network: Network,
    pub(super) consensus: ConsensusParams,
    pub(super) message_start: Magic,
    pub(super) alert_pubkey: Vec<u8>,
    pub(super) default_port: u16,
    pub(super) max_tip_age: i64,
    pub(super) delay_get_headers_time: i64,
    pub(super) prune_after_height: u64,
    pub(super) genesis: Block,
    pub(super) dns_seeds: Vec<DnsSeed>,
    pub(super) base58_prefixes: Base58Prefixes,
    pub(super) ext_coin_type: u32,
    pub(super) policy: NodePolicy,
    pub(super) pool_max_transactions: Option<u32>,
    pub(super) fulfilled_request_expire_time: i64,
    pub(super) spork_pubkey: Option<&'static str>,
    pub(super) checkpoints: CheckpointData,
}

impl ChainParams {
    /// Parameters of `network`
    pub fn for_network(network: Network, hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        match network {
            Network::Main => Self::main(hasher),
            Network::Test => Self::testnet(hasher),
            Network::Regtest => Self::regtest(hasher),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Network id string ("main", "test" or "regtest")
    pub fn network_id(&self) -> &'static str {
        self.network.as_str()
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn message_start(&self) -> Magic {
        self.message_start
    }

    /// Key that signs network alerts; empty where alerts are not used
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Seconds the tip may lag behind before the node counts as out of sync
    pub fn max_tip_age(&self) -> i64 {
        self.max_tip_age
    }

    pub fn delay_get_headers_time(&self) -> i64 {
        self.delay_get_headers_time
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.consensus.hash_genesis_block
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// BIP44 coin type
    pub fn ext_coin_type(&self) -> u32 {
        self.ext_coin_type
    }

    pub fn policy(&self) -> &NodePolicy {
        &self.policy
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.policy.mining_requires_peers
    }

    pub fn require_standard(&self) -> bool {
        self.policy.require_standard
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.policy.default_consistency_checks
    }

    /// Mixing pool size, where the network runs one
    pub fn pool_max_transactions(&self) -> Option<u32> {
        self.pool_max_transactions
    }

    pub fn fulfilled_request_expire_time(&self) -> i64 {
        self.fulfilled_request_expire_time
    }

    pub fn spork_pubkey(&self) -> Option<&'static str> {
        self.spork_pubkey
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;
    use crate::testing::ReferenceHasher;

    const MAIN_MERKLE_ROOT: &str =
        "23cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9";

    fn main_genesis(expected_merkle_root: &'static str) -> GenesisConstants {
        GenesisConstants {
            time: 1528088503,
            nonce: 1839581,
            bits: 0x1e0ffff0,
            version: 1,
            reward: 10 * COIN,
            expected_hash: "00000b268c07975f407c81ea67e8a83295b292b1c740e671d8e03c20aaf7a33e",
            expected_merkle_root,
        }
    }

    #[test]
    fn test_genesis_build_verifies() {
        let (genesis, hash) = main_genesis(MAIN_MERKLE_ROOT)
            .build(Network::Main, &ReferenceHasher)
            .unwrap();
        assert_eq!(genesis.hash(&ReferenceHasher), hash);
        assert_eq!(genesis.header.merkle_root.to_hex(), MAIN_MERKLE_ROOT);
    }

    #[test]
    fn test_genesis_merkle_root_mismatch() {
        let err = main_genesis("13cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9")
            .build(Network::Main, &ReferenceHasher)
            .unwrap_err();
        match err {
            ParamsError::GenesisMerkleRootMismatch {
                network,
                expected,
                actual,
            } => {
                assert_eq!(network, Network::Main);
                assert_eq!(
                    expected.to_hex(),
                    "13cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9"
                );
                assert_eq!(actual.to_hex(), MAIN_MERKLE_ROOT);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_genesis_hash_checked_before_merkle_root() {
        let mut constants =
            main_genesis("13cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9");
        constants.nonce += 1;
        assert!(matches!(
            constants.build(Network::Main, &ReferenceHasher),
            Err(ParamsError::GenesisHashMismatch {
                network: Network::Main,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_constant_is_reported() {
        assert!(matches!(
            main_genesis("not hex").build(Network::Main, &ReferenceHasher),
            Err(ParamsError::InvalidHex(_))
        ));
    }
}
