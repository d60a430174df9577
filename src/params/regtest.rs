//! Regression test network

use super::chain_params::GenesisConstants;
use super::{
    Base58Prefixes, ChainParams, ConsensusParams, GovernanceParams, Magic, MasternodeParams,
    Network, NodePolicy, ParamsError,
};
use crate::consensus::{Bip9Deployment, BlockHasher, CheckpointData, DeploymentTable, NO_TIMEOUT};
use crate::constants::COIN;
use crate::crypto::Hash;

const GENESIS: GenesisConstants = GenesisConstants {
    time: 1528088503,
    nonce: 1,
    bits: 0x207fffff,
    version: 1,
    reward: 10 * COIN,
    expected_hash: "305a859f6f761609cc723461dce07a47ea1ed631f4212f6a38d938aa318d5c79",
    expected_merkle_root: "23cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9",
};

impl ChainParams {
    /// Regression test network parameters
    pub fn regtest(hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        let network = Network::Regtest;

        let mut consensus = ConsensusParams {
            hash_genesis_block: Hash::zero(),
            subsidy_halving_interval: 150,
            masternode: MasternodeParams {
                payments_start_block: 20,
                payments_increase_block: 35,
                payments_increase_period: 10,
                minimum_confirmations: 1,
                instant_send_keep_lock: 6,
            },
            governance: GovernanceParams {
                budget_payments_start_block: 1000,
                budget_payments_cycle_blocks: 50,
                budget_payments_window_blocks: 10,
                budget_proposal_establishing_time: 60 * 20,
                superblock_start_block: 1500,
                superblock_cycle: 10,
                min_quorum: 1,
                filter_elements: 100,
            },
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34: None,
            pow_limit: Hash::from_hex(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pow_target_spacing: 150,
            pow_target_timespan: 24 * 60 * 60,
            rule_change_activation_threshold: 108, // 75%
            miner_confirmation_window: 144,
            deployments: DeploymentTable::new(
                Bip9Deployment::new(28, 0, NO_TIMEOUT),
                Bip9Deployment::new(0, 0, NO_TIMEOUT),
                Bip9Deployment::new(1, 0, NO_TIMEOUT),
            ),
            minimum_chain_work: Hash::zero(),
            default_assume_valid: Hash::zero(),
        };
        consensus.deployments.validate()?;

        let (genesis, genesis_hash) = GENESIS.build(network, hasher)?;
        consensus.hash_genesis_block = genesis_hash;

        tracing::debug!(%network, genesis = %genesis_hash, "built chain parameters");

        Ok(ChainParams {
            network,
            consensus,
            message_start: Magic([0xe6, 0xc5, 0xa3, 0xf2]),
            alert_pubkey: Vec::new(),
            default_port: 25982,
            max_tip_age: 6 * 60 * 60,
            // Never delay GETHEADERS
            delay_get_headers_time: 0,
            prune_after_height: 1000,
            genesis,
            dns_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: &[111],
                script_address: &[196],
                secret_key: &[239],
                ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
            },
            ext_coin_type: 1,
            policy: NodePolicy {
                mining_requires_peers: false,
                default_consistency_checks: true,
                require_standard: false,
                mine_blocks_on_demand: true,
                testnet_to_be_deprecated_field_rpc: false,
            },
            pool_max_transactions: None,
            fulfilled_request_expire_time: 5 * 60,
            spork_pubkey: None,
            checkpoints: CheckpointData::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::DeploymentPos;
    use crate::testing::ReferenceHasher;

    #[test]
    fn test_regtest_genesis() {
        let params = ChainParams::regtest(&ReferenceHasher).unwrap();
        assert_eq!(params.network_id(), "regtest");
        assert_eq!(
            params.genesis_hash().to_hex(),
            "305a859f6f761609cc723461dce07a47ea1ed631f4212f6a38d938aa318d5c79"
        );
    }

    #[test]
    fn test_regtest_is_permissive() {
        let params = ChainParams::regtest(&ReferenceHasher).unwrap();
        assert!(!params.mining_requires_peers());
        assert!(params.default_consistency_checks());
        assert!(params.consensus().pow_no_retargeting);
        assert!(params.consensus().bip34.is_none());
        assert!(params.checkpoints().is_empty());
        assert!(params.dns_seeds().is_empty());
        assert!(params.alert_pubkey().is_empty());
    }

    #[test]
    fn test_regtest_deployments_never_time_out() {
        let params = ChainParams::regtest(&ReferenceHasher).unwrap();
        for (_, deployment) in params.consensus().deployments.iter() {
            assert_eq!(deployment.start_time, 0);
            assert!(deployment.never_times_out());
        }
        assert_eq!(params.consensus().deployment_window(DeploymentPos::Dip0001), 144);
        assert_eq!(params.consensus().deployment_threshold(DeploymentPos::Dip0001), 108);
    }
}
