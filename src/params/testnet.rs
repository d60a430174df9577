//! Test network

use super::chain_params::GenesisConstants;
use super::{
    Base58Prefixes, Bip34Pin, ChainParams, ConsensusParams, DnsSeed, GovernanceParams, Magic,
    MasternodeParams, Network, NodePolicy, ParamsError,
};
use crate::consensus::{Bip9Deployment, BlockHasher, CheckpointData, DeploymentTable};
use crate::constants::COIN;
use crate::crypto::Hash;

const GENESIS: GenesisConstants = GenesisConstants {
    time: 1517437023,
    nonce: 1038198,
    bits: 0x1e0ffff0,
    version: 1,
    reward: 10 * COIN,
    expected_hash: "0000057453b4b8889d218a7a9264eb21e955757340205eaadedabba221d3e3f0",
    expected_merkle_root: "23cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9",
};

const ALERT_PUBKEY: &str = "0420b24423eb082341dfa41df37ca6a3cc3153416bf6bb58b4d5c0532f08ba84e29f056caeeee4c9cd443c68a14114704089dbbb5efd21f98eaed7ca2ba349e5d9";

const SPORK_PUBKEY: &str = "044554383c929e5543784e83fef24e03df973c9342260464521aa4555716392473591b7ffff831f4bbf45e7a843ab6041dbd57aa6844ef564071a337e1b19f0f33";

impl ChainParams {
    /// Test network parameters
    pub fn testnet(hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        let network = Network::Test;

        let mut consensus = ConsensusParams {
            hash_genesis_block: Hash::zero(),
            subsidy_halving_interval: 255500,
            masternode: MasternodeParams {
                // Only has to stay below payments_increase_block
                payments_start_block: 5,
                payments_increase_block: 15,
                payments_increase_period: 20,
                minimum_confirmations: 1,
                instant_send_keep_lock: 6,
            },
            governance: GovernanceParams {
                budget_payments_start_block: 200,
                budget_payments_cycle_blocks: 50,
                budget_payments_window_blocks: 10,
                budget_proposal_establishing_time: 60 * 20,
                // Must stay above budget_payments_start_block
                superblock_start_block: 250,
                superblock_cycle: 24,
                min_quorum: 1,
                filter_elements: 500,
            },
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 100,
            bip34: Some(Bip34Pin {
                height: 0,
                hash: Hash::from_hex(
                    "0000057453b4b8889d218a7a9264eb21e955757340205eaadedabba221d3e3f0",
                )?,
            }),
            pow_limit: Hash::from_hex(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            pow_target_spacing: 2 * 60,
            pow_target_timespan: 24 * 60 * 60,
            rule_change_activation_threshold: 1512, // 75%
            miner_confirmation_window: 2016,
            deployments: DeploymentTable::new(
                Bip9Deployment::new(28, 1199145601, 1230767999),
                Bip9Deployment::new(0, 1528088503, 1536033600),
                Bip9Deployment::new(1, 1528088503, 1543939200).with_window(100, 50),
            ),
            // Block 5
            minimum_chain_work: Hash::from_hex(
                "0000000000000000000000000000000000000000000000000000000000600015",
            )?,
            default_assume_valid: Hash::from_hex(
                "00000653cbaf56c325836086943793b3afd3cf0824d7d758b831f06d7cf49ce1",
            )?,
        };
        consensus.deployments.validate()?;

        let (genesis, genesis_hash) = GENESIS.build(network, hasher)?;
        consensus.hash_genesis_block = genesis_hash;

        let checkpoints = CheckpointData::new(
            [(
                5,
                Hash::from_hex(
                    "00000653cbaf56c325836086943793b3afd3cf0824d7d758b831f06d7cf49ce1",
                )?,
            )],
            1528097127,
            0,
            0.01,
        )?;

        tracing::debug!(%network, genesis = %genesis_hash, "built chain parameters");

        Ok(ChainParams {
            network,
            consensus,
            message_start: Magic([0xe5, 0xb2, 0xb6, 0xe5]),
            alert_pubkey: hex::decode(ALERT_PUBKEY)?,
            default_port: 15982,
            // Allow mining on top of old blocks
            max_tip_age: 0x7fffffff,
            delay_get_headers_time: 24 * 60 * 60,
            prune_after_height: 1000,
            genesis,
            dns_seeds: vec![DnsSeed::new("mano.org", "tseed.mano.org")],
            base58_prefixes: Base58Prefixes {
                // 'm'
                pubkey_address: &[110],
                // 's'
                script_address: &[125],
                secret_key: &[239],
                // tpub / tprv
                ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
                ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
            },
            ext_coin_type: 1,
            policy: NodePolicy {
                mining_requires_peers: true,
                default_consistency_checks: false,
                require_standard: false,
                mine_blocks_on_demand: true,
                testnet_to_be_deprecated_field_rpc: true,
            },
            pool_max_transactions: Some(3),
            fulfilled_request_expire_time: 5 * 60,
            spork_pubkey: Some(SPORK_PUBKEY),
            checkpoints,
        })
    }
}
