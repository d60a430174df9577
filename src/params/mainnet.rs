//! Main network

use super::chain_params::GenesisConstants;
use super::{
    Base58Prefixes, Bip34Pin, ChainParams, ConsensusParams, DnsSeed, GovernanceParams, Magic,
    MasternodeParams, Network, NodePolicy, ParamsError,
};
use crate::consensus::{Bip9Deployment, BlockHasher, CheckpointData, DeploymentTable};
use crate::constants::COIN;
use crate::crypto::Hash;

const GENESIS: GenesisConstants = GenesisConstants {
    time: 1528088503,
    nonce: 1839581,
    bits: 0x1e0ffff0,
    version: 1,
    reward: 10 * COIN,
    expected_hash: "00000b268c07975f407c81ea67e8a83295b292b1c740e671d8e03c20aaf7a33e",
    expected_merkle_root: "23cb8d05e3c20de367bfddd4bb582a84ac77dd26c2fd679e221dc704017ef3e9",
};

const ALERT_PUBKEY: &str = "0420b24423eb082341dfa41df37ca6a3cc3153416bf6bb58b4d5c0532f08ba84e29f056caeeee4c9cd443c68a14114704089dbbb5efd21f98eaed7ca2ba349e5d9";

const SPORK_PUBKEY: &str = "04779207612160e91c4d2739cfecc0dfeb2cf18c7788be9edfe4fc50ada9be93551c9be432e3c696a5f67b91c349ea1482dd222015cd27fcc674fd96715daee0ad";

impl ChainParams {
    /// Main network parameters
    pub fn main(hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        let network = Network::Main;

        let mut consensus = ConsensusParams {
            hash_genesis_block: Hash::zero(),
            // Rewards halve roughly once a year
            subsidy_halving_interval: 255500,
            masternode: MasternodeParams {
                payments_start_block: 65,
                payments_increase_block: 95,
                payments_increase_period: 30,
                minimum_confirmations: 15,
                instant_send_keep_lock: 24,
            },
            governance: GovernanceParams {
                budget_payments_start_block: 255500,
                budget_payments_cycle_blocks: 21000,
                budget_payments_window_blocks: 100,
                budget_proposal_establishing_time: 60 * 60 * 24,
                superblock_start_block: 276500,
                superblock_cycle: 21000,
                min_quorum: 10,
                filter_elements: 20000,
            },
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34: Some(Bip34Pin {
                height: 1,
                hash: Hash::from_hex(
                    "00000b268c07975f407c81ea67e8a83295b292b1c740e671d8e03c20aaf7a33e",
                )?,
            }),
            pow_limit: Hash::from_hex(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pow_target_spacing: 2 * 60,
            pow_target_timespan: 24 * 60 * 60,
            rule_change_activation_threshold: 1916, // 95% of 2016
            miner_confirmation_window: 2016,
            deployments: DeploymentTable::new(
                // January 1, 2008 to December 31, 2008
                Bip9Deployment::new(28, 1199145601, 1230767999),
                Bip9Deployment::new(0, 1528088503, 1536033600),
                Bip9Deployment::new(1, 1528088503, 1543939200).with_window(4032, 3226), // 80%
            ),
            // Block 9517
            minimum_chain_work: Hash::from_hex(
                "00000000000000000000000000000000000000000000000000606db762cc19d7",
            )?,
            default_assume_valid: Hash::from_hex(
                "000000000019f388b70c39e87931b05e9fd0c381c9f2f7112211af16c4075987",
            )?,
        };
        consensus.deployments.validate()?;

        let (genesis, genesis_hash) = GENESIS.build(network, hasher)?;
        consensus.hash_genesis_block = genesis_hash;

        let checkpoints = CheckpointData::new(
            [
                (
                    7,
                    Hash::from_hex(
                        "00000dfd045fad7bdbb28512ce804d452945547e0510644bbbecb466b4cf92f5",
                    )?,
                ),
                (
                    10,
                    Hash::from_hex(
                        "0000086544ae58ca1f6d82d0a734e7959e8ed73a844ce762af22fe741c583552",
                    )?,
                ),
                (
                    9517,
                    Hash::from_hex(
                        "000000000019f388b70c39e87931b05e9fd0c381c9f2f7112211af16c4075987",
                    )?,
                ),
            ],
            1529304311,
            4008,
            250.0,
        )?;

        tracing::debug!(%network, genesis = %genesis_hash, "built chain parameters");

        Ok(ChainParams {
            network,
            consensus,
            message_start: Magic([0xc4, 0xfb, 0xde, 0xb0]),
            alert_pubkey: hex::decode(ALERT_PUBKEY)?,
            default_port: 5982,
            // About 144 blocks behind
            max_tip_age: 6 * 60 * 60,
            delay_get_headers_time: 24 * 60 * 60,
            prune_after_height: 100000,
            genesis,
            dns_seeds: vec![
                DnsSeed::new("167.179.94.218", "167.179.94.218"),
                DnsSeed::new("45.76.213.173", "45.76.213.173"),
                DnsSeed::new("202.182.101.132", "202.182.101.132"),
            ],
            base58_prefixes: Base58Prefixes {
                // 'M'
                pubkey_address: &[50],
                // 'S'
                script_address: &[63],
                secret_key: &[80],
                // xpub / xprv
                ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
            },
            ext_coin_type: 5,
            policy: NodePolicy {
                mining_requires_peers: true,
                default_consistency_checks: false,
                require_standard: true,
                mine_blocks_on_demand: true,
                testnet_to_be_deprecated_field_rpc: false,
            },
            pool_max_transactions: Some(3),
            fulfilled_request_expire_time: 60 * 60,
            spork_pubkey: Some(SPORK_PUBKEY),
            checkpoints,
        })
    }
}
