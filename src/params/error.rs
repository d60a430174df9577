use thiserror::Error;

use super::Network;
use crate::consensus::{CheckpointError, DeploymentError};
use crate::crypto::Hash;

/// Errors building or selecting chain parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("unknown network {0:?}")]
    UnknownNetwork(String),
    #[error("no network has been selected")]
    NoActiveNetwork,
    #[error("network registry has not been initialized")]
    RegistryNotInitialized,
    #[error("-regtest and -testnet cannot be combined")]
    ConflictingNetworkFlags,
    #[error("{network} genesis hash is {actual}, expected {expected}")]
    GenesisHashMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis merkle root is {actual}, expected {expected}")]
    GenesisMerkleRootMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
    #[error("invalid hex constant: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
