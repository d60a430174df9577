//! Chain parameters - per-network constants and network selection

mod base58;
mod chain_params;
mod error;
mod mainnet;
mod network;
mod regtest;
mod registry;
mod seeds;
mod testnet;

pub use base58::*;
pub use chain_params::{
    Bip34Pin, ChainParams, ConsensusParams, GovernanceParams, MasternodeParams, NodePolicy,
};
pub use error::*;
pub use network::*;
pub use registry::*;
pub use seeds::*;
