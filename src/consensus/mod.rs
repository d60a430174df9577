//! Consensus module - Block structure, genesis, deployments and checkpoints

mod block;
mod checkpoints;
mod deployments;
mod genesis;
mod script;
mod transaction;

pub use block::*;
pub use checkpoints::*;
pub use deployments::*;
pub use genesis::*;
pub use script::*;
pub use transaction::*;
