//! Block checkpoints
//!
//! A frozen, trusted prefix of chain history: blocks at checkpointed heights
//! must carry exactly the recorded hash. The summary statistics feed sync
//! progress estimates.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::crypto::Hash;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Malformed checkpoint table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("checkpoint height {height} does not follow height {previous}")]
    NotIncreasing { previous: u32, height: u32 },
}

/// Checkpoints of one network and the statistics recorded with them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    pub time_last_checkpoint: i64,
    /// Transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// Build a table from `(height, hash)` pairs listed in strictly
    /// increasing height order
    pub fn new(
        entries: impl IntoIterator<Item = (u32, Hash)>,
        time_last_checkpoint: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<u32> = None;

        for (height, hash) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(CheckpointError::NotIncreasing { previous, height });
                }
            }
            checkpoints.insert(height, hash);
            previous = Some(height);
        }

        Ok(Self {
            checkpoints,
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        })
    }

    /// A table with no checkpoints and zeroed statistics
    pub fn empty() -> Self {
        Self {
            checkpoints: BTreeMap::new(),
            time_last_checkpoint: 0,
            transactions_last_checkpoint: 0,
            transactions_per_day: 0.0,
        }
    }

    /// Expected hash at `height`, if that height is checkpointed
    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// Whether a block at `height` with `hash` agrees with the checkpoints.
    ///
    /// Heights without a checkpoint always agree.
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }

    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Checkpoints in increasing height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash)> {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Projected total transaction count at UNIX time `now`
    pub fn estimated_transactions(&self, now: i64) -> f64 {
        let elapsed = now.saturating_sub(self.time_last_checkpoint).max(0) as f64;
        self.transactions_last_checkpoint as f64
            + elapsed / SECONDS_PER_DAY * self.transactions_per_day
    }
}
