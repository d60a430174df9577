//! Soft-fork deployment descriptors (BIP9 version bits)
//!
//! Only the descriptors live here. Vote counting and the
//! DEFINED/STARTED/LOCKED_IN/ACTIVE/FAILED state machine belong to the
//! consensus engine that reads them.

use serde::Serialize;
use std::ops::Index;
use thiserror::Error;

/// Version bits reserved for signalling (bits 0..=28)
pub const VERSIONBITS_NUM_BITS: u8 = 29;

/// Top bits a signalling block version must carry (`001`)
pub const VERSIONBITS_TOP_BITS: u32 = 0x2000_0000;

/// Mask selecting the top bits of a block version
pub const VERSIONBITS_TOP_MASK: u32 = 0xE000_0000;

/// Timeout sentinel for deployments that never expire
pub const NO_TIMEOUT: i64 = 999_999_999_999;

/// Number of entries in every deployment table
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 3;

/// Deployment identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeploymentPos {
    TestDummy,
    /// BIP68, BIP112 and BIP113
    Csv,
    /// DIP0001 block size and fee changes
    Dip0001,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] = [
        DeploymentPos::TestDummy,
        DeploymentPos::Csv,
        DeploymentPos::Dip0001,
    ];

    /// Name used by `getblockchaininfo`-style reporting
    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
            DeploymentPos::Dip0001 => "dip0001",
        }
    }
}

/// A single BIP9 deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    /// Bit position to signal with
    pub bit: u8,
    /// Median time past at which voting starts
    pub start_time: i64,
    /// Median time past at which the deployment fails if not locked in
    pub timeout: i64,
    /// Blocks per voting period, if different from the network's window
    pub window_size: Option<u32>,
    /// Signalling blocks needed to lock in, if different from the network's threshold
    pub threshold: Option<u32>,
}

impl Bip9Deployment {
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
            window_size: None,
            threshold: None,
        }
    }

    /// Same deployment with its own voting window and threshold
    pub const fn with_window(mut self, window_size: u32, threshold: u32) -> Self {
        self.window_size = Some(window_size);
        self.threshold = Some(threshold);
        self
    }

    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    /// Whether a block with this version signals for the deployment
    pub fn signals(&self, version: i32) -> bool {
        let version = version as u32;
        (version & VERSIONBITS_TOP_MASK) == VERSIONBITS_TOP_BITS && (version & self.mask()) != 0
    }

    pub fn never_times_out(&self) -> bool {
        self.timeout == NO_TIMEOUT
    }

    /// Whether the `[start_time, timeout)` windows of two deployments intersect
    pub fn overlaps(&self, other: &Bip9Deployment) -> bool {
        self.start_time < other.timeout && other.start_time < self.timeout
    }
}

/// Inconsistent deployment descriptors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    #[error("deployment {0:?} uses bit {1}, outside the signalling range")]
    BitOutOfRange(DeploymentPos, u8),
    #[error("deployment {0:?} times out at {2}, not after its start {1}")]
    TimeoutBeforeStart(DeploymentPos, i64, i64),
    #[error("deployment {0:?} threshold {1} exceeds its window {2}")]
    ThresholdExceedsWindow(DeploymentPos, u32, u32),
    #[error("deployment {0:?} sets only one of window size and threshold")]
    PartialWindow(DeploymentPos),
    #[error("deployments {0:?} and {1:?} share bit {2} in overlapping windows")]
    BitCollision(DeploymentPos, DeploymentPos, u8),
}

/// Fixed table of deployments, indexed by [`DeploymentPos`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentTable([Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS]);

impl DeploymentTable {
    /// Build a table from one descriptor per deployment
    pub fn new(test_dummy: Bip9Deployment, csv: Bip9Deployment, dip0001: Bip9Deployment) -> Self {
        Self([test_dummy, csv, dip0001])
    }

    pub fn get(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.0[pos as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Bip9Deployment)> {
        DeploymentPos::ALL.into_iter().zip(self.0.iter())
    }

    /// Check the descriptors are internally consistent
    pub fn validate(&self) -> Result<(), DeploymentError> {
        for (pos, deployment) in self.iter() {
            if deployment.bit >= VERSIONBITS_NUM_BITS {
                return Err(DeploymentError::BitOutOfRange(pos, deployment.bit));
            }
            if deployment.timeout <= deployment.start_time {
                return Err(DeploymentError::TimeoutBeforeStart(
                    pos,
                    deployment.start_time,
                    deployment.timeout,
                ));
            }
            match (deployment.window_size, deployment.threshold) {
                (Some(window), Some(threshold)) if threshold > window => {
                    return Err(DeploymentError::ThresholdExceedsWindow(pos, threshold, window));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(DeploymentError::PartialWindow(pos));
                }
                _ => {}
            }
        }

        for (i, (pos_a, a)) in self.iter().enumerate() {
            for (pos_b, b) in self.iter().skip(i + 1) {
                if a.bit == b.bit && a.overlaps(b) {
                    return Err(DeploymentError::BitCollision(pos_a, pos_b, a.bit));
                }
            }
        }

        Ok(())
    }
}

impl Index<DeploymentPos> for DeploymentTable {
    type Output = Bip9Deployment;

    fn index(&self, pos: DeploymentPos) -> &Bip9Deployment {
        self.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DeploymentTable {
        DeploymentTable::new(
            Bip9Deployment::new(28, 1199145601, 1230767999),
            Bip9Deployment::new(0, 1528088503, 1536033600),
            Bip9Deployment::new(1, 1528088503, 1543939200).with_window(4032, 3226),
        )
    }

    #[test]
    fn test_valid_table() {
        assert_eq!(table().validate(), Ok(()));
        assert_eq!(table()[DeploymentPos::Dip0001].window_size, Some(4032));
        assert_eq!(table()[DeploymentPos::Csv].threshold, None);
    }

    #[test]
    fn test_signalling() {
        let csv = table()[DeploymentPos::Csv];
        assert!(csv.signals(0x2000_0001));
        assert!(!csv.signals(0x2000_0002));
        // Old-style versions never signal
        assert!(!csv.signals(0x0000_0001));
        assert!(!csv.signals(0x6000_0001u32 as i32));
    }

    #[test]
    fn test_bit_out_of_range() {
        let bad = DeploymentTable::new(
            Bip9Deployment::new(29, 0, NO_TIMEOUT),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT),
        );
        assert_eq!(
            bad.validate(),
            Err(DeploymentError::BitOutOfRange(DeploymentPos::TestDummy, 29))
        );
    }

    #[test]
    fn test_timeout_must_follow_start() {
        let bad = DeploymentTable::new(
            Bip9Deployment::new(28, 100, 100),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT),
        );
        assert!(matches!(
            bad.validate(),
            Err(DeploymentError::TimeoutBeforeStart(DeploymentPos::TestDummy, 100, 100))
        ));
    }

    #[test]
    fn test_overlapping_bit_rejected() {
        let bad = DeploymentTable::new(
            Bip9Deployment::new(28, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, 2000),
            Bip9Deployment::new(1, 1000, 3000),
        );
        assert_eq!(
            bad.validate(),
            Err(DeploymentError::BitCollision(DeploymentPos::Csv, DeploymentPos::Dip0001, 1))
        );
    }

    #[test]
    fn test_bit_reuse_in_disjoint_windows_allowed() {
        let ok = DeploymentTable::new(
            Bip9Deployment::new(28, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, 1000),
            Bip9Deployment::new(1, 1000, 3000),
        );
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn test_threshold_over_window_rejected() {
        let bad = DeploymentTable::new(
            Bip9Deployment::new(28, 0, NO_TIMEOUT),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT).with_window(100, 101),
        );
        assert_eq!(
            bad.validate(),
            Err(DeploymentError::ThresholdExceedsWindow(DeploymentPos::Dip0001, 101, 100))
        );
    }

    #[test]
    fn test_window_and_threshold_set_together() {
        let mut bad = table();
        bad.0[DeploymentPos::Csv as usize].window_size = Some(100);
        assert_eq!(
            bad.validate(),
            Err(DeploymentError::PartialWindow(DeploymentPos::Csv))
        );

        let mut bad = table();
        bad.0[DeploymentPos::Dip0001 as usize].window_size = None;
        assert_eq!(
            bad.validate(),
            Err(DeploymentError::PartialWindow(DeploymentPos::Dip0001))
        );
    }
}
