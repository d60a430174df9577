//! MANO chain parameters
//!
//! The immutable consensus and bootstrap constants a MANO node needs before
//! it can validate or relay anything: genesis blocks, soft-fork deployment
//! windows, checkpoints, address prefixes and network magic, plus the
//! registry through which the node picks its network.
//!
//! ```ignore
//! let registry = NetworkRegistry::new(&x11_hasher)?;
//! let params = registry.select("main")?;
//! assert_eq!(params.default_port(), 5982);
//! ```

pub mod consensus;
pub mod crypto;
pub mod params;

#[doc(hidden)]
pub mod testing;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Monetary amount in base units
    pub type Amount = i64;

    /// Base units per coin (8 decimal places)
    pub const COIN: Amount = 100_000_000;
}
