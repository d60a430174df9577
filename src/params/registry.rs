//! Network selection
//!
//! [`NetworkRegistry`] owns the three parameter sets and remembers which one
//! is active. Components should receive the registry or an
//! `Arc<ChainParams>` from their owner; the process-wide handle at the end
//! of this module exists for code that cannot have one threaded through.

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use super::{ChainParams, Network, ParamsError};
use crate::consensus::BlockHasher;

/// All supported parameter sets plus the active selection
#[derive(Debug)]
pub struct NetworkRegistry {
    main: Arc<ChainParams>,
    test: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    selected: RwLock<Option<Network>>,
}

impl NetworkRegistry {
    /// Build and verify every network's parameters.
    ///
    /// Nothing is selected until [`NetworkRegistry::select`] is called.
    pub fn new(hasher: &dyn BlockHasher) -> Result<Self, ParamsError> {
        Ok(Self {
            main: Arc::new(ChainParams::main(hasher)?),
            test: Arc::new(ChainParams::testnet(hasher)?),
            regtest: Arc::new(ChainParams::regtest(hasher)?),
            selected: RwLock::new(None),
        })
    }

    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        match network {
            Network::Main => Arc::clone(&self.main),
            Network::Test => Arc::clone(&self.test),
            Network::Regtest => Arc::clone(&self.regtest),
        }
    }

    /// Parameters for a network name, without changing the selection
    pub fn lookup(&self, name: &str) -> Result<Arc<ChainParams>, ParamsError> {
        let network: Network = name.parse()?;
        Ok(self.get(network))
    }

    /// Make the named network active.
    ///
    /// Unknown names leave the current selection untouched.
    pub fn select(&self, name: &str) -> Result<Arc<ChainParams>, ParamsError> {
        let network: Network = name.parse().map_err(|err| {
            tracing::warn!(name, "rejected network selection");
            err
        })?;
        Ok(self.select_network(network))
    }

    pub fn select_network(&self, network: Network) -> Arc<ChainParams> {
        let previous = self.selected.write().replace(network);
        tracing::info!(%network, ?previous, "selected network");
        self.get(network)
    }

    pub fn selected(&self) -> Option<Network> {
        *self.selected.read()
    }

    /// Parameters of the selected network
    pub fn active(&self) -> Result<Arc<ChainParams>, ParamsError> {
        self.selected()
            .map(|network| self.get(network))
            .ok_or(ParamsError::NoActiveNetwork)
    }
}

static GLOBAL: OnceCell<NetworkRegistry> = OnceCell::new();

/// Build the process-wide registry on first call; later calls return it.
pub fn init_global(hasher: &dyn BlockHasher) -> Result<&'static NetworkRegistry, ParamsError> {
    GLOBAL.get_or_try_init(|| NetworkRegistry::new(hasher))
}

pub fn global() -> Option<&'static NetworkRegistry> {
    GLOBAL.get()
}

/// Select the active network on the process-wide registry
pub fn select_network(name: &str) -> Result<Arc<ChainParams>, ParamsError> {
    global()
        .ok_or(ParamsError::RegistryNotInitialized)?
        .select(name)
}

/// Parameters of the active network on the process-wide registry.
///
/// # Panics
///
/// If [`init_global`] or [`select_network`] has not run yet. Startup must
/// choose a network before anything reads parameters.
pub fn params() -> Arc<ChainParams> {
    match global().map(NetworkRegistry::active) {
        Some(Ok(params)) => params,
        Some(Err(err)) => panic!("chain parameters requested before selection: {err}"),
        None => panic!("chain parameters requested before the registry was initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::DoubleSha256;
    use crate::testing::ReferenceHasher;

    #[test]
    fn test_nothing_selected_initially() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        assert_eq!(registry.selected(), None);
        assert_eq!(registry.active().unwrap_err(), ParamsError::NoActiveNetwork);
    }

    #[test]
    fn test_select_main() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        let selected = registry.select("main").unwrap();
        assert_eq!(selected.network_id(), "main");
        assert_eq!(registry.active().unwrap().network_id(), "main");
    }

    #[test]
    fn test_reselection_overwrites() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        registry.select("main").unwrap();
        registry.select("regtest").unwrap();
        assert_eq!(registry.selected(), Some(Network::Regtest));
    }

    #[test]
    fn test_unknown_name_keeps_selection() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        registry.select("test").unwrap();
        assert_eq!(
            registry.select("bogus").unwrap_err(),
            ParamsError::UnknownNetwork("bogus".to_string())
        );
        assert_eq!(registry.selected(), Some(Network::Test));
    }

    #[test]
    fn test_unknown_name_before_selection() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        assert!(registry.select("mainnet").is_err());
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn test_lookup_does_not_select() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        assert_eq!(registry.lookup("regtest").unwrap().network(), Network::Regtest);
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn test_parameter_sets_are_shared() {
        let registry = NetworkRegistry::new(&ReferenceHasher).unwrap();
        let a = registry.select("main").unwrap();
        let b = registry.active().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_construction_fails_with_wrong_hasher() {
        assert!(matches!(
            NetworkRegistry::new(&DoubleSha256),
            Err(ParamsError::GenesisHashMismatch {
                network: Network::Main,
                ..
            })
        ));
    }
}
