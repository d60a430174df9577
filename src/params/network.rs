//! Network identity
//!
//! The fixed set of networks a node can run on, and the message-start bytes
//! that keep their peer-to-peer traffic apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParamsError;

/// A supported network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// Network id as used on the command line and in RPC output
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Resolve the classic `-testnet` / `-regtest` switches.
    ///
    /// Neither flag means main network; both at once is rejected.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Network, ParamsError> {
        match (testnet, regtest) {
            (true, true) => Err(ParamsError::ConflictingNetworkFlags),
            (true, false) => Ok(Network::Test),
            (false, true) => Ok(Network::Regtest),
            (false, false) => Ok(Network::Main),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| ParamsError::UnknownNetwork(s.to_string()))
    }
}

/// Message-start bytes prefixing every P2P message on a network
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
