//! Network registry: network parameters by name.

use railway_types::{Network, NetworkName};

use crate::config::WalletConfig;

/// Looks up network parameters by name.
pub trait NetworkRegistry {
    /// `None` when the network is not known to this registry.
    fn network_for_name(&self, name: NetworkName) -> Option<&Network>;
}

/// A registry over a fixed list of networks, usually taken from config.
#[derive(Clone, Debug, Default)]
pub struct StaticNetworkRegistry {
    networks: Vec<Network>,
}

impl StaticNetworkRegistry {
    pub fn new(networks: Vec<Network>) -> Self {
        Self { networks }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.networks.clone())
    }
}

impl NetworkRegistry for StaticNetworkRegistry {
    fn network_for_name(&self, name: NetworkName) -> Option<&Network> {
        self.networks.iter().find(|n| n.name == name)
    }
}
