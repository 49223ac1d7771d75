//! Nullable network registry: canned networks, recorded lookups.

use railway_types::{Network, NetworkName};
use railway_wallet_core::NetworkRegistry;
use std::cell::RefCell;

/// A registry that knows only the networks it was given.
pub struct NullNetworkRegistry {
    networks: Vec<Network>,
    /// Every name looked up, in call order.
    lookups: RefCell<Vec<NetworkName>>,
}

impl NullNetworkRegistry {
    pub fn new(networks: Vec<Network>) -> Self {
        Self {
            networks,
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// A registry that knows no networks at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Get all looked-up names (for assertions).
    pub fn lookups(&self) -> Vec<NetworkName> {
        self.lookups.borrow().clone()
    }
}

impl Default for NullNetworkRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl NetworkRegistry for NullNetworkRegistry {
    fn network_for_name(&self, name: NetworkName) -> Option<&Network> {
        self.lookups.borrow_mut().push(name);
        self.networks.iter().find(|n| n.name == name)
    }
}
