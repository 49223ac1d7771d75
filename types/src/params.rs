//! Private POI protocol parameters.
//!
//! The standby-period length depends only on the network class. Both
//! constants are configurable so deployments and tests can shorten the period.

use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Shield pending (unshield-only standby) parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiParams {
    /// Standby period on mainnets, in seconds. Default: 1 hour.
    #[serde(default = "default_shield_pending_sec")]
    pub shield_pending_sec: u64,

    /// Standby period on testnets, in seconds. Default: 5 minutes.
    #[serde(default = "default_shield_pending_sec_test_net")]
    pub shield_pending_sec_test_net: u64,
}

fn default_shield_pending_sec() -> u64 {
    PoiParams::SHIELD_PENDING_SEC
}

fn default_shield_pending_sec_test_net() -> u64 {
    PoiParams::SHIELD_PENDING_SEC_TEST_NET
}

impl PoiParams {
    pub const SHIELD_PENDING_SEC: u64 = 60 * 60;
    pub const SHIELD_PENDING_SEC_TEST_NET: u64 = 5 * 60;

    /// Standby period for the network's class, in seconds.
    ///
    /// Derived on every call; never cache the result against a clock reading.
    pub fn pending_period_secs(&self, network: &Network) -> u64 {
        if network.is_testnet() {
            self.shield_pending_sec_test_net
        } else {
            self.shield_pending_sec
        }
    }
}

impl Default for PoiParams {
    fn default() -> Self {
        Self {
            shield_pending_sec: default_shield_pending_sec(),
            shield_pending_sec_test_net: default_shield_pending_sec_test_net(),
        }
    }
}
