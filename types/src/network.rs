//! Networks and their Private POI launch gates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::TypesError;
use crate::time::Timestamp;

/// Identifies a supported network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkName {
    #[serde(rename = "Ethereum")]
    Ethereum,
    #[serde(rename = "BNB_Chain")]
    BnbChain,
    #[serde(rename = "Polygon")]
    Polygon,
    #[serde(rename = "Arbitrum")]
    Arbitrum,
    #[serde(rename = "Ethereum_Sepolia")]
    EthereumSepolia,
    #[serde(rename = "Polygon_Amoy")]
    PolygonAmoy,
    #[serde(rename = "Hardhat")]
    Hardhat,
}

impl NetworkName {
    pub const ALL: [NetworkName; 7] = [
        Self::Ethereum,
        Self::BnbChain,
        Self::Polygon,
        Self::Arbitrum,
        Self::EthereumSepolia,
        Self::PolygonAmoy,
        Self::Hardhat,
    ];

    /// Identifier used on the wire and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::BnbChain => "BNB_Chain",
            Self::Polygon => "Polygon",
            Self::Arbitrum => "Arbitrum",
            Self::EthereumSepolia => "Ethereum_Sepolia",
            Self::PolygonAmoy => "Polygon_Amoy",
            Self::Hardhat => "Hardhat",
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypesError::UnknownNetwork(s.to_string()))
    }
}

/// When Private POI became available on a network.
///
/// On the wire this is a plain epoch-seconds number where `0` means no gate
/// is configured. That sentinel is decoded into [`PoiLaunchGate::Ungated`]
/// and a real launch time is always non-zero, so every gate serializes to a
/// distinct number and decodes back to itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum PoiLaunchGate {
    /// No launch gate: every transaction is treated as predating POI.
    Ungated,
    /// POI launched at this many epoch seconds.
    LaunchedAt(NonZeroU64),
}

impl PoiLaunchGate {
    /// Whether a transaction at `tx_timestamp` happened before POI launched.
    pub fn predates(&self, tx_timestamp: Timestamp) -> bool {
        match self {
            Self::Ungated => true,
            Self::LaunchedAt(launch) => tx_timestamp.as_secs() < launch.get(),
        }
    }
}

impl From<u64> for PoiLaunchGate {
    fn from(secs: u64) -> Self {
        NonZeroU64::new(secs).map_or(Self::Ungated, Self::LaunchedAt)
    }
}

impl From<PoiLaunchGate> for u64 {
    fn from(gate: PoiLaunchGate) -> Self {
        match gate {
            PoiLaunchGate::Ungated => 0,
            PoiLaunchGate::LaunchedAt(secs) => secs.get(),
        }
    }
}

/// Per-network Private POI settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiNetworkConfig {
    /// Unset when the launch time is not known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_timestamp: Option<PoiLaunchGate>,
}

/// Network parameters as supplied by the network registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: NetworkName,
    pub public_name: String,
    /// Absent means mainnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_testnet: Option<bool>,
    /// Absent when Private POI is not active on this network at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poi: Option<PoiNetworkConfig>,
}

impl Network {
    pub fn new(name: NetworkName, public_name: impl Into<String>) -> Self {
        Self {
            name,
            public_name: public_name.into(),
            is_testnet: None,
            poi: None,
        }
    }

    pub fn testnet(mut self) -> Self {
        self.is_testnet = Some(true);
        self
    }

    pub fn with_poi_launch(mut self, launch_timestamp: PoiLaunchGate) -> Self {
        self.poi = Some(PoiNetworkConfig {
            launch_timestamp: Some(launch_timestamp),
        });
        self
    }

    /// Testnet flag, defaulting to `false` when unset.
    pub fn is_testnet(&self) -> bool {
        self.is_testnet.unwrap_or(false)
    }

    /// Whether a transaction predates POI availability on this network.
    ///
    /// A network with no POI section, or no launch timestamp in it, never
    /// reports "before launch".
    pub fn predates_poi_launch(&self, tx_timestamp: Timestamp) -> bool {
        self.poi
            .as_ref()
            .and_then(|poi| poi.launch_timestamp)
            .is_some_and(|gate| gate.predates(tx_timestamp))
    }

    /// The built-in network list used when no configuration overrides it.
    pub fn defaults() -> Vec<Network> {
        use NetworkName::*;
        let launched = |secs: u64| PoiLaunchGate::from(secs);
        vec![
            Network::new(Ethereum, "Ethereum").with_poi_launch(launched(1_701_990_000)),
            Network::new(BnbChain, "BNB Chain").with_poi_launch(launched(1_701_990_000)),
            Network::new(Polygon, "Polygon PoS").with_poi_launch(launched(1_701_990_000)),
            Network::new(Arbitrum, "Arbitrum").with_poi_launch(launched(1_701_990_000)),
            Network::new(EthereumSepolia, "Sepolia Testnet")
                .testnet()
                .with_poi_launch(PoiLaunchGate::Ungated),
            Network::new(PolygonAmoy, "Polygon Amoy Testnet")
                .testnet()
                .with_poi_launch(PoiLaunchGate::Ungated),
            Network::new(Hardhat, "Hardhat").testnet(),
        ]
    }
}
