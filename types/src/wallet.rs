//! Wallet identity and merkle-tree version selectors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wallet currently shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendWallet {
    pub id: String,
    pub name: String,
    /// Shielded (0zk) address.
    pub railgun_address: String,
    #[serde(default)]
    pub is_view_only: bool,
}

/// Which shielded merkle tree (and POI list set) balances are read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxidVersion {
    #[serde(rename = "V2_PoseidonMerkle")]
    V2PoseidonMerkle,
    #[serde(rename = "V3_PoseidonMerkle")]
    V3PoseidonMerkle,
}

impl TxidVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2PoseidonMerkle => "V2_PoseidonMerkle",
            Self::V3PoseidonMerkle => "V3_PoseidonMerkle",
        }
    }
}

impl fmt::Display for TxidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
