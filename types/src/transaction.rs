//! Minimal read-only view of a saved wallet transaction.

use serde::{Deserialize, Serialize};

use crate::network::NetworkName;
use crate::time::Timestamp;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTransaction {
    pub id: String,
    pub network: NetworkName,
    /// Block time of the transaction.
    pub timestamp: Timestamp,
}

impl SavedTransaction {
    pub fn new(id: impl Into<String>, network: NetworkName, timestamp: Timestamp) -> Self {
        Self {
            id: id.into(),
            network,
            timestamp,
        }
    }
}
