//! Fundamental types for shielded-balance POI status.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! balance buckets, color tokens, networks and their POI launch gates, timestamps,
//! protocol parameters, and the minimal transaction/wallet views.

pub mod bucket;
pub mod color;
pub mod error;
pub mod network;
pub mod params;
pub mod time;
pub mod transaction;
pub mod wallet;

pub use bucket::BalanceBucket;
pub use color::ColorToken;
pub use error::TypesError;
pub use network::{Network, NetworkName, PoiLaunchGate, PoiNetworkConfig};
pub use params::PoiParams;
pub use time::{Clock, SystemClock, Timestamp};
pub use transaction::SavedTransaction;
pub use wallet::{FrontendWallet, TxidVersion};
