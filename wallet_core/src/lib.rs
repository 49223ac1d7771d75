//! Wallet core library for shielded-balance POI status.
//!
//! Provides what a wallet UI needs to explain Private Proof of Innocence state:
//! - Balance bucket status (label, color token, explanatory message)
//! - Shield pending standby countdowns and poll horizons
//! - Listing tokens that still hold non-spendable balance
//! - Configuration, network registry, and theme seams

pub mod balance;
pub mod config;
pub mod error;
pub mod pending;
pub mod pending_balances;
pub mod registry;
pub mod status;
pub mod theme;

pub use balance::{
    parse_balance, BalanceAggregator, RailgunBalanceAggregator, RailgunWalletBalances,
    TokenBalances,
};
pub use config::WalletConfig;
pub use error::WalletError;
pub use pending::{
    max_shield_pending_time_text, shield_pending_complete_text, wait_time_for_shield_pending,
    SHIELD_PENDING_BUFFER_SECS,
};
pub use pending_balances::tokens_pending_balances;
pub use registry::{NetworkRegistry, StaticNetworkRegistry};
pub use status::{status_message, transaction_poi_status, TransactionPoiStatus};
pub use theme::{Styleguide, Theme};
