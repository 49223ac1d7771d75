//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the status layer (clock, network registry,
//! balance aggregation) is abstracted behind a trait. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record how they were called for assertions
//!
//! Usage: swap real implementations for nullables in tests.

pub mod balances;
pub mod clock;
pub mod registry;

pub use balances::{BalanceQuery, NullBalanceAggregator};
pub use clock::NullClock;
pub use registry::NullNetworkRegistry;
