//! Shared utilities for the POI status workspace.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::{rounded_units, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};
