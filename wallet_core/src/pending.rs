//! Shield pending (unshield-only standby) period timing.
//!
//! Everything here is derived from the clock at call time. Results must not
//! be cached: the countdown text changes as time passes.

use railway_types::{Clock, Network, NetworkName, PoiParams, Timestamp};
use railway_utils::{rounded_units, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};

use crate::registry::NetworkRegistry;

/// Added to the standby period when callers schedule a balance refresh.
pub const SHIELD_PENDING_BUFFER_SECS: u64 = 60;

pub const AVAILABLE_SOON_TEXT: &str = "Will be available soon";

/// Estimated time left in the standby period for a shield at `tx_timestamp`.
///
/// Once the period has elapsed this returns "Will be available soon"; by then
/// the bucket is normally reclassified away from `ShieldPending` already.
pub fn shield_pending_complete_text(
    tx_timestamp: Timestamp,
    network: &Network,
    params: &PoiParams,
    clock: &dyn Clock,
) -> String {
    let pending_secs = params.pending_period_secs(network) as f64;
    let sec_left = pending_secs - tx_timestamp.secs_before(clock.now_secs());
    format_countdown(sec_left)
}

/// Render seconds left as "Est. {N}{unit} in revert-only standby period".
///
/// Bands use the unrounded value: `<60` seconds, `<3600` minutes, `<86400`
/// hours, days beyond that.
pub fn format_countdown(sec_left: f64) -> String {
    if sec_left <= 0.0 {
        return AVAILABLE_SOON_TEXT.to_string();
    }

    let time_str = if sec_left < SECS_PER_MINUTE {
        format!("{}s", rounded_units(sec_left, 1.0))
    } else if sec_left < SECS_PER_HOUR {
        format!("{}m", rounded_units(sec_left, SECS_PER_MINUTE))
    } else if sec_left < SECS_PER_DAY {
        format!("{}h", rounded_units(sec_left, SECS_PER_HOUR))
    } else {
        format!("{}d", rounded_units(sec_left, SECS_PER_DAY))
    };
    format!("Est. {time_str} in revert-only standby period")
}

/// The full standby period for the network's class, e.g. "1 hour".
pub fn max_shield_pending_time_text(network: &Network, params: &PoiParams) -> String {
    format_pending_duration(params.pending_period_secs(network) as f64)
}

/// Render a whole duration in seconds, minutes, or hours. No upper bound.
pub fn format_pending_duration(secs: f64) -> String {
    if secs < SECS_PER_MINUTE {
        format!("{} seconds", rounded_units(secs, 1.0))
    } else if secs < SECS_PER_HOUR {
        format!("{} minutes", rounded_units(secs, SECS_PER_MINUTE))
    } else {
        let hours = rounded_units(secs, SECS_PER_HOUR);
        let unit = if hours == 1 { "hour" } else { "hours" };
        format!("{hours} {unit}")
    }
}

/// Seconds a caller should wait before re-checking a shield on `network_name`.
///
/// `None` when the registry does not know the network.
pub fn wait_time_for_shield_pending(
    registry: &dyn NetworkRegistry,
    network_name: NetworkName,
    params: &PoiParams,
) -> Option<u64> {
    let network = registry.network_for_name(network_name)?;
    Some(params.pending_period_secs(network) + SHIELD_PENDING_BUFFER_SECS)
}
