//! Duration helpers.

pub const SECS_PER_MINUTE: f64 = 60.0;
pub const SECS_PER_HOUR: f64 = 60.0 * 60.0;
pub const SECS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

/// `secs` expressed in `unit_secs` units, rounded half away from zero.
///
/// Only meant for display; compare raw seconds, not the rounded value.
pub fn rounded_units(secs: f64, unit_secs: f64) -> i64 {
    (secs / unit_secs).round() as i64
}
