//! Raw ADC code to milliamps, integer arithmetic only.
//!
//! ```text
//! I_mA = round((raw - MID) * VREF_MV * 1000 / (FULL_SCALE * SENS_MV_PER_A))
//! ```
//!
//! The numerator needs 64 bits: 512 * 5000 * 1000 is already past `i32::MAX`.
//! Rounding is half away from zero, so `to_milliamps(MID + k)` and
//! `to_milliamps(MID - k)` are exact negatives of each other.

use crate::config::{DefaultConfig, MonitorConfig};

/// Divide rounding halves away from zero.
///
/// Adds half the denominator to a non-negative numerator, subtracts it from a
/// negative one, then truncates. `den` must be positive.
pub const fn div_round_half_away(num: i64, den: i64) -> i64 {
    let half = den / 2;
    let biased = if num >= 0 { num + half } else { num - half };
    biased / den
}

/// Clamp to the `i32` range.
pub const fn saturate_i32(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

/// Convert a raw code to signed milliamps for configuration `C`.
pub const fn to_milliamps<C: MonitorConfig>(raw: u16) -> i32 {
    let delta = raw as i64 - C::ADC_MID;
    let num = delta * C::VREF_MV * 1000;
    let den = C::ADC_FULL_SCALE * C::SENSITIVITY_MV_PER_A;
    saturate_i32(div_round_half_away(num, den))
}

/// [`to_milliamps`] with the default sensor configuration.
pub const fn raw_to_milliamps(raw: u16) -> i32 {
    to_milliamps::<DefaultConfig>(raw)
}
