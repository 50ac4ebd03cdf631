//! Running statistics over a record stream.
//!
//! Integer-only, fixed-size state, so it works on the target as well as on a
//! host reading lines back with [`Record::parse`](crate::Record::parse).
//!
//! Energy follows `E = I_avg * V * t`, where `t` is the sample count times the
//! configured period.

use crate::config::MonitorConfig;
use crate::convert::{div_round_half_away, saturate_i32};
use crate::record::Record;

/// Microwatt-hours per (mA * mV * ms).
const UWH_DIVISOR: i128 = 3_600_000;

/// Accumulated mean, RMS and energy of a sequence of current samples.
///
/// Sums saturate instead of wrapping; at realistic currents they never come
/// close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentStats {
    count: u32,
    sum_ma: i64,
    sum_sq_ma: u64,
}

impl CurrentStats {
    /// Empty statistics.
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum_ma: 0,
            sum_sq_ma: 0,
        }
    }

    /// Add one record.
    pub fn push(&mut self, record: &Record) {
        self.push_ma(record.current_ma);
    }

    /// Add one current value in milliamps.
    pub fn push_ma(&mut self, current_ma: i32) {
        let magnitude = u64::from(current_ma.unsigned_abs());
        self.count = self.count.saturating_add(1);
        self.sum_ma = self.sum_ma.saturating_add(i64::from(current_ma));
        self.sum_sq_ma = self.sum_sq_ma.saturating_add(magnitude * magnitude);
    }

    /// Number of samples pushed.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// True if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Mean current, rounded half away from zero. 0 when empty.
    pub fn mean_ma(&self) -> i32 {
        if self.count == 0 {
            return 0;
        }
        saturate_i32(div_round_half_away(self.sum_ma, i64::from(self.count)))
    }

    /// Root-mean-square current, rounded to the nearest milliamp. 0 when empty.
    pub fn rms_ma(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        let count = u64::from(self.count);
        let mean_sq = self.sum_sq_ma.saturating_add(count / 2) / count;
        let root = mean_sq.isqrt();
        // round(sqrt(x)) is root + 1 exactly when x > root^2 + root
        let rounded = if mean_sq - root * root > root {
            root + 1
        } else {
            root
        };
        rounded as u32
    }

    /// Time covered by the samples, one sample period each.
    pub fn duration_ms<C: MonitorConfig>(&self) -> u64 {
        u64::from(self.count) * u64::from(C::SAMPLE_PERIOD_MS)
    }

    /// Energy drawn from a `supply_mv` rail over [`duration_ms`](Self::duration_ms),
    /// in microwatt-hours, rounded half away from zero.
    ///
    /// Negative when the mean current is negative.
    pub fn energy_uwh<C: MonitorConfig>(&self, supply_mv: u32) -> i64 {
        // sum_ma already equals mean * count
        let num =
            i128::from(self.sum_ma) * i128::from(supply_mv) * i128::from(C::SAMPLE_PERIOD_MS);
        let half = UWH_DIVISOR / 2;
        let biased = if num >= 0 { num + half } else { num - half };
        let uwh = biased / UWH_DIVISOR;
        uwh.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

impl<'a> Extend<&'a Record> for CurrentStats {
    fn extend<I: IntoIterator<Item = &'a Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl Extend<Record> for CurrentStats {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(&record);
        }
    }
}

impl FromIterator<Record> for CurrentStats {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
