//! Fixed-period sample scheduling.
//!
//! The due time advances by exactly one period per sample and is never
//! resynchronized to the current time. A late iteration therefore makes the
//! next check fire immediately, and the long-run sample rate stays at
//! `1 / SAMPLE_PERIOD_MS` whatever the loop jitter is.

use core::fmt;
use core::marker::PhantomData;

use crate::config::{MonitorConfig, period_ticks};
use crate::time::ticks_since;

/// Decides when the next sample is due.
///
/// Owned by the main loop; the tick interrupt never touches it.
pub struct SampleScheduler<C: MonitorConfig> {
    next_due: u32,
    _config: PhantomData<C>,
}

impl<C: MonitorConfig> SampleScheduler<C> {
    /// Period in ticks.
    pub const PERIOD: u32 = period_ticks::<C>();

    /// First sample one period after `now`.
    pub const fn starting_at(now: u32) -> Self {
        Self::with_next_due(now.wrapping_add(Self::PERIOD))
    }

    /// First sample at an explicit tick value.
    pub const fn with_next_due(next_due: u32) -> Self {
        Self {
            next_due,
            _config: PhantomData,
        }
    }

    /// Tick value at which the next sample is due.
    pub const fn next_due(&self) -> u32 {
        self.next_due
    }

    /// True once `now` has reached the due time (modular comparison).
    #[inline]
    pub const fn is_due(&self, now: u32) -> bool {
        ticks_since(now, self.next_due) >= 0
    }

    /// Ticks by which `now` is past the due time; negative while waiting.
    pub const fn lag(&self, now: u32) -> i32 {
        ticks_since(now, self.next_due)
    }

    /// Move the due time forward by one period.
    ///
    /// Never jumps to `now`: if the loop fell several periods behind, the
    /// following checks keep firing until the schedule has caught up.
    #[inline]
    pub fn advance(&mut self) {
        self.next_due = self.next_due.wrapping_add(Self::PERIOD);
    }
}

// Manual impls: derives would demand the same traits from the config marker.
impl<C: MonitorConfig> Clone for SampleScheduler<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: MonitorConfig> Copy for SampleScheduler<C> {}

impl<C: MonitorConfig> fmt::Debug for SampleScheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleScheduler")
            .field("next_due", &self.next_due)
            .field("period", &Self::PERIOD)
            .finish()
    }
}
