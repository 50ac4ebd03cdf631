//! Millisecond time base shared between the tick interrupt and the main loop.
//!
//! The counter is a 32-bit value that the tick interrupt increments and the
//! main loop reads. On 8- and 16-bit cores a 32-bit load takes several
//! instructions, so an unguarded read can observe half of an increment. Every
//! access therefore goes through a critical section, which masks interrupts,
//! copies the whole counter, and restores the previous interrupt state.
//!
//! At 1 kHz the counter wraps after ~49.7 days. Callers compare timestamps with
//! [`ticks_since`], never with `<`.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

/// Tick counter, safe to place in a `static`.
///
/// Only [`on_tick`](Self::on_tick) mutates it and only
/// [`snapshot`](Self::snapshot) reads it; the cell itself is never exposed.
pub struct TickCounter {
    ticks: Mutex<Cell<u32>>,
}

impl TickCounter {
    /// Counter starting at zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Counter starting at an arbitrary value (useful to exercise wraparound).
    pub const fn starting_at(ticks: u32) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(ticks)),
        }
    }

    /// Advance by one tick. Call from the periodic interrupt handler only.
    #[inline]
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }

    /// Read the whole counter without tearing.
    #[inline]
    pub fn snapshot(&self) -> u32 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TickCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickCounter")
            .field("ticks", &self.snapshot())
            .finish()
    }
}

/// Signed distance from `earlier` to `now`, correct across wraparound.
///
/// Valid while the two timestamps are less than 2^31 ticks apart.
#[inline]
pub const fn ticks_since(now: u32, earlier: u32) -> i32 {
    now.wrapping_sub(earlier) as i32
}
