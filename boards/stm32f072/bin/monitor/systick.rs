//! SysTick time base
//!
//! SysTick fires every 1ms and advances the shared tick counter. Cortex-M0 has
//! no atomic read-modify-write, so both sides go through the counter's
//! critical section (PRIMASK save/restore via `critical-section-single-core`).

use cortex_m::peripheral::{SYST, syst::SystClkSource};
use energy_monitor::TickCounter;

// =============================================================================
// Global Tick Counter
// =============================================================================

/// Milliseconds since SysTick was started
pub static CLOCK: TickCounter = TickCounter::new();

// =============================================================================
// Public API
// =============================================================================

/// Start SysTick at 1 kHz from the core clock and enable its interrupt.
pub fn start(mut syst: SYST, sysclk_hz: u32) {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(sysclk_hz / 1_000 - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
}
