//! Timer0 time base
//!
//! CTC mode, clk/64, OCR0A = 249: one compare match every 1 ms at 16 MHz.

use avr_device::atmega328p::TC0;
use energy_monitor::TickCounter;

const CPU_HZ: u32 = 16_000_000;
const PRESCALER: u32 = 64;
const TIMER_COUNTS: u32 = CPU_HZ / PRESCALER / 1_000;

const _: () = assert!(TIMER_COUNTS >= 1 && TIMER_COUNTS <= 256);

/// Milliseconds since Timer0 was started
pub static CLOCK: TickCounter = TickCounter::new();

/// Start Timer0 and enable its compare-match interrupt.
///
/// Interrupts stay globally disabled until the caller enables them.
pub fn start(tc0: &TC0) {
    tc0.tccr0a().write(|w| w.wgm0().ctc());
    tc0.ocr0a().write(|w| unsafe { w.bits((TIMER_COUNTS - 1) as u8) });
    tc0.tccr0b().write(|w| w.cs0().prescale_64());
    tc0.timsk0().write(|w| w.ocie0a().set_bit());
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    CLOCK.on_tick();
}
