#![no_std]
#![no_main]

use energy_monitor::{AdcSource, ByteTx, DefaultConfig, Monitor, TickCounter};
use panic_halt as _;

// Minimal ByteTx implementation - discards every byte
pub struct NullTx;

impl ByteTx for NullTx {
    type Error = ();

    fn put_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

// Minimal AdcSource implementation - opaque code so conversion is not folded
pub struct FixedAdc;

impl AdcSource for FixedAdc {
    type Error = ();

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        Ok(core::hint::black_box(512))
    }
}

// Ticked by SysTick on real hardware; nothing drives it here
static CLOCK: TickCounter = TickCounter::new();

#[cortex_m_rt::exception]
fn SysTick() {
    CLOCK.on_tick();
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut monitor: Monitor<DefaultConfig, _, _> =
        Monitor::new(FixedAdc, NullTx, CLOCK.snapshot());

    // Emit one record so the encoder and converter are included
    // Use black_box to prevent optimizer from removing the code
    let due = core::hint::black_box(monitor.scheduler().next_due());
    let _ = core::hint::black_box(monitor.poll(due));

    // Include the main loop itself
    let _ = core::hint::black_box(monitor.run(&CLOCK));

    loop {
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
