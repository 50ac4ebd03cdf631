//! STM32F072 (NUCLEO-F072RB) current monitor
//!
//! Samples an ACS712 on PA0 every 20 ms and prints `<ms>,<mA>` lines.
//!
//! # Hardware Setup
//! - Board: NUCLEO-F072RB
//! - Sensor: ACS712-05B output on PA0 (A0), powered from 5 V
//! - UART: USART2 (PA2=TX, PA3=RX) connected to ST-LINK VCP
//! - Baud rate: 115200

#![no_std]
#![no_main]

mod hw_setup;
mod io;
mod systick;

use cortex_m_rt::{entry, exception};
use panic_halt as _;
use stm32f0xx_hal::pac;

use energy_monitor::Monitor;
use energy_monitor_stm32f072::NucleoF072Config;

use crate::systick::CLOCK;

// =============================================================================
// Main Entry Point
// =============================================================================

#[entry]
fn main() -> ! {
    // Get peripheral access
    let (Some(pac), Some(core)) = (pac::Peripherals::take(), pac::CorePeripherals::take()) else {
        panic!("peripherals already taken");
    };

    // Initialize all hardware (clocks, UART, ADC, SysTick)
    let hw = hw_setup::init_hardware(pac, core);

    let mut monitor: Monitor<NucleoF072Config, _, _> =
        Monitor::new(hw.adc, hw.uart, CLOCK.snapshot());

    // Neither adapter reports errors in practice; if one ever does, stop here
    // and let the watchdog or a reset recover.
    match monitor.run(&CLOCK) {
        Ok(never) => match never {},
        Err(_e) => loop {
            cortex_m::asm::wfi();
        },
    }
}

// =============================================================================
// Interrupt Handlers
// =============================================================================

/// SysTick interrupt handler
///
/// Called every 1ms to advance the tick counter.
#[exception]
fn SysTick() {
    CLOCK.on_tick();
}
