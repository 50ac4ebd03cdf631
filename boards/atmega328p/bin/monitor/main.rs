//! ATmega328P (Arduino Uno) current monitor
//!
//! Samples an ACS712 on A0 every 20 ms and prints `<ms>,<mA>` lines.
//!
//! # Hardware Setup
//! - Board: Arduino Uno (16 MHz)
//! - Sensor: ACS712-05B output on A0, AVCC reference
//! - UART: USART0 (D1=TX) through the on-board USB bridge
//! - Baud rate: 9600

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

mod io;
mod timer;

use panic_halt as _;

use energy_monitor::{DefaultConfig, Monitor};

use crate::io::{Adc0, Usart0Tx};
use crate::timer::CLOCK;

#[avr_device::entry]
fn main() -> ! {
    let Some(dp) = avr_device::atmega328p::Peripherals::take() else {
        panic!();
    };

    let tx = Usart0Tx::new(dp.USART0);
    let adc = Adc0::new(dp.ADC);
    timer::start(&dp.TC0);

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    let mut monitor: Monitor<DefaultConfig, _, _> = Monitor::new(adc, tx, CLOCK.snapshot());

    // Both adapters are infallible
    match monitor.run(&CLOCK) {
        Ok(never) => match never {},
        Err(_) => loop {
            avr_device::asm::sleep();
        },
    }
}
