//! Board parameters for the NUCLEO-F072RB current monitor.
//!
//! The ACS712 runs from the 5 V rail, so its zero-current output (2.5 V) sits
//! above the middle of the 3.3 V ADC range.

#![no_std]

use energy_monitor::MonitorConfig;
use energy_monitor::config::assert_valid;

/// ACS712-05B on PA0, 10-bit conversions against VDDA = 3.3 V, USART2 at
/// 115200 baud (ST-LINK VCP).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NucleoF072Config;

impl MonitorConfig for NucleoF072Config {
    const TICK_MS: u32 = 1;
    const SAMPLE_PERIOD_MS: u32 = 20;
    const UART_BAUD: u32 = 115_200;
    const VREF_MV: i64 = 3300;
    const SENSITIVITY_MV_PER_A: i64 = 185;
    const ADC_BITS: u32 = 10;
    const ADC_FULL_SCALE: i64 = 1023;
    // 2500 mV * 1023 / 3300 mV
    const ADC_MID: i64 = 775;
}

const _: () = assert_valid::<NucleoF072Config>();
