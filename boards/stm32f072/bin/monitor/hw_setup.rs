//! Hardware initialization for NUCLEO-F072RB

use stm32f0xx_hal::{
    adc::{Adc, AdcPrecision},
    pac,
    prelude::*,
    serial::Serial,
};

use energy_monitor::MonitorConfig;
use energy_monitor_stm32f072::NucleoF072Config;

use crate::io::{SensorAdc, UartByteTx};

// =============================================================================
// Hardware Initialization
// =============================================================================

/// Initialized hardware peripherals returned from setup
pub struct HardwareConfig {
    pub uart: UartByteTx,
    pub adc: SensorAdc,
}

/// Initialize all hardware peripherals
///
/// This function configures:
/// - System clocks (48 MHz from internal HSI48)
/// - USART2 on PA2/PA3 at 115200 baud (connected to ST-LINK VCP)
/// - ADC, 10-bit, sensor on PA0 (Arduino A0)
/// - SysTick at 1 kHz driving the tick counter
pub fn init_hardware(mut pac: pac::Peripherals, core: pac::CorePeripherals) -> HardwareConfig {
    // Configure clocks
    let mut rcc = pac.RCC.configure().sysclk(48.mhz()).freeze(&mut pac.FLASH);

    // Get GPIO ports
    let gpioa = pac.GPIOA.split(&mut rcc);

    // Configure USART2 pins (PA2=TX, PA3=RX) and the sensor input (PA0)
    let (tx_pin, rx_pin, sensor_pin) = cortex_m::interrupt::free(|cs| {
        (
            gpioa.pa2.into_alternate_af1(cs),
            gpioa.pa3.into_alternate_af1(cs),
            gpioa.pa0.into_analog(cs),
        )
    });

    // Initialize USART2; only the TX half is used
    let serial = Serial::usart2(
        pac.USART2,
        (tx_pin, rx_pin),
        NucleoF072Config::UART_BAUD.bps(),
        &mut rcc,
    );
    let (uart_tx, _uart_rx) = serial.split();

    // 10-bit conversions, right aligned
    let mut adc = Adc::new(pac.ADC, &mut rcc);
    adc.set_precision(AdcPrecision::B_10);

    crate::systick::start(core.SYST, rcc.clocks.sysclk().0);

    HardwareConfig {
        uart: UartByteTx::new(uart_tx),
        adc: SensorAdc::new(adc, sensor_pin),
    }
}
