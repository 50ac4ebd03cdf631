//! UART transmitter and ADC channel adapters for STM32F072

use stm32f0xx_hal::{
    adc::Adc,
    gpio::{Analog, gpioa::PA0},
    pac::USART2,
    prelude::*,
    serial::Tx,
};

use energy_monitor::{AdcSource, ByteTx};

// =============================================================================
// UART ByteTx Implementation
// =============================================================================

pub type UartTx = Tx<USART2>;

pub struct UartByteTx {
    tx: UartTx,
}

impl UartByteTx {
    pub fn new(tx: UartTx) -> Self {
        Self { tx }
    }
}

impl ByteTx for UartByteTx {
    type Error = ();

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        // Spin until TXE, as the core expects
        nb::block!(self.tx.write(byte)).map_err(|_| ())
    }
}

// =============================================================================
// ADC AdcSource Implementation
// =============================================================================

pub type SensorPin = PA0<Analog>;

/// Single conversions on PA0.
///
/// ADC_DR is a 16-bit register read in one access, so the low-byte-first rule
/// of 8-bit parts does not apply here.
pub struct SensorAdc {
    adc: Adc,
    pin: SensorPin,
}

impl SensorAdc {
    pub fn new(adc: Adc, pin: SensorPin) -> Self {
        Self { adc, pin }
    }
}

impl AdcSource for SensorAdc {
    type Error = ();

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        nb::block!(self.adc.read(&mut self.pin)).map_err(|_| ())
    }
}
