//! USART0 transmitter and ADC0 adapters for ATmega328P

use avr_device::atmega328p::{ADC, USART0};
use energy_monitor::adc::read_split_result;
use energy_monitor::{AdcSource, ByteTx, DefaultConfig, MonitorConfig};

// =============================================================================
// USART0 ByteTx Implementation
// =============================================================================

const CPU_HZ: u32 = 16_000_000;
const UBRR: u32 = CPU_HZ / (16 * DefaultConfig::UART_BAUD) - 1;

pub struct Usart0Tx {
    usart: USART0,
}

impl Usart0Tx {
    /// 8N1, transmitter only.
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0().write(|w| unsafe { w.bits(UBRR as u16) });
        usart.ucsr0b().write(|w| w.txen0().set_bit());
        usart.ucsr0c().write(|w| w.ucsz0().chr8());
        Self { usart }
    }
}

impl ByteTx for Usart0Tx {
    type Error = core::convert::Infallible;

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        while self.usart.ucsr0a().read().udre0().bit_is_clear() {}
        self.usart.udr0().write(|w| unsafe { w.bits(byte) });
        Ok(())
    }
}

// =============================================================================
// ADC0 AdcSource Implementation
// =============================================================================

// Data-space addresses of the result register halves
const ADCL: *const u8 = 0x78 as *const u8;
const ADCH: *const u8 = 0x79 as *const u8;

/// Single conversions on ADC0 (A0) against AVCC.
pub struct Adc0 {
    adc: ADC,
}

impl Adc0 {
    pub fn new(adc: ADC) -> Self {
        adc.admux().write(|w| w.refs().avcc().mux().adc0());
        // clk/128 keeps the ADC clock at 125 kHz
        adc.adcsra().write(|w| w.aden().set_bit().adps().prescaler_128());
        Self { adc }
    }
}

impl AdcSource for Adc0 {
    type Error = core::convert::Infallible;

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        self.adc.adcsra().modify(|_, w| w.adsc().set_bit());
        while self.adc.adcsra().read().adsc().bit_is_set() {}

        // Reading ADCL locks the result until ADCH is read
        let code = read_split_result(
            || unsafe { core::ptr::read_volatile(ADCL) },
            || unsafe { core::ptr::read_volatile(ADCH) },
        );
        Ok(code)
    }
}
