//! Blocking analog reads.

use core::fmt;
use core::marker::PhantomData;

use crate::config::{MonitorConfig, adc_max_code};
use crate::io::AdcSource;

/// Combine a conversion result held in two 8-bit registers.
///
/// `read_low` always runs before `read_high`. On AVR the low-byte read
/// latches the high byte until it is read; the other order mixes bytes from
/// two conversions. Cores with a 16-bit result register don't need this.
#[inline]
pub fn read_split_result(read_low: impl FnOnce() -> u8, read_high: impl FnOnce() -> u8) -> u16 {
    let low = read_low();
    let high = read_high();
    u16::from_le_bytes([low, high])
}

/// One conversion at a time from an [`AdcSource`], range-limited to
/// `C::ADC_BITS` bits.
pub struct AnalogReader<A: AdcSource, C: MonitorConfig> {
    source: A,
    _config: PhantomData<C>,
}

impl<A: AdcSource, C: MonitorConfig> AnalogReader<A, C> {
    /// Largest code `read` can return.
    pub const MAX_CODE: u16 = adc_max_code::<C>();

    /// Wrap a conversion source.
    pub fn new(source: A) -> Self {
        Self {
            source,
            _config: PhantomData,
        }
    }

    /// Run one conversion, blocking until it completes.
    ///
    /// Codes above `2^ADC_BITS - 1` are clamped to it, so an out-of-range
    /// result still reads as full scale in the same direction.
    pub fn read(&mut self) -> Result<u16, A::Error> {
        let raw = self.source.start_and_wait()?;
        Ok(raw.min(Self::MAX_CODE))
    }

    /// Access the underlying source.
    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }

    /// Release the underlying source.
    pub fn into_inner(self) -> A {
        self.source
    }
}

impl<A: AdcSource + fmt::Debug, C: MonitorConfig> fmt::Debug for AnalogReader<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalogReader")
            .field("source", &self.source)
            .field("max_code", &Self::MAX_CODE)
            .finish()
    }
}
