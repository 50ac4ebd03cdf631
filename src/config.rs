//! Compile-time configuration for the sampling core.
//!
//! The `MonitorConfig` trait carries every tunable as an associated const, so
//! changing a parameter means recompiling. Nothing is read at runtime.

use crate::convert::to_milliamps;
use crate::encode::{decimal_len_i32, decimal_len_u32};

/// Sampling, timing and sensor parameters.
///
/// All values are const (zero runtime cost). Use [`assert_valid`] in a
/// `const _: () = ...;` item to reject inconsistent values at build time.
pub trait MonitorConfig {
    /// Milliseconds per hardware tick (default: 1)
    const TICK_MS: u32;

    /// Milliseconds between two samples (default: 20)
    const SAMPLE_PERIOD_MS: u32;

    /// Serial line rate in bits per second, 8N1 framing (default: 9600)
    const UART_BAUD: u32;

    /// ADC reference voltage in millivolts (default: 5000)
    const VREF_MV: i64;

    /// Sensor sensitivity in millivolts per ampere (default: 185)
    const SENSITIVITY_MV_PER_A: i64;

    /// ADC resolution in bits (default: 10)
    const ADC_BITS: u32;

    /// Code that corresponds to `VREF_MV` (default: 1023)
    const ADC_FULL_SCALE: i64;

    /// Code that corresponds to zero current (default: 512)
    const ADC_MID: i64;
}

/// ACS712-05B on a 5 V, 10-bit ADC, sampled every 20 ms at 9600 baud.
///
/// - TICK_MS: 1
/// - SAMPLE_PERIOD_MS: 20 (50 records/s; the longest reachable line,
///   `4294967295,-13527\r\n`, takes 19.8 ms at 9600 baud)
/// - UART_BAUD: 9600
/// - VREF_MV: 5000
/// - SENSITIVITY_MV_PER_A: 185
/// - ADC_BITS: 10, ADC_FULL_SCALE: 1023, ADC_MID: 512
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acs712x05bConfig;

impl MonitorConfig for Acs712x05bConfig {
    const TICK_MS: u32 = 1;
    const SAMPLE_PERIOD_MS: u32 = 20;
    const UART_BAUD: u32 = 9600;
    const VREF_MV: i64 = 5000;
    const SENSITIVITY_MV_PER_A: i64 = 185;
    const ADC_BITS: u32 = 10;
    const ADC_FULL_SCALE: i64 = 1023;
    const ADC_MID: i64 = 512;
}

/// Configuration used when none is named explicitly.
pub type DefaultConfig = Acs712x05bConfig;

/// Bits on the wire per byte with 8N1 framing (start + 8 data + stop).
pub const BITS_PER_FRAME: u32 = 10;

/// Sample period expressed in ticks of the time base.
pub const fn period_ticks<C: MonitorConfig>() -> u32 {
    C::SAMPLE_PERIOD_MS / C::TICK_MS
}

/// Largest raw code the ADC can produce (`2^ADC_BITS - 1`).
pub const fn adc_max_code<C: MonitorConfig>() -> u16 {
    ((1u32 << C::ADC_BITS) - 1) as u16
}

/// Longest record line this configuration can produce, in bytes.
///
/// The timestamp may take all ten digits; the current field is bounded by the
/// converted values of the two extreme codes.
pub const fn worst_line_len<C: MonitorConfig>() -> usize {
    let low = decimal_len_i32(to_milliamps::<C>(0));
    let high = decimal_len_i32(to_milliamps::<C>(adc_max_code::<C>()));
    let current = if low > high { low } else { high };
    decimal_len_u32(u32::MAX) + 1 + current + 2
}

/// Worst-case time in microseconds to transmit one record.
pub const fn line_time_us<C: MonitorConfig>() -> u32 {
    let bits = worst_line_len::<C>() as u64 * BITS_PER_FRAME as u64;
    (bits * 1_000_000).div_ceil(C::UART_BAUD as u64) as u32
}

/// True if a worst-case record fits inside one sample period.
pub const fn has_tx_headroom<C: MonitorConfig>() -> bool {
    (line_time_us::<C>() as u64) < C::SAMPLE_PERIOD_MS as u64 * 1000
}

/// Reject inconsistent parameters.
///
/// Panics, which fails compilation when evaluated in a const context:
///
/// ```
/// use energy_monitor::config::{assert_valid, DefaultConfig};
/// const _: () = assert_valid::<DefaultConfig>();
/// ```
pub const fn assert_valid<C: MonitorConfig>() {
    assert!(C::TICK_MS > 0, "tick quantum must be non-zero");
    assert!(
        C::SAMPLE_PERIOD_MS >= C::TICK_MS,
        "sample period shorter than one tick"
    );
    assert!(
        C::SAMPLE_PERIOD_MS % C::TICK_MS == 0,
        "sample period must be a whole number of ticks"
    );
    assert!(C::UART_BAUD > 0, "baud rate must be non-zero");
    // The headroom check converts the extreme codes, so the ADC and sensor
    // parameters it depends on are checked first.
    assert!(C::ADC_BITS > 0 && C::ADC_BITS <= 16, "ADC width out of range");
    assert!(C::ADC_FULL_SCALE > 0, "full-scale code must be positive");
    assert!(
        C::ADC_FULL_SCALE <= adc_max_code::<C>() as i64,
        "full-scale code exceeds ADC width"
    );
    assert!(
        C::ADC_MID >= 0 && C::ADC_MID <= C::ADC_FULL_SCALE,
        "mid-scale code outside the ADC range"
    );
    assert!(C::SENSITIVITY_MV_PER_A > 0, "sensitivity must be positive");
    assert!(
        has_tx_headroom::<C>(),
        "sample period leaves no room to transmit a full record"
    );
}

const _: () = assert_valid::<DefaultConfig>();

#[cfg(test)]
mod tests {
    use super::*;

    struct FastLink;

    impl MonitorConfig for FastLink {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 2;
        const UART_BAUD: u32 = 115_200;
        const VREF_MV: i64 = 3300;
        const SENSITIVITY_MV_PER_A: i64 = 100;
        const ADC_BITS: u32 = 12;
        const ADC_FULL_SCALE: i64 = 4095;
        const ADC_MID: i64 = 2048;
    }

    // The 16 ms period paired with 9600 baud: short lines fit, long ones don't.
    struct Overloaded;

    impl MonitorConfig for Overloaded {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 16;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 185;
        const ADC_BITS: u32 = 10;
        const ADC_FULL_SCALE: i64 = 1023;
        const ADC_MID: i64 = 512;
    }

    struct ZeroSensitivity;

    impl MonitorConfig for ZeroSensitivity {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 20;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 0;
        const ADC_BITS: u32 = 10;
        const ADC_FULL_SCALE: i64 = 1023;
        const ADC_MID: i64 = 512;
    }

    struct ZeroFullScale;

    impl MonitorConfig for ZeroFullScale {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 20;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 185;
        const ADC_BITS: u32 = 10;
        const ADC_FULL_SCALE: i64 = 0;
        const ADC_MID: i64 = 0;
    }

    // A 32-bit shift would overflow in adc_max_code.
    struct TooWide;

    impl MonitorConfig for TooWide {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 20;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 185;
        const ADC_BITS: u32 = 32;
        const ADC_FULL_SCALE: i64 = 1023;
        const ADC_MID: i64 = 512;
    }

    struct FullScaleOverflow;

    impl MonitorConfig for FullScaleOverflow {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 20;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 185;
        const ADC_BITS: u32 = 10;
        const ADC_FULL_SCALE: i64 = 4095;
        const ADC_MID: i64 = 2048;
    }

    struct MidAboveFullScale;

    impl MonitorConfig for MidAboveFullScale {
        const TICK_MS: u32 = 1;
        const SAMPLE_PERIOD_MS: u32 = 20;
        const UART_BAUD: u32 = 9600;
        const VREF_MV: i64 = 5000;
        const SENSITIVITY_MV_PER_A: i64 = 185;
        const ADC_BITS: u32 = 10;
        const ADC_FULL_SCALE: i64 = 1023;
        const ADC_MID: i64 = 1024;
    }

    #[test]
    fn test_default_config() {
        assert_eq!(DefaultConfig::TICK_MS, 1);
        assert_eq!(DefaultConfig::SAMPLE_PERIOD_MS, 20);
        assert_eq!(DefaultConfig::UART_BAUD, 9600);
        assert_eq!(DefaultConfig::VREF_MV, 5000);
        assert_eq!(DefaultConfig::SENSITIVITY_MV_PER_A, 185);
        assert_eq!(DefaultConfig::ADC_BITS, 10);
        assert_eq!(DefaultConfig::ADC_FULL_SCALE, 1023);
        assert_eq!(DefaultConfig::ADC_MID, 512);
    }

    #[test]
    fn test_derived_values() {
        assert_eq!(period_ticks::<DefaultConfig>(), 20);
        assert_eq!(adc_max_code::<DefaultConfig>(), 1023);
        assert_eq!(adc_max_code::<FastLink>(), 4095);

        // "4294967295,-13527\r\n"
        assert_eq!(worst_line_len::<DefaultConfig>(), 19);
        // 190 bits at 9600 baud, rounded up
        assert_eq!(line_time_us::<DefaultConfig>(), 19_792);
    }

    #[test]
    fn test_tx_headroom() {
        assert!(has_tx_headroom::<DefaultConfig>());
        assert!(has_tx_headroom::<FastLink>());
        assert!(!has_tx_headroom::<Overloaded>());
    }

    #[test]
    fn test_assert_valid_accepts_fast_link() {
        assert_valid::<FastLink>();
    }

    #[test]
    #[should_panic(expected = "no room to transmit")]
    fn test_assert_valid_rejects_overloaded_link() {
        assert_valid::<Overloaded>();
    }

    #[test]
    #[should_panic(expected = "sensitivity must be positive")]
    fn test_assert_valid_rejects_zero_sensitivity() {
        assert_valid::<ZeroSensitivity>();
    }

    #[test]
    #[should_panic(expected = "full-scale code must be positive")]
    fn test_assert_valid_rejects_zero_full_scale() {
        assert_valid::<ZeroFullScale>();
    }

    #[test]
    #[should_panic(expected = "ADC width out of range")]
    fn test_assert_valid_rejects_oversized_adc_width() {
        assert_valid::<TooWide>();
    }

    #[test]
    #[should_panic(expected = "full-scale code exceeds ADC width")]
    fn test_assert_valid_rejects_full_scale_past_width() {
        assert_valid::<FullScaleOverflow>();
    }

    #[test]
    #[should_panic(expected = "mid-scale code outside the ADC range")]
    fn test_assert_valid_rejects_mid_above_full_scale() {
        assert_valid::<MidAboveFullScale>();
    }
}
