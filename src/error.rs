//! Error types.
//!
//! The conversion and encoding paths are total. Errors only come from the
//! hardware collaborators (`MonitorError`) or from reading a record line back
//! in on the host side (`ParseError`).

use core::fmt;

/// Failure reported by one of the loop's collaborators.
///
/// Board implementations with plain register access use
/// `core::convert::Infallible` for both parameters, which makes this type
/// uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError<TxE, AdcE> {
    /// Transmitter rejected a byte
    Transmit(TxE),

    /// Analog conversion failed
    Conversion(AdcE),
}

impl<TxE: fmt::Debug, AdcE: fmt::Debug> fmt::Display for MonitorError<TxE, AdcE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Transmit(e) => write!(f, "Transmit failed: {:?}", e),
            MonitorError::Conversion(e) => write!(f, "Conversion failed: {:?}", e),
        }
    }
}

/// Reason a line is not a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Not exactly two comma-separated fields
    WrongFieldCount,

    /// A field has no digits
    EmptyField,

    /// Character other than an ASCII digit (or a leading '-' on the current)
    InvalidDigit,

    /// Multi-digit number starting with '0'
    LeadingZero,

    /// `-0`, which the encoder never produces
    NegativeZero,

    /// Value outside the field's integer range
    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongFieldCount => write!(f, "Expected 2 fields"),
            ParseError::EmptyField => write!(f, "Empty field"),
            ParseError::InvalidDigit => write!(f, "Invalid digit"),
            ParseError::LeadingZero => write!(f, "Leading zero"),
            ParseError::NegativeZero => write!(f, "Negative zero"),
            ParseError::Overflow => write!(f, "Value out of range"),
        }
    }
}
