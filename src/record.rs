//! The output record and its wire format.
//!
//! One ASCII line per sample:
//!
//! ```text
//! <timestamp_ms>,<current_mA>\r\n
//! ```
//!
//! `timestamp_ms` is unsigned decimal, `current_mA` is signed decimal with an
//! optional leading `-`. Neither has leading zeros.

use crate::encode::{MAX_DIGITS, decimal_len_i32, decimal_len_u32, write_i32, write_u32};
use crate::error::ParseError;
use crate::io::ByteTx;

#[cfg(feature = "async")]
use crate::encode::{encode_i32, encode_u32};
#[cfg(feature = "async")]
use crate::io::AsyncByteTx;

/// Field separator.
pub const SEPARATOR: u8 = b',';

/// Line terminator.
pub const LINE_ENDING: &[u8; 2] = b"\r\n";

/// Longest possible line: ten timestamp digits, comma, signed current, CR LF.
pub const MAX_LINE_LEN: usize = (MAX_DIGITS - 1) + 1 + MAX_DIGITS + LINE_ENDING.len();

/// One sample, ready to go out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record {
    /// Time the sample was taken
    pub timestamp_ms: u32,

    /// Converted current
    pub current_ma: i32,
}

impl Record {
    /// Create a record.
    pub const fn new(timestamp_ms: u32, current_ma: i32) -> Self {
        Self {
            timestamp_ms,
            current_ma,
        }
    }

    /// Length of the encoded line in bytes, terminator included.
    pub const fn line_len(&self) -> usize {
        decimal_len_u32(self.timestamp_ms) + 1 + decimal_len_i32(self.current_ma) + LINE_ENDING.len()
    }

    /// Transmit the line byte by byte.
    ///
    /// Returns once the last byte has been accepted by the transmitter.
    pub fn emit<T: ByteTx>(&self, tx: &mut T) -> Result<(), T::Error> {
        write_u32(tx, self.timestamp_ms)?;
        tx.put_byte(SEPARATOR)?;
        write_i32(tx, self.current_ma)?;
        tx.write_bytes(LINE_ENDING)
    }

    /// Transmit the line through an async transmitter (requires `async` feature).
    #[cfg(feature = "async")]
    pub async fn emit_async<T: AsyncByteTx>(&self, tx: &mut T) -> Result<(), T::Error> {
        tx.write_bytes(encode_u32(self.timestamp_ms).as_bytes()).await?;
        tx.put_byte(SEPARATOR).await?;
        tx.write_bytes(encode_i32(self.current_ma).as_bytes()).await?;
        tx.write_bytes(LINE_ENDING).await
    }

    /// Parse one line.
    ///
    /// Accepts exactly what [`emit`](Self::emit) produces. The terminator may be
    /// `\r\n`, `\n`, or absent.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);

        let mut fields = line.split(',');
        let (Some(ts), Some(current), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(ParseError::WrongFieldCount);
        };

        Ok(Self {
            timestamp_ms: parse_u32(ts)?,
            current_ma: parse_i32(current)?,
        })
    }
}

/// Strict unsigned decimal: digits only, no leading zeros.
fn parse_u32(field: &str) -> Result<u32, ParseError> {
    let bytes = field.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::EmptyField);
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(ParseError::LeadingZero);
    }

    let mut value: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or(ParseError::Overflow)?;
    }
    Ok(value)
}

/// Strict signed decimal: optional '-', then a strict unsigned magnitude.
fn parse_i32(field: &str) -> Result<i32, ParseError> {
    match field.strip_prefix('-') {
        Some(magnitude) => {
            let m = parse_u32(magnitude)?;
            if m == 0 {
                return Err(ParseError::NegativeZero);
            }
            // -(2^31) is the only magnitude past i32::MAX that fits
            0i32.checked_sub_unsigned(m).ok_or(ParseError::Overflow)
        }
        None => {
            let m = parse_u32(field)?;
            i32::try_from(m).map_err(|_| ParseError::Overflow)
        }
    }
}
