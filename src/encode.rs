//! Decimal ASCII encoding without `core::fmt`.
//!
//! Digits are accumulated least-significant-first into a fixed-size buffer
//! and read back most-significant-first. Rules:
//! - no leading zeros; zero is exactly `"0"`
//! - negative values get a single `'-'` followed by the magnitude
//! - `i32::MIN` is handled through `unsigned_abs`, never by negating

use crate::io::ByteTx;

/// Capacity of an encoded integer: ten digits plus a sign.
pub const MAX_DIGITS: usize = 11;

/// Encoded decimal text, most significant character first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    buf: heapless::Vec<u8, MAX_DIGITS>,
}

impl Digits {
    /// Encoded bytes, ready to transmit.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Encoded text.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '-' are ever pushed
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Never true for a value produced by this module; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Push the digits of `v` onto `buf`, least significant first.
fn push_digits_lsb_first(buf: &mut heapless::Vec<u8, MAX_DIGITS>, mut v: u32) {
    if v == 0 {
        buf.push(b'0').ok();
        return;
    }
    while v > 0 {
        let q = v / 10;
        let r = (v - q * 10) as u8;
        buf.push(b'0' + r).ok();
        v = q;
    }
}

/// Encode an unsigned value.
pub fn encode_u32(v: u32) -> Digits {
    let mut buf = heapless::Vec::new();
    push_digits_lsb_first(&mut buf, v);
    buf.reverse();
    Digits { buf }
}

/// Encode a signed value.
pub fn encode_i32(v: i32) -> Digits {
    let mut buf = heapless::Vec::new();
    push_digits_lsb_first(&mut buf, v.unsigned_abs());
    if v < 0 {
        buf.push(b'-').ok();
    }
    buf.reverse();
    Digits { buf }
}

/// Number of characters `encode_u32(v)` produces.
pub const fn decimal_len_u32(mut v: u32) -> usize {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Number of characters `encode_i32(v)` produces, sign included.
pub const fn decimal_len_i32(v: i32) -> usize {
    let sign = if v < 0 { 1 } else { 0 };
    sign + decimal_len_u32(v.unsigned_abs())
}

/// Transmit `v` as unsigned decimal.
pub fn write_u32<T: ByteTx>(tx: &mut T, v: u32) -> Result<(), T::Error> {
    tx.write_bytes(encode_u32(v).as_bytes())
}

/// Transmit `v` as signed decimal.
pub fn write_i32<T: ByteTx>(tx: &mut T, v: i32) -> Result<(), T::Error> {
    tx.write_bytes(encode_i32(v).as_bytes())
}
