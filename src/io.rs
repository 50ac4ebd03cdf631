//! Hardware seams for the sampling core.
//!
//! The core never touches registers. It transmits through [`ByteTx`] and
//! samples through [`AdcSource`], which board crates implement for their UART
//! and ADC peripherals (and tests implement with in-memory mocks).

/// Blocking byte transmitter.
///
/// Contract:
/// - `put_byte()` returns once the hardware has accepted the byte
/// - bytes go out in the order submitted, with no reordering or drop
/// - there is no timeout; a stalled peripheral stalls the caller
pub trait ByteTx {
    /// Platform-specific error type (`Infallible` for plain UART registers)
    type Error;

    /// Transmit one byte, blocking until the transmitter accepts it.
    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Transmit a byte slice.
    ///
    /// Default implementation uses `put_byte()` repeatedly.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &b in bytes {
            self.put_byte(b)?;
        }
        Ok(())
    }
}

impl<T: ByteTx + ?Sized> ByteTx for &mut T {
    type Error = T::Error;

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).put_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

/// Async byte transmitter (requires `async` feature).
///
/// Same ordering contract as [`ByteTx`], with the wait for the transmitter
/// turned into a suspend point.
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncByteTx {
    /// Platform-specific error type
    type Error;

    /// Transmit one byte, suspending until the transmitter accepts it.
    async fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Transmit a byte slice in order.
    async fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &b in bytes {
            self.put_byte(b).await?;
        }
        Ok(())
    }
}

/// Single-shot analog conversion.
pub trait AdcSource {
    /// Platform-specific error type
    type Error;

    /// Start one conversion and block until it completes.
    ///
    /// Returns the unconverted code. Implementations whose result spans two
    /// 8-bit registers must read them low byte first, see
    /// [`read_split_result`](crate::adc::read_split_result).
    fn start_and_wait(&mut self) -> Result<u16, Self::Error>;
}

impl<A: AdcSource + ?Sized> AdcSource for &mut A {
    type Error = A::Error;

    fn start_and_wait(&mut self) -> Result<u16, Self::Error> {
        (**self).start_and_wait()
    }
}
