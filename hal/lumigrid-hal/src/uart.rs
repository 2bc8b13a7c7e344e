//! UART serial communication abstractions
//!
//! The frame link is receive-only and polled: the receiver asks for one byte
//! per cycle and must never block waiting for one.

use embedded_io::{Read, ReadReady};

/// Default link rate for the frame stream
pub const DEFAULT_BAUDRATE: u32 = 230_400;

/// Non-blocking serial receiver
///
/// Returns at most one byte per call. A transport fault is reported the same
/// way as an empty receive buffer: `None`.
pub trait SerialRx {
    /// Take the next buffered byte, if any
    fn try_read_byte(&mut self) -> Option<u8>;

    /// Discard every byte currently buffered, returning how many were dropped
    ///
    /// Bytes that arrive while draining are also dropped; the loop ends the
    /// first time the transport reports nothing available.
    fn drain(&mut self) -> usize {
        let mut dropped = 0;
        while self.try_read_byte().is_some() {
            dropped += 1;
        }
        dropped
    }
}

/// Adapter from an `embedded-io` reader to [`SerialRx`]
///
/// Uses [`ReadReady`] to avoid blocking, so it works with buffered UART
/// receivers such as embassy-rp's `BufferedUartRx`.
pub struct IoSerialRx<R> {
    inner: R,
}

impl<R: Read + ReadReady> IoSerialRx<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Release the wrapped reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + ReadReady> SerialRx for IoSerialRx<R> {
    fn try_read_byte(&mut self) -> Option<u8> {
        match self.inner.read_ready() {
            Ok(true) => {}
            _ => return None,
        }

        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8N1 at the given rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::with_baudrate(DEFAULT_BAUDRATE)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::ErrorKind;

    /// Mock buffered UART: `ready` reports whether bytes are queued
    struct MockRx {
        data: [u8; 8],
        pos: usize,
        len: usize,
        faulted: bool,
    }

    impl MockRx {
        fn with(bytes: &[u8]) -> Self {
            let mut data = [0u8; 8];
            data[..bytes.len()].copy_from_slice(bytes);
            Self {
                data,
                pos: 0,
                len: bytes.len(),
                faulted: false,
            }
        }
    }

    impl embedded_io::ErrorType for MockRx {
        type Error = ErrorKind;
    }

    impl ReadReady for MockRx {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            if self.faulted {
                return Err(ErrorKind::Other);
            }
            Ok(self.pos < self.len)
        }
    }

    impl Read for MockRx {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            assert!(self.pos < self.len, "read would block");
            let n = buf.len().min(self.len - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_reads_one_byte_per_call() {
        let mut rx = IoSerialRx::new(MockRx::with(&[0x10, 0x20]));
        assert_eq!(rx.try_read_byte(), Some(0x10));
        assert_eq!(rx.try_read_byte(), Some(0x20));
        assert_eq!(rx.try_read_byte(), None);
    }

    #[test]
    fn test_empty_buffer_never_blocks() {
        let mut rx = IoSerialRx::new(MockRx::with(&[]));
        assert_eq!(rx.try_read_byte(), None);
    }

    #[test]
    fn test_fault_reads_as_no_data() {
        let mut mock = MockRx::with(&[1, 2, 3]);
        mock.faulted = true;
        let mut rx = IoSerialRx::new(mock);
        assert_eq!(rx.try_read_byte(), None);
    }

    #[test]
    fn test_drain_discards_everything_buffered() {
        let mut rx = IoSerialRx::new(MockRx::with(&[1, 2, 3, 4, 5]));
        assert_eq!(rx.try_read_byte(), Some(1));
        assert_eq!(rx.drain(), 4);
        assert_eq!(rx.try_read_byte(), None);
    }

    #[test]
    fn test_default_config_is_230400_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 230_400);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }
}
