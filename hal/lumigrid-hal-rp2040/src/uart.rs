//! UART configuration for the frame link
//!
//! Maps the chip-agnostic [`UartConfig`] onto embassy-rp's UART config.
//! The RP2040 PL011 supports 5-8 data bits, so nine-bit frames are rejected.

use embassy_rp::uart::{Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits};
use lumigrid_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Error when the requested link format is not supported by the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartConfigError {
    /// Data bit count not available on the RP2040 UART
    UnsupportedDataBits,
    /// Baud rate of zero
    InvalidBaudrate,
}

/// Build the embassy-rp UART config for `config`
pub fn embassy_uart_config(config: &UartConfig) -> Result<Config, UartConfigError> {
    if config.baudrate == 0 {
        return Err(UartConfigError::InvalidBaudrate);
    }

    let mut rp = Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
        DataBits::Nine => return Err(UartConfigError::UnsupportedDataBits),
    };
    rp.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    Ok(rp)
}
