//! RP2040-specific HAL for the LED grid firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! traits:
//!
//! - PIO-driven WS2812 grid (implements `lumigrid_core::DisplayDriver`)
//! - UART configuration mapping for the frame link
//!
//! GPIO and serial input need no chip-specific code: embassy-rp's `Output`
//! and `BufferedUartRx` plug into the `lumigrid-hal` adapters directly.

#![no_std]

pub mod uart;
pub mod ws2812;

pub use uart::{embassy_uart_config, UartConfigError};
pub use ws2812::PioLedGrid;
