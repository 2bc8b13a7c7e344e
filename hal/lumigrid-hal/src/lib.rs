//! Lumigrid Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the receiver core
//! needs, so the same frame assembly logic runs on the RP2040 board and in
//! host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumigrid-core (receiver cycle)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumigrid-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ lumigrid-hal- │       │  host mocks   │
//! │    rp2040     │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (liveness indicator)
//! - [`uart::SerialRx`] - Non-blocking single-byte serial polling

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{DigitalOutput, OutputPin};
pub use uart::{IoSerialRx, SerialRx, UartConfig};
