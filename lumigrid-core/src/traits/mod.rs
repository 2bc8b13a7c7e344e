//! Hardware abstraction traits
//!
//! These traits define the interface between the receiver logic and
//! hardware-specific implementations. Serial input and GPIO traits live in
//! `lumigrid-hal`; the display driver is defined here because it speaks in
//! core pixel types.

pub mod display;

pub use display::DisplayDriver;
