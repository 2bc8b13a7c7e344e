//! Board-agnostic receiver logic for the LED grid firmware
//!
//! This crate contains everything between the serial byte stream and the
//! LED driver that does not depend on specific hardware:
//!
//! - Frame buffer and pixel storage
//! - Frame assembler (byte cursor to pixel/channel mapping)
//! - Link liveness monitor and indicator
//! - Display driver trait
//! - The receiver cycle tying them together
//! - Receiver configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assembler;
pub mod config;
pub mod frame;
pub mod link;
pub mod receiver;
pub mod traits;

pub use assembler::{AssemblyStatus, FrameAssembler};
pub use config::ReceiverConfig;
pub use frame::{FrameBuffer, Pixel};
pub use link::{LinkIndicator, LinkMonitor, LinkStatus};
pub use receiver::{CycleReport, FrameReceiver, Phase, PresentKind, ReceiverError, ReceiverStats};
pub use traits::DisplayDriver;
