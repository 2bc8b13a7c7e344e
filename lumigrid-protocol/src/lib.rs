//! Lumigrid Serial Frame Protocol
//!
//! This crate defines the wire format between the host (frame sender) and
//! the LED grid receiver. The protocol is deliberately minimal: there is no
//! framing, no acknowledgement and no checksum.
//!
//! # Protocol Overview
//!
//! The link carries an endless sequence of equally sized frames:
//! ```text
//! ┌────────────┬────────────┬─────┬──────────────────┐
//! │ PIXEL 0    │ PIXEL 1    │ ... │ PIXEL W*H-1      │
//! │ c0 c1 c2   │ c0 c1 c2   │     │ c0 c1 c2         │
//! └────────────┴────────────┴─────┴──────────────────┘
//!   byte 3k + c  =  pixel k, channel c
//! ```
//!
//! Channel bytes are opaque to the receiver; the sender chooses the order the
//! LED driver expects ([`ChannelOrder`]) and where each grid coordinate lands
//! on the strip ([`Topology`]).

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]

pub mod encode;
pub mod layout;

pub use encode::{ChannelOrder, EncodeError, FrameEncoder, ParseNameError, Topology};
pub use layout::{GridGeometry, Slot, CHANNELS_PER_PIXEL, DEFAULT_BAUDRATE};
