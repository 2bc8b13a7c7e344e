//! Receiver configuration

use crate::link::monitor::LINK_TIMEOUT_MS;

/// Runtime parameters of the frame receiver
///
/// The grid size is not here: it is a const generic of the receiver, fixed
/// at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverConfig {
    /// Silence (ms) after which the link is declared stale
    pub stale_after_ms: u32,
    /// Liveness indicator is lit by driving the pin low
    pub indicator_active_low: bool,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            stale_after_ms: LINK_TIMEOUT_MS,
            indicator_active_low: false,
        }
    }
}
