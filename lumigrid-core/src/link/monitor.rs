//! Link monitor implementation
//!
//! Tracks the time of the last received byte and classifies the link on
//! every cycle.

/// Silence after which the link is stale
pub const LINK_TIMEOUT_MS: u32 = 1000;

/// Link condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// A byte arrived within the timeout
    Active,
    /// No byte for longer than the timeout
    Stale,
}

impl LinkStatus {
    /// Check if the link is active
    pub fn is_active(&self) -> bool {
        matches!(self, LinkStatus::Active)
    }
}

/// Liveness tracker for the serial link
///
/// The status is recomputed on each [`tick`](LinkMonitor::tick) from the
/// last-byte timestamp; nothing is latched, so the link recovers as soon as
/// a byte arrives.
#[derive(Debug, Clone)]
pub struct LinkMonitor {
    /// Time of the last received byte (ms)
    last_byte_ms: u64,
    /// Timeout threshold (ms)
    stale_after_ms: u32,
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new(0, LINK_TIMEOUT_MS)
    }
}

impl LinkMonitor {
    /// Create a monitor whose timer starts at `now_ms`
    pub fn new(now_ms: u64, stale_after_ms: u32) -> Self {
        Self {
            last_byte_ms: now_ms,
            stale_after_ms,
        }
    }

    /// Restart the timer, as if a byte had arrived at `now_ms`
    pub fn restart(&mut self, now_ms: u64) {
        self.last_byte_ms = now_ms;
    }

    /// Record a byte received
    pub fn on_byte_received(&mut self, now_ms: u64) {
        self.last_byte_ms = now_ms;
    }

    /// Classify the link at `now_ms`
    ///
    /// Stale only when strictly more than the threshold has elapsed.
    pub fn tick(&self, now_ms: u64) -> LinkStatus {
        if self.elapsed_ms(now_ms) > u64::from(self.stale_after_ms) {
            LinkStatus::Stale
        } else {
            LinkStatus::Active
        }
    }

    /// Time since the last byte
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_byte_ms)
    }

    /// Time of the last byte
    pub fn last_byte_ms(&self) -> u64 {
        self.last_byte_ms
    }

    /// Configured threshold
    pub fn stale_after_ms(&self) -> u32 {
        self.stale_after_ms
    }
}
