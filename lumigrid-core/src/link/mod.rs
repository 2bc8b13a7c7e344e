//! Link liveness
//!
//! Detects when the upstream sender goes quiet and shows it on an indicator.

pub mod indicator;
pub mod monitor;

pub use indicator::LinkIndicator;
pub use monitor::{LinkMonitor, LinkStatus};
