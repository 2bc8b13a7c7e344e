//! Frame pacing
//!
//! Sends rendered frames at a fixed interval. An optional pause after every
//! `pause_after` frames leaves the link silent long enough for the receiver
//! to declare it stale and blank the grid.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use lumigrid_protocol::FrameEncoder;

use crate::patterns::Pattern;
use crate::sink::FrameSink;

/// When to send frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Delay between frames
    pub interval: Duration,
    /// Frames to send; 0 sends forever
    pub frames: u64,
    /// Go silent after this many frames (repeating)
    pub pause_after: Option<u64>,
    /// Length of each silence
    pub pause: Duration,
}

impl Schedule {
    /// Delay to wait after frame number `sent` (1-based count so far)
    pub fn delay_after(&self, sent: u64) -> Duration {
        match self.pause_after {
            Some(n) if n > 0 && sent % n == 0 => self.pause,
            _ => self.interval,
        }
    }

    /// Whether another frame should follow once `sent` frames are out
    pub fn wants_more(&self, sent: u64) -> bool {
        self.frames == 0 || sent < self.frames
    }
}

/// Render and send frames until the schedule is done
///
/// `sleep` is called between frames (never after the last one). Returns the
/// number of frames sent.
pub fn run<S, F>(
    sink: &mut S,
    pattern: Pattern,
    encoder: &FrameEncoder,
    schedule: &Schedule,
    mut sleep: F,
) -> Result<u64>
where
    S: FrameSink + ?Sized,
    F: FnMut(Duration),
{
    info!(
        "Sending {} to {} ({} bytes/frame)",
        pattern,
        sink.describe(),
        encoder.geometry().frame_byte_count()
    );

    let mut sent = 0u64;
    while schedule.wants_more(sent) {
        let frame = pattern.render(encoder, sent);
        sink.send_frame(&frame)?;
        sent += 1;
        debug!("Frame {} sent", sent);

        if !schedule.wants_more(sent) {
            break;
        }

        let delay = schedule.delay_after(sent);
        if delay != schedule.interval {
            info!("Pausing for {} ms after frame {}", delay.as_millis(), sent);
        }
        sleep(delay);
    }

    info!("Sent {} frames", sent);
    Ok(sent)
}
