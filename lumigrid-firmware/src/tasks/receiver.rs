//! Frame receiver task
//!
//! Polls the receiver as fast as the executor allows. One byte is consumed
//! per cycle; the task only yields when the link has nothing to offer, so a
//! full-speed stream never waits on the scheduler.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::PIO0;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::Instant;

use lumigrid_core::{CycleReport, FrameReceiver, LinkStatus, PresentKind};
use lumigrid_hal::{DigitalOutput, IoSerialRx};
use lumigrid_hal_rp2040::PioLedGrid;

use crate::config::{GRID_PIXELS, STATS_INTERVAL_MS};

/// Receiver wired to this board's peripherals
pub type Receiver = FrameReceiver<
    IoSerialRx<BufferedUartRx>,
    PioLedGrid<'static, PIO0, 0, GRID_PIXELS>,
    DigitalOutput<Output<'static>>,
    GRID_PIXELS,
>;

/// Receiver task - turns the serial byte stream into frames on the grid
#[embassy_executor::task]
pub async fn receiver_task(mut receiver: Receiver) {
    info!("Receiver task started ({} pixels)", GRID_PIXELS);

    let start = Instant::now().as_millis();
    if receiver.start(start).is_err() {
        warn!("Initial blank failed");
    }

    let mut last_link = LinkStatus::Active;
    let mut next_stats = start + STATS_INTERVAL_MS;

    loop {
        let now = Instant::now().as_millis();

        let idle = match receiver.poll(now) {
            Ok(report) => {
                log_report(&report, last_link);
                last_link = report.link;
                report.consumed.is_none()
            }
            Err(_) => {
                warn!("Display present failed");
                last_link = receiver.link_status(now);
                true
            }
        };

        if now >= next_stats {
            let stats = receiver.stats();
            debug!(
                "Stats: frames={} blanks={} bytes={} drained={} errors={}",
                stats.frames_presented,
                stats.blanks_presented,
                stats.bytes_consumed,
                stats.bytes_drained,
                stats.display_errors
            );
            next_stats = now + STATS_INTERVAL_MS;
        }

        if idle {
            embassy_futures::yield_now().await;
        }
    }
}

/// Log link transitions and presented frames
fn log_report(report: &CycleReport, last_link: LinkStatus) {
    if report.link != last_link {
        match report.link {
            LinkStatus::Stale => warn!("Link stale, blanking grid"),
            LinkStatus::Active => info!("Link active"),
        }
    }

    if report.presented == Some(PresentKind::Frame) {
        trace!("Frame presented, drained {} bytes", report.drained);
    }
}
