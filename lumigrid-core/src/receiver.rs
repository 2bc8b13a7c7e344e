//! Frame receiver cycle
//!
//! Ties the serial reader, assembler, link monitor and display driver into
//! the one polling step the firmware runs forever.
//!
//! ```text
//!            byte, cursor+1 < N
//!           ┌──────────────────┐
//!           ▼                  │
//!   ┌──────────────┐  byte, cursor+1 == N  ┌────────────┐
//!   │ Accumulating │ ────────────────────▶ │ Presenting │
//!   └──────────────┘ ◀──────────────────── └────────────┘
//!           │         present + drain, cursor = 0
//!           │
//!           └─ stale tick: blank + present, state and cursor unchanged
//! ```

use lumigrid_hal::{OutputPin, SerialRx};

use crate::assembler::{AssemblyStatus, FrameAssembler};
use crate::config::ReceiverConfig;
use crate::frame::FrameBuffer;
use crate::link::{LinkIndicator, LinkMonitor, LinkStatus};
use crate::traits::DisplayDriver;

/// Receiver states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Collecting bytes for the current frame
    Accumulating,
    /// Frame complete; presenting and draining (never observed between polls)
    Presenting,
}

/// What a present call showed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresentKind {
    /// A fully assembled frame
    Frame,
    /// The all-zero buffer (startup or stale link)
    Blank,
}

/// Errors surfaced by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverError<E> {
    /// The display driver failed to present
    Display(E),
}

/// Outcome of one [`FrameReceiver::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Byte consumed this cycle, if one was available
    pub consumed: Option<u8>,
    /// Link status evaluated this cycle
    pub link: LinkStatus,
    /// Present performed this cycle
    pub presented: Option<PresentKind>,
    /// Bytes discarded by the post-frame drain
    pub drained: usize,
}

/// Running counters, wrapping on overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverStats {
    pub frames_presented: u32,
    pub blanks_presented: u32,
    pub bytes_consumed: u32,
    pub bytes_drained: u32,
    pub display_errors: u32,
}

/// The receive/assemble/liveness state machine
///
/// Owns the frame buffer, the assembly cursor and the liveness timestamp;
/// nothing else touches them. `PIXELS` is the grid size, fixed at build
/// time.
pub struct FrameReceiver<R, D, P, const PIXELS: usize> {
    reader: R,
    driver: D,
    indicator: LinkIndicator<P>,
    buffer: FrameBuffer<PIXELS>,
    assembler: FrameAssembler,
    monitor: LinkMonitor,
    phase: Phase,
    stats: ReceiverStats,
}

impl<R, D, P, const PIXELS: usize> FrameReceiver<R, D, P, PIXELS>
where
    R: SerialRx,
    D: DisplayDriver,
    P: OutputPin,
{
    /// Bytes per frame on the wire
    pub const FRAME_BYTES: usize = FrameBuffer::<PIXELS>::BYTE_COUNT;

    /// Create a receiver; call [`start`](Self::start) before polling
    pub fn new(reader: R, driver: D, indicator_pin: P, config: ReceiverConfig) -> Self {
        Self {
            reader,
            driver,
            indicator: LinkIndicator::new(indicator_pin, config.indicator_active_low),
            buffer: FrameBuffer::new(),
            assembler: FrameAssembler::new(),
            monitor: LinkMonitor::new(0, config.stale_after_ms),
            phase: Phase::Accumulating,
            stats: ReceiverStats::default(),
        }
    }

    /// Cold-start: blank the grid, start the liveness timer, drive the
    /// indicator once
    pub fn start(&mut self, now_ms: u64) -> Result<(), ReceiverError<D::Error>> {
        self.buffer.blank();
        self.assembler.reset();
        self.phase = Phase::Accumulating;
        self.monitor.restart(now_ms);
        self.indicator.show(self.monitor.tick(now_ms));
        self.present(PresentKind::Blank)
    }

    /// Run one cycle
    ///
    /// Consumes at most one byte, re-evaluates the link, and presents when a
    /// frame completes or the link is stale. Bookkeeping (cursor reset,
    /// drain) is always finished before a display error is returned.
    pub fn poll(&mut self, now_ms: u64) -> Result<CycleReport, ReceiverError<D::Error>> {
        let mut report = CycleReport {
            consumed: None,
            link: LinkStatus::Active,
            presented: None,
            drained: 0,
        };

        if let Some(byte) = self.reader.try_read_byte() {
            self.monitor.on_byte_received(now_ms);
            self.stats.bytes_consumed = self.stats.bytes_consumed.wrapping_add(1);
            report.consumed = Some(byte);

            if self.assembler.on_byte(byte, &mut self.buffer) == AssemblyStatus::FrameComplete {
                self.phase = Phase::Presenting;
            }
        }

        let mut result = Ok(());

        report.link = self.monitor.tick(now_ms);
        self.indicator.show(report.link);
        if report.link == LinkStatus::Stale {
            // The cursor is left alone: assembly resumes where it stopped
            self.buffer.blank();
            result = self.present(PresentKind::Blank);
            report.presented = Some(PresentKind::Blank);
        }

        if self.phase == Phase::Presenting {
            let presented = self.present(PresentKind::Frame);
            self.assembler.reset();

            // Best effort: only bytes already queued are discarded
            report.drained = self.reader.drain();
            self.stats.bytes_drained = self.stats.bytes_drained.wrapping_add(report.drained as u32);

            self.phase = Phase::Accumulating;
            report.presented = Some(PresentKind::Frame);
            result = result.and(presented);
        }

        result.map(|()| report)
    }

    fn present(&mut self, kind: PresentKind) -> Result<(), ReceiverError<D::Error>> {
        match kind {
            PresentKind::Frame => {
                self.stats.frames_presented = self.stats.frames_presented.wrapping_add(1)
            }
            PresentKind::Blank => {
                self.stats.blanks_presented = self.stats.blanks_presented.wrapping_add(1)
            }
        }

        self.driver.present(self.buffer.pixels()).map_err(|e| {
            self.stats.display_errors = self.stats.display_errors.wrapping_add(1);
            ReceiverError::Display(e)
        })
    }

    /// Link status at `now_ms`, without side effects
    pub fn link_status(&self, now_ms: u64) -> LinkStatus {
        self.monitor.tick(now_ms)
    }

    /// Bytes consumed toward the current frame
    pub fn cursor(&self) -> usize {
        self.assembler.cursor()
    }

    /// Current state
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frame buffer contents
    pub fn buffer(&self) -> &FrameBuffer<PIXELS> {
        &self.buffer
    }

    /// Running counters
    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }

    /// Liveness indicator
    pub fn indicator(&self) -> &LinkIndicator<P> {
        &self.indicator
    }

    /// Display driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Serial reader
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}
