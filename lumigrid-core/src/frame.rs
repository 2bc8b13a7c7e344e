//! Frame buffer
//!
//! Fixed-size pixel storage written by the assembler and handed read-only to
//! the display driver at present time.

use lumigrid_protocol::{Slot, CHANNELS_PER_PIXEL};

/// One LED: three opaque channel bytes in wire order
///
/// The core never interprets the channels; they are passed to the display
/// driver in the order they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel(pub [u8; CHANNELS_PER_PIXEL]);

impl Pixel {
    /// All channels off
    pub const BLANK: Pixel = Pixel([0; CHANNELS_PER_PIXEL]);

    /// Create a pixel from its three channel values
    pub const fn new(c0: u8, c1: u8, c2: u8) -> Self {
        Self([c0, c1, c2])
    }

    /// Channel values in wire order
    pub const fn channels(&self) -> [u8; CHANNELS_PER_PIXEL] {
        self.0
    }
}

/// Frame buffer for a grid of `PIXELS` LEDs
///
/// The length never changes; index 0 is the first pixel transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const PIXELS: usize> {
    pixels: [Pixel; PIXELS],
}

impl<const PIXELS: usize> Default for FrameBuffer<PIXELS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const PIXELS: usize> FrameBuffer<PIXELS> {
    /// Bytes needed to fill the buffer once
    pub const BYTE_COUNT: usize = PIXELS * CHANNELS_PER_PIXEL;

    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pixels: [Pixel::BLANK; PIXELS],
        }
    }

    /// Write one channel value
    ///
    /// Returns `false` (and writes nothing) if the slot is outside the grid.
    pub fn write(&mut self, slot: Slot, value: u8) -> bool {
        match self
            .pixels
            .get_mut(slot.pixel)
            .and_then(|pixel| pixel.0.get_mut(slot.channel))
        {
            Some(channel) => {
                *channel = value;
                true
            }
            None => false,
        }
    }

    /// Set every channel of every pixel to zero
    pub fn blank(&mut self) {
        self.pixels.fill(Pixel::BLANK);
    }

    /// Check whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == Pixel::BLANK)
    }

    /// Read-only view of all pixels
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get a pixel by transmission index
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        PIXELS
    }

    /// True for a zero-sized grid
    pub const fn is_empty(&self) -> bool {
        PIXELS == 0
    }
}
