//! Frame geometry and byte-to-slot mapping.
//!
//! A frame is `width * height * 3` bytes. The receiver counts bytes since the
//! last presented frame (the assembly cursor) and derives the destination
//! slot from that count alone.

/// Channel values per pixel
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Link rate used by shipped boards and the sender's default
pub const DEFAULT_BAUDRATE: u32 = 230_400;

/// Default grid width in pixels
pub const DEFAULT_WIDTH: u16 = 20;

/// Default grid height in pixels
pub const DEFAULT_HEIGHT: u16 = 10;

/// Grid dimensions, fixed at build time on the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridGeometry {
    /// Pixels per row
    pub width: u16,
    /// Number of rows
    pub height: u16,
}

impl GridGeometry {
    /// Create a geometry
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels in one frame
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes in one frame on the wire
    pub const fn frame_byte_count(&self) -> usize {
        self.pixel_count() * CHANNELS_PER_PIXEL
    }

    /// Check whether a coordinate lies on the grid
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Destination of one wire byte inside the frame buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    /// Pixel index (transmission order)
    pub pixel: usize,
    /// Channel index within the pixel (0-2)
    pub channel: usize,
}

impl Slot {
    /// Slot for the byte at `cursor` bytes into the frame
    pub const fn from_cursor(cursor: usize) -> Self {
        Self {
            pixel: cursor / CHANNELS_PER_PIXEL,
            channel: cursor % CHANNELS_PER_PIXEL,
        }
    }

    /// Byte offset of this slot from the start of the frame
    pub const fn byte_offset(&self) -> usize {
        self.pixel * CHANNELS_PER_PIXEL + self.channel
    }
}
