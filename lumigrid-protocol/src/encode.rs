//! Host-side frame encoding.
//!
//! Turns a colour function over grid coordinates into the raw byte frame the
//! receiver expects. Two things vary between physical panels:
//! - channel order: which colour component the LED driver wants first
//! - topology: how grid coordinates are chained along the LED strip

use core::fmt;
use core::str::FromStr;

use crate::layout::{GridGeometry, CHANNELS_PER_PIXEL};

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer is shorter than one frame
    BufferTooSmall,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall => f.write_str("output buffer shorter than one frame"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Unrecognized channel order or topology name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseNameError {
    /// What was being parsed
    pub kind: &'static str,
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} name", self.kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseNameError {}

/// Order in which a pixel's colour components are put on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ChannelOrder {
    /// Every supported order
    pub const ALL: [ChannelOrder; 6] = [
        ChannelOrder::Rgb,
        ChannelOrder::Rbg,
        ChannelOrder::Grb,
        ChannelOrder::Gbr,
        ChannelOrder::Brg,
        ChannelOrder::Bgr,
    ];

    /// For each wire channel, the index of the `[r, g, b]` component it carries
    pub const fn sources(self) -> [usize; CHANNELS_PER_PIXEL] {
        match self {
            ChannelOrder::Rgb => [0, 1, 2],
            ChannelOrder::Rbg => [0, 2, 1],
            ChannelOrder::Grb => [1, 0, 2],
            ChannelOrder::Gbr => [1, 2, 0],
            ChannelOrder::Brg => [2, 0, 1],
            ChannelOrder::Bgr => [2, 1, 0],
        }
    }

    /// Reorder an `[r, g, b]` triple into wire order
    pub fn apply(self, rgb: [u8; 3]) -> [u8; 3] {
        let [a, b, c] = self.sources();
        [rgb[a], rgb[b], rgb[c]]
    }

    /// Lower-case name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Rbg => "rbg",
            ChannelOrder::Grb => "grb",
            ChannelOrder::Gbr => "gbr",
            ChannelOrder::Brg => "brg",
            ChannelOrder::Bgr => "bgr",
        }
    }
}

impl FromStr for ChannelOrder {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelOrder::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or(ParseNameError {
                kind: "channel order",
            })
    }
}

/// How grid coordinates are chained along the LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topology {
    /// Rows left to right, top row first
    #[default]
    RowMajor,
    /// Rows alternate direction: even rows left to right, odd rows right to left
    RowSerpentine,
    /// Columns alternate direction: even columns top to bottom, odd columns
    /// bottom to top (panels wired as vertical "hooks")
    ColumnSerpentine,
}

impl Topology {
    /// Strip index of the pixel at `(x, y)`, or `None` if off the grid
    pub fn index(self, geometry: GridGeometry, x: u16, y: u16) -> Option<usize> {
        if !geometry.contains(x, y) {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        let (width, height) = (geometry.width as usize, geometry.height as usize);

        let index = match self {
            Topology::RowMajor => y * width + x,
            Topology::RowSerpentine => {
                let col = if y % 2 == 0 { x } else { width - 1 - x };
                y * width + col
            }
            Topology::ColumnSerpentine => {
                let row = if x % 2 == 0 { y } else { height - 1 - y };
                x * height + row
            }
        };
        Some(index)
    }

    /// Lower-case name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Topology::RowMajor => "row-major",
            Topology::RowSerpentine => "row-serpentine",
            Topology::ColumnSerpentine => "column-serpentine",
        }
    }
}

impl FromStr for Topology {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Topology::RowMajor,
            Topology::RowSerpentine,
            Topology::ColumnSerpentine,
        ]
        .into_iter()
        .find(|topology| topology.name().eq_ignore_ascii_case(s))
        .ok_or(ParseNameError { kind: "topology" })
    }
}

/// Encodes whole frames for a fixed grid, order and topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameEncoder {
    geometry: GridGeometry,
    order: ChannelOrder,
    topology: Topology,
}

impl FrameEncoder {
    /// Encoder with RGB order and row-major topology
    pub const fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            order: ChannelOrder::Rgb,
            topology: Topology::RowMajor,
        }
    }

    /// Use a different channel order
    pub const fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    /// Use a different topology
    pub const fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Grid this encoder targets
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Encode one frame into `buffer`
    ///
    /// `color(x, y)` returns the `[r, g, b]` value of each grid coordinate.
    /// Returns the number of bytes written (always one full frame).
    pub fn encode<F>(&self, mut color: F, buffer: &mut [u8]) -> Result<usize, EncodeError>
    where
        F: FnMut(u16, u16) -> [u8; 3],
    {
        let frame_len = self.geometry.frame_byte_count();
        if buffer.len() < frame_len {
            return Err(EncodeError::BufferTooSmall);
        }

        for y in 0..self.geometry.height {
            for x in 0..self.geometry.width {
                // Every on-grid coordinate has an index
                let Some(index) = self.topology.index(self.geometry, x, y) else {
                    continue;
                };
                let start = index * CHANNELS_PER_PIXEL;
                buffer[start..start + CHANNELS_PER_PIXEL]
                    .copy_from_slice(&self.order.apply(color(x, y)));
            }
        }

        Ok(frame_len)
    }

    /// Encode one frame into a freshly allocated vector
    #[cfg(feature = "std")]
    pub fn encode_to_vec<F>(&self, color: F) -> Vec<u8>
    where
        F: FnMut(u16, u16) -> [u8; 3],
    {
        let mut buffer = vec![0u8; self.geometry.frame_byte_count()];
        // Buffer is exactly one frame long
        let _ = self.encode(color, &mut buffer);
        buffer
    }
}
