//! Frame assembler
//!
//! Counts bytes since the last presented frame and writes each one to the
//! slot its position implies. There are no delimiters on the wire; the byte
//! count alone defines frame boundaries.

use lumigrid_protocol::Slot;

use crate::frame::FrameBuffer;

/// Result of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblyStatus {
    /// More bytes are needed for the current frame
    Accumulating,
    /// The byte just written completed the frame
    FrameComplete,
}

/// Byte cursor for the frame being assembled
///
/// The cursor stays in `[0, frame byte count)` while accumulating. After a
/// byte completes the frame it sits at the byte count until [`reset`] is
/// called, which the receiver does right after presenting.
///
/// [`reset`]: FrameAssembler::reset
#[derive(Debug, Clone, Default)]
pub struct FrameAssembler {
    cursor: usize,
}

impl FrameAssembler {
    /// Create an assembler at the start of a frame
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Feed one byte into `buffer`
    ///
    /// Every value is a valid channel intensity. If the frame is already
    /// complete and not yet reset, the byte is not written and
    /// `FrameComplete` is returned again.
    pub fn on_byte<const PIXELS: usize>(
        &mut self,
        byte: u8,
        buffer: &mut FrameBuffer<PIXELS>,
    ) -> AssemblyStatus {
        let frame_bytes = FrameBuffer::<PIXELS>::BYTE_COUNT;
        if self.cursor >= frame_bytes {
            return AssemblyStatus::FrameComplete;
        }

        buffer.write(Slot::from_cursor(self.cursor), byte);
        self.cursor += 1;

        if self.cursor == frame_bytes {
            AssemblyStatus::FrameComplete
        } else {
            AssemblyStatus::Accumulating
        }
    }

    /// Start the next frame
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Bytes consumed toward the current frame
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slot the next byte will be written to
    pub fn next_slot(&self) -> Slot {
        Slot::from_cursor(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Pixel;
    use proptest::prelude::*;

    #[test]
    fn test_bytes_fill_channels_in_order() {
        let mut buffer = FrameBuffer::<2>::new();
        let mut assembler = FrameAssembler::new();

        for byte in [1, 2, 3, 4, 5] {
            assert_eq!(
                assembler.on_byte(byte, &mut buffer),
                AssemblyStatus::Accumulating
            );
        }
        assert_eq!(assembler.cursor(), 5);
        assert_eq!(assembler.next_slot(), Slot { pixel: 1, channel: 2 });
        assert_eq!(buffer.pixel(0), Some(Pixel::new(1, 2, 3)));
        assert_eq!(buffer.pixel(1), Some(Pixel::new(4, 5, 0)));
    }

    #[test]
    fn test_last_byte_completes_frame() {
        let mut buffer = FrameBuffer::<1>::new();
        let mut assembler = FrameAssembler::new();

        assembler.on_byte(7, &mut buffer);
        assembler.on_byte(8, &mut buffer);
        assert_eq!(
            assembler.on_byte(9, &mut buffer),
            AssemblyStatus::FrameComplete
        );
        assert_eq!(assembler.cursor(), 3);
        assert_eq!(buffer.pixel(0), Some(Pixel::new(7, 8, 9)));
    }

    #[test]
    fn test_completed_frame_ignores_bytes_until_reset() {
        let mut buffer = FrameBuffer::<1>::new();
        let mut assembler = FrameAssembler::new();
        for byte in [1, 2, 3] {
            assembler.on_byte(byte, &mut buffer);
        }

        assert_eq!(
            assembler.on_byte(0xFF, &mut buffer),
            AssemblyStatus::FrameComplete
        );
        assert_eq!(buffer.pixel(0), Some(Pixel::new(1, 2, 3)));

        assembler.reset();
        assert_eq!(assembler.cursor(), 0);
        assembler.on_byte(0xFF, &mut buffer);
        assert_eq!(buffer.pixel(0), Some(Pixel::new(0xFF, 2, 3)));
    }

    proptest! {
        #[test]
        fn one_frame_of_bytes_is_grouped_into_triples(
            bytes in proptest::collection::vec(any::<u8>(), 12)
        ) {
            let mut buffer = FrameBuffer::<4>::new();
            let mut assembler = FrameAssembler::new();

            let statuses: Vec<_> = bytes
                .iter()
                .map(|&b| assembler.on_byte(b, &mut buffer))
                .collect();

            // Only the last byte completes the frame
            prop_assert!(statuses[..11].iter().all(|s| *s == AssemblyStatus::Accumulating));
            prop_assert_eq!(statuses[11], AssemblyStatus::FrameComplete);

            for (k, chunk) in bytes.chunks(3).enumerate() {
                prop_assert_eq!(buffer.pixel(k), Some(Pixel::new(chunk[0], chunk[1], chunk[2])));
            }
        }
    }
}
