//! PIO-driven WS2812 LED grid
//!
//! Wraps embassy-rp's WS2812 PIO program as a [`DisplayDriver`]. The PIO
//! state machine generates the bit timing and DMA feeds it, so the CPU only
//! converts pixels and waits for the transfer.
//!
//! # Channel order
//!
//! Wire channel 0/1/2 are loaded into the `r`/`g`/`b` fields of the strip
//! colour, and the PIO program shifts them out in the GRB order WS2812B
//! parts expect. Hosts send `rgb` for correct colours.

use core::convert::Infallible;

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use lumigrid_core::{DisplayDriver, Pixel};
use smart_leds::RGB8;

/// Full brightness (no scaling)
pub const MAX_BRIGHTNESS: u8 = 255;

/// WS2812 grid of `N` LEDs on PIO block `P`, state machine `S`
pub struct PioLedGrid<'d, P: Instance, const S: usize, const N: usize> {
    strip: PioWs2812<'d, P, S, N>,
    /// Global brightness cap applied on output (255 = unscaled)
    brightness: u8,
    /// Scratch buffer handed to the DMA transfer
    colors: [RGB8; N],
}

impl<'d, P: Instance, const S: usize, const N: usize> PioLedGrid<'d, P, S, N> {
    /// Wrap an initialized strip
    ///
    /// `brightness` caps output power: every channel is scaled by
    /// `(brightness + 1) / 256`. This is a driver setting; the receiver core
    /// never alters channel values.
    pub fn new(strip: PioWs2812<'d, P, S, N>, brightness: u8) -> Self {
        Self {
            strip,
            brightness,
            colors: [RGB8::default(); N],
        }
    }

    /// Current brightness cap
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    fn load(&mut self, pixels: &[Pixel]) {
        let source = pixels
            .iter()
            .map(|pixel| {
                let [c0, c1, c2] = pixel.channels();
                RGB8::new(c0, c1, c2)
            })
            .chain(core::iter::repeat(RGB8::default()));

        let scaled = smart_leds::brightness(source, self.brightness);
        for (dst, src) in self.colors.iter_mut().zip(scaled) {
            *dst = src;
        }
    }
}

impl<'d, P: Instance, const S: usize, const N: usize> DisplayDriver for PioLedGrid<'d, P, S, N> {
    type Error = Infallible;

    fn present(&mut self, pixels: &[Pixel]) -> Result<(), Self::Error> {
        self.load(pixels);
        // Present is synchronous: spin until the DMA transfer and latch finish
        embassy_futures::block_on(self.strip.write(&self.colors));
        Ok(())
    }
}
