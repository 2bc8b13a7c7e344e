//! Display driver trait for the LED grid

use crate::frame::Pixel;

/// Trait for the component that turns pixels into light
///
/// The receiver owns the pixel storage and lends it read-only for the
/// duration of one `present` call. Initialization (strip type, brightness
/// cap, pins) happens once at startup and is not part of this trait.
pub trait DisplayDriver {
    /// Error type for present operations
    type Error;

    /// Render `pixels` to the grid
    ///
    /// Pixels are in transmission order; channel bytes are passed through
    /// untouched. Must return only once the frame has been handed to the
    /// hardware.
    fn present(&mut self, pixels: &[Pixel]) -> Result<(), Self::Error>;
}

impl<T: DisplayDriver + ?Sized> DisplayDriver for &mut T {
    type Error = T::Error;

    fn present(&mut self, pixels: &[Pixel]) -> Result<(), Self::Error> {
        (**self).present(pixels)
    }
}
