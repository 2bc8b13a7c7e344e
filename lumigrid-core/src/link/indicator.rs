//! Liveness indicator output
//!
//! A single GPIO (usually the board LED) that is lit while the link is
//! active.

use lumigrid_hal::OutputPin;

use super::monitor::LinkStatus;

/// Binary liveness indicator
pub struct LinkIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    active_low: bool,
}

impl<P: OutputPin> LinkIndicator<P> {
    /// Create an indicator; the pin is not driven until the first [`show`]
    ///
    /// [`show`]: LinkIndicator::show
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Drive the pin to the level for `status`
    pub fn show(&mut self, status: LinkStatus) {
        let lit = status.is_active();
        // Normal: lit → high. Active-low: lit → low.
        self.pin.set_state(lit != self.active_low);
    }

    /// Check whether the indicator currently shows an active link
    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high() != self.active_low
    }

    /// Access the pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_indicator() {
        let mut indicator = LinkIndicator::new(MockPin { high: false }, false);

        indicator.show(LinkStatus::Active);
        assert!(indicator.is_lit());
        assert!(indicator.pin().high);

        indicator.show(LinkStatus::Stale);
        assert!(!indicator.is_lit());
        assert!(!indicator.pin().high);
    }

    #[test]
    fn test_active_low_indicator() {
        let mut indicator = LinkIndicator::new(MockPin { high: true }, true);

        indicator.show(LinkStatus::Active);
        assert!(indicator.is_lit());
        assert!(!indicator.pin().high);

        indicator.show(LinkStatus::Stale);
        assert!(!indicator.is_lit());
        assert!(indicator.pin().high);
    }
}
