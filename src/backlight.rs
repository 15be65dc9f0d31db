//! Panel backlight control.

use embedded_hal::digital::{ErrorType, OutputPin};
use std::convert::Infallible;
use tracing::{debug, instrument};

/// Backlight driven by a single GPIO (high = lit).
#[derive(Debug)]
pub struct Backlight<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Wraps the backlight pin. The light is assumed off until [`on`](Self::on).
    pub fn new(pin: P) -> Self {
        Self { pin, lit: false }
    }

    /// Turns the backlight on.
    #[instrument(skip(self))]
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.lit = true;
        debug!("Backlight on");
        Ok(())
    }

    /// Turns the backlight off.
    #[instrument(skip(self))]
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.lit = false;
        debug!("Backlight off");
        Ok(())
    }

    /// Returns true while the backlight is on.
    pub fn is_on(&self) -> bool {
        self.lit
    }

    /// Releases the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

/// Output pin that only remembers its level, for hosts without GPIO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedPin {
    high: bool,
}

impl SimulatedPin {
    /// Returns true if the pin was last driven high.
    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl OutputPin for SimulatedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backlight_drives_pin() {
        let mut backlight = Backlight::new(SimulatedPin::default());
        assert!(!backlight.is_on());

        backlight.on().unwrap();
        assert!(backlight.is_on());

        backlight.off().unwrap();
        assert!(!backlight.is_on());
        assert!(!backlight.release().is_high());
    }
}
