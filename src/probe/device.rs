//! Probe interface consumed by the sampler.

use core::fmt;

/// Z probe of the printer.
///
/// How a probe cycle finds the bed is up to the implementation; afterwards
/// the toolhead's Z position holds the trigger height.
pub trait Probe {
    /// Failure reported by the probe subsystem.
    type Error: fmt::Display;

    /// Run one probe cycle (descend until triggered).
    fn probe(&mut self) -> Result<(), Self::Error>;
}

impl<P: Probe + ?Sized> Probe for &mut P {
    type Error = P::Error;

    fn probe(&mut self) -> Result<(), Self::Error> {
        (**self).probe()
    }
}
