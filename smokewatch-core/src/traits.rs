//! Hardware seams for the sensing loop
//!
//! These traits isolate the loop from the board: the ADC, the two alarm
//! outputs, the serial status line, and the blocking delay. Tests and host
//! simulations supply scripted implementations; firmware supplies thin
//! adapters over the HAL. Keep them simple - the loop needs nothing beyond
//! "sample a pin", "set a pin", "print a line", and "sleep".

use crate::channel::{Channel, RawSample};

/// Level of a digital output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinState {
    /// Output driven low (alarm off).
    Low,
    /// Output driven high (alarm on).
    High,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Low => defmt::write!(fmt, "LOW"),
            Self::High => defmt::write!(fmt, "HIGH"),
        }
    }
}

/// Analog sampling capability, one 10-bit reading per channel.
///
/// Infallible by design: a real converter always returns a count, and a
/// disconnected sensor shows up as a value, not a transport error.
pub trait GasAdc {
    /// Take one raw sample from the given channel, in [0, 1023].
    fn sample(&mut self, channel: Channel) -> RawSample;
}

/// The two alarm outputs: buzzer and LED.
pub trait AlarmSink {
    /// Drive the buzzer pin.
    fn set_buzzer(&mut self, state: PinState);

    /// Drive the LED pin.
    fn set_led(&mut self, state: PinState);

    /// Drive both outputs to the same level.
    fn set_both(&mut self, state: PinState) {
        self.set_buzzer(state);
        self.set_led(state);
    }
}

/// Text reporting channel for human-readable status lines.
///
/// One call per newline-terminated line; the serial adapter appends the
/// terminator.
pub trait StatusReporter {
    /// Emit one status line.
    fn report(&mut self, line: &str);
}

/// Blocking sleep, millisecond resolution.
pub trait DelayProvider {
    /// Block the single execution context for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// Mutable references delegate, so callers can lend a double to the
// detector and inspect it afterwards.

impl<T: GasAdc + ?Sized> GasAdc for &mut T {
    fn sample(&mut self, channel: Channel) -> RawSample {
        (**self).sample(channel)
    }
}

impl<T: AlarmSink + ?Sized> AlarmSink for &mut T {
    fn set_buzzer(&mut self, state: PinState) {
        (**self).set_buzzer(state);
    }
    fn set_led(&mut self, state: PinState) {
        (**self).set_led(state);
    }
}

impl<T: StatusReporter + ?Sized> StatusReporter for &mut T {
    fn report(&mut self, line: &str) {
        (**self).report(line);
    }
}

impl<T: DelayProvider + ?Sized> DelayProvider for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        buzzer: PinState,
        led: PinState,
    }

    impl AlarmSink for Pair {
        fn set_buzzer(&mut self, state: PinState) {
            self.buzzer = state;
        }
        fn set_led(&mut self, state: PinState) {
            self.led = state;
        }
    }

    #[test]
    fn set_both_drives_both_pins() {
        let mut pair = Pair {
            buzzer: PinState::Low,
            led: PinState::Low,
        };
        pair.set_both(PinState::High);
        assert_eq!(pair.buzzer, PinState::High);
        assert_eq!(pair.led, PinState::High);
    }
}
