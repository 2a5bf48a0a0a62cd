//! Error types for the sensing loop
//!
//! The taxonomy is deliberately one category wide: the only failure the
//! firmware detects is a sensor reading as unavailable, signaled by a raw
//! sample below the disconnection threshold. Out-of-range voltages and
//! NaN results from the calibration curve are not detected; the loop runs
//! indefinitely regardless of sensor health beyond this single guard.
//!
//! Errors stay small and `Copy` so they can be returned from the cycle hot
//! path without heap allocation.

use thiserror_no_std::Error;

use crate::channel::Channel;

/// Result type for sampling operations.
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensing failures - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Raw sample below the disconnection threshold; the sensor is treated
    /// as unplugged or unstable for the rest of the cycle.
    #[error("{channel:?} sensor disconnected or reading unstable")]
    Disconnected {
        /// The first channel whose sample tripped the guard.
        channel: Channel,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Disconnected { channel } => {
                defmt::write!(fmt, "{} sensor disconnected or reading unstable", channel)
            }
        }
    }
}
