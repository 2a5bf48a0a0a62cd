//! Sensor channels and their calibration data
//!
//! The detector watches three MQ-series gas sensors, each on its own analog
//! input. A channel bundles the sensor's identity with the fixed calibration
//! triple its concentration curve needs: the clean-air baseline resistance
//! and the two log-log curve-fit constants.

use crate::constants::{
    MQ135_ANALOG_PIN, MQ135_CLEAN_AIR_RO_KOHM, MQ135_LOG_INTERCEPT, MQ135_LOG_SLOPE,
    MQ7_ANALOG_PIN, MQ7_CLEAN_AIR_RO_KOHM, MQ7_LOG_INTERCEPT, MQ7_LOG_SLOPE, MQ9_ANALOG_PIN,
    MQ9_CLEAN_AIR_RO_KOHM, MQ9_LOG_INTERCEPT, MQ9_LOG_SLOPE,
};

/// One raw ADC sample, 10-bit, in [0, 1023].
///
/// A snapshot of the converter output; never averaged or filtered.
pub type RawSample = u16;

/// The three gas-sensor channels, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// MQ-9: carbon monoxide and combustible gases.
    Mq9,
    /// MQ-7: carbon monoxide.
    Mq7,
    /// MQ-135: air quality (NH3, benzene, smoke).
    Mq135,
}

/// Fixed calibration triple for one channel's concentration curve.
///
/// ppm = 10^(log10(Rs / ro_clean_air_kohm) / log_slope + log_intercept)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationCurve {
    /// Baseline sensor resistance in clean air (kΩ).
    pub ro_clean_air_kohm: f32,
    /// Slope divisor of the log-log sensitivity fit.
    pub log_slope: f32,
    /// Intercept of the log-log sensitivity fit.
    pub log_intercept: f32,
}

impl Channel {
    /// All channels in the order they are sampled and reported.
    pub const ALL: [Channel; 3] = [Channel::Mq9, Channel::Mq7, Channel::Mq135];

    /// Display label used in status lines.
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Mq9 => "MQ-9",
            Channel::Mq7 => "MQ-7",
            Channel::Mq135 => "MQ-135",
        }
    }

    /// Board analog input the channel is wired to.
    pub const fn analog_pin(self) -> u8 {
        match self {
            Channel::Mq9 => MQ9_ANALOG_PIN,
            Channel::Mq7 => MQ7_ANALOG_PIN,
            Channel::Mq135 => MQ135_ANALOG_PIN,
        }
    }

    /// The channel's fixed calibration triple.
    pub const fn curve(self) -> CalibrationCurve {
        match self {
            Channel::Mq9 => CalibrationCurve {
                ro_clean_air_kohm: MQ9_CLEAN_AIR_RO_KOHM,
                log_slope: MQ9_LOG_SLOPE,
                log_intercept: MQ9_LOG_INTERCEPT,
            },
            Channel::Mq7 => CalibrationCurve {
                ro_clean_air_kohm: MQ7_CLEAN_AIR_RO_KOHM,
                log_slope: MQ7_LOG_SLOPE,
                log_intercept: MQ7_LOG_INTERCEPT,
            },
            Channel::Mq135 => CalibrationCurve {
                ro_clean_air_kohm: MQ135_CLEAN_AIR_RO_KOHM,
                log_slope: MQ135_LOG_SLOPE,
                log_intercept: MQ135_LOG_INTERCEPT,
            },
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_order_matches_report_order() {
        let labels: [&str; 3] = [
            Channel::ALL[0].label(),
            Channel::ALL[1].label(),
            Channel::ALL[2].label(),
        ];
        assert_eq!(labels, ["MQ-9", "MQ-7", "MQ-135"]);
    }

    #[test]
    fn curves_are_distinct_triples() {
        let mq9 = Channel::Mq9.curve();
        let mq7 = Channel::Mq7.curve();
        let mq135 = Channel::Mq135.curve();

        assert_eq!(mq9.ro_clean_air_kohm, 9.83);
        assert_eq!(mq7.ro_clean_air_kohm, 20.0);
        assert_eq!(mq135.ro_clean_air_kohm, 9.83);

        // Same Ro for MQ-9 and MQ-135, but different fits
        assert_ne!(mq9.log_slope, mq135.log_slope);
        assert_ne!(mq9.log_intercept, mq135.log_intercept);
    }

    #[test]
    fn pins_match_board_wiring() {
        assert_eq!(Channel::Mq9.analog_pin(), 0);
        assert_eq!(Channel::Mq7.analog_pin(), 1);
        assert_eq!(Channel::Mq135.analog_pin(), 2);
    }
}
