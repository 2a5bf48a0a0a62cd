//! Raw-sample to concentration conversion chain
//!
//! Three pure steps, applied per channel every cycle:
//!
//! 1. raw count -> voltage, against the 5 V / 10-bit ADC
//! 2. voltage -> sensor resistance, from the voltage-divider equation
//! 3. resistance -> ppm, through the channel's log-log calibration curve
//!
//! All math is `f32` with `libm` transcendentals so the chain behaves
//! identically on hosted and bare-metal targets.
//!
//! The chain carries no numeric guards. A voltage of exactly 0 divides by
//! zero in step 2 and a non-positive resistance produces NaN in step 3; the
//! detector's raw-sample disconnection guard is the only thing standing
//! between those inputs and the formulas. That guard excludes raw == 0 and
//! nothing else.

use libm::{log10f, powf};

use crate::channel::{CalibrationCurve, Channel, RawSample};
use crate::constants::{ADC_FULL_SCALE, ADC_VREF_VOLTS, LOAD_RESISTANCE_KOHM};

/// Convert a raw ADC count to the measured divider voltage (V).
pub fn voltage_from_raw(raw: RawSample) -> f32 {
    raw as f32 * (ADC_VREF_VOLTS / ADC_FULL_SCALE)
}

/// Back-calculate sensor resistance (kΩ) from the divider voltage.
///
/// Rs = (Vref * RL) / Vout - RL. Undefined at Vout == 0 and negative above
/// Vref/2 headroom; callers rely on the disconnection guard for the former.
pub fn resistance_from_voltage(voltage: f32) -> f32 {
    (ADC_VREF_VOLTS * LOAD_RESISTANCE_KOHM) / voltage - LOAD_RESISTANCE_KOHM
}

/// Estimate gas concentration (ppm) from sensor resistance.
///
/// ppm = 10^(log10(Rs / Ro) / slope + intercept), the datasheet log-log fit.
pub fn ppm_from_resistance(resistance_kohm: f32, curve: &CalibrationCurve) -> f32 {
    powf(
        10.0,
        log10f(resistance_kohm / curve.ro_clean_air_kohm) / curve.log_slope
            + curve.log_intercept,
    )
}

/// Full conversion chain for one channel.
pub fn ppm_from_raw(raw: RawSample, channel: Channel) -> f32 {
    let voltage = voltage_from_raw(raw);
    let resistance = resistance_from_voltage(voltage);
    ppm_from_resistance(resistance, &channel.curve())
}
