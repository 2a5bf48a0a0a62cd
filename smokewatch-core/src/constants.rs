//! Board and Calibration Constants
//!
//! This module centralizes every fixed value the detector uses: ADC
//! characteristics, the voltage-divider load resistor, per-sensor clean-air
//! references and curve-fit constants, decision thresholds, and timing.
//! All configuration is compile-time; there is no runtime config surface.
//!
//! Values carry their units in the name. Calibration numbers come from the
//! MQ-series datasheet log-log sensitivity curves for the target gases.

use crate::channel::RawSample;

// ===== ADC CHARACTERISTICS =====

/// ADC reference voltage (V).
///
/// Arduino-class boards sample against a 5 V rail.
pub const ADC_VREF_VOLTS: f32 = 5.0;

/// Full-scale ADC count for a 10-bit converter.
///
/// Raw samples span [0, 1023]; the voltage conversion divides by this.
pub const ADC_FULL_SCALE: f32 = 1023.0;

/// Largest raw sample the converter can produce.
pub const ADC_MAX_RAW: RawSample = 1023;

// ===== SENSING CIRCUIT =====

/// Load resistance in each sensor's voltage divider (kΩ).
///
/// All three channels share the same 5 kΩ load resistor. Sensor resistance
/// is back-calculated from the divider: Rs = (Vref * RL) / Vout - RL.
pub const LOAD_RESISTANCE_KOHM: f32 = 5.0;

/// MQ-9 baseline resistance in clean air (kΩ).
pub const MQ9_CLEAN_AIR_RO_KOHM: f32 = 9.83;

/// MQ-7 baseline resistance in clean air (kΩ).
pub const MQ7_CLEAN_AIR_RO_KOHM: f32 = 20.0;

/// MQ-135 baseline resistance in clean air (kΩ).
pub const MQ135_CLEAN_AIR_RO_KOHM: f32 = 9.83;

// ===== CONCENTRATION CURVES =====
//
// ppm = 10^(log10(Rs / Ro) / slope + intercept), one (slope, intercept)
// pair per sensor, fitted to the datasheet sensitivity curve.

/// MQ-9 curve slope divisor (log-log fit).
pub const MQ9_LOG_SLOPE: f32 = 0.6;

/// MQ-9 curve intercept (log-log fit).
pub const MQ9_LOG_INTERCEPT: f32 = 0.35;

/// MQ-7 curve slope divisor (log-log fit).
pub const MQ7_LOG_SLOPE: f32 = 0.3;

/// MQ-7 curve intercept (log-log fit).
pub const MQ7_LOG_INTERCEPT: f32 = 0.47;

/// MQ-135 curve slope divisor (log-log fit).
pub const MQ135_LOG_SLOPE: f32 = 0.47;

/// MQ-135 curve intercept (log-log fit).
pub const MQ135_LOG_INTERCEPT: f32 = 0.69;

// ===== DECISION THRESHOLDS =====

/// Raw samples below this count as a disconnected sensor.
///
/// Compared with `<`, so only a raw sample of exactly 0 trips the guard.
/// A floating or unplugged sensor pin reads 0; any powered sensor reads at
/// least 1. Small nonzero samples pass through to the conversion chain
/// unguarded.
pub const DISCONNECTED_THRESHOLD_RAW: RawSample = 1;

/// Smoke alarm threshold (ppm).
///
/// The alarm fires only when every channel's estimate is strictly above
/// this value in the same cycle.
pub const SMOKE_THRESHOLD_PPM: f32 = 500.0;

// ===== TIMING =====

/// Delay between sensing cycles (ms).
pub const CYCLE_DELAY_MS: u32 = 1000;

/// Sensor warm-up delay before the first cycle (ms).
///
/// MQ-series heaters need time to stabilize after power-on; readings taken
/// earlier are meaningless.
pub const WARMUP_DELAY_MS: u32 = 2000;

/// Serial reporting baud rate.
pub const SERIAL_BAUD: u32 = 9600;

// ===== BOARD PIN ASSIGNMENTS =====
//
// Documented here for HAL adapters; the core never touches pins directly.

/// Analog input for the MQ-9 sensor (A0).
pub const MQ9_ANALOG_PIN: u8 = 0;

/// Analog input for the MQ-7 sensor (A1).
pub const MQ7_ANALOG_PIN: u8 = 1;

/// Analog input for the MQ-135 sensor (A2).
pub const MQ135_ANALOG_PIN: u8 = 2;

/// Digital output driving the buzzer (D8).
pub const BUZZER_PIN: u8 = 8;

/// Digital output driving the alarm LED (D13).
pub const LED_PIN: u8 = 13;
