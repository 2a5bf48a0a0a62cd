//! Sensing-and-alarm core for a three-channel gas-sensor smoke detector
//!
//! Polls MQ-9, MQ-7, and MQ-135 sensors over a 10-bit ADC, converts each
//! raw sample to a gas concentration estimate, and drives a buzzer and LED
//! when all three estimates exceed the smoke threshold in the same cycle.
//! Hardware access goes through small traits so the loop runs unchanged on
//! firmware, in tests, and in host simulations.
//!
//! Key constraints:
//! - No heap allocation in the cycle path
//! - No state carried between cycles; every decision is from scratch
//! - `f32` math via `libm`, identical on hosted and bare-metal targets
//!
//! ```
//! use smokewatch_core::{SmokeDetector, CycleOutcome};
//! use smokewatch_core::sim::{ScriptedAdc, RecordingAlarm, VecReporter};
//!
//! let adc = ScriptedAdc::steady([512, 512, 512]);
//! let mut detector = SmokeDetector::new(adc, RecordingAlarm::default(), VecReporter::default());
//!
//! match detector.run_cycle() {
//!     CycleOutcome::Evaluated { smoke, .. } => assert!(!smoke),
//!     CycleOutcome::Disconnected { .. } => unreachable!(),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod constants;
pub mod convert;
pub mod detector;
pub mod errors;
pub mod traits;

#[cfg(feature = "std")]
pub mod sim;

// Public API
pub use channel::{CalibrationCurve, Channel, RawSample};
pub use detector::{CycleOutcome, DetectorConfig, SmokeDetector};
pub use errors::{SensorError, SensorResult};
pub use traits::{AlarmSink, DelayProvider, GasAdc, PinState, StatusReporter};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
