//! The sensing-and-alarm loop
//!
//! One linear cycle, repeated forever on a fixed cadence:
//!
//! 1. Sample all three channels.
//! 2. If any raw sample trips the disconnection guard, report it, force
//!    both outputs LOW, and skip the rest of the cycle.
//! 3. Otherwise convert each channel to a ppm estimate independently.
//! 4. Report all three estimates on one line, one decimal place each.
//! 5. Drive both outputs HIGH and report "Smoke detected." only when every
//!    estimate is strictly above the smoke threshold; otherwise LOW and
//!    "No smoke detected.".
//! 6. Sleep until the next cycle.
//!
//! Nothing persists between cycles. The alarm is recomputed from the
//! current samples every time, with no hysteresis or debounce, so a given
//! raw triple always produces the same lines and the same pin states.

use core::fmt::Write as _;

use heapless::String;

use crate::channel::{Channel, RawSample};
use crate::constants::{
    CYCLE_DELAY_MS, DISCONNECTED_THRESHOLD_RAW, SMOKE_THRESHOLD_PPM, WARMUP_DELAY_MS,
};
use crate::convert::ppm_from_raw;
use crate::errors::{SensorError, SensorResult};
use crate::traits::{AlarmSink, DelayProvider, GasAdc, PinState, StatusReporter};

/// Status line emitted when the disconnection guard trips.
pub const DISCONNECTED_LINE: &str = "Sensor disconnected or reading unstable.";

/// Status line emitted when the alarm fires.
pub const SMOKE_LINE: &str = "Smoke detected.";

/// Status line emitted when the alarm does not fire.
pub const NO_SMOKE_LINE: &str = "No smoke detected.";

/// Capacity of the formatted readings line. Three f32 values at one
/// decimal place plus labels fit comfortably even at f32::MAX.
const LINE_CAPACITY: usize = 192;

/// Fixed per-deployment configuration for the loop.
///
/// There is exactly one detector per board, so this is plain data passed
/// in at construction rather than a global.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Raw samples below this are treated as a disconnected sensor.
    pub disconnected_threshold_raw: RawSample,
    /// Every channel must estimate strictly above this (ppm) to alarm.
    pub smoke_threshold_ppm: f32,
    /// Delay between cycles (ms).
    pub cycle_delay_ms: u32,
    /// One-time warm-up delay before the first cycle (ms).
    pub warmup_delay_ms: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            disconnected_threshold_raw: DISCONNECTED_THRESHOLD_RAW,
            smoke_threshold_ppm: SMOKE_THRESHOLD_PPM,
            cycle_delay_ms: CYCLE_DELAY_MS,
            warmup_delay_ms: WARMUP_DELAY_MS,
        }
    }
}

/// What one cycle concluded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleOutcome {
    /// The disconnection guard tripped; concentrations were not computed.
    Disconnected {
        /// First channel whose raw sample fell below the threshold.
        channel: Channel,
    },
    /// All three channels converted; `smoke` is the AND-of-three decision.
    Evaluated {
        /// Concentration estimates in [`Channel::ALL`] order (ppm).
        ppm: [f32; 3],
        /// True only if every estimate exceeded the smoke threshold.
        smoke: bool,
    },
}

/// The smoke detector: owns the hardware seams and the loop logic.
pub struct SmokeDetector<A, S, R> {
    adc: A,
    alarm: S,
    reporter: R,
    config: DetectorConfig,
}

impl<A, S, R> SmokeDetector<A, S, R>
where
    A: GasAdc,
    S: AlarmSink,
    R: StatusReporter,
{
    /// Create a detector with the board's default configuration.
    pub fn new(adc: A, alarm: S, reporter: R) -> Self {
        Self::with_config(adc, alarm, reporter, DetectorConfig::default())
    }

    /// Create a detector with explicit configuration.
    pub fn with_config(adc: A, alarm: S, reporter: R, config: DetectorConfig) -> Self {
        Self {
            adc,
            alarm,
            reporter,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Power-up sequence: both outputs LOW, then the sensor warm-up delay.
    pub fn begin<D: DelayProvider>(&mut self, delay: &mut D) {
        self.alarm.set_both(PinState::Low);
        delay.delay_ms(self.config.warmup_delay_ms);
    }

    /// Run one full sensing cycle and return what it concluded.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        let raw = self.sample_all();

        match self.check_connected(&raw) {
            Err(SensorError::Disconnected { channel }) => {
                #[cfg(feature = "log")]
                log::warn!("{:?} raw sample below disconnection threshold", channel);

                self.reporter.report(DISCONNECTED_LINE);
                self.alarm.set_both(PinState::Low);
                CycleOutcome::Disconnected { channel }
            }
            Ok(()) => {
                let ppm = [
                    ppm_from_raw(raw[0], Channel::Mq9),
                    ppm_from_raw(raw[1], Channel::Mq7),
                    ppm_from_raw(raw[2], Channel::Mq135),
                ];

                self.report_readings(&ppm);

                let smoke = ppm
                    .iter()
                    .all(|&estimate| estimate > self.config.smoke_threshold_ppm);

                if smoke {
                    self.alarm.set_both(PinState::High);
                    self.reporter.report(SMOKE_LINE);
                } else {
                    self.alarm.set_both(PinState::Low);
                    self.reporter.report(NO_SMOKE_LINE);
                }

                #[cfg(feature = "log")]
                log::debug!("cycle raw={:?} ppm={:?} smoke={}", raw, ppm, smoke);

                CycleOutcome::Evaluated { ppm, smoke }
            }
        }
    }

    /// Run forever: power-up sequence, then one cycle per cadence tick.
    ///
    /// Never returns; on hardware the only stop is a power cycle.
    pub fn run<D: DelayProvider>(&mut self, delay: &mut D) -> ! {
        self.begin(delay);
        loop {
            self.run_cycle();
            delay.delay_ms(self.config.cycle_delay_ms);
        }
    }

    fn sample_all(&mut self) -> [RawSample; 3] {
        [
            self.adc.sample(Channel::Mq9),
            self.adc.sample(Channel::Mq7),
            self.adc.sample(Channel::Mq135),
        ]
    }

    /// The disconnection guard: any sample strictly below the threshold
    /// marks the whole cycle unreliable. With the threshold at 1 only a
    /// raw sample of exactly 0 trips it.
    fn check_connected(&self, raw: &[RawSample; 3]) -> SensorResult<()> {
        for (index, channel) in Channel::ALL.iter().enumerate() {
            if raw[index] < self.config.disconnected_threshold_raw {
                return Err(SensorError::Disconnected { channel: *channel });
            }
        }
        Ok(())
    }

    fn report_readings(&mut self, ppm: &[f32; 3]) {
        let mut line: String<LINE_CAPACITY> = String::new();
        for (index, channel) in Channel::ALL.iter().enumerate() {
            if index > 0 {
                let _ = line.push_str(", ");
            }
            let _ = write!(line, "{} - PPM: {:.1}", channel.label(), ppm[index]);
        }
        self.reporter.report(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdc {
        raw: [RawSample; 3],
    }

    impl GasAdc for FixedAdc {
        fn sample(&mut self, channel: Channel) -> RawSample {
            match channel {
                Channel::Mq9 => self.raw[0],
                Channel::Mq7 => self.raw[1],
                Channel::Mq135 => self.raw[2],
            }
        }
    }

    #[derive(Default)]
    struct Pins {
        buzzer: Option<PinState>,
        led: Option<PinState>,
    }

    impl AlarmSink for Pins {
        fn set_buzzer(&mut self, state: PinState) {
            self.buzzer = Some(state);
        }
        fn set_led(&mut self, state: PinState) {
            self.led = Some(state);
        }
    }

    #[derive(Default)]
    struct Lines {
        lines: Vec<std::string::String>,
    }

    impl StatusReporter for Lines {
        fn report(&mut self, line: &str) {
            self.lines.push(line.into());
        }
    }

    struct CountingDelay {
        calls: Vec<u32>,
    }

    impl DelayProvider for CountingDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.calls.push(ms);
        }
    }

    fn cycle(raw: [RawSample; 3]) -> (CycleOutcome, Pins, Lines) {
        let mut pins = Pins::default();
        let mut lines = Lines::default();
        let mut detector = SmokeDetector::new(FixedAdc { raw }, &mut pins, &mut lines);
        let outcome = detector.run_cycle();
        drop(detector);
        (outcome, pins, lines)
    }

    #[test]
    fn zero_sample_trips_disconnection_guard() {
        // Other channels saturated high must not matter
        let (outcome, pins, lines) = cycle([0, 1023, 1023]);

        assert_eq!(
            outcome,
            CycleOutcome::Disconnected {
                channel: Channel::Mq9
            }
        );
        assert_eq!(pins.buzzer, Some(PinState::Low));
        assert_eq!(pins.led, Some(PinState::Low));
        assert_eq!(lines.lines, vec![DISCONNECTED_LINE.to_string()]);
    }

    #[test]
    fn guard_reports_first_offending_channel() {
        let (outcome, _, _) = cycle([512, 512, 0]);
        assert_eq!(
            outcome,
            CycleOutcome::Disconnected {
                channel: Channel::Mq135
            }
        );
    }

    #[test]
    fn raw_one_passes_the_guard() {
        // Boundary: the guard is `< 1`, so 1 must evaluate normally
        let (outcome, _, lines) = cycle([1, 1, 1]);
        assert!(matches!(outcome, CycleOutcome::Evaluated { .. }));
        assert_eq!(lines.lines.len(), 2);
        assert!(lines.lines[0].starts_with("MQ-9 - PPM: "));
    }

    #[test]
    fn midscale_readings_do_not_alarm() {
        let (outcome, pins, lines) = cycle([512, 512, 512]);

        match outcome {
            CycleOutcome::Evaluated { ppm, smoke } => {
                assert!(!smoke);
                assert!(ppm.iter().all(|&p| p < 500.0));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(pins.buzzer, Some(PinState::Low));
        assert_eq!(pins.led, Some(PinState::Low));
        assert_eq!(lines.lines[1], NO_SMOKE_LINE);
    }

    #[test]
    fn alarm_needs_all_three_channels_over_threshold() {
        // Low counts map to high ppm on MQ curves; 10 is well above 500 ppm
        // on all three channels.
        let (outcome, pins, lines) = cycle([10, 10, 10]);

        match outcome {
            CycleOutcome::Evaluated { ppm, smoke } => {
                assert!(smoke);
                assert!(ppm.iter().all(|&p| p > 500.0));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(pins.buzzer, Some(PinState::High));
        assert_eq!(pins.led, Some(PinState::High));
        assert_eq!(lines.lines[1], SMOKE_LINE);

        // One calm channel vetoes the other two
        let (outcome, pins, lines) = cycle([10, 512, 10]);
        assert!(matches!(
            outcome,
            CycleOutcome::Evaluated { smoke: false, .. }
        ));
        assert_eq!(pins.buzzer, Some(PinState::Low));
        assert_eq!(pins.led, Some(PinState::Low));
        assert_eq!(lines.lines[1], NO_SMOKE_LINE);
    }

    #[test]
    fn readings_line_shape_matches_serial_output() {
        let (_, _, lines) = cycle([512, 512, 512]);
        let line = &lines.lines[0];

        assert!(line.starts_with("MQ-9 - PPM: "));
        assert!(line.contains(", MQ-7 - PPM: "));
        assert!(line.contains(", MQ-135 - PPM: "));
        // One decimal place per value
        for part in line.split(", ") {
            let value = part.rsplit(' ').next().unwrap();
            let (_, frac) = value.split_once('.').unwrap();
            assert_eq!(frac.len(), 1);
        }
    }

    #[test]
    fn consecutive_cycles_are_identical() {
        let mut pins = Pins::default();
        let mut lines = Lines::default();
        let mut detector = SmokeDetector::new(
            FixedAdc {
                raw: [400, 300, 200],
            },
            &mut pins,
            &mut lines,
        );

        let first = detector.run_cycle();
        let second = detector.run_cycle();
        drop(detector);

        assert_eq!(first, second);
        assert_eq!(lines.lines[0], lines.lines[2]);
        assert_eq!(lines.lines[1], lines.lines[3]);
    }

    #[test]
    fn begin_forces_outputs_low_and_warms_up() {
        let mut pins = Pins::default();
        let mut lines = Lines::default();
        let mut delay = CountingDelay { calls: Vec::new() };
        let mut detector = SmokeDetector::new(
            FixedAdc { raw: [512; 3] },
            &mut pins,
            &mut lines,
        );

        detector.begin(&mut delay);
        drop(detector);

        assert_eq!(pins.buzzer, Some(PinState::Low));
        assert_eq!(pins.led, Some(PinState::Low));
        assert_eq!(delay.calls, vec![WARMUP_DELAY_MS]);
    }
}
