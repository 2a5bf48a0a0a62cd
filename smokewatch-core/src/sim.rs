//! Host-side test doubles for the hardware seams
//!
//! Everything here is `std`-only and exists so the loop can run on a
//! development machine: scripted ADC frames instead of real sampling, a
//! recording alarm sink instead of pins, collected lines instead of a
//! serial port, and delays that either do nothing or actually sleep.

use crate::channel::{Channel, RawSample};
use crate::traits::{AlarmSink, DelayProvider, GasAdc, PinState, StatusReporter};

/// Replays pre-scripted raw-sample frames, one frame per cycle.
///
/// Each frame holds the three channel samples in [`Channel::ALL`] order.
/// Once the script runs out the last frame repeats forever, mirroring a
/// sensor environment that stopped changing.
pub struct ScriptedAdc {
    frames: Vec<[RawSample; 3]>,
    cursor: usize,
}

impl ScriptedAdc {
    /// Build from a list of frames. An empty script reads as all zeros,
    /// i.e. every channel disconnected.
    pub fn new(frames: Vec<[RawSample; 3]>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// A script that repeats one frame forever.
    pub fn steady(frame: [RawSample; 3]) -> Self {
        Self::new(vec![frame])
    }

    fn current(&self) -> [RawSample; 3] {
        if self.frames.is_empty() {
            return [0; 3];
        }
        let index = self.cursor.min(self.frames.len() - 1);
        self.frames[index]
    }
}

impl GasAdc for ScriptedAdc {
    fn sample(&mut self, channel: Channel) -> RawSample {
        let frame = self.current();
        let raw = match channel {
            Channel::Mq9 => frame[0],
            Channel::Mq7 => frame[1],
            Channel::Mq135 => frame[2],
        };
        // A cycle samples MQ-135 last; advance to the next frame after it
        if channel == Channel::Mq135 {
            self.cursor += 1;
        }
        raw
    }
}

/// Captures every pin transition the detector makes.
#[derive(Debug, Default)]
pub struct RecordingAlarm {
    /// Current buzzer level, if set at least once.
    pub buzzer: Option<PinState>,
    /// Current LED level, if set at least once.
    pub led: Option<PinState>,
    /// Every (pin name, state) write in order.
    pub transitions: Vec<(&'static str, PinState)>,
}

impl AlarmSink for RecordingAlarm {
    fn set_buzzer(&mut self, state: PinState) {
        self.buzzer = Some(state);
        self.transitions.push(("buzzer", state));
    }

    fn set_led(&mut self, state: PinState) {
        self.led = Some(state);
        self.transitions.push(("led", state));
    }
}

/// Collects reported status lines in order.
#[derive(Debug, Default)]
pub struct VecReporter {
    /// Every line the detector reported.
    pub lines: Vec<String>,
}

impl StatusReporter for VecReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Delay that returns immediately; keeps simulated runs fast.
#[derive(Debug, Default)]
pub struct NoopDelay;

impl DelayProvider for NoopDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

/// Delay backed by the OS clock, for demos that run in real time.
#[derive(Debug, Default)]
pub struct StdDelay;

impl DelayProvider for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
