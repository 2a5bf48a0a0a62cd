//! Simulated Smoke Detector Example
//!
//! Runs the sensing-and-alarm loop on the host with a scripted ADC instead
//! of real hardware: a few clean-air cycles, a smoke event, a sensor
//! disconnection, and recovery.
//!
//! ## What You'll Learn
//!
//! - Wiring the detector to ADC, alarm, and reporter implementations
//! - How the disconnection guard short-circuits a cycle
//! - The AND-of-three alarm rule in action
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_detector
//! ```

use smokewatch_core::sim::{NoopDelay, RecordingAlarm, ScriptedAdc, VecReporter};
use smokewatch_core::{CycleOutcome, DelayProvider, PinState, SmokeDetector};

fn main() {
    println!("Smokewatch Simulated Detector Example");
    println!("=====================================\n");

    // One frame per cycle: [MQ-9, MQ-7, MQ-135] raw samples.
    // Low counts mean high sensor resistance, which the MQ calibration
    // curves map to high ppm - that's what a smoke event looks like.
    let script = vec![
        [512, 512, 512], // clean air
        [512, 512, 512], // clean air
        [10, 10, 10],    // smoke on all three channels
        [10, 512, 10],   // MQ-7 back to normal: alarm must clear
        [512, 0, 512],   // MQ-7 unplugged mid-run
        [512, 512, 512], // recovered
    ];
    let cycles = script.len();

    let mut alarm = RecordingAlarm::default();
    let mut reporter = VecReporter::default();
    let mut delay = NoopDelay;
    let mut detector =
        SmokeDetector::new(ScriptedAdc::new(script), &mut alarm, &mut reporter);

    detector.begin(&mut delay);

    for cycle in 0..cycles {
        let outcome = detector.run_cycle();
        match outcome {
            CycleOutcome::Evaluated { ppm, smoke } => {
                println!(
                    "cycle {}: ppm = [{:.1}, {:.1}, {:.1}], smoke = {}",
                    cycle, ppm[0], ppm[1], ppm[2], smoke
                );
            }
            CycleOutcome::Disconnected { channel } => {
                println!("cycle {}: {} disconnected, outputs forced LOW", cycle, channel.label());
            }
        }
        delay.delay_ms(1000); // swap in StdDelay to run in real time
    }
    drop(detector);

    println!("\nSerial output the board would have printed:");
    for line in &reporter.lines {
        println!("  {line}");
    }

    println!("\nFinal pin states:");
    println!("  buzzer: {:?}", alarm.buzzer.unwrap_or(PinState::Low));
    println!("  led:    {:?}", alarm.led.unwrap_or(PinState::Low));
    println!("  {} pin transitions in total", alarm.transitions.len());
}
