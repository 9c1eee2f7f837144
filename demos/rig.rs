//! Sonar-gated rig example.
//!
//! Demonstrates the caller side the library leaves out:
//! - Load the rig description from TOML (a file path argument, or a built-in one)
//! - Poll the distance sensor until something comes within the gate distance
//! - Run both actuators at once on scoped threads
//!
//! The pins and echo line are mocks, so this runs without real hardware.
//!
//! Run with: `cargo run --example rig --features std [-- rig.toml]`

use sonar_stepper::{
    hal::{EchoInput, Edge, EdgeEvent},
    Clock, DistanceSensor, Result, RigConfig, StdClock, StdDelay, StepperActuatorBuilder,
};

const DEFAULT_RIG: &str = r#"
numbering = "bcm"

[sensor]
trigger_pin = 23
echo_pin = 24
timeout_s = 0.1

[actuators.left]
pins = [5, 6, 13, 19]
mode = "four_step"

[actuators.right]
pins = [22, 27, 17, 4]
mode = "four_step"

[run]
rps = 0.5
revolutions = 0.05
direction = "clockwise"
gate_distance_m = 0.3
poll_interval_ms = 20
"#;

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

/// Echo line for an object walking towards the sensor 10 cm per ping.
struct ApproachingObject {
    clock: StdClock,
    distance_m: f32,
    rise_ns: u64,
}

impl EchoInput for ApproachingObject {
    fn wait_for_edge(&mut self, edge: Edge, timeout_ns: u64) -> Result<EdgeEvent> {
        let now = self.clock.now_ns();
        match edge {
            Edge::Rising => {
                self.distance_m = (self.distance_m - 0.1).max(0.05);
                self.rise_ns = now;
                Ok(EdgeEvent::Detected { at_ns: now })
            }
            Edge::Falling => {
                let round_trip_ns = (2.0 * self.distance_m / 343.0 * 1e9) as u64;
                if round_trip_ns > timeout_ns {
                    return Ok(EdgeEvent::TimedOut);
                }
                Ok(EdgeEvent::Detected {
                    at_ns: self.rise_ns + round_trip_ns,
                })
            }
        }
    }
}

fn load() -> Result<RigConfig> {
    match std::env::args().nth(1) {
        Some(path) => sonar_stepper::load_config(path),
        None => sonar_stepper::parse_config(DEFAULT_RIG),
    }
}

fn main() -> Result<()> {
    println!("=== Sonar-Gated Rig Example ===\n");

    let config = load()?;
    let sensor_config = config.sensor.clone().unwrap_or_else(|| {
        println!("No [sensor] section, using BCM 23/24");
        sonar_stepper::SensorConfig::new(23, 24)
    });
    let Some(run) = config.run else {
        println!("No [run] section, nothing to do");
        return Ok(());
    };

    // Gate: wait for something to come close.
    let echo = ApproachingObject {
        clock: StdClock::new(),
        distance_m: 1.0,
        rise_ns: 0,
    };
    let mut sensor = DistanceSensor::activate(MockPin::new(), echo, StdDelay, sensor_config)?;
    println!(
        "Waiting for an object within {} m (poll every {} ms)...",
        run.gate_distance.0, run.poll_interval_ms
    );
    let distance = sensor.wait_until_within(
        run.gate_distance,
        run.poll_interval_ms.saturating_mul(1_000),
        Some(100),
    )?;
    println!("Object at {:.3} m, starting motors\n", distance.0);
    sensor.deactivate()?;

    // Motion: one thread per actuator.
    let names: Vec<&str> = config.actuator_names().collect();
    let reports = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|&name| {
                let config = &config;
                scope.spawn(move || -> Result<_> {
                    let mut motor = StepperActuatorBuilder::new()
                        .from_config(config, name)?
                        .pins([MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()])
                        .clock(StdClock::new())
                        .delay(StdDelay)
                        .build()?;
                    let report = motor.run(run.rps, run.revolutions, run.direction)?;
                    Ok((name, report))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("actuator thread panicked"))
            .collect::<Result<Vec<_>>>()
    })?;

    for (name, report) in reports {
        println!(
            "{}: {} steps, {:.3} rev, final phase {}, {} late",
            name,
            report.steps,
            report.revolutions.0,
            report.final_phase.get(),
            report.late_steps
        );
    }

    Ok(())
}
