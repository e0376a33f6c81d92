//! Simulated indexer example.
//!
//! Runs the port controller against simulated pins: the home switch trips
//! after a few steps and the STEP pin counts pulses. Pauses are skipped so
//! the demo finishes immediately.
//!
//! This example uses hand-written mock pins instead of real hardware.

use std::cell::Cell;
use std::rc::Rc;

use leadscrew_indexer::{
    LimitSwitchHoming, PortController, PulseDrive, RandomTargets, SystemConfig,
};

/// Delay provider that returns immediately.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // Real hardware would block on a timer here
    }
}

/// Output pin that counts rising edges.
struct MockPin {
    state: bool,
    rising_edges: Rc<Cell<u64>>,
}

impl MockPin {
    fn new(rising_edges: Rc<Cell<u64>>) -> Self {
        Self {
            state: false,
            rising_edges,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            self.rising_edges.set(self.rising_edges.get() + 1);
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

/// Active-low home switch that closes after a number of reads.
struct MockSwitch {
    reads_left: u32,
}

impl embedded_hal::digital::ErrorType for MockSwitch {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for MockSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.reads_left == 0 {
            return Ok(false);
        }
        self.reads_left -= 1;
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

fn main() {
    println!("=== Simulated Port Indexer ===\n");

    let config = SystemConfig::immediate();
    println!(
        "Track: {} steps/rev, {} steps between ports, {} steps home to port 1",
        config.geometry.steps_per_revolution,
        config.geometry.steps_between_ports,
        config.geometry.steps_home_to_port1
    );
    println!("Homing budget: {} steps\n", config.homing_budget());

    let step_edges = Rc::new(Cell::new(0));
    let dir_edges = Rc::new(Cell::new(0));

    let drive = PulseDrive::from_config(
        MockPin::new(step_edges.clone()),
        MockPin::new(dir_edges),
        MockDelay,
        &config,
    );
    let homing = LimitSwitchHoming::from_config(MockSwitch { reads_left: 40 }, &config);

    let controller = PortController::new(drive, homing, RandomTargets::new(), MockDelay, config);
    println!("State: {}", controller.state_name());

    let mut controller = match controller.start() {
        Ok(homed) => homed,
        Err((_, e)) => {
            println!("Homing failed: {}", e);
            return;
        }
    };

    println!("State: {}", controller.state_name());
    println!("Homed after {} step pulses", step_edges.get());
    println!(
        "Step interval: {} us\n",
        controller.drive().step_interval_ns() / 1000
    );

    for _ in 0..8 {
        let before = step_edges.get();
        match controller.cycle() {
            Ok(report) => match report.movement.command() {
                Some((direction, steps)) => println!(
                    "Cycle {}: {} -> {}, {:?} {} steps ({} pulses)",
                    report.cycle,
                    report.from,
                    report.target,
                    direction,
                    steps,
                    step_edges.get() - before
                ),
                None => println!(
                    "Cycle {}: already at {}, no motion",
                    report.cycle, report.target
                ),
            },
            Err(e) => {
                println!("Cycle failed: {}", e);
                return;
            }
        }
    }

    if let Some(position) = controller.current_position() {
        println!("\nFinal position: {}", position);
    }
    println!("Total step pulses: {}", controller.drive().pulses());
    println!("\n=== Example Complete ===");
}
