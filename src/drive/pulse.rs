//! STEP/DIR pulse drive.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::SystemConfig;
use crate::error::DriveError;
use crate::position::Direction;

use super::{DriveMode, MotorDrive};

/// STEP pulse width in nanoseconds.
const PULSE_WIDTH_NS: u32 = 2_000;

/// STEP/DIR stepper drive running at a constant step rate.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct PulseDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = backward, low = forward, unless inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Full steps per motor revolution.
    steps_per_revolution: u16,

    /// Full-step interval at the configured speed.
    step_interval_ns: u32,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Pulses emitted since construction.
    pulses: u64,
}

impl<STEP, DIR, DELAY> PulseDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a drive. Speed defaults to 1 rpm until configured.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY, steps_per_revolution: u16) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            steps_per_revolution,
            step_interval_ns: interval_ns(1, steps_per_revolution),
            current_direction: None,
            invert_direction: false,
            pulses: 0,
        }
    }

    /// Create a drive from system configuration.
    ///
    /// Speed is left for the controller to configure at startup.
    pub fn from_config(step_pin: STEP, dir_pin: DIR, delay: DELAY, config: &SystemConfig) -> Self {
        Self::new(step_pin, dir_pin, delay, config.geometry.steps_per_revolution)
            .invert_direction(config.motor.invert_direction)
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Full-step interval in nanoseconds.
    #[inline]
    pub fn step_interval_ns(&self) -> u32 {
        self.step_interval_ns
    }

    /// Total pulses emitted.
    #[inline]
    pub fn pulses(&self) -> u64 {
        self.pulses
    }

    /// Release the pins and delay.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), DriveError> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Backward => !self.invert_direction,
            Direction::Forward => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| DriveError::Pin)?;
        } else {
            self.dir_pin.set_low().map_err(|_| DriveError::Pin)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }

    fn pulse(&mut self, interval_ns: u32) -> Result<(), DriveError> {
        self.step_pin.set_high().map_err(|_| DriveError::Pin)?;
        self.delay.delay_ns(PULSE_WIDTH_NS);
        self.step_pin.set_low().map_err(|_| DriveError::Pin)?;
        self.pulses += 1;

        let rest_ns = interval_ns.saturating_sub(PULSE_WIDTH_NS);
        if rest_ns > 0 {
            self.delay.delay_ns(rest_ns);
        }
        Ok(())
    }
}

impl<STEP, DIR, DELAY> MotorDrive for PulseDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn configure_speed(&mut self, rpm: u16) {
        self.step_interval_ns = interval_ns(rpm, self.steps_per_revolution);
    }

    fn step(
        &mut self,
        count: u32,
        direction: Direction,
        mode: DriveMode,
    ) -> Result<(), DriveError> {
        if count == 0 {
            return Ok(());
        }

        self.set_direction(direction)?;

        let interval = self.step_interval_ns / mode.interval_divisor();
        let pulses = count.saturating_mul(mode.pulses_per_step());
        for _ in 0..pulses {
            self.pulse(interval)?;
        }
        Ok(())
    }
}

/// Full-step interval for a speed: 60 s / (rpm * steps per revolution).
fn interval_ns(rpm: u16, steps_per_revolution: u16) -> u32 {
    let steps_per_minute = u64::from(rpm.max(1)) * u64::from(steps_per_revolution.max(1));
    let interval = 60_000_000_000u64 / steps_per_minute;
    u32::try_from(interval).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn pulses(n: usize) -> Vec<Transaction> {
        let mut out = Vec::with_capacity(n * 2);
        for _ in 0..n {
            out.push(Transaction::set(State::High));
            out.push(Transaction::set(State::Low));
        }
        out
    }

    #[test]
    fn test_interval_from_rpm() {
        // 100 rpm * 200 steps = 20000 steps/min = 3 ms/step
        assert_eq!(interval_ns(100, 200), 3_000_000);
        assert_eq!(interval_ns(60, 200), 5_000_000);
    }

    #[test]
    fn test_backward_steps() {
        let step = PinMock::new(&pulses(3));
        let dir = PinMock::new(&[Transaction::set(State::High)]);

        let mut drive = PulseDrive::new(step, dir, NoopDelay::new(), 200);
        drive.configure_speed(100);
        drive.step(3, Direction::Backward, DriveMode::Double).unwrap();
        assert_eq!(drive.pulses(), 3);

        let (mut step, mut dir, _) = drive.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_direction_pin_cached() {
        let step = PinMock::new(&pulses(3));
        let dir = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);

        let mut drive = PulseDrive::new(step, dir, NoopDelay::new(), 200);
        drive.step(1, Direction::Forward, DriveMode::Single).unwrap();
        drive.step(1, Direction::Forward, DriveMode::Single).unwrap();
        drive.step(1, Direction::Backward, DriveMode::Single).unwrap();

        let (mut step, mut dir, _) = drive.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_inverted_direction() {
        let step = PinMock::new(&pulses(1));
        let dir = PinMock::new(&[Transaction::set(State::Low)]);

        let mut drive =
            PulseDrive::new(step, dir, NoopDelay::new(), 200).invert_direction(true);
        drive.step(1, Direction::Backward, DriveMode::Double).unwrap();

        let (mut step, mut dir, _) = drive.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_microstep_multiplies_pulses() {
        let step = PinMock::new(&pulses(32));
        let dir = PinMock::new(&[Transaction::set(State::High)]);

        let mut drive = PulseDrive::new(step, dir, NoopDelay::new(), 200);
        drive.step(2, Direction::Backward, DriveMode::Microstep).unwrap();
        assert_eq!(drive.pulses(), 32);

        let (mut step, mut dir, _) = drive.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_zero_steps_touches_nothing() {
        let none: [Transaction; 0] = [];
        let step = PinMock::new(&none);
        let dir = PinMock::new(&none);

        let mut drive = PulseDrive::new(step, dir, NoopDelay::new(), 200);
        drive.step(0, Direction::Forward, DriveMode::Double).unwrap();

        let (mut step, mut dir, _) = drive.release();
        step.done();
        dir.done();
    }
}
