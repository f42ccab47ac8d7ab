//! Typed GPIO line wrappers.
//!
//! A line binds a pin number to a direction exactly once, at construction,
//! by configuring it through the [`GpioBus`] port.  The output/input split
//! makes writing an input line (or reading an output line) a compile error
//! rather than a runtime fault.

use crate::app::ports::{Direction, GpioBus, GpioError, Level};

/// A digital output line, configured once at construction.
#[derive(Debug, Clone, Copy)]
pub struct OutputLine {
    pin: i32,
}

impl OutputLine {
    /// Configure `pin` as an output and bind it.
    pub fn new(bus: &mut impl GpioBus, pin: i32) -> Result<Self, GpioError> {
        bus.configure(pin, Direction::Output)?;
        Ok(Self { pin })
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }

    pub fn write(&self, bus: &mut impl GpioBus, level: Level) {
        bus.write(self.pin, level);
    }

    pub fn set_high(&self, bus: &mut impl GpioBus) {
        self.write(bus, Level::High);
    }

    pub fn set_low(&self, bus: &mut impl GpioBus) {
        self.write(bus, Level::Low);
    }
}

/// A digital input line, configured once at construction.
#[derive(Debug, Clone, Copy)]
pub struct InputLine {
    pin: i32,
}

impl InputLine {
    /// Configure `pin` as an input and bind it.
    pub fn new(bus: &mut impl GpioBus, pin: i32) -> Result<Self, GpioError> {
        bus.configure(pin, Direction::Input)?;
        Ok(Self { pin })
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }

    pub fn read(&self, bus: &impl GpioBus) -> Level {
        bus.read(self.pin)
    }

    pub fn is_high(&self, bus: &impl GpioBus) -> bool {
        self.read(bus).is_high()
    }

    pub fn is_low(&self, bus: &impl GpioBus) -> bool {
        !self.is_high(bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct TestBus {
        configured: Vec<(i32, Direction)>,
        levels: HashMap<i32, Level>,
        fail_configure: bool,
    }

    impl GpioBus for TestBus {
        fn configure(&mut self, pin: i32, direction: Direction) -> Result<(), GpioError> {
            if self.fail_configure {
                return Err(GpioError::ConfigFailed(-1));
            }
            self.configured.push((pin, direction));
            Ok(())
        }
        fn write(&mut self, pin: i32, level: Level) {
            self.levels.insert(pin, level);
        }
        fn read(&self, pin: i32) -> Level {
            *self.levels.get(&pin).unwrap_or(&Level::Low)
        }
    }

    #[test]
    fn output_line_configures_exactly_once() {
        let mut bus = TestBus::default();
        let line = OutputLine::new(&mut bus, 4).unwrap();
        line.set_high(&mut bus);
        line.set_low(&mut bus);
        assert_eq!(bus.configured, vec![(4, Direction::Output)]);
    }

    #[test]
    fn input_line_reads_through_bus() {
        let mut bus = TestBus::default();
        let line = InputLine::new(&mut bus, 9).unwrap();
        assert!(line.is_low(&bus));
        bus.levels.insert(9, Level::High);
        assert!(line.is_high(&bus));
        assert_eq!(bus.configured, vec![(9, Direction::Input)]);
    }

    #[test]
    fn configuration_failure_propagates() {
        let mut bus = TestBus {
            fail_configure: true,
            ..Default::default()
        };
        assert_eq!(
            OutputLine::new(&mut bus, 4).unwrap_err(),
            GpioError::ConfigFailed(-1)
        );
    }
}
