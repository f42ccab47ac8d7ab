//! Ultrasonic range sensor driver (HC-SR04 class).
//!
//! One measurement: pulse the trigger line HIGH for a fixed width, then
//! time how long the echo line stays HIGH.  The echo width is the
//! round-trip flight time of the sonic burst; half the speed of sound
//! converts it to one-way centimeters.
//!
//! The default measurement path busy-polls with **no timeout** — a
//! disconnected sensor blocks the control thread forever.  That limitation
//! is deliberate; [`RangeSensor::measure_with_timeout`] is the opt-in
//! bounded variant for installations that need wiring-fault tolerance.

use crate::app::ports::{GpioBus, GpioError, TimePort};
use crate::drivers::line::{InputLine, OutputLine};
use crate::error::SensorError;

/// Half the speed of sound, in centimeters per second.  Multiplying the
/// echo width in seconds by this yields one-way distance directly.
pub const HALF_SOUND_SPEED_CM_S: f64 = 17_150.0;

pub struct RangeSensor {
    trigger: OutputLine,
    echo: InputLine,
    pulse_us: u32,
}

impl RangeSensor {
    /// Configure the trigger (output) and echo (input) lines and park the
    /// trigger LOW.
    pub fn new(
        bus: &mut impl GpioBus,
        trigger_pin: i32,
        echo_pin: i32,
        pulse_us: u32,
    ) -> Result<Self, GpioError> {
        let trigger = OutputLine::new(bus, trigger_pin)?;
        let echo = InputLine::new(bus, echo_pin)?;
        trigger.set_low(bus);
        Ok(Self {
            trigger,
            echo,
            pulse_us,
        })
    }

    /// Perform one trigger-and-time-echo measurement.
    ///
    /// Returns the distance in centimeters, rounded to two decimals.
    /// Blocks until the echo pulse completes; if the echo line never
    /// transitions (disconnected sensor, wiring fault) this never returns.
    pub fn measure(&self, bus: &mut impl GpioBus, time: &impl TimePort) -> f64 {
        self.fire_trigger(bus, time);

        // Re-stamp on every poll so the last observation before each edge
        // is the reference point.  The stamps start at loop entry, which
        // also covers an echo that is already HIGH when polling begins.
        let mut pulse_start_us = time.now_us();
        while self.echo.is_low(bus) {
            pulse_start_us = time.now_us();
        }
        let mut pulse_end_us = time.now_us();
        while self.echo.is_high(bus) {
            pulse_end_us = time.now_us();
        }

        distance_cm(pulse_start_us, pulse_end_us)
    }

    /// Bounded-wait variant of [`measure`](Self::measure).
    ///
    /// Waits at most `timeout_ms` for each echo edge and returns a typed
    /// error instead of blocking on a silent sensor.
    pub fn measure_with_timeout(
        &self,
        bus: &mut impl GpioBus,
        time: &impl TimePort,
        timeout_ms: u32,
    ) -> Result<f64, SensorError> {
        self.fire_trigger(bus, time);
        let budget_us = u64::from(timeout_ms) * 1_000;

        let armed_us = time.now_us();
        let mut pulse_start_us = armed_us;
        while self.echo.is_low(bus) {
            pulse_start_us = time.now_us();
            if pulse_start_us.saturating_sub(armed_us) > budget_us {
                return Err(SensorError::NoEcho);
            }
        }
        let rise_us = time.now_us();
        let mut pulse_end_us = rise_us;
        while self.echo.is_high(bus) {
            pulse_end_us = time.now_us();
            if pulse_end_us.saturating_sub(rise_us) > budget_us {
                return Err(SensorError::EchoStuck);
            }
        }

        Ok(distance_cm(pulse_start_us, pulse_end_us))
    }

    fn fire_trigger(&self, bus: &mut impl GpioBus, time: &impl TimePort) {
        self.trigger.set_high(bus);
        time.delay_us(self.pulse_us);
        self.trigger.set_low(bus);
    }
}

/// Convert an echo pulse window to centimeters, rounded to two decimals.
fn distance_cm(start_us: u64, end_us: u64) -> f64 {
    let duration_secs = end_us.saturating_sub(start_us) as f64 / 1_000_000.0;
    round2(duration_secs * HALF_SOUND_SPEED_CM_S)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::{Direction, Level};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    const TRIG: i32 = 13;
    const ECHO: i32 = 11;

    /// Bus whose echo line replays a scripted level sequence; once the
    /// script runs out it reports LOW forever.
    #[derive(Default)]
    struct ScriptedBus {
        echo_script: RefCell<VecDeque<Level>>,
        trigger_writes: Vec<Level>,
    }

    impl ScriptedBus {
        fn with_echo(script: &[Level]) -> Self {
            Self {
                echo_script: RefCell::new(script.iter().copied().collect()),
                trigger_writes: Vec::new(),
            }
        }
    }

    impl GpioBus for ScriptedBus {
        fn configure(&mut self, _pin: i32, _direction: Direction) -> Result<(), GpioError> {
            Ok(())
        }
        fn write(&mut self, pin: i32, level: Level) {
            if pin == TRIG {
                self.trigger_writes.push(level);
            }
        }
        fn read(&self, pin: i32) -> Level {
            assert_eq!(pin, ECHO);
            self.echo_script
                .borrow_mut()
                .pop_front()
                .unwrap_or(Level::Low)
        }
    }

    /// Clock that advances a fixed step on every `now_us` query.
    struct SteppingClock {
        now: Cell<u64>,
        step_us: u64,
        delays_us: RefCell<Vec<u32>>,
    }

    impl SteppingClock {
        fn stepping(step_us: u64) -> Self {
            Self {
                now: Cell::new(0),
                step_us,
                delays_us: RefCell::new(Vec::new()),
            }
        }
    }

    impl TimePort for SteppingClock {
        fn now_us(&self) -> u64 {
            let t = self.now.get() + self.step_us;
            self.now.set(t);
            t
        }
        fn delay_us(&self, us: u32) {
            self.delays_us.borrow_mut().push(us);
            self.now.set(self.now.get() + u64::from(us));
        }
        fn delay_ms(&self, ms: u32) {
            self.now.set(self.now.get() + u64::from(ms) * 1_000);
        }
    }

    fn sensor(bus: &mut ScriptedBus) -> RangeSensor {
        RangeSensor::new(bus, TRIG, ECHO, 10).unwrap()
    }

    #[test]
    fn trigger_pulse_is_high_then_low_with_configured_width() {
        let mut bus = ScriptedBus::with_echo(&[Level::High, Level::Low]);
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(100);
        let _ = s.measure(&mut bus, &clock);
        // Construction parks the trigger LOW, then each measurement is a
        // HIGH/LOW pair around the pulse delay.
        assert_eq!(
            bus.trigger_writes,
            vec![Level::Low, Level::High, Level::Low]
        );
        assert_eq!(*clock.delays_us.borrow(), vec![10]);
    }

    #[test]
    fn echo_width_converts_to_centimeters() {
        // Script: 2 LOW polls, then HIGH through 4 polls, then LOW.  With a
        // 100 µs clock step the stamped window is 400 µs → 6.86 cm.
        let mut bus = ScriptedBus::with_echo(&[
            Level::Low,
            Level::Low,
            Level::High,
            Level::High,
            Level::High,
            Level::High,
            Level::Low,
        ]);
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(100);
        let d = s.measure(&mut bus, &clock);
        assert!((d - 6.86).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn echo_already_high_collapses_to_entry_window() {
        // Echo HIGH on the very first poll: both stamps fall back to the
        // loop-entry times, one clock step apart.
        let mut bus = ScriptedBus::with_echo(&[Level::High, Level::Low]);
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(100);
        let d = s.measure(&mut bus, &clock);
        assert!((d - 1.72).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn rounding_is_two_decimal_places() {
        assert!((round2(5.144_999) - 5.14).abs() < 1e-9);
        assert!((round2(5.145_001) - 5.15).abs() < 1e-9);
        assert!((distance_cm(0, 400) - 6.86).abs() < 1e-9);
    }

    #[test]
    fn silent_sensor_times_out_with_no_echo() {
        let mut bus = ScriptedBus::default(); // echo LOW forever
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(500);
        assert_eq!(
            s.measure_with_timeout(&mut bus, &clock, 2),
            Err(SensorError::NoEcho)
        );
    }

    #[test]
    fn stuck_echo_times_out_with_echo_stuck() {
        // Echo rises and never falls.
        let script: Vec<Level> = std::iter::once(Level::Low)
            .chain(std::iter::repeat(Level::High).take(64))
            .collect();
        let mut bus = ScriptedBus::with_echo(&script);
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(500);
        assert_eq!(
            s.measure_with_timeout(&mut bus, &clock, 2),
            Err(SensorError::EchoStuck)
        );
    }

    #[test]
    fn bounded_variant_matches_unbounded_on_good_echo() {
        let script = [
            Level::Low,
            Level::High,
            Level::High,
            Level::High,
            Level::High,
            Level::Low,
        ];
        let mut bus = ScriptedBus::with_echo(&script);
        let s = sensor(&mut bus);
        let clock = SteppingClock::stepping(100);
        let bounded = s
            .measure_with_timeout(&mut bus, &clock, 1_000)
            .unwrap();

        let mut bus2 = ScriptedBus::with_echo(&script);
        let s2 = sensor(&mut bus2);
        let clock2 = SteppingClock::stepping(100);
        let unbounded = s2.measure(&mut bus2, &clock2);

        assert!((bounded - unbounded).abs() < 1e-9);
    }
}
