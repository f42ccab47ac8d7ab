//! Tri-color indicator lamp driver.
//!
//! Each indicator owns three output lines, one per color channel.  At most
//! one channel is energized after `set_color`; `shut_off` and `enable_all`
//! drive all three together.  Construction configures the lines and leaves
//! the lamp dark.

use crate::app::ports::{GpioBus, GpioError, Level};
use crate::drivers::line::OutputLine;

/// Color channels of one indicator lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Pin assignment for a standard red/green/blue indicator.
#[derive(Debug, Clone, Copy)]
pub struct RgbPins {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

/// One tri-color lamp: three color-tagged output channels.
pub struct Indicator {
    channels: [(Color, OutputLine); 3],
}

impl Indicator {
    /// Configure a standard red/green/blue lamp and shut it off.
    pub fn new(bus: &mut impl GpioBus, pins: RgbPins) -> Result<Self, GpioError> {
        Self::from_channels(
            bus,
            [
                (Color::Red, pins.red),
                (Color::Green, pins.green),
                (Color::Blue, pins.blue),
            ],
        )
    }

    /// Configure a lamp with custom channel wiring and shut it off.
    ///
    /// `set_color` energizes only channels whose tag matches; a color
    /// matching none of the tags leaves every channel LOW.
    pub fn from_channels(
        bus: &mut impl GpioBus,
        wiring: [(Color, i32); 3],
    ) -> Result<Self, GpioError> {
        let [(c0, p0), (c1, p1), (c2, p2)] = wiring;
        let lamp = Self {
            channels: [
                (c0, OutputLine::new(bus, p0)?),
                (c1, OutputLine::new(bus, p1)?),
                (c2, OutputLine::new(bus, p2)?),
            ],
        };
        lamp.shut_off(bus);
        Ok(lamp)
    }

    /// All channels LOW — the lamp emits no light.
    pub fn shut_off(&self, bus: &mut impl GpioBus) {
        for (_, line) in &self.channels {
            line.set_low(bus);
        }
    }

    /// All channels HIGH (full-bright diagnostic state; not reached by any
    /// tier pattern).
    pub fn enable_all(&self, bus: &mut impl GpioBus) {
        for (_, line) in &self.channels {
            line.set_high(bus);
        }
    }

    /// Energize exactly the channel tagged `color`, all others LOW.
    ///
    /// One pass over the three channels; ordering does not matter since
    /// every channel is written.
    pub fn set_color(&self, bus: &mut impl GpioBus, color: Color) {
        for (tag, line) in &self.channels {
            let level = if *tag == color {
                Level::High
            } else {
                Level::Low
            };
            line.write(bus, level);
        }
    }
}
