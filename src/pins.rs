//! GPIO pin assignments for the RangeGlow panel board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Ultrasonic range sensor (HC-SR04 class, echo via resistive divider)
// ---------------------------------------------------------------------------

/// Digital output: pulsed HIGH for 10 µs to start a ranging cycle.
pub const TRIGGER_GPIO: i32 = 13;
/// Digital input: HIGH for the duration of the ultrasonic round trip.
pub const ECHO_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Indicator lamps (three tri-color units, one output line per color)
// ---------------------------------------------------------------------------

/// Indicator 1 — first lamp to light as an object approaches.
pub const IND1_RED_GPIO: i32 = 7;
pub const IND1_GREEN_GPIO: i32 = 3;
pub const IND1_BLUE_GPIO: i32 = 5;

/// Indicator 2.
pub const IND2_RED_GPIO: i32 = 18;
pub const IND2_GREEN_GPIO: i32 = 16;
pub const IND2_BLUE_GPIO: i32 = 15;

/// Indicator 3 — last lamp to light, nearest-proximity end of the panel.
pub const IND3_RED_GPIO: i32 = 12;
pub const IND3_GREEN_GPIO: i32 = 10;
pub const IND3_BLUE_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Operator stop button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button; falling edge requests a graceful shutdown.
pub const STOP_BUTTON_GPIO: i32 = 21;
