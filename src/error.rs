//! Unified error types for the RangeGlow firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level startup and loop error handling uniform.  All variants are
//! `Copy` so they pass through the control path without allocation.

use core::fmt;

use crate::app::ports::GpioError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A GPIO line could not be configured or the ISR service failed.
    Gpio(GpioError),
    /// A bounded-wait measurement failed.
    Sensor(SensorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors (bounded-wait measurement mode only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The echo line never rose within the bounded wait — disconnected
    /// sensor or wiring fault.
    NoEcho,
    /// The echo line never fell within the bounded wait — shorted or
    /// stuck echo input.
    EchoStuck,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEcho => write!(f, "no echo pulse received"),
            Self::EchoStuck => write!(f, "echo line stuck high"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
