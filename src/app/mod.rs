//! Application core — pure ranging logic, zero direct I/O.
//!
//! This module contains the measure → classify → indicate cycle.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
