//! System timing configuration.
//!
//! All tunable parameters for the ranging loop.  Values are compiled in;
//! there is no runtime override and nothing is persisted.

/// Core timing configuration.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Settle delay after line configuration, before the first
    /// measurement (seconds).
    pub settle_secs: u32,
    /// Delay between successive measurements (milliseconds).
    pub sample_interval_ms: u32,
    /// Width of the trigger pulse (microseconds).
    pub trigger_pulse_us: u32,
    /// Optional bounded wait for each echo edge (milliseconds).
    /// `None` keeps the default behavior: block until the echo arrives,
    /// indefinitely on a silent sensor.
    pub echo_timeout_ms: Option<u32>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            settle_secs: 2,
            sample_interval_ms: 500,
            trigger_pulse_us: 10,
            echo_timeout_ms: None,
        }
    }
}
