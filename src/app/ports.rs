//! Port traits — the boundary between the ranging logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (the GPIO bus, the monotonic clock, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics injected at call sites, so the domain core
//! never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// GPIO line interface (driven adapter: domain ↔ pins)
// ───────────────────────────────────────────────────────────────

/// Binary level on a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Direction a line is configured for.  Fixed for the line's lifetime and
/// set exactly once, before first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Hardware line interface.
///
/// `configure` binds a pin to a direction and is the only fallible
/// operation; a failure there is a fatal startup condition.  `write` and
/// `read` assume a correctly configured line — hardware access is taken
/// as reliable once configuration succeeds, and a direction mismatch is a
/// programming-contract violation rather than a runtime error (the typed
/// wrappers in [`crate::drivers::line`] rule it out at compile time).
pub trait GpioBus {
    /// Bind `pin` to `direction`.  Idempotent.
    fn configure(&mut self, pin: i32, direction: Direction) -> Result<(), GpioError>;

    /// Drive an output line to `level`.
    fn write(&mut self, pin: i32, level: Level);

    /// Sample the current level of an input line.
    fn read(&self, pin: i32) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Monotonic time (driven adapter: domain ↔ clock)
// ───────────────────────────────────────────────────────────────

/// Monotonic clock and blocking delays.
///
/// The measurement path busy-polls against `now_us`; the control loop
/// blocks on the delay calls.  Everything is synchronous by design.
pub trait TimePort {
    /// Microseconds since boot (monotonic).
    fn now_us(&self) -> u64;

    /// Busy-wait for `us` microseconds (trigger pulse shaping).
    fn delay_us(&self, us: u32);

    /// Block for `ms` milliseconds (settle and inter-sample delays).
    fn delay_ms(&self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log in
/// production, a vector in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`GpioBus::configure`] and ISR installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The underlying GPIO interface rejected the configuration
    /// (carries the platform return code).
    ConfigFailed(i32),
    /// The GPIO ISR service could not be installed.
    IsrInstallFailed(i32),
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "line configuration failed (rc={rc})"),
            Self::IsrInstallFailed(rc) => write!(f, "ISR service install failed (rc={rc})"),
        }
    }
}
