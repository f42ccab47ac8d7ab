//! Cooperative shutdown flag.
//!
//! The stop-button ISR sets the flag; the control loop reads it at
//! iteration boundaries only, never during a blocking measurement or
//! delay.  This is the single cross-context cell in the system.

use core::sync::atomic::{AtomicBool, Ordering};

/// Process-wide shutdown request.  Written by the stop-button ISR (or by
/// host-side code), consumed by [`AppService::run`](crate::app::service::AppService::run).
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Request a graceful shutdown.  Safe to call from ISR context.
pub fn request() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Release);
}

/// The process-wide flag, for handing to the control loop.
pub fn flag() -> &'static AtomicBool {
    &SHUTDOWN_REQUESTED
}
