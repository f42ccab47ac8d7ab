//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC in production).  Purely observational — nothing in the
//! control path depends on these lines.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Settling { secs } => {
                info!("waiting {} s for the sensor to settle", secs);
            }
            AppEvent::DistanceMeasured { distance_cm, tier } => {
                info!(
                    "distance registered is {} cm (tier {})",
                    distance_cm,
                    tier.index()
                );
            }
            AppEvent::TierChanged { from, to } => {
                info!("proximity {:?} -> {:?}", from, to);
            }
            AppEvent::MeasurementFailed(e) => {
                warn!("measurement failed: {}", e);
            }
            AppEvent::ShuttingDown => {
                info!("shutting down gracefully...");
            }
            AppEvent::CleanupDone => {
                info!("indicators off, done");
            }
        }
    }
}
