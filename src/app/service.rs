//! Ranging service — the application core.
//!
//! [`AppService`] owns the range sensor and the three indicator lamps and
//! drives the measure → classify → indicate cycle.  All hardware I/O
//! flows through port traits injected at call sites, so the whole service
//! runs against fakes in tests.
//!
//! ```text
//!  GpioBus/TimePort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                       │      AppService       │
//!          GpioBus ◀────│  measure·classify·set │
//!                       └──────────────────────┘
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, GpioBus, TimePort};
use crate::config::SystemConfig;
use crate::drivers::indicator::{Indicator, RgbPins};
use crate::drivers::range_sensor::RangeSensor;
use crate::error::Result;
use crate::pins;
use crate::proximity::{ProximityTier, classify};

/// Number of indicator lamps on the panel.
pub const INDICATOR_COUNT: usize = 3;

/// The ranging service orchestrates one sensor and three lamps.
pub struct AppService {
    sensor: RangeSensor,
    indicators: [Indicator; INDICATOR_COUNT],
    config: SystemConfig,
    last_tier: Option<ProximityTier>,
}

impl AppService {
    /// Configure the sensor lines and the three indicators (each lamp
    /// shuts itself off during construction).
    ///
    /// A configuration failure here is fatal: the caller must abort
    /// before entering the control loop.
    pub fn new(bus: &mut impl GpioBus, config: SystemConfig) -> Result<Self> {
        let sensor = RangeSensor::new(
            bus,
            pins::TRIGGER_GPIO,
            pins::ECHO_GPIO,
            config.trigger_pulse_us,
        )?;
        let indicators = [
            Indicator::new(
                bus,
                RgbPins {
                    red: pins::IND1_RED_GPIO,
                    green: pins::IND1_GREEN_GPIO,
                    blue: pins::IND1_BLUE_GPIO,
                },
            )?,
            Indicator::new(
                bus,
                RgbPins {
                    red: pins::IND2_RED_GPIO,
                    green: pins::IND2_GREEN_GPIO,
                    blue: pins::IND2_BLUE_GPIO,
                },
            )?,
            Indicator::new(
                bus,
                RgbPins {
                    red: pins::IND3_RED_GPIO,
                    green: pins::IND3_GREEN_GPIO,
                    blue: pins::IND3_BLUE_GPIO,
                },
            )?,
        ];
        Ok(Self {
            sensor,
            indicators,
            config,
            last_tier: None,
        })
    }

    /// Last classified tier, if any measurement has completed.
    pub fn last_tier(&self) -> Option<ProximityTier> {
        self.last_tier
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// One control cycle: measure → classify → apply pattern → emit.
    ///
    /// The indicator state is rewritten on every cycle, whether or not
    /// the tier changed — the cycle is deterministic, not edge-triggered.
    pub fn tick(
        &mut self,
        bus: &mut impl GpioBus,
        time: &impl TimePort,
        sink: &mut impl EventSink,
    ) {
        let distance_cm = match self.config.echo_timeout_ms {
            None => self.sensor.measure(bus, time),
            Some(timeout_ms) => match self.sensor.measure_with_timeout(bus, time, timeout_ms) {
                Ok(d) => d,
                Err(e) => {
                    // Keep the previous pattern on a failed bounded read;
                    // the next cycle retries from scratch.
                    sink.emit(&AppEvent::MeasurementFailed(e));
                    return;
                }
            },
        };

        let tier = classify(distance_cm);
        sink.emit(&AppEvent::DistanceMeasured { distance_cm, tier });
        if let Some(prev) = self.last_tier {
            if prev != tier {
                sink.emit(&AppEvent::TierChanged {
                    from: prev,
                    to: tier,
                });
            }
        }

        self.apply_tier(bus, tier);
        self.last_tier = Some(tier);
    }

    /// Drive every indicator to the tier's color assignment.
    ///
    /// Three independent lamp updates; ordering between lamps is
    /// irrelevant.
    pub fn apply_tier(&self, bus: &mut impl GpioBus, tier: ProximityTier) {
        for (indicator, slot) in self.indicators.iter().zip(tier.pattern()) {
            match slot {
                Some(color) => indicator.set_color(bus, color),
                None => indicator.shut_off(bus),
            }
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run until `stop` is raised: settle, then cycle at the configured
    /// interval, then force the tier-0 pattern.
    ///
    /// Cancellation is cooperative — the flag is checked only at
    /// iteration boundaries, never during a blocking measurement or
    /// delay.  Cleanup runs unconditionally on exit.
    pub fn run(
        &mut self,
        bus: &mut impl GpioBus,
        time: &impl TimePort,
        sink: &mut impl EventSink,
        stop: &AtomicBool,
    ) {
        sink.emit(&AppEvent::Settling {
            secs: self.config.settle_secs,
        });
        time.delay_ms(self.config.settle_secs * 1000);

        while !stop.load(Ordering::Acquire) {
            self.tick(bus, time, sink);
            time.delay_ms(self.config.sample_interval_ms);
        }

        self.shutdown(bus, sink);
    }

    /// Unconditional cleanup: the tier-0 (all-off) pattern, regardless of
    /// the tier active when cancellation arrived.
    pub fn shutdown(&mut self, bus: &mut impl GpioBus, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::ShuttingDown);
        self.apply_tier(bus, ProximityTier::Clear);
        self.last_tier = Some(ProximityTier::Clear);
        sink.emit(&AppEvent::CleanupDone);
    }
}
