//! RangeGlow — main entry point.
//!
//! Wires the ESP-IDF adapters to the ranging service and runs the
//! control loop until the stop button requests shutdown.

use anyhow::Result;
use log::{error, info};

use rangeglow::adapters::esp_gpio::{self, EspGpioBus};
use rangeglow::adapters::log_sink::LogEventSink;
use rangeglow::adapters::time::EspTimeAdapter;
use rangeglow::app::service::AppService;
use rangeglow::config::SystemConfig;
use rangeglow::{pins, shutdown};

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RangeGlow v{}", env!("CARGO_PKG_VERSION"));

    let mut bus = EspGpioBus::new();
    let time = EspTimeAdapter::new();
    let mut sink = LogEventSink::new();

    esp_gpio::install_stop_button(pins::STOP_BUTTON_GPIO)
        .map_err(|e| anyhow::anyhow!("stop button init failed: {e}"))?;

    // Line configuration failure is fatal — abort before the loop starts.
    let mut app = match AppService::new(&mut bus, SystemConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            error!("line configuration failed: {e} — aborting");
            return Err(anyhow::anyhow!("line configuration failed: {e}"));
        }
    };

    app.run(&mut bus, &time, &mut sink, shutdown::flag());

    info!("done");
    Ok(())
}
