//! GPIO bus adapter.
//!
//! Implements [`GpioBus`] over raw ESP-IDF `gpio_*` calls on target.  On
//! the host the bus keeps an in-memory level/direction table so the
//! library and tests run without hardware; direction misuse trips a debug
//! assertion there instead of touching a register it shouldn't.

use crate::app::ports::{Direction, GpioBus, GpioError, Level};

// ── ESP-IDF implementation ────────────────────────────────────

/// Zero-sized on target: the GPIO matrix registers are the state.
#[cfg(feature = "espidf")]
pub struct EspGpioBus;

#[cfg(feature = "espidf")]
impl EspGpioBus {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "espidf")]
impl Default for EspGpioBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "espidf")]
impl GpioBus for EspGpioBus {
    fn configure(&mut self, pin: i32, direction: Direction) -> Result<(), GpioError> {
        use esp_idf_svc::sys::*;

        let mode = match direction {
            Direction::Input => gpio_mode_t_GPIO_MODE_INPUT,
            Direction::Output => gpio_mode_t_GPIO_MODE_OUTPUT,
        };
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config validates the descriptor; called once per
        // line before the control loop starts.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(GpioError::ConfigFailed(ret));
        }
        Ok(())
    }

    fn write(&mut self, pin: i32, level: Level) {
        // SAFETY: register write on an already-configured output pin;
        // single-threaded control loop access only.
        unsafe {
            esp_idf_svc::sys::gpio_set_level(pin, u32::from(level.is_high()));
        }
    }

    fn read(&self, pin: i32) -> Level {
        // SAFETY: gpio_get_level is a read-only register access on an
        // already-configured input pin.
        if unsafe { esp_idf_svc::sys::gpio_get_level(pin) } != 0 {
            Level::High
        } else {
            Level::Low
        }
    }
}

// ── Stop button ISR ───────────────────────────────────────────

#[cfg(feature = "espidf")]
unsafe extern "C" fn stop_button_isr(_arg: *mut core::ffi::c_void) {
    crate::shutdown::request();
}

/// Configure the stop button (active-low, pull-up, falling edge) and
/// register the shutdown ISR.  Call after line configuration, before the
/// control loop.
#[cfg(feature = "espidf")]
pub fn install_stop_button(pin: i32) -> Result<(), GpioError> {
    use esp_idf_svc::sys::*;

    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_NEGEDGE,
    };
    // SAFETY: one-shot configuration from the main task before the loop
    // starts; the registered handler only stores an atomic flag.
    unsafe {
        let ret = gpio_config(&cfg);
        if ret != ESP_OK as i32 {
            return Err(GpioError::ConfigFailed(ret));
        }

        // ESP_ERR_INVALID_STATE means the ISR service is already
        // installed, which is acceptable.
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
            return Err(GpioError::IsrInstallFailed(ret));
        }

        gpio_isr_handler_add(pin, Some(stop_button_isr), core::ptr::null_mut());
        gpio_intr_enable(pin);
    }
    Ok(())
}

// ── Host simulation ───────────────────────────────────────────

/// In-memory bus for host builds: levels and directions live in a table
/// so tests and simulation can observe every line.
#[cfg(not(feature = "espidf"))]
#[derive(Default)]
pub struct EspGpioBus {
    pins: std::collections::HashMap<i32, SimPin>,
}

#[cfg(not(feature = "espidf"))]
#[derive(Clone, Copy)]
struct SimPin {
    direction: Direction,
    level: Level,
}

#[cfg(not(feature = "espidf"))]
impl EspGpioBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of any pin, regardless of direction (sim-only
    /// observability).
    pub fn level_of(&self, pin: i32) -> Level {
        self.pins.get(&pin).map_or(Level::Low, |p| p.level)
    }
}

#[cfg(not(feature = "espidf"))]
impl GpioBus for EspGpioBus {
    fn configure(&mut self, pin: i32, direction: Direction) -> Result<(), GpioError> {
        if let Some(existing) = self.pins.get(&pin) {
            debug_assert_eq!(
                existing.direction, direction,
                "pin {pin} reconfigured with a different direction"
            );
        }
        self.pins.insert(
            pin,
            SimPin {
                direction,
                level: Level::Low,
            },
        );
        Ok(())
    }

    fn write(&mut self, pin: i32, level: Level) {
        let p = self.pins.get_mut(&pin);
        debug_assert!(p.is_some(), "write to unconfigured pin {pin}");
        if let Some(p) = p {
            debug_assert_eq!(
                p.direction,
                Direction::Output,
                "write to input pin {pin}"
            );
            p.level = level;
        }
    }

    fn read(&self, pin: i32) -> Level {
        let p = self.pins.get(&pin);
        debug_assert!(p.is_some(), "read of unconfigured pin {pin}");
        debug_assert!(
            p.is_none_or(|p| p.direction == Direction::Input),
            "read of output pin {pin}"
        );
        p.map_or(Level::Low, |p| p.level)
    }
}
