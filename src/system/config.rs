//! General system configuration

use embassy_nrf::{
    config::{Config, HfclkSource, LfclkSource},
    interrupt::Priority,
};
use potsdam::{text::Locale, Variant};

/// Face shown on the watch
pub const WATCHFACE: Variant = Variant::SweptSeconds;
/// 24 hour clock style
pub const USE_24H: bool = true;
/// Language of the date label
pub const LOCALE: Locale = Locale::German;
/// Offset of local time from UTC in seconds
pub const TIMEZONE: i32 = 1 * 3_600;
/// Backlight level (0–7)
pub const BRIGHTNESS: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Keep the timer and GPIO interrupts off the highest priorities
        config.gpiote_interrupt_priority = Priority::P2;
        config.time_interrupt_priority = Priority::P2;

        config
    }
}
