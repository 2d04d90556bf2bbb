#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive, Pin},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Delay, Duration, Ticker};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, display::Display};
use potsdam::{face::MAX_LAYERS, Event, Face, LayerTable};
use system::{
    config::{self, SystemConfig},
    time::TimeManager,
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Sample the clock every second.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        TIME.signal(clock.get_time());

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Host side of the watch face: window lifecycle, tick delivery and painting.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<'static, SPI2>) {
    let mut host = LayerTable::<MAX_LAYERS>::new(config::USE_24H, config::LOCALE);
    let mut face = Face::new(config::WATCHFACE);

    let now = TIME.wait().await;
    unwrap!(face.handle(
        &mut host,
        Event::Load {
            bounds: display.bounds(),
            now,
        },
    ));
    host.prime(&now);

    loop {
        display.paint(&mut host, &face);

        let now = TIME.wait().await;
        if host.should_tick(&now) {
            defmt::debug!(
                "Tick at {}:{}:{}",
                now.time().hour(),
                now.time().minute(),
                now.time().second(),
            );
            if let Err(err) = face.handle(&mut host, Event::Tick { now }) {
                defmt::warn!("Tick rejected: {}", err);
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize Backlight
    let mut backlight = Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        0,
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        &mut Delay,
    );
    backlight.set(config::BRIGHTNESS);

    let clock = TimeManager::init(UTC_EPOCH, config::TIMEZONE);

    defmt::info!("Initialization finished, face {}", config::WATCHFACE);

    // Schedule tasks
    unwrap!(spawner.spawn(update_time(clock)));
    unwrap!(spawner.spawn(update_lcd(display)));
}
