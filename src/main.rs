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
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel};
use embassy_time::{Duration, Ticker, Timer};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use ndot_watchface::{
    config::WatchfaceConfig,
    format::{BatteryReading, ClockStyle, TimeReading},
    resources::ProFontResources,
    tick::{changed_units, TimeUnit},
    ui::{App, DefaultWatchface, Environment, Event},
};
use peripherals::{backlight::Backlight, battery::Battery, display::Display};
use system::{config::SystemConfig, time::TimeManager};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

const CONFIG: WatchfaceConfig = WatchfaceConfig::new();

// Events for the display task, handled one after another
static EVENTS: Channel<ThreadModeRawMutex, Event, 4> = Channel::new();

static BACKLIGHT: StaticCell<Backlight<'static>> = StaticCell::new();

/// What the watchface sees of the system
struct WatchState {
    clock: TimeManager,
    battery: BatteryReading,
    clock_style: ClockStyle,
}

impl Environment for WatchState {
    fn local_time(&self) -> TimeReading {
        TimeReading::from_time(&self.clock.local_time())
    }

    fn clock_style(&self) -> ClockStyle {
        self.clock_style
    }

    fn battery(&self) -> BatteryReading {
        self.battery
    }
}

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: Battery) {
    loop {
        if battery.update().await {
            // Battery status changed
            let reading = battery.reading();
            defmt::info!(
                "Battery status: {}% ({})",
                reading.percent,
                if reading.charging {
                    "charging"
                } else {
                    "discharging"
                }
            );
            EVENTS.send(Event::Battery(reading)).await;
        }

        // Re-schedule the timer interrupt in 1s
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Watch the clock and report every change of at least `unit`.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager, unit: TimeUnit) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    let mut previous = clock.local_time();
    loop {
        // Re-schedule the timer interrupt in 1s
        tick.next().await;

        let now = clock.local_time();
        if let Some(changed) = changed_units(&previous, &now) {
            if changed.covers(unit) {
                defmt::trace!("Clock tick: {}", changed);
                EVENTS.send(Event::Tick(changed)).await;
            }
        }
        previous = now;
    }
}

/// Own the display and run the watchface.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<SPI2>, clock: TimeManager, battery: BatteryReading) {
    let mut state = WatchState {
        clock,
        battery,
        clock_style: CONFIG.clock_style,
    };

    let mut app = App::new(DefaultWatchface::new(CONFIG, ProFontResources::new()));
    app.subscribe_tick(TimeUnit::Minute);
    app.subscribe_battery();

    let mut event = Event::Load;
    loop {
        if let Event::Battery(reading) = event {
            state.battery = reading;
        }
        if app.handle(event, &state, display.lcd()).is_err() {
            defmt::warn!("Failed to draw {}", event);
        }

        event = EVENTS.receive().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize Backlight, pins are active low
    let backlight = BACKLIGHT.init(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
    ));

    // Initalize Battery
    // Pin P0.12: Charge indication
    let battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None)).await;

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::High, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));
    unwrap!(backlight.set(CONFIG.backlight));

    let clock = TimeManager::from_timestamp(UTC_EPOCH, CONFIG.utc_offset);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, clock, battery.reading())));
    unwrap!(spawner.spawn(update_time(clock, TimeUnit::Minute)));
    unwrap!(spawner.spawn(update_battery_status(battery)));
}
