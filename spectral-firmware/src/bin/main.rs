// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

use core::cell::RefCell;

// Embassy Async Runtime
use defmt::{Debug2Format, error, info};
use embassy_executor::Spawner;
use embassy_net::{
    Config as NetConfig, Ipv4Address, Ipv4Cidr, Stack, StackResources, StaticConfigV4,
};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{DriveMode, Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::ledc::channel::ChannelIFace;
use esp_hal::ledc::timer::TimerIFace;
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed, channel, timer};
use esp_hal::rng::Rng;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::wifi::{WifiController, WifiDevice};
use static_cell::StaticCell;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use spectral_core::DashboardState;
use spectral_interface::SharedDashboard;
use spectral_interface::config::*;
use spectral_interface::hal::{ActiveLowButton, AdcPots, GpioLcdBus, GpioSensorPins, LedcHBridge};
use spectral_interface::tasks::{
    GamePeripherals, access_point_task, game_loop_task, http_server_task, net_task,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Spiel-Schleife und danach (falls
/// möglich) Access Point, Netzwerk-Stack und HTTP-Server.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Spectral Interface: Booting...");

    // Dashboard-Zustand (Spiel-Schleife schreibt, HTTP-Server liest)
    static DASHBOARD: StaticCell<SharedDashboard> = StaticCell::new();
    let dashboard: &'static SharedDashboard = DASHBOARD.init(Mutex::new(RefCell::new(
        DashboardState::new(SUCCESS_THRESHOLD),
    )));

    // Motor-PWM: LEDC Timer0, 10 Bit bei 20 kHz
    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    static MOTOR_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();
    let motor_timer = MOTOR_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    motor_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty10Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(MOTOR_PWM_FREQUENCY_KHZ),
        })
        .expect("Failed to configure motor PWM timer");
    let motor_timer: &'static timer::Timer<'static, LowSpeed> = motor_timer;

    let mut motor_pwm = ledc.channel(channel::Number::Channel0, peripherals.GPIO18);
    motor_pwm
        .configure(channel::config::Config {
            timer: motor_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .expect("Failed to configure motor PWM channel");

    // Hardware-Adapter für die Spiel-Schleife
    let game_peripherals = GamePeripherals {
        bridge: LedcHBridge::new(
            Output::new(peripherals.GPIO19, Level::Low, OutputConfig::default()),
            Output::new(peripherals.GPIO20, Level::Low, OutputConfig::default()),
            motor_pwm,
            MOTOR_PWM_MAX_HW_DUTY,
        ),
        sensor: GpioSensorPins::new(
            Output::new(peripherals.GPIO10, Level::Low, OutputConfig::default()),
            Output::new(peripherals.GPIO11, Level::Low, OutputConfig::default()),
            Output::new(peripherals.GPIO22, Level::Low, OutputConfig::default()),
            Output::new(peripherals.GPIO23, Level::Low, OutputConfig::default()),
            Input::new(peripherals.GPIO21, InputConfig::default()),
        ),
        lcd: GpioLcdBus::new(
            Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default()),
            Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
            [
                Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
                Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
                Output::new(peripherals.GPIO7, Level::Low, OutputConfig::default()),
                Output::new(peripherals.GPIO14, Level::Low, OutputConfig::default()),
            ],
        ),
        pots: AdcPots::new(
            peripherals.ADC1,
            peripherals.GPIO0,
            peripherals.GPIO1,
            peripherals.GPIO2,
        ),
        button: ActiveLowButton::new(Input::new(
            peripherals.GPIO9,
            InputConfig::default().with_pull(Pull::Up),
        )),
        led_pin: peripherals.GPIO8,
        rmt: peripherals.RMT,
    };

    // Spiel-Schleife zuerst: läuft auch ohne Funk
    spawner
        .spawn(game_loop_task(game_peripherals, dashboard))
        .expect("Failed to spawn game loop task");

    // WiFi Hardware initialisieren
    // Fehler sind nicht fatal: das Spiel läuft dann ohne Dashboard weiter
    static RADIO_INIT: StaticCell<esp_radio::Controller> = StaticCell::new();
    match esp_radio::init() {
        Ok(radio) => {
            let radio_init = RADIO_INIT.init(radio);
            match esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default()) {
                Ok((wifi_controller, wifi_interface)) => {
                    start_network(spawner, wifi_controller, wifi_interface.ap, dashboard);
                }
                Err(e) => error!(
                    "WiFi: Failed to initialize Wi-Fi, continuing offline: {}",
                    Debug2Format(&e)
                ),
            }
        }
        Err(e) => error!(
            "WiFi: Failed to initialize radio, continuing offline: {}",
            Debug2Format(&e)
        ),
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Netzwerk-Stack mit statischer Adresse aufsetzen und Netzwerk-Tasks spawnen
fn start_network(
    spawner: Spawner,
    controller: WifiController<'static>,
    device: WifiDevice<'static>,
    dashboard: &'static SharedDashboard,
) {
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Access Point hat eine feste Adresse, Clients konfigurieren sich manuell
    let [a, b, c, d] = AP_IP_ADDRESS;
    let address = Ipv4Address::new(a, b, c, d);
    let net_config = NetConfig::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(address, AP_PREFIX_LEN),
        gateway: Some(address),
        dns_servers: Default::default(),
    });

    // Static resources für embassy-net (HTTP-Listener + Reserve)
    static RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    let (stack, runner) = embassy_net::new(device, net_config, resources, seed);

    // Stack muss 'static sein für Tasks
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let stack = &*STACK.init(stack);

    spawner
        .spawn(access_point_task(controller))
        .expect("Failed to spawn access point task");
    spawner
        .spawn(net_task(runner))
        .expect("Failed to spawn network task");
    spawner
        .spawn(http_server_task(stack, dashboard))
        .expect("Failed to spawn HTTP server task");

    info!("HTTP: Dashboard at http://{}/", AP_IP_TEXT);
}
