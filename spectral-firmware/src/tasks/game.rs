// Spiel-Schleife - Sensor → Bewertung → Motor → Display/Dashboard
use defmt::{debug, error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use esp_hal_smartled::smart_led_buffer;
use spectral_core::{
    ActuatorEvent, AnalogInputs, ColorChannel, Debouncer, HBridgeDriver, Hd44780, LcdBus, LcdLine,
    MotorActuator, PushButton, SensorPins, SmartLedWriter, SmartStatusLed, Tcs3200, process_tick,
    render_network_info, render_status, update_intensity,
};

use crate::SharedDashboard;
use crate::config::*;
use crate::hal::{
    ActiveLowButton, AdcPots, DisabledLed, GpioLcdBus, GpioSensorPins, LedcHBridge, RmtLedWriter,
};

/// Zeichen pro Display-Zeile
const LCD_COLUMNS: usize = 16;

/// Bereits initialisierte Peripherie für die Spiel-Schleife
///
/// Die Status-LED wird erst im Task erstellt, weil ihr RMT-Buffer dort lebt.
pub struct GamePeripherals {
    pub bridge: LedcHBridge,
    pub sensor: GpioSensorPins,
    pub lcd: GpioLcdBus,
    pub pots: AdcPots,
    pub button: ActiveLowButton,
    pub led_pin: esp_hal::peripherals::GPIO8<'static>,
    pub rmt: esp_hal::peripherals::RMT<'static>,
}

/// Peripherie hinter den Traits aus spectral-core
pub struct GameIo<H, P, L, A, B, W> {
    pub bridge: H,
    pub sensor: P,
    pub lcd: L,
    pub pots: A,
    pub button: B,
    pub led: W,
}

/// Spiel-Logik - Hardware nur über Traits
///
/// Pro Tick:
/// 1. Farbsensor lesen (begrenztes Busy-Waiting)
/// 2. Korrektheit berechnen, Motor aktualisieren, Dashboard-Zustand setzen
/// 3. Status-LED aus den Potentiometern setzen
/// 4. Display aktualisieren (Taster gedrückt: IP-Adresse)
/// 5. Feste Pause, in der Netzwerk-Tasks laufen
pub async fn game_loop_logic<H, P, L, A, B, W>(io: GameIo<H, P, L, A, B, W>, dashboard: &SharedDashboard)
where
    H: HBridgeDriver,
    P: SensorPins,
    L: LcdBus,
    A: AnalogInputs,
    B: PushButton,
    W: SmartLedWriter,
{
    let GameIo {
        bridge,
        sensor,
        lcd,
        mut pots,
        button,
        led,
    } = io;

    let mut actuator = MotorActuator::new(bridge, ACTUATOR_CONFIG);
    actuator.initialize();

    let mut sensor = Tcs3200::new(sensor);
    sensor.init();
    sensor.set_frequency_scaling(SENSOR_SCALING);

    let mut lcd = Hd44780::new(lcd);
    lcd.init();

    let mut led = SmartStatusLed::new(led, LED_BRIGHTNESS);
    let mut button = Debouncer::new(button, BUTTON_DEBOUNCE_SAMPLES);

    // Display nur bei Änderung schreiben (kein Flackern)
    let mut shown: Option<[LcdLine; 2]> = None;
    let mut led_warned = false;

    info!("Game: Active, waiting for correctness >= {}%", SUCCESS_THRESHOLD);

    loop {
        let reading = sensor.read_rgb(SENSOR_GATE_TIME_MS);

        let now_ms = Instant::now().as_millis();
        let outcome = dashboard.lock(|state| {
            process_tick(reading, now_ms, &SCORING, &mut actuator, &mut state.borrow_mut())
        });

        if matches!(outcome.event, Some(ActuatorEvent::SuccessLatched)) {
            info!("Game: SUCCESS - motor locked, dashboard frozen");
        }

        for channel in ColorChannel::ALL {
            if let Err(e) = update_intensity(&mut pots, &mut led, channel, channel) {
                if !led_warned {
                    warn!("Game: Status LED write failed: {}", e);
                    led_warned = true;
                }
            }
        }

        let lines = if button.is_pressed() {
            render_network_info(AP_IP_TEXT)
        } else {
            render_status(&outcome.report, actuator.state().direction)
        };
        if shown.as_ref() != Some(&lines) {
            for (row, line) in lines.iter().enumerate() {
                lcd.set_cursor(row as u8, 0);
                lcd.write_string(line);
                for _ in line.len()..LCD_COLUMNS {
                    lcd.write_char(b' ');
                }
            }
            shown = Some(lines);
        }

        debug!(
            "Game: R:{} G:{} B:{} | correctness {}% | motor {}",
            reading.r,
            reading.g,
            reading.b,
            outcome.correctness,
            actuator.state().direction
        );

        Timer::after(Duration::from_millis(UPDATE_DELAY_MS)).await;
    }
}

/// Spiel-Task - Embassy Task für die Hauptschleife
///
/// Erstellt die Status-LED (RMT) und ruft dann die testbare
/// `game_loop_logic()` Funktion auf.
#[embassy_executor::task]
pub async fn game_loop_task(peripherals: GamePeripherals, dashboard: &'static SharedDashboard) {
    let GamePeripherals {
        bridge,
        sensor,
        lcd,
        pots,
        button,
        led_pin,
        rmt,
    } = peripherals;

    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    match RmtLedWriter::new(led_pin, rmt, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Some(led) => {
            let io = GameIo {
                bridge,
                sensor,
                lcd,
                pots,
                button,
                led,
            };
            game_loop_logic(io, dashboard).await;
        }
        None => {
            error!("Game: RMT init failed, status LED disabled");
            let io = GameIo {
                bridge,
                sensor,
                lcd,
                pots,
                button,
                led: DisabledLed,
            };
            game_loop_logic(io, dashboard).await;
        }
    }
}
