// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use spectral_core::{
    ActuatorConfig, ColorChannel, ColorReading, DominanceRatio, FrequencyScaling, Scoring,
    TargetDistance,
};

// ============================================================================
// Spiel-Schleife
// ============================================================================

/// Pause zwischen zwei Ticks in Millisekunden
pub const UPDATE_DELAY_MS: u64 = 100;

/// Ab dieser Korrektheit (in %) gilt die Farbe als gefunden
pub const SUCCESS_THRESHOLD: f32 = 97.0;

/// Bewertungsstrategie
/// Alternative: `Scoring::TargetDistance(TARGET_DISTANCE)`
pub const SCORING: Scoring = Scoring::Dominance(DominanceRatio {
    channel: ColorChannel::Red,
});

/// Ziel-Farbe für `Scoring::TargetDistance` (Frequenzen in Hz)
pub const TARGET_DISTANCE: TargetDistance = TargetDistance::new(ColorReading {
    r: 1200,
    g: 1000,
    b: 1600,
});

// ============================================================================
// Motor (H-Brücke, z.B. L298N)
// ============================================================================

/// PWM-Eingang (ENA)
pub const MOTOR_PWM_GPIO_PIN: u8 = 18;
/// Richtungseingang IN1
pub const MOTOR_IN1_GPIO_PIN: u8 = 19;
/// Richtungseingang IN2
pub const MOTOR_IN2_GPIO_PIN: u8 = 20;

/// LEDC PWM-Frequenz für den Motor in kHz
pub const MOTOR_PWM_FREQUENCY_KHZ: u32 = 20;

/// Maximaler Hardware-Duty bei 10-Bit Auflösung
pub const MOTOR_PWM_MAX_HW_DUTY: u32 = (1 << 10) - 1;

/// Dauer einer vollen Umdrehung bei Fahr-Geschwindigkeit
pub const FULL_ROTATION_TIME_MS: u32 = 2000;

/// Tastverhältnis während einer Bewegung in %
pub const MOTOR_DRIVE_DUTY_PERCENT: f32 = 80.0;

/// Kleinere Änderungen der Korrektheit gelten als Rauschen
pub const MIN_CHANGE_THRESHOLD: f32 = 0.5;

pub const ACTUATOR_CONFIG: ActuatorConfig = ActuatorConfig {
    success_threshold: SUCCESS_THRESHOLD,
    min_change: MIN_CHANGE_THRESHOLD,
    full_rotation_ms: FULL_ROTATION_TIME_MS,
    drive_duty_percent: MOTOR_DRIVE_DUTY_PERCENT,
};

// ============================================================================
// Farbsensor (TCS3200)
// ============================================================================

pub const SENSOR_S0_GPIO_PIN: u8 = 10;
pub const SENSOR_S1_GPIO_PIN: u8 = 11;
pub const SENSOR_S2_GPIO_PIN: u8 = 22;
pub const SENSOR_S3_GPIO_PIN: u8 = 23;
pub const SENSOR_OUT_GPIO_PIN: u8 = 21;

/// Torzeit pro Farbkanal in Millisekunden
pub const SENSOR_GATE_TIME_MS: u32 = 20;

/// 20 % Skalierung passt zur Abtastrate des Busy-Wait Zählers
pub const SENSOR_SCALING: FrequencyScaling = FrequencyScaling::TwentyPercent;

// ============================================================================
// Display (HD44780, 4-Bit)
// ============================================================================

pub const LCD_RS_GPIO_PIN: u8 = 3;
pub const LCD_EN_GPIO_PIN: u8 = 4;
pub const LCD_D4_GPIO_PIN: u8 = 5;
pub const LCD_D5_GPIO_PIN: u8 = 6;
pub const LCD_D6_GPIO_PIN: u8 = 7;
pub const LCD_D7_GPIO_PIN: u8 = 14;

// ============================================================================
// Potentiometer & Status-LED
// ============================================================================

/// Potentiometer an ADC1 (GPIO0..GPIO2)
pub const POT_R_GPIO_PIN: u8 = 0;
pub const POT_G_GPIO_PIN: u8 = 1;
pub const POT_B_GPIO_PIN: u8 = 2;

/// GPIO-Pin für die RGB Status-LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Maximale Helligkeit pro Kanal der Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 32;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Taster
// ============================================================================

/// BOOT-Taster (active-low, interner Pull-Up)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Gleiche Abtastungen bis ein Tasterwechsel übernommen wird
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 2;

// ============================================================================
// WiFi Access Point
// ============================================================================

/// SSID des Access Points
/// Kann zur Build-Zeit über AP_SSID (.env) überschrieben werden
pub const AP_SSID: &str = match option_env!("AP_SSID") {
    Some(ssid) => ssid,
    None => "Spectral-Interface",
};

/// WPA2 Passwort (mindestens 8 Zeichen)
/// Kann zur Build-Zeit über AP_PASSWORD (.env) überschrieben werden
pub const AP_PASSWORD: &str = match option_env!("AP_PASSWORD") {
    Some(password) => password,
    None => "spectral123",
};

/// Statische Adresse des Access Points
pub const AP_IP_ADDRESS: [u8; 4] = [192, 168, 4, 1];

/// Adresse als Text für das Display
pub const AP_IP_TEXT: &str = "192.168.4.1";

/// Netzmaske als Präfixlänge (255.255.255.0)
pub const AP_PREFIX_LEN: u8 = 24;

/// Wartezeit bevor ein gestoppter Access Point neu gestartet wird
pub const AP_RESTART_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port
pub const HTTP_PORT: u16 = 80;

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 2048;

/// Cache-Header für alle Antworten (Browser soll immer frisch laden)
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";
