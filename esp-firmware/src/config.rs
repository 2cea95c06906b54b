// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Verdrahtung des ESP32 DevKit (CO2-Ampel Prototyp).
// Die Pins selbst werden in main.rs als typisierte Peripherals übergeben,
// die Nummern hier dienen den Checks und der Log-Ausgabe.

// ============================================================================
// Board Konfiguration
// ============================================================================

/// GPIO-Pin der On-Board LED des ESP32 DevKit
pub const LED_BUILTIN_PIN: u8 = 2;

/// Wartezeit nach dem Boot bevor die Checks starten (Millisekunden)
/// Das Board kann nicht per DTR/RTS resetten, der Monitor braucht >2 s
pub const STARTUP_DELAY_MS: u64 = 2000;

/// Pause nach Ausgabe der Chip-ID (Millisekunden)
pub const CHIP_ID_SETTLE_MS: u32 = 3000;

// ============================================================================
// MH-Z19 CO2 Sensor Konfiguration
// ============================================================================

/// ESP RX-Pin, verbunden mit dem Tx-Pin des MH-Z19
pub const CO2_RX_PIN: u8 = 32;

/// ESP TX-Pin, verbunden mit dem Rx-Pin des MH-Z19
pub const CO2_TX_PIN: u8 = 26;

/// Baudrate des Sensors (fest, 8N1)
pub const MHZ19_BAUDRATE: u32 = 9600;

/// Timeout pro Sensor-Kommando (Millisekunden)
pub const MHZ19_TIMEOUT_MS: u64 = 500;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des WS2812B Strips (Farbreihenfolge GRB)
pub const LED_DATA_PIN: u8 = 23;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 2;

/// Helligkeit der Ampel im Betrieb (0-255)
pub const LED_BRIGHTNESS: u8 = 42;

/// Helligkeit während des LED-Checks (0-255)
pub const LED_TEST_BRIGHTNESS: u8 = 50;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Runden des Flacker-Tests
pub const FLICKER_ROUNDS: u8 = 63;

/// Haltezeit einer leuchtenden LED im Flacker-Test (Millisekunden)
pub const FLICKER_ON_MS: u32 = 60;

/// Haltezeit einer dunklen LED im Flacker-Test (Millisekunden)
pub const FLICKER_OFF_MS: u32 = 30;

/// Haltezeit je Ampelfarbe (Millisekunden)
pub const COLOR_HOLD_MS: u32 = 1000;

/// Dunkelphase zwischen den Ampelfarben (Millisekunden)
pub const COLOR_GAP_MS: u32 = 30;

// ============================================================================
// Buzzer Konfiguration
// ============================================================================

/// GPIO-Pin des Piezo-Buzzers
pub const BUZZER_PIN: u8 = 19;

/// Tastverhältnis der Rechteckwelle in Prozent
pub const BUZZER_DUTY_PCT: u8 = 50;

/// Dauer je Ton der Tonleiter (Millisekunden)
pub const TONE_DURATION_MS: u32 = 500;
