//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::mhz19::{Co2Reading, FirmwareVersion, Mhz19Error};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Buzzer-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerError {
    /// LEDC Timer lässt sich nicht auf die Frequenz einstellen
    Timer,
    /// LEDC Kanal konnte nicht konfiguriert werden
    Channel,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf einen RGB LED Strip (WS2812B/Neopixel).
/// Jeder Aufruf entspricht einem `show()`: alle Farben werden
/// gemeinsam auf den Strip geschrieben.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe pro LED auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, colors: &[RGB8]) -> Result<(), LedError>;
}

/// Trait für Tonausgabe auf einem Buzzer
///
/// Gleiche Semantik wie `tone()`/`noTone()`: ein Ton läuft für die
/// angegebene Dauer und verstummt danach von selbst.
#[allow(async_fn_in_trait)]
pub trait ToneOutput {
    /// Spielt eine Rechteckwelle mit `freq_hz` für `duration_ms`
    async fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), BuzzerError>;

    /// Schaltet den Ausgang sofort stumm
    fn no_tone(&mut self) -> Result<(), BuzzerError>;
}

/// Trait für einen CO2 Sensor mit Versions-, Bereichs- und Messabfrage
///
/// # Implementierungen
/// - **Core:** `Mhz19<U>` über einen beliebigen seriellen Port
/// - **Production:** `Co2Sensor` (UART1 mit Timeout pro Kommando)
#[allow(async_fn_in_trait)]
pub trait Co2Source {
    async fn firmware_version(&mut self) -> Result<FirmwareVersion, Mhz19Error>;

    /// Messbereich in ppm
    async fn range_ppm(&mut self) -> Result<u16, Mhz19Error>;

    async fn co2(&mut self) -> Result<Co2Reading, Mhz19Error>;
}
