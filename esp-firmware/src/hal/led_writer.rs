// SmartLED Writer - Hardware-Implementierung
//
// Treibt den WS2812B Strip über das RMT Peripheral.
// Trait und Mock liegen in esp-core bzw. esp-tests.

use esp_core::{LedError, SmartLedWriter};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds::brightness;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

/// Buffer-Größe für den Strip (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware LED Writer
///
/// Nutzt das ESP32 RMT Peripheral um WS2812B LEDs anzusteuern.
/// Die Helligkeit wird wie bei `FastLED.setBrightness()` erst beim
/// Schreiben angewendet, die Farben im Aufrufer bleiben unverändert.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Aufrufer erstellt und als Parameter übergeben.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    brightness: u8,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `data_pin`: GPIO23 für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(LED_COUNT))
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO23<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Ok(Self {
            led,
            brightness: u8::MAX,
        })
    }

    /// Globale Helligkeit für alle folgenden Schreibvorgänge
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

impl SmartLedWriter for RmtLedWriter<'_> {
    fn write(&mut self, colors: &[RGB8]) -> Result<(), LedError> {
        self.led
            .write(brightness(colors.iter().copied(), self.brightness))
            .map_err(|_| LedError::WriteFailed)
    }
}
