//! Check-Logik des Bring-up Tests
//!
//! Generisch über die Hardware-Traits und `DelayNs`: auf dem Board mit
//! RMT/LEDC/UART und `embassy_time::Delay`, auf dem Host mit Mocks.
//! Die Firmware ergänzt nur Log-Ausgaben und die Fehler beim Öffnen
//! der Geräte.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::logic::{FlickerSequence, color_check_frame, color_check_steps, scale_melody};
use crate::mhz19::{Co2Reading, FirmwareVersion};
use crate::report::{CheckFailure, CheckResult, expect_eq};
use crate::traits::{Co2Source, SmartLedWriter, ToneOutput};
use crate::types::ChipId;

/// Pinnummer der On-Board LED gegen den erwarteten Wert
pub fn check_builtin_pin(expected: u8, actual: u8) -> CheckResult {
    expect_eq(expected, actual)
}

/// Chip-ID muss programmiert sein, danach `settle_ms` Pause
pub async fn check_chip_id<D: DelayNs>(chip: ChipId, delay: &mut D, settle_ms: u32) -> CheckResult {
    if !chip.is_programmed() {
        return Err(CheckFailure::Equal { value: 0 });
    }
    delay.delay_ms(settle_ms).await;
    Ok(())
}

/// Versionsabfrage muss mit RESULT_OK antworten
pub async fn check_sensor_version<S: Co2Source>(
    sensor: &mut S,
) -> Result<FirmwareVersion, CheckFailure> {
    Ok(sensor.firmware_version().await?)
}

/// Ergebnis der Konzentrationsabfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Co2Check {
    pub range_ppm: u16,
    pub reading: Co2Reading,
}

/// Messbereich und Konzentration lesen, Konzentration muss im Bereich liegen
///
/// Während der Aufwärmphase (ca. 3 Minuten) liefert der Sensor feste
/// Werte, geprüft wird daher nur die Plausibilität gegen den Messbereich.
pub async fn check_co2_concentration<S: Co2Source>(
    sensor: &mut S,
) -> Result<Co2Check, CheckFailure> {
    let range_ppm = sensor.range_ppm().await?;
    let reading = sensor.co2().await?;

    if reading.co2_ppm > range_ppm {
        return Err(CheckFailure::NotEqual {
            expected: range_ppm as i64,
            actual: reading.co2_ppm as i64,
        });
    }
    Ok(Co2Check { range_ppm, reading })
}

/// Flacker-Test: jede LED nacheinander in wechselnden Farben
pub async fn flicker_leds<L, D, const N: usize>(
    led: &mut L,
    delay: &mut D,
    rounds: u8,
    on_ms: u32,
    off_ms: u32,
) -> CheckResult
where
    L: SmartLedWriter,
    D: DelayNs,
{
    for step in FlickerSequence::<N>::new(rounds, on_ms, off_ms) {
        led.write(&step.leds)?;
        delay.delay_ms(step.hold_ms).await;
    }
    Ok(())
}

/// Ampelfarben rot/gelb/grün auf LED 0, dazwischen kurz dunkel
pub async fn show_lamp_colors<L, D, const N: usize>(
    led: &mut L,
    delay: &mut D,
    hold_ms: u32,
    gap_ms: u32,
) -> CheckResult
where
    L: SmartLedWriter,
    D: DelayNs,
{
    for step in color_check_steps(hold_ms, gap_ms) {
        let frame: [RGB8; N] = color_check_frame(&step);
        led.write(&frame)?;
        delay.delay_ms(step.hold_ms).await;
    }
    Ok(())
}

/// C-Dur Tonleiter, nach jedem Ton `no_tone()`
pub async fn play_scale<T: ToneOutput>(buzzer: &mut T, duration_ms: u32) -> CheckResult {
    for step in scale_melody(duration_ms) {
        buzzer.tone(step.note.freq_hz(), step.duration_ms).await?;
        buzzer.no_tone()?;
    }
    Ok(())
}
