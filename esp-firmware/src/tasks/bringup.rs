// Bring-up Task - initialisiert die Peripherie und führt alle Checks aus
use defmt::{error, info};
use esp_core::{LedError, SuiteSummary};
use esp_hal::gpio::Pin;
use esp_hal_smartled::smart_led_buffer;

use crate::checks::{
    test_can_read_co2_concentration, test_can_read_devboard_id, test_can_read_mhz19_version,
    test_flicker_the_leds, test_led_builtin_pin_number, test_tone32,
};
use crate::config::{
    BUZZER_DUTY_PCT, BUZZER_PIN, CO2_RX_PIN, CO2_TX_PIN, LED_BRIGHTNESS, LED_COUNT, LED_DATA_PIN,
    LED_TEST_BRIGHTNESS, MHZ19_BAUDRATE, MHZ19_TIMEOUT_MS, RMT_CLOCK_MHZ,
};
use crate::hal::{Co2Sensor, LedcBuzzer, RmtLedWriter};
use crate::runner::TestRunner;

/// Peripherals, die der Bring-up Test braucht
///
/// Pinbelegung siehe config.rs.
pub struct BringupPeripherals {
    pub led_builtin: esp_hal::peripherals::GPIO2<'static>,
    pub uart1: esp_hal::peripherals::UART1<'static>,
    pub co2_rx: esp_hal::peripherals::GPIO32<'static>,
    pub co2_tx: esp_hal::peripherals::GPIO26<'static>,
    pub led_data: esp_hal::peripherals::GPIO23<'static>,
    pub rmt: esp_hal::peripherals::RMT<'static>,
    pub buzzer: esp_hal::peripherals::GPIO19<'static>,
    pub ledc: esp_hal::peripherals::LEDC<'static>,
    /// Basis-MAC aus dem eFuse
    pub mac: [u8; 6],
}

/// Führt die komplette Suite aus
///
/// Fehler beim Initialisieren einzelner Geräte lassen nur die Checks
/// dieses Geräts fehlschlagen, die übrigen laufen weiter.
pub async fn run_bringup(p: BringupPeripherals) -> SuiteSummary {
    let builtin_pin = p.led_builtin.number();
    log_wiring();

    let mut sensor = Co2Sensor::new(p.uart1, p.co2_rx, p.co2_tx, MHZ19_BAUDRATE, MHZ19_TIMEOUT_MS);
    if let Err(e) = &sensor {
        error!("Failed to open UART for MH-Z19: {}", e);
    }

    // Buffer für SmartLED Daten (LED_COUNT LEDs)
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);
    let mut leds = RmtLedWriter::new(p.led_data, p.rmt, RMT_CLOCK_MHZ, &mut rmt_buffer);
    match &mut leds {
        Ok(writer) => writer.set_brightness(LED_TEST_BRIGHTNESS),
        Err(_) => error!("Failed to initialize RMT for LED strip"),
    }

    let mut buzzer = LedcBuzzer::new(p.ledc, p.buzzer.into(), BUZZER_DUTY_PCT);

    let mut runner = TestRunner::begin();
    runner
        .run(
            "test_led_builtin_pin_number",
            test_led_builtin_pin_number(builtin_pin),
        )
        .await;
    runner
        .run("test_can_read_devboard_id", test_can_read_devboard_id(p.mac))
        .await;
    runner
        .run(
            "test_can_read_mhz19_version",
            test_can_read_mhz19_version(&mut sensor),
        )
        .await;
    runner
        .run(
            "test_can_read_co2_concentration",
            test_can_read_co2_concentration(&mut sensor),
        )
        .await;
    runner
        .run("test_flicker_the_leds", async {
            let writer = leds.as_mut().map_err(|_| LedError::WriteFailed)?;
            test_flicker_the_leds(writer).await
        })
        .await;
    runner
        .run("test_tone32", test_tone32(&mut buzzer))
        .await;

    runner.end()
}

/// Verdrahtung laut config.rs, zum Abgleich mit dem aufgebauten Prototyp
fn log_wiring() {
    info!(
        "MH-Z19: RX=GPIO{} TX=GPIO{} @ {} baud",
        CO2_RX_PIN, CO2_TX_PIN, MHZ19_BAUDRATE
    );
    info!(
        "LED strip: DATA=GPIO{}, {} LEDs, brightness {} (test {})",
        LED_DATA_PIN, LED_COUNT, LED_BRIGHTNESS, LED_TEST_BRIGHTNESS
    );
    info!("Buzzer: GPIO{}", BUZZER_PIN);
}

/// Bring-up Task - Embassy Task für die Suite
///
/// Läuft genau einmal und beendet sich danach.
#[embassy_executor::task]
pub async fn bringup_task(peripherals: BringupPeripherals) {
    let summary = run_bringup(peripherals).await;
    info!("That's all folks");

    if !summary.passed() {
        error!("{} of {} checks failed", summary.failures, summary.tests);
    }
}
