// LED-Check: Flackern in allen Farben, danach die Ampelfarben
//
// Dieser Check schlägt nur bei Schreibfehlern fehl.
// Ob die LEDs wirklich flackern, muss man mit eigenen Augen prüfen.
use defmt::info;
use embassy_time::Delay;
use esp_core::{CheckResult, SmartLedWriter, flicker_leds, show_lamp_colors};

use crate::config::{
    COLOR_GAP_MS, COLOR_HOLD_MS, FLICKER_OFF_MS, FLICKER_ON_MS, FLICKER_ROUNDS, LED_COUNT,
};

/// LED Logic - generisch über den Writer (Hardware oder Mock)
pub async fn test_flicker_the_leds<L: SmartLedWriter>(led: &mut L) -> CheckResult {
    flicker_leds::<_, _, LED_COUNT>(led, &mut Delay, FLICKER_ROUNDS, FLICKER_ON_MS, FLICKER_OFF_MS)
        .await?;

    info!("Check the red/yellow/green colors we'll be using!");
    show_lamp_colors::<_, _, LED_COUNT>(led, &mut Delay, COLOR_HOLD_MS, COLOR_GAP_MS).await
}
