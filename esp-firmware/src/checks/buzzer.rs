// Buzzer-Check: C-Dur Tonleiter von C4 bis C5
use defmt::debug;
use esp_core::{CheckResult, ToneOutput, play_scale};

use crate::config::TONE_DURATION_MS;

pub async fn test_tone32<T: ToneOutput>(buzzer: &mut T) -> CheckResult {
    debug!("Playing C4..C5, {} ms per note", TONE_DURATION_MS);
    play_scale(buzzer, TONE_DURATION_MS).await
}
