// Board-Checks: Pinbelegung und Chip-ID
use defmt::info;
use embassy_time::Delay;
use esp_core::{CheckResult, ChipId, check_builtin_pin, check_chip_id};

use crate::config::{CHIP_ID_SETTLE_MS, LED_BUILTIN_PIN};

/// Reine Rechnung, keine Interaktion mit angeschlossener Hardware
pub async fn test_led_builtin_pin_number(builtin_pin: u8) -> CheckResult {
    check_builtin_pin(LED_BUILTIN_PIN, builtin_pin)
}

/// Liest die Chip-ID (Basis-MAC aus dem eFuse) des DevKit
pub async fn test_can_read_devboard_id(mac: [u8; 6]) -> CheckResult {
    let chip_id = ChipId::from_mac(mac);
    info!("ESP32 Chip ID = {}", chip_id);

    check_chip_id(chip_id, &mut Delay, CHIP_ID_SETTLE_MS).await
}
