// Check-Funktionen des Bring-up Tests
//
// Jeder Check liefert `CheckResult` und wird vom TestRunner ausgeführt.
// Die eigentliche Prüfung steckt in `esp_core::checks`, hier kommen nur
// die Werte aus config.rs, `embassy_time::Delay` und die Log-Ausgaben dazu.

pub mod board;
pub mod buzzer;
pub mod leds;
pub mod sensor;

pub use board::{test_can_read_devboard_id, test_led_builtin_pin_number};
pub use buzzer::test_tone32;
pub use leds::test_flicker_the_leds;
pub use sensor::{test_can_read_co2_concentration, test_can_read_mhz19_version};
