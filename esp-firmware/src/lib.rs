// Library-Root: Hardware-Anbindung und Checks des Bring-up Tests
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod checks;
pub mod config;
pub mod hal;
pub mod runner;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    BuzzerError, CheckFailure, CheckResult, ChipId, LedError, Mhz19Error, SmartLedWriter,
    SuiteSummary, ToneOutput,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für xtensa-esp32-none-elf (esp-hal, esp-rtos).
// Alles was ohne Hardware testbar ist liegt deshalb in esp-core:
//
// - MH-Z19 Frames, Prüfsummen und der Treiber (generisch über embedded-io-async)
// - Flacker-, Farb- und Ton-Sequenzen
// - Die Check-Logik selbst (generisch über die Traits und DelayNs)
// - Zählen der Checks und die Unity-Zusammenfassung
//
// checks/ ruft diese Funktionen mit der echten Hardware und
// embassy_time::Delay auf. Host-Tests mit Mocks: siehe esp-tests.
