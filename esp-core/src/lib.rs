//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions, das MH-Z19 Protokoll,
//! die Check-Logik und die Buchhaltung des Bring-up Test-Runners.

#![no_std]

pub mod checks;
pub mod logic;
pub mod mhz19;
pub mod report;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use checks::{
    Co2Check, check_builtin_pin, check_chip_id, check_co2_concentration, check_sensor_version,
    flicker_leds, play_scale, show_lamp_colors,
};
pub use logic::{
    COLOR_CHECK_STEPS, FlickerSequence, FlickerStep, SCALE_MELODY, color_check_frame,
    color_check_steps, hue_color, hue_for_led, scale_melody,
};
pub use mhz19::{Co2Reading, FirmwareVersion, Mhz19, Mhz19Command, Mhz19Error};
pub use report::{CheckFailure, CheckResult, SuiteSummary, expect_eq, expect_ne};
pub use traits::{BuzzerError, Co2Source, LedError, SmartLedWriter, ToneOutput};
pub use types::{ChipId, ColorStep, LampColor, Note, NoteStep};
