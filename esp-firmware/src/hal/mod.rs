// Hardware Abstraction Layer (HAL) Module
//
// Hardware-Implementierungen der Traits aus esp-core:
// LED Strip (RMT), Buzzer (LEDC) und CO2 Sensor (UART).

pub mod buzzer;
pub mod co2_sensor;
pub mod led_writer;

pub use buzzer::LedcBuzzer;
pub use co2_sensor::Co2Sensor;
pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
