//! Integration Tests für die Check-Funktionen des Bring-up Tests
//!
//! Dieselben Funktionen laufen auf dem Board mit UART, eFuse und
//! `embassy_time::Delay`. Hier ersetzen Mocks Sensor und Delay.

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use esp_core::mhz19::FRAME_LEN;
use esp_core::{
    CheckFailure, ChipId, Co2Check, Co2Reading, Co2Source, FirmwareVersion, Mhz19Error,
    SuiteSummary, check_builtin_pin, check_chip_id, check_co2_concentration,
    check_sensor_version,
};

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ms += (ns / 1_000_000) as u64;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
    }
}

// ============================================================================
// Mock CO2 Sensor
// ============================================================================

pub struct MockCo2Source {
    pub version: Result<[u8; 4], Mhz19Error>,
    pub range: Result<u16, Mhz19Error>,
    pub reading: Result<Co2Reading, Mhz19Error>,
    pub requests: usize,
}

impl MockCo2Source {
    /// Sensor in der Aufwärmphase: 5000 ppm Bereich, 400 ppm
    pub fn warming_up() -> Self {
        Self {
            version: Ok(*b"0443"),
            range: Ok(5000),
            reading: Ok(Co2Reading {
                co2_ppm: 400,
                temperature_c: 24,
            }),
            requests: 0,
        }
    }

    pub fn silent() -> Self {
        Self {
            version: Err(Mhz19Error::Timeout),
            range: Err(Mhz19Error::Timeout),
            reading: Err(Mhz19Error::Timeout),
            requests: 0,
        }
    }
}

impl Co2Source for MockCo2Source {
    async fn firmware_version(&mut self) -> Result<FirmwareVersion, Mhz19Error> {
        self.requests += 1;
        let [a, b, c, d] = self.version?;
        let mut frame = [0u8; FRAME_LEN];
        frame[2..6].copy_from_slice(&[a, b, c, d]);
        Ok(FirmwareVersion::from_response(&frame))
    }

    async fn range_ppm(&mut self) -> Result<u16, Mhz19Error> {
        self.requests += 1;
        self.range
    }

    async fn co2(&mut self) -> Result<Co2Reading, Mhz19Error> {
        self.requests += 1;
        self.reading
    }
}

// ============================================================================
// Tests: Board
// ============================================================================

#[test]
fn test_builtin_pin_matches() {
    assert_eq!(check_builtin_pin(2, 2), Ok(()));
    assert_eq!(
        check_builtin_pin(2, 5),
        Err(CheckFailure::NotEqual {
            expected: 2,
            actual: 5
        })
    );
}

#[test]
fn test_chip_id_waits_after_success() {
    let chip = ChipId::from_mac([0x30, 0xAE, 0xA4, 0x07, 0x0D, 0x64]);
    let mut delay = MockDelay::default();

    assert_eq!(block_on(check_chip_id(chip, &mut delay, 3000)), Ok(()));
    assert_eq!(delay.total_ms, 3000);
}

#[test]
fn test_zero_chip_id_fails_without_waiting() {
    let chip = ChipId::from_mac([0; 6]);
    let mut delay = MockDelay::default();

    let result = block_on(check_chip_id(chip, &mut delay, 3000));
    assert_eq!(result, Err(CheckFailure::Equal { value: 0 }));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Expected Not-Equal 0"
    );
    assert_eq!(delay.total_ms, 0);
}

// ============================================================================
// Tests: Sensor
// ============================================================================

#[test]
fn test_sensor_version_is_read() {
    let mut sensor = MockCo2Source::warming_up();

    let version = block_on(check_sensor_version(&mut sensor)).unwrap();
    assert_eq!(version.as_str(), "0443");
}

#[test]
fn test_sensor_version_error_fails_check() {
    let mut sensor = MockCo2Source::silent();

    assert_eq!(
        block_on(check_sensor_version(&mut sensor)),
        Err(CheckFailure::Sensor(Mhz19Error::Timeout))
    );
}

#[test]
fn test_co2_within_range_passes() {
    let mut sensor = MockCo2Source::warming_up();

    let check = block_on(check_co2_concentration(&mut sensor)).unwrap();
    assert_eq!(
        check,
        Co2Check {
            range_ppm: 5000,
            reading: Co2Reading {
                co2_ppm: 400,
                temperature_c: 24
            }
        }
    );
}

#[test]
fn test_co2_at_range_limit_passes() {
    let mut sensor = MockCo2Source::warming_up();
    sensor.reading = Ok(Co2Reading {
        co2_ppm: 5000,
        temperature_c: 24,
    });

    assert!(block_on(check_co2_concentration(&mut sensor)).is_ok());
}

#[test]
fn test_co2_above_range_fails() {
    let mut sensor = MockCo2Source::warming_up();
    sensor.range = Ok(2000);
    sensor.reading = Ok(Co2Reading {
        co2_ppm: 2001,
        temperature_c: 24,
    });

    let failure = block_on(check_co2_concentration(&mut sensor)).unwrap_err();
    assert_eq!(
        failure,
        CheckFailure::NotEqual {
            expected: 2000,
            actual: 2001
        }
    );
    assert_eq!(failure.to_string(), "Expected 2000 Was 2001");
}

#[test]
fn test_co2_range_error_skips_reading() {
    let mut sensor = MockCo2Source::warming_up();
    sensor.range = Err(Mhz19Error::Crc);

    assert_eq!(
        block_on(check_co2_concentration(&mut sensor)),
        Err(CheckFailure::Sensor(Mhz19Error::Crc))
    );
    assert_eq!(sensor.requests, 1);
}

// ============================================================================
// Tests: Ablauf der Suite
// ============================================================================

#[test]
fn test_failed_checks_do_not_stop_the_suite() {
    let mut summary = SuiteSummary::new();
    let mut delay = MockDelay::default();
    let mut sensor = MockCo2Source::silent();

    block_on(async {
        summary.run(async { check_builtin_pin(2, 2) }).await.unwrap();
        summary
            .run(check_chip_id(ChipId::from_mac([0; 6]), &mut delay, 3000))
            .await
            .unwrap_err();
        summary
            .run(async { check_sensor_version(&mut sensor).await.map(|_| ()) })
            .await
            .unwrap_err();
        summary
            .run(async { check_co2_concentration(&mut sensor).await.map(|_| ()) })
            .await
            .unwrap_err();
        summary
            .run(check_chip_id(
                ChipId::from_mac([0x30, 0xAE, 0xA4, 0x07, 0x0D, 0x64]),
                &mut delay,
                3000,
            ))
            .await
            .unwrap();
    });

    // Alle Checks liefen, auch nach den Fehlern
    assert_eq!(sensor.requests, 2);
    assert_eq!(delay.total_ms, 3000);
    assert_eq!(summary.tests, 5);
    assert_eq!(summary.failures, 3);
    assert_eq!(summary.to_string(), "5 Tests 3 Failures 0 Ignored");
    assert_eq!(summary.verdict(), "FAIL");
}
