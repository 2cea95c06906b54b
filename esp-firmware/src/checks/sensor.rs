// Sensor-Checks: MH-Z19 am UART1
use defmt::info;
use esp_core::{
    CheckFailure, CheckResult, Co2Source, Mhz19Error, check_co2_concentration,
    check_sensor_version,
};

/// Version abfragen, um sicherzugehen dass kein Zombie antwortet
pub async fn test_can_read_mhz19_version<S: Co2Source>(
    sensor: &mut Result<S, Mhz19Error>,
) -> CheckResult {
    let sensor = sensor.as_mut().map_err(|e| CheckFailure::Sensor(*e))?;

    let version = check_sensor_version(sensor).await?;
    info!("[DEBUG] Firmware version: {}", version);
    Ok(())
}

/// Messbereich und aktuelle Konzentration lesen
pub async fn test_can_read_co2_concentration<S: Co2Source>(
    sensor: &mut Result<S, Mhz19Error>,
) -> CheckResult {
    let sensor = sensor.as_mut().map_err(|e| CheckFailure::Sensor(*e))?;

    let check = check_co2_concentration(sensor).await?;
    info!("[DEBUG] Range: {} ppm, CO2: {}", check.range_ppm, check.reading);
    Ok(())
}
