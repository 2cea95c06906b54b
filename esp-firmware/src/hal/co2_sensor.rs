// MH-Z19 CO2 Sensor an UART1
//
// Verbindet den generischen Treiber aus esp-core mit der asynchronen
// ESP32 UART und begrenzt jedes Kommando mit einem Timeout.

use core::future::Future;

use embassy_time::{Duration, with_timeout};
use embedded_io_async::{ErrorKind, ErrorType, Read, Write};
use esp_core::{Co2Reading, Co2Source, FirmwareVersion, Mhz19, Mhz19Error};
use esp_hal::Async;
use esp_hal::uart::{Config as UartConfig, Uart};

/// UART als `embedded_io_async` Port für den MH-Z19 Treiber
pub struct UartPort<'d> {
    uart: Uart<'d, Async>,
}

impl ErrorType for UartPort<'_> {
    type Error = ErrorKind;
}

impl Read for UartPort<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.uart.read_async(buf).await.map_err(|_| ErrorKind::Other)
    }
}

impl Write for UartPort<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.uart.write_async(buf).await.map_err(|_| ErrorKind::Other)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.uart.flush_async().await.map_err(|_| ErrorKind::Other)
    }
}

/// MH-Z19 mit Timeout pro Kommando
pub struct Co2Sensor<'d> {
    driver: Mhz19<UartPort<'d>>,
    timeout: Duration,
}

impl<'d> Co2Sensor<'d> {
    /// Öffnet UART1 mit 8N1 und der gegebenen Baudrate
    ///
    /// # Parameter
    /// - `uart1`: UART1 Peripheral
    /// - `rx`: GPIO32, verbunden mit Tx des Sensors
    /// - `tx`: GPIO26, verbunden mit Rx des Sensors
    pub fn new(
        uart1: esp_hal::peripherals::UART1<'d>,
        rx: esp_hal::peripherals::GPIO32<'d>,
        tx: esp_hal::peripherals::GPIO26<'d>,
        baudrate: u32,
        timeout_ms: u64,
    ) -> Result<Self, Mhz19Error> {
        let uart = Uart::new(uart1, UartConfig::default().with_baudrate(baudrate))
            .map_err(|_| Mhz19Error::Io)?
            .with_rx(rx)
            .with_tx(tx)
            .into_async();

        Ok(Self {
            driver: Mhz19::new(UartPort { uart }),
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

impl Co2Source for Co2Sensor<'_> {
    async fn firmware_version(&mut self) -> Result<FirmwareVersion, Mhz19Error> {
        timed(self.timeout, self.driver.get_version()).await
    }

    async fn range_ppm(&mut self) -> Result<u16, Mhz19Error> {
        timed(self.timeout, self.driver.get_range()).await
    }

    async fn co2(&mut self) -> Result<Co2Reading, Mhz19Error> {
        timed(self.timeout, self.driver.read_co2()).await
    }
}

async fn timed<T>(
    timeout: Duration,
    request: impl Future<Output = Result<T, Mhz19Error>>,
) -> Result<T, Mhz19Error> {
    with_timeout(timeout, request)
        .await
        .unwrap_or(Err(Mhz19Error::Timeout))
}
