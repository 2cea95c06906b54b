//! MH-Z19 CO2 Sensor Treiber
//!
//! Der Sensor spricht ein festes 9-Byte Protokoll über UART (9600 8N1).
//!
//! Anfrage:  `FF 01 <cmd> d3 d4 d5 d6 d7 <crc>`
//! Antwort:  `FF <cmd> b2 b3 b4 b5 b6 b7 <crc>`
//!
//! Die Prüfsumme ist das Zweierkomplement der Summe der Bytes 1..8.
//! Der Treiber ist generisch über `embedded_io_async`, damit er auf dem
//! Host gegen einen Mock getestet werden kann. Timeouts setzt der Aufrufer.

use embedded_io_async::{Read, ReadExactError, Write};

use crate::traits::Co2Source;

/// Länge jedes Frames in Bytes
pub const FRAME_LEN: usize = 9;

const START_BYTE: u8 = 0xFF;
const SENSOR_ADDRESS: u8 = 0x01;

/// Maximal verworfene Bytes bis zum Start einer Antwort (zwei Frames)
const MAX_SKIPPED_BYTES: usize = 2 * FRAME_LEN;

/// Offset der unoffiziellen Temperatur in der 0x86-Antwort
const TEMPERATURE_OFFSET: i16 = 40;

/// Fehler-Codes des Sensors
///
/// `Ok(..)` entspricht dem Fehler-Code "RESULT_OK" der Arduino-Bibliothek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mhz19Error {
    /// UART Lese- oder Schreibfehler
    Io,
    /// Keine (vollständige) Antwort innerhalb der Wartezeit
    Timeout,
    /// Keine Antwort mit passendem Kommando-Echo im Datenstrom
    Match,
    /// Prüfsumme der Antwort falsch
    Crc,
}

/// Unterstützte Kommandos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mhz19Command {
    ReadCo2,
    GetVersion,
    GetRange,
    SetAutoCalibration(bool),
}

impl Mhz19Command {
    pub const fn code(self) -> u8 {
        match self {
            Self::ReadCo2 => 0x86,
            Self::GetVersion => 0xA0,
            Self::GetRange => 0x9B,
            Self::SetAutoCalibration(_) => 0x79,
        }
    }

    /// Baut den Anfrage-Frame inklusive Prüfsumme
    pub fn request(self) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = START_BYTE;
        frame[1] = SENSOR_ADDRESS;
        frame[2] = self.code();
        if let Self::SetAutoCalibration(enabled) = self {
            frame[3] = if enabled { 0xA0 } else { 0x00 };
        }
        frame[8] = checksum(&frame);
        frame
    }
}

/// Prüfsumme über Bytes 1..8 eines Frames
pub fn checksum(frame: &[u8; FRAME_LEN]) -> u8 {
    let sum = frame[1..8]
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    (!sum).wrapping_add(1)
}

/// Prüft eine Antwort auf Startbyte, Kommando-Echo und Prüfsumme
pub fn validate_response(command: Mhz19Command, frame: &[u8; FRAME_LEN]) -> Result<(), Mhz19Error> {
    if frame[0] != START_BYTE || frame[1] != command.code() {
        return Err(Mhz19Error::Match);
    }
    if frame[8] != checksum(frame) {
        return Err(Mhz19Error::Crc);
    }
    Ok(())
}

/// Kurzes Lesen heißt: der Sensor hat nicht (vollständig) geantwortet
fn read_error<E>(e: ReadExactError<E>) -> Mhz19Error {
    match e {
        ReadExactError::UnexpectedEof => Mhz19Error::Timeout,
        ReadExactError::Other(_) => Mhz19Error::Io,
    }
}

/// Firmware-Version des Sensors, 4 ASCII-Zeichen (z.B. "0443")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion([u8; 4]);

impl FirmwareVersion {
    pub fn from_response(frame: &[u8; FRAME_LEN]) -> Self {
        Self([frame[2], frame[3], frame[4], frame[5]])
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Version als Text, `"????"` wenn der Sensor kein ASCII liefert
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.0) {
            Ok(s) if self.0.iter().all(u8::is_ascii_graphic) => s,
            _ => "????",
        }
    }
}

/// Messwert der 0x86-Abfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Co2Reading {
    pub co2_ppm: u16,
    /// Interne Sensortemperatur, nur grob genau
    pub temperature_c: i16,
}

impl Co2Reading {
    pub fn from_response(frame: &[u8; FRAME_LEN]) -> Self {
        Self {
            co2_ppm: u16::from_be_bytes([frame[2], frame[3]]),
            temperature_c: frame[4] as i16 - TEMPERATURE_OFFSET,
        }
    }
}

/// MH-Z19 Treiber über einen beliebigen asynchronen seriellen Port
pub struct Mhz19<U> {
    port: U,
}

impl<U: Read + Write> Mhz19<U> {
    pub fn new(port: U) -> Self {
        Self { port }
    }

    pub fn release(self) -> U {
        self.port
    }

    /// Sendet ein Kommando und liest die zugehörige Antwort
    ///
    /// Vor der Antwort können noch Bytes einer verspäteten Antwort im
    /// Empfangspuffer liegen (z.B. nach einem Timeout). Diese werden
    /// verworfen, bis `FF <cmd>` gefunden ist.
    pub async fn transfer(&mut self, command: Mhz19Command) -> Result<[u8; FRAME_LEN], Mhz19Error> {
        self.port
            .write_all(&command.request())
            .await
            .map_err(|_| Mhz19Error::Io)?;
        self.port.flush().await.map_err(|_| Mhz19Error::Io)?;

        self.sync_to_response(command.code()).await?;

        let mut response = [0u8; FRAME_LEN];
        response[0] = START_BYTE;
        response[1] = command.code();
        self.port
            .read_exact(&mut response[2..])
            .await
            .map_err(read_error)?;

        validate_response(command, &response)?;
        Ok(response)
    }

    /// Liest bis einschließlich `FF <code>`
    async fn sync_to_response(&mut self, code: u8) -> Result<(), Mhz19Error> {
        let mut previous = self.read_byte().await?;
        let mut skipped = 0;
        loop {
            let byte = self.read_byte().await?;
            if previous == START_BYTE && byte == code {
                return Ok(());
            }
            skipped += 1;
            if skipped > MAX_SKIPPED_BYTES {
                return Err(Mhz19Error::Match);
            }
            previous = byte;
        }
    }

    async fn read_byte(&mut self) -> Result<u8, Mhz19Error> {
        let mut byte = [0u8; 1];
        self.port.read_exact(&mut byte).await.map_err(read_error)?;
        Ok(byte[0])
    }

    pub async fn get_version(&mut self) -> Result<FirmwareVersion, Mhz19Error> {
        let response = self.transfer(Mhz19Command::GetVersion).await?;
        Ok(FirmwareVersion::from_response(&response))
    }

    pub async fn read_co2(&mut self) -> Result<Co2Reading, Mhz19Error> {
        let response = self.transfer(Mhz19Command::ReadCo2).await?;
        Ok(Co2Reading::from_response(&response))
    }

    /// Messbereich in ppm (typisch 2000, 5000 oder 10000)
    pub async fn get_range(&mut self) -> Result<u16, Mhz19Error> {
        let response = self.transfer(Mhz19Command::GetRange).await?;
        Ok(u16::from_be_bytes([response[4], response[5]]))
    }

    /// Schaltet die automatische Basislinien-Kalibrierung (ABC) ein oder aus
    pub async fn set_auto_calibration(&mut self, enabled: bool) -> Result<(), Mhz19Error> {
        self.transfer(Mhz19Command::SetAutoCalibration(enabled))
            .await
            .map(|_| ())
    }
}

impl<U: Read + Write> Co2Source for Mhz19<U> {
    async fn firmware_version(&mut self) -> Result<FirmwareVersion, Mhz19Error> {
        self.get_version().await
    }

    async fn range_ppm(&mut self) -> Result<u16, Mhz19Error> {
        self.get_range().await
    }

    async fn co2(&mut self) -> Result<Co2Reading, Mhz19Error> {
        self.read_co2().await
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Mhz19Error {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            Mhz19Error::Io => "Io",
            Mhz19Error::Timeout => "Timeout",
            Mhz19Error::Match => "Match",
            Mhz19Error::Crc => "Crc",
        };
        defmt::write!(fmt, "Mhz19Error::{}", name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FirmwareVersion {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Co2Reading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} ppm ({} C)",
            self.co2_ppm,
            self.temperature_c
        )
    }
}
