//! Core Types für den Bring-up
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Benannte Farben der CO2-Ampel
///
/// Werte entsprechen den HTML-Farbnamen (DarkRed, Yellow, DarkGreen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampColor {
    Black,
    DarkRed,
    Yellow,
    DarkGreen,
}

impl LampColor {
    pub const fn rgb(self) -> RGB8 {
        match self {
            Self::Black => RGB8 { r: 0, g: 0, b: 0 },
            Self::DarkRed => RGB8 { r: 139, g: 0, b: 0 },
            Self::Yellow => RGB8 {
                r: 255,
                g: 255,
                b: 0,
            },
            Self::DarkGreen => RGB8 { r: 0, g: 100, b: 0 },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::DarkRed => "DarkRed",
            Self::Yellow => "Yellow",
            Self::DarkGreen => "DarkGreen",
        }
    }
}

/// Ein Schritt der Farbprüfung: Farbe auf LED 0 und Haltezeit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStep {
    pub color: LampColor,
    pub hold_ms: u32,
}

/// Töne der C-Dur Tonleiter (4. Oktave + C5)
///
/// Frequenzen gerundet auf ganze Hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
}

impl Note {
    pub const fn freq_hz(self) -> u32 {
        match self {
            Self::C4 => 262,
            Self::D4 => 294,
            Self::E4 => 330,
            Self::F4 => 349,
            Self::G4 => 392,
            Self::A4 => 440,
            Self::B4 => 494,
            Self::C5 => 523,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::C4 => "C4",
            Self::D4 => "D4",
            Self::E4 => "E4",
            Self::F4 => "F4",
            Self::G4 => "G4",
            Self::A4 => "A4",
            Self::B4 => "B4",
            Self::C5 => "C5",
        }
    }
}

/// Ein Ton einer Melodie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStep {
    pub note: Note,
    pub duration_ms: u32,
}

/// Chip-ID des ESP32
///
/// Die ID ist die Basis-MAC-Adresse aus dem eFuse, als Little-Endian
/// Integer gelesen (Byte 0 der MAC ist das niederwertigste Byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipId(pub u64);

impl ChipId {
    pub fn from_mac(mac: [u8; 6]) -> Self {
        let mut bytes = [0u8; 8];
        bytes[..6].copy_from_slice(&mac);
        Self(u64::from_le_bytes(bytes))
    }

    /// Obere 2 Bytes (Bits 32..48)
    pub fn high(self) -> u16 {
        (self.0 >> 32) as u16
    }

    /// Untere 4 Bytes
    pub fn low(self) -> u32 {
        self.0 as u32
    }

    /// Ein unprogrammiertes eFuse liefert 0
    pub fn is_programmed(self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for ChipId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04X}{:08X}", self.high(), self.low())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LampColor {
    fn format(&self, fmt: defmt::Formatter) {
        let c = self.rgb();
        defmt::write!(fmt, "{} ({}, {}, {})", self.name(), c.r, c.g, c.b)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Note {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({} Hz)", self.name(), self.freq_hz())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChipId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u16:04X}{=u32:08X}", self.high(), self.low())
    }
}
