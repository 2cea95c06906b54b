//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)
//!
//! Die Sequenzen beschreiben nur WAS angezeigt bzw. gespielt wird und
//! wie lange. Abgespielt werden sie in `checks`.

use rgb::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::types::{ColorStep, LampColor, Note, NoteStep};

/// Farbton für LED `led` in Runde `round` des Flacker-Tests
///
/// LED 0 läuft mit Schrittweite 4 durch den Farbkreis, LED 1 mit 2,
/// jede weitere LED entsprechend langsamer (bzw. rückwärts).
pub fn hue_for_led(led: usize, round: u8) -> u8 {
    let stride = 4i32 - 2 * led as i32;
    stride.wrapping_mul(round as i32) as u8
}

/// Voll gesättigte Farbe zum Farbton `hue`
///
/// # Beispiele
///
/// ```
/// # use esp_core::hue_color;
/// let red = hue_color(0);
/// assert_eq!(red.g, 0);
/// assert!(red.r > 0);
/// ```
pub fn hue_color(hue: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Ein Bild des Flacker-Tests: Zustand aller LEDs und Haltezeit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerStep<const N: usize> {
    pub leds: [RGB8; N],
    pub hold_ms: u32,
}

/// Iterator über den Flacker-Test
///
/// Für jede Runde und jede LED zwei Bilder: LED in Farbe (`on_ms`),
/// danach dieselbe LED schwarz (`off_ms`). Die übrigen LEDs behalten
/// ihren Zustand.
#[derive(Debug, Clone)]
pub struct FlickerSequence<const N: usize> {
    leds: [RGB8; N],
    rounds: u8,
    on_ms: u32,
    off_ms: u32,
    round: u8,
    led: usize,
    lit: bool,
}

impl<const N: usize> FlickerSequence<N> {
    pub fn new(rounds: u8, on_ms: u32, off_ms: u32) -> Self {
        Self {
            leds: [RGB8::default(); N],
            rounds,
            on_ms,
            off_ms,
            round: 0,
            led: 0,
            lit: false,
        }
    }

    /// Anzahl der Bilder insgesamt
    pub fn total_steps(&self) -> usize {
        self.rounds as usize * N * 2
    }
}

impl<const N: usize> Iterator for FlickerSequence<N> {
    type Item = FlickerStep<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if N == 0 || self.round >= self.rounds {
            return None;
        }

        if !self.lit {
            self.leds[self.led] = hue_color(hue_for_led(self.led, self.round));
            self.lit = true;
            return Some(FlickerStep {
                leds: self.leds,
                hold_ms: self.on_ms,
            });
        }

        self.leds[self.led] = LampColor::Black.rgb();
        let step = FlickerStep {
            leds: self.leds,
            hold_ms: self.off_ms,
        };

        // Nächste LED, nach der letzten LED nächste Runde
        self.lit = false;
        self.led += 1;
        if self.led == N {
            self.led = 0;
            self.round += 1;
        }
        Some(step)
    }
}

/// Farben der Ampel, jeweils gefolgt von einer kurzen Dunkelphase
pub const COLOR_CHECK_STEPS: [LampColor; 6] = [
    LampColor::DarkRed,
    LampColor::Black,
    LampColor::Yellow,
    LampColor::Black,
    LampColor::DarkGreen,
    LampColor::Black,
];

/// Farbprüfung mit Haltezeiten: Farben `hold_ms`, Dunkelphasen `gap_ms`
pub fn color_check_steps(hold_ms: u32, gap_ms: u32) -> [ColorStep; 6] {
    COLOR_CHECK_STEPS.map(|color| ColorStep {
        color,
        hold_ms: if color == LampColor::Black {
            gap_ms
        } else {
            hold_ms
        },
    })
}

/// Bild für einen Schritt der Farbprüfung: nur LED 0 leuchtet
pub fn color_check_frame<const N: usize>(step: &ColorStep) -> [RGB8; N] {
    let mut leds = [RGB8::default(); N];
    if let Some(first) = leds.first_mut() {
        *first = step.color.rgb();
    }
    leds
}

/// C-Dur Tonleiter von C4 bis C5
pub const SCALE_MELODY: [Note; 8] = [
    Note::C4,
    Note::D4,
    Note::E4,
    Note::F4,
    Note::G4,
    Note::A4,
    Note::B4,
    Note::C5,
];

/// Tonleiter mit fester Tondauer
pub fn scale_melody(duration_ms: u32) -> impl Iterator<Item = NoteStep> {
    SCALE_MELODY
        .into_iter()
        .map(move |note| NoteStep { note, duration_ms })
}
