//! Integration Tests für LED Logic
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedWriter

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use esp_core::{
    COLOR_CHECK_STEPS, CheckFailure, FlickerSequence, LampColor, LedError, SmartLedWriter,
    flicker_leds, hue_color, show_lamp_colors,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub frames: Vec<Vec<RGB8>>,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, colors: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.frames.push(colors.to_vec());
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Wartet nicht, summiert nur die angeforderten Zeiten
#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ms += (ns / 1_000_000) as u64;
        self.calls += 1;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
        self.calls += 1;
    }
}

/// Flacker-Check mit den Werten der Firmware (63 Runden, 60/30 ms)
fn flicker(mock: &mut MockLedWriter, delay: &mut MockDelay) -> Result<(), CheckFailure> {
    block_on(flicker_leds::<_, _, 2>(mock, delay, 63, 60, 30))
}

// ============================================================================
// Tests: MockLedWriter
// ============================================================================

#[test]
fn test_mock_led_writer_write() {
    let mut mock = MockLedWriter::new();
    let frame = [RGB8 { r: 10, g: 0, b: 0 }, RGB8::default()];

    assert!(mock.last_frame().is_none());

    mock.write(&frame).unwrap();

    assert_eq!(mock.frames.len(), 1);
    assert_eq!(mock.last_frame(), Some(&frame[..]));
}

#[test]
fn test_mock_led_writer_recovers_after_fail() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;

    // First write fails
    let result1 = mock.write(&[RGB8 { r: 10, g: 0, b: 0 }]);
    assert_eq!(result1, Err(LedError::WriteFailed));

    // Second write succeeds
    let result2 = mock.write(&[RGB8 { r: 0, g: 10, b: 0 }]);
    assert!(result2.is_ok());
    assert_eq!(mock.frames.len(), 1);
}

// ============================================================================
// Tests: Flacker-Sequenz
// ============================================================================

#[test]
fn test_flicker_two_leds_duration() {
    let mut mock = MockLedWriter::new();
    let mut delay = MockDelay::default();
    flicker(&mut mock, &mut delay).unwrap();

    // 63 Runden * 2 LEDs * (60 + 30) ms
    assert_eq!(delay.total_ms, 11_340);
    assert_eq!(delay.calls, 252);
    assert_eq!(mock.frames.len(), 252);
}

#[test]
fn test_flicker_ends_dark() {
    let mut mock = MockLedWriter::new();
    flicker(&mut mock, &mut MockDelay::default()).unwrap();

    assert_eq!(mock.last_frame(), Some(&[RGB8::default(); 2][..]));
}

#[test]
fn test_flicker_write_failure_fails_check() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;
    let mut delay = MockDelay::default();

    let result = flicker(&mut mock, &mut delay);
    assert_eq!(result, Err(CheckFailure::Led(LedError::WriteFailed)));
    // Abbruch vor dem ersten Warten
    assert!(mock.frames.is_empty());
    assert_eq!(delay.calls, 0);
}

#[test]
fn test_flicker_never_lights_two_leds_at_once() {
    let mut mock = MockLedWriter::new();
    flicker(&mut mock, &mut MockDelay::default()).unwrap();

    for frame in &mock.frames {
        let lit = frame.iter().filter(|c| **c != RGB8::default()).count();
        assert!(lit <= 1);
    }
}

#[test]
fn test_flicker_second_round_hues() {
    let steps: Vec<_> = FlickerSequence::<2>::new(63, 60, 30).collect();

    // Runde 1: Bild 4 = LED 0 an, Bild 6 = LED 1 an
    assert_eq!(steps[4].leds[0], hue_color(4));
    assert_eq!(steps[6].leds[1], hue_color(2));
}

// ============================================================================
// Tests: Ampelfarben
// ============================================================================

#[test]
fn test_lamp_colors() {
    assert_eq!(LampColor::DarkRed.rgb(), RGB8 { r: 139, g: 0, b: 0 });
    assert_eq!(LampColor::Yellow.rgb(), RGB8 { r: 255, g: 255, b: 0 });
    assert_eq!(LampColor::DarkGreen.rgb(), RGB8 { r: 0, g: 100, b: 0 });
    assert_eq!(LampColor::Black.rgb(), RGB8::default());
}

#[test]
fn test_color_check_alternates_with_black() {
    for (i, color) in COLOR_CHECK_STEPS.iter().enumerate() {
        assert_eq!(*color == LampColor::Black, i % 2 == 1);
    }
}

#[test]
fn test_color_check_on_strip() {
    let mut mock = MockLedWriter::new();
    let mut delay = MockDelay::default();

    block_on(show_lamp_colors::<_, _, 2>(&mut mock, &mut delay, 1000, 30)).unwrap();

    assert_eq!(delay.total_ms, 3090);
    assert_eq!(mock.frames.len(), 6);
    assert_eq!(mock.frames[0][0], LampColor::DarkRed.rgb());
    assert_eq!(mock.frames[2][0], LampColor::Yellow.rgb());
    assert_eq!(mock.frames[4][0], LampColor::DarkGreen.rgb());
    assert!(mock.frames.iter().all(|f| f[1] == RGB8::default()));
}

#[test]
fn test_color_check_write_failure_fails_check() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;

    let result = block_on(show_lamp_colors::<_, _, 2>(
        &mut mock,
        &mut MockDelay::default(),
        1000,
        30,
    ));
    assert_eq!(result, Err(CheckFailure::Led(LedError::WriteFailed)));
}
