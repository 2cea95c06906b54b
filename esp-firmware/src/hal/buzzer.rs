// Piezo-Buzzer über das LEDC Peripheral
//
// Jeder Ton konfiguriert Timer 0 (Low-Speed) auf die Tonfrequenz und
// hängt Kanal 0 für die Dauer des Tons an den Buzzer-Pin. Stille ist
// derselbe Kanal mit Tastverhältnis 0, der Pin bleibt beim LEDC.

use embassy_time::{Duration, Timer};
use esp_core::{BuzzerError, ToneOutput};
use esp_hal::gpio::{AnyPin, DriveMode};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;

/// Timer-Frequenz für `no_tone()` vor dem ersten Ton
const IDLE_FREQ_HZ: u32 = 1000;

/// Real Hardware Buzzer
pub struct LedcBuzzer<'d> {
    ledc: Ledc<'d>,
    pin: AnyPin<'d>,
    duty_pct: u8,
    freq_hz: u32,
}

impl<'d> LedcBuzzer<'d> {
    /// Erstellt einen neuen LedcBuzzer
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `pin`: Ausgangspin des Buzzers (GPIO19)
    /// - `duty_pct`: Tastverhältnis der Rechteckwelle
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'d>,
        pin: AnyPin<'d>,
        duty_pct: u8,
    ) -> Self {
        let mut ledc = Ledc::new(ledc_peripheral);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        Self {
            ledc,
            pin,
            duty_pct,
            freq_hz: IDLE_FREQ_HZ,
        }
    }
}

fn timer_config(freq_hz: u32) -> timer::config::Config<timer::LSClockSource> {
    timer::config::Config {
        duty: timer::config::Duty::Duty10Bit,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_hz(freq_hz),
    }
}

impl ToneOutput for LedcBuzzer<'_> {
    async fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), BuzzerError> {
        let mut lstimer = self.ledc.timer::<LowSpeed>(timer::Number::Timer0);
        lstimer
            .configure(timer_config(freq_hz))
            .map_err(|_| BuzzerError::Timer)?;
        self.freq_hz = freq_hz;

        let mut channel = self
            .ledc
            .channel(channel::Number::Channel0, self.pin.reborrow());
        channel
            .configure(channel::config::Config {
                timer: &lstimer,
                duty_pct: self.duty_pct,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| BuzzerError::Channel)?;

        Timer::after(Duration::from_millis(duration_ms as u64)).await;

        channel.set_duty(0).map_err(|_| BuzzerError::Channel)
    }

    fn no_tone(&mut self) -> Result<(), BuzzerError> {
        let mut lstimer = self.ledc.timer::<LowSpeed>(timer::Number::Timer0);
        lstimer
            .configure(timer_config(self.freq_hz))
            .map_err(|_| BuzzerError::Timer)?;

        let mut channel = self
            .ledc
            .channel(channel::Number::Channel0, self.pin.reborrow());
        channel
            .configure(channel::config::Config {
                timer: &lstimer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| BuzzerError::Channel)
    }
}
