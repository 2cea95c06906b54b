// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32 HAL
use esp_hal::clock::CpuClock;
use esp_hal::efuse::Efuse;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use co2_ampel::config::STARTUP_DELAY_MS;
use co2_ampel::tasks::{BringupPeripherals, bringup_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Embassy Runtime, wartet auf den seriellen
/// Monitor und startet dann den Bring-up Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32 Konfiguration: CPU auf maximale Taktfrequenz (240 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer Group 0)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    defmt::info!("CO2-Ampel bring-up starting");

    // Board kann nicht per DTR/RTS resetten: Monitor Zeit zum Verbinden geben
    Timer::after(Duration::from_millis(STARTUP_DELAY_MS)).await;

    let bringup = BringupPeripherals {
        led_builtin: peripherals.GPIO2,
        uart1: peripherals.UART1,
        co2_rx: peripherals.GPIO32,
        co2_tx: peripherals.GPIO26,
        led_data: peripherals.GPIO23,
        rmt: peripherals.RMT,
        buzzer: peripherals.GPIO19,
        ledc: peripherals.LEDC,
        mac: Efuse::mac_address(),
    };

    spawner.spawn(bringup_task(bringup)).unwrap();

    // Main-Loop: schläft (die Suite läuft im Task und nur einmal)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
