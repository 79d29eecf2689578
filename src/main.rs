//! Pointer Remote Main Application
//!
//! Entry point for the STM32G474-based joystick remote firmware.
//! Initializes hardware, spawns one task per button and runs the
//! joystick sampling loop as the idle activity.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pointer_remote::controller::buttons::run_button;
use pointer_remote::controller::sampler::{Sampler, SamplerConfig};
use pointer_remote::controller::state::{shared, SharedDeviceState};
use pointer_remote::hal::adc::JoystickAdc;
use pointer_remote::link::uart::UartRadio;
use pointer_remote::prelude::*;
use pointer_remote::tx::clock::EmbassyClock;
use pointer_remote::tx::serializer::TxConfig;

type Radio = UartRadio<UartTx<'static, Async>, Output<'static>, Delay>;
type Serializer = TxSerializer<CriticalSectionRawMutex, EmbassyClock, Radio>;

const INITIAL_STATE: DeviceState = match (default_thickness(), default_palette()) {
    (Some(thickness), Some(palette)) => DeviceState::new(thickness, palette),
    _ => panic!("invalid default thickness or palette"),
};

const CHANNEL: RadioChannel = match radio_channel() {
    Some(channel) => channel,
    None => panic!("invalid radio channel"),
};

static DEVICE_STATE: SharedDeviceState<CriticalSectionRawMutex> = shared(INITIAL_STATE);
static SERIALIZER: StaticCell<Serializer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pointer Remote Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Radio module on USART1 TX (PA9), SET on PB7 (idle high = transparent mode)
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = RADIO_BAUD_RATE;
    let uart = UartTx::new(p.USART1, p.PA9, p.DMA1_CH1, uart_config).unwrap();
    let set_pin = Output::new(p.PB7, Level::High, Speed::Low);

    let mut radio = UartRadio::new(uart, set_pin, Delay);
    if let Err(e) = radio.begin(CHANNEL).await {
        defmt::panic!("radio setup failed: {}", e);
    }

    let tx: &'static Serializer =
        SERIALIZER.init(TxSerializer::new(EmbassyClock, radio, TxConfig::DEFAULT));

    // Buttons are active high with pull-downs
    let thickness = ExtiInput::new(p.PB4, p.EXTI4, Pull::Down);
    let color = ExtiInput::new(p.PB5, p.EXTI5, Pull::Down);
    let reset = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);

    spawner.spawn(button_task(ButtonEvent::ThicknessUp, thickness, tx)).unwrap();
    spawner.spawn(button_task(ButtonEvent::NextColor, color, tx)).unwrap();
    spawner.spawn(button_task(ButtonEvent::Reset, reset, tx)).unwrap();

    info!("Tasks spawned, entering sampling loop");

    // Joystick on PA0 (ADC1_IN1) and PA1 (ADC1_IN2)
    let joystick = JoystickAdc::new(p.ADC1, p.PA0, p.PA1);
    let mut sampler = Sampler::new(joystick, SamplerConfig::board());
    sampler.run(tx).await
}

/// Button task - one instance per button
#[embassy_executor::task(pool_size = 3)]
async fn button_task(event: ButtonEvent, input: ExtiInput<'static>, tx: &'static Serializer) {
    info!("button task {} started", event);
    run_button(event, input, BUTTON_DEBOUNCE_MS, &DEVICE_STATE, tx).await
}
