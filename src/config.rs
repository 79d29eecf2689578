//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the joystick remote.
//! All pin mappings, timing parameters, and protocol settings are centralized here.

use crate::normalize::{DeadZone, Normalizer, ResponseCurve};
use crate::types::{HexColor, Palette, RadioChannel, Thickness};

/// ADC resolution in bits (10-bit mode on the STM32G474 ADC)
pub const ADC_RESOLUTION_BITS: u32 = 10;

/// Largest raw ADC sample
pub const ADC_MAX_RAW: u16 = (1 << ADC_RESOLUTION_BITS) - 1;

/// Lower edge of the joystick dead zone in percent of full scale
pub const DEADZONE_LOW_PCT: f32 = 40.0;

/// Upper edge of the joystick dead zone in percent of full scale
pub const DEADZONE_HIGH_PCT: f32 = 60.0;

/// Response curve applied outside the dead zone
pub const RESPONSE_CURVE: ResponseCurve = ResponseCurve::Linear;

/// Invert the X axis after normalization
pub const INVERT_X_AXIS: bool = false;

/// Invert the Y axis after normalization (stick forward moves the pointer up)
pub const INVERT_Y_AXIS: bool = true;

/// Minimum spacing between two radio transmissions in milliseconds
pub const TX_COOLDOWN_MS: u64 = 100;

/// Pause between joystick samples in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 50;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Radio module channel
pub const RADIO_CHANNEL: u8 = 12;

/// Radio module UART baud rate
pub const RADIO_BAUD_RATE: u32 = 9_600;

/// Time to hold SET low before sending an AT command
pub const RADIO_CMD_ENTER_MS: u32 = 40;

/// Time for the radio module to apply an AT command
pub const RADIO_CMD_APPLY_MS: u32 = 80;

/// Maximum encoded message length in bytes
pub const MAX_MESSAGE_LEN: usize = 16;

/// Maximum bridge line length in bytes (address, space, message)
pub const MAX_BRIDGE_LINE_LEN: usize = 64;

/// Line thickness at power-up
pub const DEFAULT_THICKNESS: u8 = 2;

/// Selectable pointer colors, in button order
pub const COLORS: &[HexColor] = &[HexColor::RED, HexColor::GREEN, HexColor::BLUE];

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the remote board

    /// Joystick X potentiometer (ADC1_IN1)
    pub const JOYSTICK_X: &str = "PA0";

    /// Joystick Y potentiometer (ADC1_IN2)
    pub const JOYSTICK_Y: &str = "PA1";

    /// Thickness button (active high, EXTI4)
    pub const BUTTON_THICKNESS: &str = "PB4";

    /// Color button (active high, EXTI5)
    pub const BUTTON_COLOR: &str = "PB5";

    /// Reset button (active high, EXTI13)
    pub const BUTTON_RESET: &str = "PC13";

    /// Radio module UART TX (USART1)
    pub const RADIO_TX: &str = "PA9";

    /// Radio module SET pin (low = AT command mode)
    pub const RADIO_SET: &str = "PB7";
}

/// Build the power-up line thickness
#[must_use]
pub const fn default_thickness() -> Option<Thickness> {
    Thickness::new(DEFAULT_THICKNESS)
}

/// Build the color palette
#[must_use]
pub const fn default_palette() -> Option<Palette> {
    Palette::new(COLORS)
}

/// Build the radio channel
#[must_use]
pub const fn radio_channel() -> Option<RadioChannel> {
    RadioChannel::new(RADIO_CHANNEL)
}

/// Build the normalizer used for both joystick axes
#[must_use]
pub const fn joystick_normalizer() -> Normalizer {
    Normalizer::new(
        ADC_MAX_RAW,
        DeadZone::from_percent(DEADZONE_LOW_PCT, DEADZONE_HIGH_PCT),
        RESPONSE_CURVE,
    )
}
