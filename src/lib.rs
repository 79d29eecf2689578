//! Pointer Remote Firmware Library
//!
//! A handheld remote for a drawing base station: a two-axis analog stick
//! steers the pointer and three push buttons change line thickness, cycle
//! the line color and clear the canvas. Everything the remote does ends up
//! as one short text message on a UART radio module.
//!
//! # Message flow
//!
//! ```text
//!  ADC x/y ──► Sampler (50 ms) ──────────────────► s <x> <y> ──┐
//!                                                              │
//!  EXTI x3 ──► run_button ──► DeviceState ──► t <n>          ──┤
//!              (debounce)     (thickness,     c #rrggbb        │
//!                              color)         reset            │
//!                                                              ▼
//!                                   TxSerializer (100 ms gate) ──► UartRadio
//! ```
//!
//! The sampler and each button run as separate embassy tasks. They never
//! touch the radio directly: [`tx::serializer::TxSerializer`] owns it, lets
//! one message through at a time and keeps consecutive transmissions at
//! least the cooldown apart.
//!
//! Hardware sits behind small traits ([`controller::sampler::AnalogInput`],
//! [`link::RadioTransport`], [`tx::clock::Clock`] and the embedded-hal pin
//! traits), so with `--no-default-features --features std` the whole
//! library runs on the host against mocks.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(async_fn_in_trait)]

#[macro_use]
mod logging;

/// Hardware Abstraction Layer
///
/// Board-specific wrappers over STM32G474 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Analog Signal Normalization
///
/// Dead zone and response curve mapping from raw ADC counts to percent.
pub mod normalize;

/// Controller Logic
///
/// Device state, button edge handlers and the sampling loop.
pub mod controller;

/// Transmission Serializer
///
/// Shared cooldown gate that orders every outbound radio message.
pub mod tx;

/// Radio Link
///
/// Transport trait and the UART radio module driver.
pub mod link;

/// Wire Protocol
///
/// Telemetry message encoding and base-station decoding.
pub mod protocol;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Common imports for the firmware binary
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Board constants, domain types and the handful of items `main` wires up.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::controller::state::{ButtonEvent, DeviceState};
    pub use crate::protocol::Message;
    pub use crate::tx::serializer::TxSerializer;
}
