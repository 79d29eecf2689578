//! Hardware Abstraction Layer
//!
//! Provides safe abstractions over STM32G474 peripherals used by the remote.
//! This module isolates hardware-specific code behind the crate's
//! platform-agnostic traits.

pub mod adc;
