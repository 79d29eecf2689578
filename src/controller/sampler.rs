//! Joystick Sampling Loop
//!
//! Periodically reads both joystick axes and streams their position.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::config::{self, SAMPLE_INTERVAL_MS};
use crate::link::RadioTransport;
use crate::normalize::Normalizer;
use crate::protocol::Message;
use crate::tx::clock::Clock;
use crate::tx::serializer::TxSerializer;
use crate::types::{Axis, AxisValue};

/// Analog joystick collaborator
pub trait AnalogInput {
    /// Take one synchronous sample of `axis` in `0..=max_raw`
    fn read(&mut self, axis: Axis) -> u16;
}

/// Per-axis normalization settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Raw to percent mapping
    pub normalizer: Normalizer,
    /// Negate the normalized value
    pub inverted: bool,
}

impl AxisConfig {
    /// Non-inverted axis
    #[must_use]
    pub const fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            inverted: false,
        }
    }

    /// Same axis with inversion set
    #[must_use]
    pub const fn with_inverted(self, inverted: bool) -> Self {
        Self { inverted, ..self }
    }

    /// Normalize a raw sample for this axis
    #[must_use]
    pub fn apply(&self, raw: u16) -> AxisValue {
        let value = self.normalizer.apply(raw);
        if self.inverted {
            value.inverted()
        } else {
            value
        }
    }
}

/// Sampling loop configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Horizontal axis
    pub x: AxisConfig,
    /// Vertical axis
    pub y: AxisConfig,
    /// Pause after each transmitted sample
    pub interval_ms: u64,
}

impl SamplerConfig {
    /// Both axes with the same normalizer, no inversion
    #[must_use]
    pub const fn new(normalizer: Normalizer, interval_ms: u64) -> Self {
        Self {
            x: AxisConfig::new(normalizer),
            y: AxisConfig::new(normalizer),
            interval_ms,
        }
    }

    /// Board wiring from `config`
    #[must_use]
    pub const fn board() -> Self {
        let normalizer = config::joystick_normalizer();
        Self {
            x: AxisConfig::new(normalizer).with_inverted(config::INVERT_X_AXIS),
            y: AxisConfig::new(normalizer).with_inverted(config::INVERT_Y_AXIS),
            interval_ms: SAMPLE_INTERVAL_MS,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(config::joystick_normalizer(), SAMPLE_INTERVAL_MS)
    }
}

/// Periodic joystick producer
pub struct Sampler<A> {
    input: A,
    config: SamplerConfig,
}

impl<A: AnalogInput> Sampler<A> {
    /// Create a sampler over an analog input
    pub fn new(input: A, config: SamplerConfig) -> Self {
        Self { input, config }
    }

    /// Read both axes into a position message
    pub fn sample(&mut self) -> Message {
        let x = self.config.x.apply(self.input.read(Axis::X));
        let y = self.config.y.apply(self.input.read(Axis::Y));
        Message::Position { x, y }
    }

    /// One tick: sample, transmit, then sleep for the poll interval
    pub async fn tick<M, C, T>(&mut self, tx: &TxSerializer<M, C, T>)
    where
        M: RawMutex,
        C: Clock,
        T: RadioTransport,
    {
        let message = self.sample();
        tx.send(&message).await;
        tx.clock().sleep_ms(self.config.interval_ms).await;
    }

    /// Sample forever
    pub async fn run<M, C, T>(&mut self, tx: &TxSerializer<M, C, T>) -> !
    where
        M: RawMutex,
        C: Clock,
        T: RadioTransport,
    {
        log_info!("sampling every {} ms", self.config.interval_ms);
        loop {
            self.tick(tx).await;
        }
    }

    /// Release the analog input
    pub fn release(self) -> A {
        self.input
    }
}
