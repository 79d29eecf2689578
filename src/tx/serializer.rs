//! Serialized radio access
//!
//! Producers call [`TxSerializer::send`] concurrently. The async mutex is
//! held from the eligibility check until the transport has taken the
//! bytes, so the wait, the gate update and the transmission form one step
//! with respect to every other producer.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use super::clock::Clock;
use super::gate::SerializerGate;
use crate::config::TX_COOLDOWN_MS;
use crate::link::RadioTransport;
use crate::protocol::Message;

/// Serializer configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxConfig {
    /// Minimum spacing between transmissions
    pub cooldown_ms: u64,
}

impl TxConfig {
    /// Board defaults
    pub const DEFAULT: Self = Self {
        cooldown_ms: TX_COOLDOWN_MS,
    };
}

impl Default for TxConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Transmission counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxStats {
    /// Messages handed to the transport successfully
    pub sent: u32,
    /// Messages the transport rejected
    pub failed: u32,
}

struct Channel<T> {
    gate: SerializerGate,
    transport: T,
    stats: TxStats,
}

/// Rate-limited, mutually exclusive access to one radio
pub struct TxSerializer<M: RawMutex, C, T> {
    clock: C,
    channel: Mutex<M, Channel<T>>,
}

impl<M, C, T> TxSerializer<M, C, T>
where
    M: RawMutex,
    C: Clock,
    T: RadioTransport,
{
    /// Create a serializer with an open gate
    pub fn new(clock: C, transport: T, config: TxConfig) -> Self {
        Self {
            clock,
            channel: Mutex::new(Channel {
                gate: SerializerGate::new(config.cooldown_ms),
                transport,
                stats: TxStats::default(),
            }),
        }
    }

    /// Time source shared with producers
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Wait for the gate, claim it and transmit `message`
    ///
    /// Transport failures are logged and the message is dropped.
    pub async fn send(&self, message: &Message) {
        let mut channel = self.channel.lock().await;

        loop {
            match channel.gate.try_acquire(self.clock.now_ms()) {
                Ok(()) => break,
                Err(ready_at) => self.clock.sleep_until_ms(ready_at).await,
            }
        }

        let text = message.encode();
        match channel.transport.send_str(&text).await {
            Ok(()) => {
                channel.stats.sent = channel.stats.sent.wrapping_add(1);
                log_debug!("tx {}", text.as_str());
            }
            Err(e) => {
                channel.stats.failed = channel.stats.failed.wrapping_add(1);
                log_warn!("tx dropped {}: {}", text.as_str(), e);
            }
        }
    }

    /// Snapshot of the transmission counters
    pub async fn stats(&self) -> TxStats {
        self.channel.lock().await.stats
    }

    /// Earliest time the next transmission may begin
    pub async fn ready_at_ms(&self) -> u64 {
        self.channel.lock().await.gate.ready_at_ms()
    }
}
