//! Cooldown gate
//!
//! Tracks the earliest instant the radio may carry the next message.

/// Shared "ready at" token for the radio channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializerGate {
    /// Earliest time (ms) the next transmission may begin
    ready_at_ms: u64,
    /// Spacing enforced after each transmission
    cooldown_ms: u64,
}

impl SerializerGate {
    /// Create an open gate
    #[must_use]
    pub const fn new(cooldown_ms: u64) -> Self {
        Self {
            ready_at_ms: 0,
            cooldown_ms,
        }
    }

    /// Earliest time the next transmission may begin
    #[must_use]
    pub const fn ready_at_ms(&self) -> u64 {
        self.ready_at_ms
    }

    /// Configured cooldown
    #[must_use]
    pub const fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Check if a transmission may begin at `now_ms`
    #[must_use]
    pub const fn is_open(&self, now_ms: u64) -> bool {
        now_ms >= self.ready_at_ms
    }

    /// Time left until the gate opens
    #[must_use]
    pub const fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.ready_at_ms.saturating_sub(now_ms)
    }

    /// Claim the channel at `now_ms`
    ///
    /// On success the gate is closed until `now_ms + cooldown`. If the gate
    /// is still closed, returns `Err(ready_at_ms)` and leaves it unchanged.
    pub fn try_acquire(&mut self, now_ms: u64) -> Result<(), u64> {
        if self.is_open(now_ms) {
            self.ready_at_ms = now_ms.saturating_add(self.cooldown_ms);
            Ok(())
        } else {
            Err(self.ready_at_ms)
        }
    }
}
