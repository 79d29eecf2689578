//! Time source
//!
//! Millisecond clock with async sleeping, implemented on target by
//! embassy-time and in host tests by a virtual clock.

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;

    /// Suspend until `deadline_ms` (returns at once if already passed)
    async fn sleep_until_ms(&self, deadline_ms: u64);

    /// Suspend for `duration_ms`
    async fn sleep_ms(&self, duration_ms: u64) {
        self.sleep_until_ms(self.now_ms().saturating_add(duration_ms))
            .await;
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    async fn sleep_until_ms(&self, deadline_ms: u64) {
        (**self).sleep_until_ms(deadline_ms).await;
    }

    async fn sleep_ms(&self, duration_ms: u64) {
        (**self).sleep_ms(duration_ms).await;
    }
}

/// embassy-time system clock
#[cfg(feature = "embedded")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embedded")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    async fn sleep_until_ms(&self, deadline_ms: u64) {
        embassy_time::Timer::at(embassy_time::Instant::from_millis(deadline_ms)).await;
    }

    async fn sleep_ms(&self, duration_ms: u64) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(duration_ms)).await;
    }
}
