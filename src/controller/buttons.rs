//! Button Edge Handlers
//!
//! One task per button waits for rising edges, applies the button's
//! [`ButtonEvent`] to the shared device state and transmits the result.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::digital::Wait;

use super::state::{apply_shared, ButtonEvent, SharedDeviceState};
use crate::link::RadioTransport;
use crate::tx::clock::Clock;
use crate::tx::serializer::TxSerializer;

/// Rejects edges that follow an accepted edge too closely
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFilter {
    window_ms: u64,
    last_ms: Option<u64>,
}

impl EdgeFilter {
    /// Create a filter (a zero window accepts every edge)
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_ms: None,
        }
    }

    /// Decide whether an edge at `now_ms` counts as a new press
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Apply `event` and transmit the resulting message
pub async fn handle_edge<SM, M, C, T>(
    event: ButtonEvent,
    state: &SharedDeviceState<SM>,
    tx: &TxSerializer<M, C, T>,
) where
    SM: RawMutex,
    M: RawMutex,
    C: Clock,
    T: RadioTransport,
{
    let message = apply_shared(state, event);
    tx.send(&message).await;
}

/// Button task body: handle rising edges on `input` forever
pub async fn run_button<I, SM, M, C, T>(
    event: ButtonEvent,
    mut input: I,
    debounce_ms: u64,
    state: &SharedDeviceState<SM>,
    tx: &TxSerializer<M, C, T>,
) -> !
where
    I: Wait,
    SM: RawMutex,
    M: RawMutex,
    C: Clock,
    T: RadioTransport,
{
    let mut filter = EdgeFilter::new(debounce_ms);
    loop {
        if input.wait_for_rising_edge().await.is_err() {
            log_warn!("button edge wait failed");
            // A persistent fault must not spin the executor
            tx.clock().sleep_ms(debounce_ms.max(1)).await;
            continue;
        }
        if filter.accept(tx.clock().now_ms()) {
            handle_edge(event, state, tx).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_always_accepted() {
        let mut filter = EdgeFilter::new(50);
        assert!(filter.accept(0));
    }

    #[test]
    fn bounces_inside_window_rejected() {
        let mut filter = EdgeFilter::new(50);
        assert!(filter.accept(1_000));
        assert!(!filter.accept(1_010));
        assert!(!filter.accept(1_049));
        assert!(filter.accept(1_050));
    }

    #[test]
    fn rejected_edges_do_not_extend_window() {
        let mut filter = EdgeFilter::new(50);
        assert!(filter.accept(0));
        assert!(!filter.accept(40));
        assert!(filter.accept(60));
    }

    #[test]
    fn zero_window_accepts_everything() {
        let mut filter = EdgeFilter::new(0);
        assert!(filter.accept(5));
        assert!(filter.accept(5));
    }
}
