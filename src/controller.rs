//! Controller Logic
//!
//! Producers of outbound telemetry and the state they own.
//! Implements the functional core of the remote: pure state transitions
//! in [`state`], async producer loops in [`buttons`] and [`sampler`].

pub mod buttons;
pub mod sampler;
pub mod state;
