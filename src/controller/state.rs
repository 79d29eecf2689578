//! Device State Machine
//!
//! Holds the settings the buttons cycle through (line thickness and color)
//! and turns button events into outbound messages.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::protocol::Message;
use crate::types::{HexColor, Palette, Thickness};

/// Button press triggering a state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Cycle line thickness 1..=10
    ThicknessUp,
    /// Cycle to the next palette color
    NextColor,
    /// Ask the base station to clear the canvas
    Reset,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ButtonEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ThicknessUp => defmt::write!(f, "ThicknessUp"),
            Self::NextColor => defmt::write!(f, "NextColor"),
            Self::Reset => defmt::write!(f, "Reset"),
        }
    }
}

/// Process-wide remote settings
///
/// Each field is changed by exactly one button; transitions never leave a
/// field out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceState {
    thickness: Thickness,
    color_index: usize,
    palette: Palette,
}

impl DeviceState {
    /// Create state with the given thickness and the first palette color
    #[must_use]
    pub const fn new(thickness: Thickness, palette: Palette) -> Self {
        Self {
            thickness,
            color_index: 0,
            palette,
        }
    }

    /// Current line thickness
    #[must_use]
    pub const fn thickness(&self) -> Thickness {
        self.thickness
    }

    /// Current palette index
    #[must_use]
    pub const fn color_index(&self) -> usize {
        self.color_index
    }

    /// Current color
    #[must_use]
    pub const fn color(&self) -> HexColor {
        self.palette.color_at(self.color_index)
    }

    /// Palette in use
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Advance thickness, wrapping 10 -> 1
    pub fn bump_thickness(&mut self) -> Thickness {
        self.thickness = self.thickness.next();
        self.thickness
    }

    /// Advance color, wrapping past the last entry to 0
    pub fn next_color(&mut self) -> HexColor {
        self.color_index = self.palette.next_index(self.color_index);
        self.color()
    }

    /// Apply a button event, returning the message announcing the result
    pub fn apply(&mut self, event: ButtonEvent) -> Message {
        match event {
            ButtonEvent::ThicknessUp => Message::Thickness(self.bump_thickness()),
            ButtonEvent::NextColor => Message::Color(self.next_color()),
            ButtonEvent::Reset => Message::Reset,
        }
    }
}

/// `DeviceState` shared between button tasks
pub type SharedDeviceState<M> = Mutex<M, RefCell<DeviceState>>;

/// Wrap state for sharing between tasks
#[must_use]
pub const fn shared<M: RawMutex>(state: DeviceState) -> SharedDeviceState<M> {
    Mutex::new(RefCell::new(state))
}

/// Apply an event inside one critical section
pub fn apply_shared<M: RawMutex>(state: &SharedDeviceState<M>, event: ButtonEvent) -> Message {
    state.lock(|cell| cell.borrow_mut().apply(event))
}
