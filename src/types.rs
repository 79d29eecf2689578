//! Shared types used across the remote firmware
//!
//! Range-checked newtypes for everything that travels on the wire. Each
//! constructor rejects out-of-range input, so a value that exists is valid.

use core::fmt;

/// Normalized joystick axis value in percent (-100..=100)
///
/// Zero is the neutral (dead zone) position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AxisValue(i8);

impl AxisValue {
    /// Full deflection magnitude
    pub const LIMIT: i8 = 100;

    /// Neutral position
    pub const CENTER: Self = Self(0);

    /// Full negative deflection
    pub const MIN: Self = Self(-Self::LIMIT);

    /// Full positive deflection
    pub const MAX: Self = Self(Self::LIMIT);

    /// Create from a percentage, returns None if out of range
    #[must_use]
    pub const fn new(percent: i8) -> Option<Self> {
        if percent >= -Self::LIMIT && percent <= Self::LIMIT {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Create from any integer, clamping into range
    #[must_use]
    pub const fn saturating(percent: i32) -> Self {
        let limit = Self::LIMIT as i32;
        let clamped = if percent > limit {
            limit
        } else if percent < -limit {
            -limit
        } else {
            percent
        };
        #[allow(clippy::cast_possible_truncation)]
        Self(clamped as i8)
    }

    /// Get the percentage
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Mirror around the center (-x)
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self(-self.0)
    }

    /// Check if the axis is at rest
    #[must_use]
    pub const fn is_centered(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisValue({}%)", self.0)
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AxisValue {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.0);
    }
}

/// Line thickness selected on the remote (1..=10)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Thickness(u8);

impl Thickness {
    /// Thinnest line
    pub const MIN: u8 = 1;

    /// Thickest line
    pub const MAX: u8 = 10;

    /// Create a thickness, returns None if out of range
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next thickness, wrapping from MAX back to MIN
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Debug for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thickness({})", self.0)
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Thickness {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.0);
    }
}

/// 24-bit RGB color, formatted on the wire as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Pure red
    pub const RED: Self = Self::rgb(0xff, 0x00, 0x00);

    /// Pure green
    pub const GREEN: Self = Self::rgb(0x00, 0xff, 0x00);

    /// Pure blue
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xff);

    /// Create from channel values
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (either case), returns None if malformed
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for HexColor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
    }
}

/// Fixed, non-empty ordered set of selectable colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [HexColor],
}

impl Palette {
    /// Create a palette, returns None for an empty set
    #[must_use]
    pub const fn new(colors: &'static [HexColor]) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Number of colors
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one color
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the last color
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.colors.len() - 1
    }

    /// Color at index, wrapping out-of-range indices
    #[must_use]
    pub const fn color_at(&self, index: usize) -> HexColor {
        self.colors[index % self.colors.len()]
    }

    /// Next index after `index`, wrapping past the last color to 0
    #[must_use]
    pub const fn next_index(&self, index: usize) -> usize {
        if index >= self.last_index() {
            0
        } else {
            index + 1
        }
    }
}

/// Radio module channel (1..=127 for HC-12 class modules)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadioChannel(u8);

impl RadioChannel {
    /// Lowest channel
    pub const MIN: u8 = 1;

    /// Highest channel
    pub const MAX: u8 = 127;

    /// Create a channel, returns None if out of range
    #[must_use]
    pub const fn new(channel: u8) -> Option<Self> {
        if channel >= Self::MIN && channel <= Self::MAX {
            Some(Self(channel))
        } else {
            None
        }
    }

    /// Get the channel number
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioChannel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CH{}", self.0);
    }
}

/// Joystick axis selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Axis {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::X => defmt::write!(f, "X"),
            Self::Y => defmt::write!(f, "Y"),
        }
    }
}
