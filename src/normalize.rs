//! Analog Signal Normalization
//!
//! Maps raw joystick ADC counts to a signed percentage with a neutral dead
//! zone around the rest position.
//!
//! # Response curves
//!
//! Outside the dead zone the deflection from the 50% midpoint is scaled to
//! ±100. The linear curve uses the deflection directly; the quadratic curve
//! squares its magnitude first, giving finer control near rest and a steeper
//! response at full deflection:
//!
//! ```text
//!   out
//!  +100 ┤                          ●
//!       │                       ╱ ·
//!       │                    ╱  ·       ╱ linear
//!       │                 ╱  ·          · quadratic
//!     0 ┼────────[=====]───────────── pct
//!       0        40   60             100
//! ```
//!
//! All results are rounded half away from zero.

#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::config::ADC_MAX_RAW;
use crate::types::AxisValue;

/// Rest position in percent of full scale
const MID_PCT: f32 = 50.0;

/// Response curve outside the dead zone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResponseCurve {
    /// Output proportional to deflection
    #[default]
    Linear,
    /// Output proportional to deflection squared
    Quadratic,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ResponseCurve {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Linear => defmt::write!(f, "Linear"),
            Self::Quadratic => defmt::write!(f, "Quadratic"),
        }
    }
}

/// Closed interval of the input range that maps to zero
///
/// Bounds are kept in the unit they were given in (percent or fraction of
/// full scale) and samples are compared in that same unit, so a sample that
/// lands exactly on a bound is always inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeadZone {
    low: f32,
    high: f32,
    /// Full scale in the bounds' unit (100.0 for percent, 1.0 for fraction)
    full_scale: f32,
}

impl DeadZone {
    /// Create from percentages of full scale (e.g. 40.0, 60.0)
    #[must_use]
    pub const fn from_percent(low_pct: f32, high_pct: f32) -> Self {
        Self {
            low: low_pct,
            high: high_pct,
            full_scale: 100.0,
        }
    }

    /// Create from fractions of full scale (e.g. 0.4, 0.6)
    #[must_use]
    pub const fn from_fraction(low: f32, high: f32) -> Self {
        Self {
            low,
            high,
            full_scale: 1.0,
        }
    }

    /// Lower bound in percent
    #[must_use]
    pub fn low_pct(&self) -> f32 {
        self.low * (100.0 / self.full_scale)
    }

    /// Upper bound in percent
    #[must_use]
    pub fn high_pct(&self) -> f32 {
        self.high * (100.0 / self.full_scale)
    }

    /// Check if `raw` out of `max_raw` lies inside the zone (bounds included)
    #[must_use]
    pub fn contains(&self, raw: u16, max_raw: u16) -> bool {
        if max_raw == 0 {
            return true;
        }
        let raw = raw.min(max_raw);
        // Multiply first so exact ratios (e.g. 160/400 of 100) stay exact
        let position = (f32::from(raw) * self.full_scale) / f32::from(max_raw);
        position >= self.low && position <= self.high
    }
}

/// Raw sample to [`AxisValue`] mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    max_raw: u16,
    dead_zone: DeadZone,
    curve: ResponseCurve,
}

impl Normalizer {
    /// Create a normalizer for samples in `0..=max_raw`
    #[must_use]
    pub const fn new(max_raw: u16, dead_zone: DeadZone, curve: ResponseCurve) -> Self {
        Self {
            max_raw,
            dead_zone,
            curve,
        }
    }

    /// Same range and dead zone with a different curve
    #[must_use]
    pub const fn with_curve(self, curve: ResponseCurve) -> Self {
        Self { curve, ..self }
    }

    /// Largest raw sample
    #[must_use]
    pub const fn max_raw(&self) -> u16 {
        self.max_raw
    }

    /// Configured dead zone
    #[must_use]
    pub const fn dead_zone(&self) -> DeadZone {
        self.dead_zone
    }

    /// Configured response curve
    #[must_use]
    pub const fn curve(&self) -> ResponseCurve {
        self.curve
    }

    /// Sample position in percent of full scale, clamped to 0..=100
    #[must_use]
    pub fn percent(&self, raw: u16) -> f32 {
        if self.max_raw == 0 {
            return MID_PCT;
        }
        let raw = raw.min(self.max_raw);
        (f32::from(raw) * 100.0) / f32::from(self.max_raw)
    }

    /// Normalize a raw sample
    #[must_use]
    pub fn apply(&self, raw: u16) -> AxisValue {
        if self.dead_zone.contains(raw, self.max_raw) {
            return AxisValue::CENTER;
        }
        let pct = self.percent(raw);

        // Deflection from rest, -1.0..=1.0
        let deflection = (pct - MID_PCT) / MID_PCT;
        let scaled = match self.curve {
            ResponseCurve::Linear => (pct - MID_PCT) * (100.0 / MID_PCT),
            ResponseCurve::Quadratic => {
                let magnitude = deflection.abs();
                let squared = magnitude * magnitude * 100.0;
                if deflection < 0.0 {
                    -squared
                } else {
                    squared
                }
            }
        };

        AxisValue::saturating(round_half_away(scaled))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        crate::config::joystick_normalizer()
    }
}

/// Round to nearest integer, ties away from zero
#[allow(clippy::cast_possible_truncation)]
fn round_half_away(value: f32) -> i32 {
    // std f32::round and micromath's F32Ext::round both round ties away from zero
    value.round() as i32
}

/// Linear normalization of a default-range sample with percent thresholds
#[must_use]
pub fn normalize_linear(raw: u16, deadzone_low_pct: f32, deadzone_high_pct: f32) -> AxisValue {
    Normalizer::new(
        ADC_MAX_RAW,
        DeadZone::from_percent(deadzone_low_pct, deadzone_high_pct),
        ResponseCurve::Linear,
    )
    .apply(raw)
}

/// Quadratic normalization of a default-range sample with fractional thresholds
#[must_use]
pub fn normalize_quadratic(raw: u16, deadzone_low_frac: f32, deadzone_high_frac: f32) -> AxisValue {
    Normalizer::new(
        ADC_MAX_RAW,
        DeadZone::from_fraction(deadzone_low_frac, deadzone_high_frac),
        ResponseCurve::Quadratic,
    )
    .apply(raw)
}
