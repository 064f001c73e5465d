//! Speed unit conversion and speedometer needle math.
//!
//! Speeds arrive in meters per second. The displayed value is the speed in
//! the selected [`SpeedUnit`], rounded to the nearest integer. The needle
//! sweeps half a turn: -180 degrees at zero, 0 degrees at the unit's
//! full-scale value.
//!
//! The gauge fraction is capped at 1.0 but not floored at 0.0, so a
//! negative speed turns the needle past its rest position.
//!
//! # Example
//!
//! ```rust
//! use vehicle_hud::{SpeedReading, SpeedUnit};
//!
//! let reading = SpeedReading::from_mps(100.0, SpeedUnit::Kmh);
//! assert_eq!(reading.display, 360);
//! assert_eq!(reading.fraction, 1.0);
//! assert_eq!(reading.rotation_deg, 0.0);
//! ```

/// Needle angle at zero speed, in degrees.
pub const NEEDLE_REST_DEG: f64 = -180.0;

/// Needle sweep from rest to full scale, in degrees.
pub const NEEDLE_SWEEP_DEG: f64 = 180.0;

/// Unit the speedometer displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "u8"))]
pub enum SpeedUnit {
    /// Kilometers per hour.
    #[default]
    Kmh,
    /// Miles per hour.
    Mph,
    /// Nautical miles per hour.
    Knots,
}

impl SpeedUnit {
    /// Multiplier from meters per second to this unit.
    #[inline]
    pub const fn factor(&self) -> f64 {
        match self {
            SpeedUnit::Kmh => 3.6,
            SpeedUnit::Mph => 2.236936,
            SpeedUnit::Knots => 1.943844,
        }
    }

    /// Displayed value at which the needle reaches full deflection.
    #[inline]
    pub const fn max_scale(&self) -> f64 {
        match self {
            SpeedUnit::Kmh => 300.0,
            SpeedUnit::Mph => 200.0,
            SpeedUnit::Knots => 150.0,
        }
    }

    /// Maps the host's numeric mode: 0 km/h, 1 mph, 2 knots.
    ///
    /// Unknown modes fall back to km/h.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            1 => SpeedUnit::Mph,
            2 => SpeedUnit::Knots,
            _ => SpeedUnit::Kmh,
        }
    }

    /// Numeric mode of this unit.
    #[inline]
    pub const fn as_raw(&self) -> u8 {
        match self {
            SpeedUnit::Kmh => 0,
            SpeedUnit::Mph => 1,
            SpeedUnit::Knots => 2,
        }
    }

    /// Short unit label.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Mph => "mph",
            SpeedUnit::Knots => "kn",
        }
    }
}

impl From<i64> for SpeedUnit {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<SpeedUnit> for u8 {
    fn from(unit: SpeedUnit) -> Self {
        unit.as_raw()
    }
}

/// One speed sample converted for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedReading {
    /// Rounded speed in the selected unit.
    pub display: i32,
    /// `display / max_scale`, capped at 1.0 and not floored.
    pub fraction: f64,
    /// Needle rotation in degrees.
    pub rotation_deg: f64,
}

impl SpeedReading {
    /// Converts a speed in m/s.
    ///
    /// Rounding is half away from zero. Values outside the `i32` range
    /// saturate and NaN displays as 0.
    pub fn from_mps(speed_mps: f64, unit: SpeedUnit) -> Self {
        let display = (speed_mps * unit.factor()).round() as i32;
        let fraction = (display as f64 / unit.max_scale()).min(1.0);
        Self {
            display,
            fraction,
            rotation_deg: needle_rotation(fraction),
        }
    }
}

/// Needle angle for a gauge fraction.
#[inline]
pub fn needle_rotation(fraction: f64) -> f64 {
    fraction * NEEDLE_SWEEP_DEG + NEEDLE_REST_DEG
}
