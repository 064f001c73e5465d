//! Tiered fill gauges.
//!
//! A tiered gauge is a fill bar whose width follows a normalized value and
//! whose style class changes at fixed percentage thresholds. Fuel and
//! vehicle health are both tiered gauges that differ only in their tables.
//!
//! # Evaluation
//!
//! 1. The input is clamped to `[0.0, 1.0]` (NaN counts as 0.0).
//! 2. The fill width is `value * 100` percent.
//! 3. The active tier is the first tier, in ascending order, whose
//!    inclusive upper bound is at or above the value. Bounds are compared
//!    as fractions (`max_pct / 100`), so an input of exactly `0.15` sits on
//!    a 15% bound. Above the last bound no tier is active.
//!
//! # Example
//!
//! ```rust
//! use vehicle_hud::gauge::TierTable;
//!
//! let fuel = TierTable::fuel();
//!
//! let level = fuel.evaluate(0.25);
//! assert_eq!(level.percent, 25.0);
//! assert_eq!(level.class(&fuel), Some("fuel-low"));
//!
//! assert_eq!(fuel.evaluate(0.9).class(&fuel), None);
//! ```

use heapless::Vec as HVec;

use crate::config::{short_string, ShortString};

/// Maximum tiers per gauge.
pub const MAX_TIERS: usize = 4;

// =============================================================================
// Default thresholds
// =============================================================================

/// Fuel at or below this percentage is critical.
pub const FUEL_CRITICAL_PCT: f64 = 15.0;

/// Fuel at or below this percentage is low.
pub const FUEL_LOW_PCT: f64 = 30.0;

/// Health at or below this percentage is critical.
pub const HEALTH_CRITICAL_PCT: f64 = 30.0;

/// Health at or below this percentage is damaged.
pub const HEALTH_DAMAGED_PCT: f64 = 60.0;

const _: () = assert!(FUEL_CRITICAL_PCT < FUEL_LOW_PCT);
const _: () = assert!(HEALTH_CRITICAL_PCT < HEALTH_DAMAGED_PCT);

/// One styling tier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tier {
    /// Inclusive upper bound in percent.
    pub max_pct: f64,
    /// Class applied while this tier is active.
    pub class: ShortString,
}

impl Tier {
    /// Creates a tier.
    pub fn new(max_pct: f64, class: &str) -> Self {
        Self {
            max_pct,
            class: short_string(class),
        }
    }
}

/// Ordered thresholds for one gauge.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    tiers: HVec<Tier, MAX_TIERS>,
}

impl TierTable {
    /// Creates an empty table: the gauge never applies a tier class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tier. Tiers must be pushed in ascending order.
    ///
    /// Tiers beyond [`MAX_TIERS`] are dropped.
    pub fn with_tier(mut self, max_pct: f64, class: &str) -> Self {
        let _ = self.tiers.push(Tier::new(max_pct, class));
        self
    }

    /// Default fuel table: critical at 15%, low at 30%.
    pub fn fuel() -> Self {
        Self::new()
            .with_tier(FUEL_CRITICAL_PCT, "fuel-critical")
            .with_tier(FUEL_LOW_PCT, "fuel-low")
    }

    /// Default health table: critical at 30%, damaged at 60%.
    pub fn health() -> Self {
        Self::new()
            .with_tier(HEALTH_CRITICAL_PCT, "health-critical")
            .with_tier(HEALTH_DAMAGED_PCT, "health-damaged")
    }

    /// All tiers in ascending order.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Whether bounds are strictly ascending and every class is non-empty.
    pub fn is_valid(&self) -> bool {
        self.tiers.iter().all(|t| !t.class.is_empty() && !t.max_pct.is_nan())
            && self.tiers.windows(2).all(|w| w[0].max_pct < w[1].max_pct)
    }

    /// Evaluates a normalized input.
    pub fn evaluate(&self, value: f64) -> GaugeLevel {
        let fraction = clamp_unit(value);
        // `0.15 * 100.0` overshoots 15.0, `15.0 / 100.0` is exactly 0.15.
        let tier = self
            .tiers
            .iter()
            .position(|t| fraction <= t.max_pct / 100.0);
        GaugeLevel {
            percent: fraction * 100.0,
            tier,
        }
    }
}

/// Result of evaluating a tiered gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeLevel {
    /// Fill width in percent, within `[0.0, 100.0]`.
    pub percent: f64,
    /// Index of the active tier, if any.
    pub tier: Option<usize>,
}

impl GaugeLevel {
    /// Class name of the active tier in `table`.
    pub fn class<'a>(&self, table: &'a TierTable) -> Option<&'a str> {
        self.tier
            .and_then(|i| table.tiers.get(i))
            .map(|t| t.class.as_str())
    }
}

/// Clamps to `[0.0, 1.0]`, mapping NaN to 0.0.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
