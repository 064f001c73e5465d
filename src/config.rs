//! HUD configuration.
//!
//! Uses `heapless::String` for element ids so a config can be built
//! without allocation, and derives serde traits behind the `serde` feature
//! so hosts can ship it as JSON.
//!
//! # Example
//!
//! ```rust
//! use vehicle_hud::config::{HudConfig, ResolvePolicy, TargetIds};
//! use vehicle_hud::SpeedUnit;
//!
//! // Use defaults
//! let config = HudConfig::default();
//!
//! // Or customize
//! let config = HudConfig::default()
//!     .with_speed_unit(SpeedUnit::Mph)
//!     .with_resolve_policy(ResolvePolicy::Lenient)
//!     .with_ids(TargetIds::default().with_gear("gear-label"));
//! assert!(config.validate().is_ok());
//! ```

use heapless::String as HString;

use crate::gauge::TierTable;
use crate::speed::SpeedUnit;
use crate::targets::Target;

/// Maximum length for short config strings (element ids, class names)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating at a char boundary if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    let mut end = s.len().min(MAX_SHORT_STRING);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let _ = hs.push_str(&s[..end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete HUD configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HudConfig {
    /// Element ids on the rendering surface
    pub ids: TargetIds,
    /// Unit used by `set_speed`
    pub speed_unit: SpeedUnit,
    /// Fuel bar styling tiers
    pub fuel: TierTable,
    /// Health bar styling tiers
    pub health: TierTable,
    /// What initialization does when an element is missing
    pub resolve: ResolvePolicy,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            ids: TargetIds::default(),
            speed_unit: SpeedUnit::Kmh,
            fuel: TierTable::fuel(),
            health: TierTable::health(),
            resolve: ResolvePolicy::Strict,
        }
    }
}

impl HudConfig {
    /// Set element ids
    pub fn with_ids(mut self, ids: TargetIds) -> Self {
        self.ids = ids;
        self
    }

    /// Set the initial speed unit
    pub fn with_speed_unit(mut self, unit: SpeedUnit) -> Self {
        self.speed_unit = unit;
        self
    }

    /// Set the fuel tiers
    pub fn with_fuel_tiers(mut self, tiers: TierTable) -> Self {
        self.fuel = tiers;
        self
    }

    /// Set the health tiers
    pub fn with_health_tiers(mut self, tiers: TierTable) -> Self {
        self.health = tiers;
        self
    }

    /// Set the resolution policy
    pub fn with_resolve_policy(mut self, policy: ResolvePolicy) -> Self {
        self.resolve = policy;
        self
    }

    /// Checks tier tables and element ids.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.fuel.is_valid() {
            return Err("fuel tiers must ascend and have class names");
        }
        if !self.health.is_valid() {
            return Err("health tiers must ascend and have class names");
        }
        if Target::ALL.iter().any(|t| self.ids.id(*t).is_empty()) {
            return Err("element ids must not be empty");
        }
        Ok(())
    }
}

/// Behavior when an element cannot be resolved at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResolvePolicy {
    /// Fail initialization, naming every missing element.
    #[default]
    Strict,
    /// Bind anyway; setters touching a missing element return
    /// [`HudError::TargetNotResolved`](crate::HudError::TargetNotResolved).
    Lenient,
}

// ============================================================================
// Element ids
// ============================================================================

/// Element ids for each display target
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetIds {
    /// Speed label
    pub speed: ShortString,
    /// Speed gauge fill
    pub speed_fill: ShortString,
    /// Fuel bar
    pub fuel_fill: ShortString,
    /// Health bar
    pub health_fill: ShortString,
    /// Gear label
    pub gear: ShortString,
    /// Engine lamp
    pub engine: ShortString,
    /// Headlights lamp (the icon is found inside it)
    pub headlights: ShortString,
    /// Left indicator lamp
    pub left_indicator: ShortString,
    /// Right indicator lamp
    pub right_indicator: ShortString,
    /// Seatbelt lamp
    pub seatbelt: ShortString,
}

impl Default for TargetIds {
    fn default() -> Self {
        Self {
            speed: short_string(Target::Speed.default_id()),
            speed_fill: short_string(Target::SpeedFill.default_id()),
            fuel_fill: short_string(Target::FuelFill.default_id()),
            health_fill: short_string(Target::HealthFill.default_id()),
            gear: short_string(Target::Gear.default_id()),
            engine: short_string(Target::EngineLamp.default_id()),
            headlights: short_string(Target::HeadlightsLamp.default_id()),
            left_indicator: short_string(Target::LeftIndicator.default_id()),
            right_indicator: short_string(Target::RightIndicator.default_id()),
            seatbelt: short_string(Target::SeatbeltLamp.default_id()),
        }
    }
}

impl TargetIds {
    /// Element id used to resolve `target`.
    ///
    /// The headlights icon resolves through the headlights lamp id.
    pub fn id(&self, target: Target) -> &str {
        match target {
            Target::Speed => self.speed.as_str(),
            Target::SpeedFill => self.speed_fill.as_str(),
            Target::FuelFill => self.fuel_fill.as_str(),
            Target::HealthFill => self.health_fill.as_str(),
            Target::Gear => self.gear.as_str(),
            Target::EngineLamp => self.engine.as_str(),
            Target::HeadlightsLamp | Target::HeadlightsIcon => self.headlights.as_str(),
            Target::LeftIndicator => self.left_indicator.as_str(),
            Target::RightIndicator => self.right_indicator.as_str(),
            Target::SeatbeltLamp => self.seatbelt.as_str(),
        }
    }

    /// Set the speed label id
    pub fn with_speed(mut self, id: &str) -> Self {
        self.speed = short_string(id);
        self
    }

    /// Set the speed gauge id
    pub fn with_speed_fill(mut self, id: &str) -> Self {
        self.speed_fill = short_string(id);
        self
    }

    /// Set the fuel bar id
    pub fn with_fuel_fill(mut self, id: &str) -> Self {
        self.fuel_fill = short_string(id);
        self
    }

    /// Set the health bar id
    pub fn with_health_fill(mut self, id: &str) -> Self {
        self.health_fill = short_string(id);
        self
    }

    /// Set the gear label id
    pub fn with_gear(mut self, id: &str) -> Self {
        self.gear = short_string(id);
        self
    }

    /// Set the engine lamp id
    pub fn with_engine(mut self, id: &str) -> Self {
        self.engine = short_string(id);
        self
    }

    /// Set the headlights lamp id
    pub fn with_headlights(mut self, id: &str) -> Self {
        self.headlights = short_string(id);
        self
    }

    /// Set both indicator lamp ids
    pub fn with_indicators(mut self, left: &str, right: &str) -> Self {
        self.left_indicator = short_string(left);
        self.right_indicator = short_string(right);
        self
    }

    /// Set the seatbelt lamp id
    pub fn with_seatbelt(mut self, id: &str) -> Self {
        self.seatbelt = short_string(id);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
