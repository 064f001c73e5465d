//! Logical display targets and the table of resolved handles.

use core::fmt;

/// Every element the binder writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    /// Numeric speed label.
    Speed,
    /// Speedometer needle/arc.
    SpeedFill,
    /// Fuel bar.
    FuelFill,
    /// Vehicle health bar.
    HealthFill,
    /// Gear label.
    Gear,
    /// Engine running lamp.
    EngineLamp,
    /// Headlights lamp.
    HeadlightsLamp,
    /// Icon nested inside the headlights lamp.
    HeadlightsIcon,
    /// Left turn indicator lamp.
    LeftIndicator,
    /// Right turn indicator lamp.
    RightIndicator,
    /// Seatbelt lamp.
    SeatbeltLamp,
}

impl Target {
    /// Number of targets.
    pub const COUNT: usize = 11;

    /// All targets in resolution order.
    pub const ALL: [Target; Target::COUNT] = [
        Target::Speed,
        Target::SpeedFill,
        Target::FuelFill,
        Target::HealthFill,
        Target::Gear,
        Target::EngineLamp,
        Target::HeadlightsLamp,
        Target::HeadlightsIcon,
        Target::LeftIndicator,
        Target::RightIndicator,
        Target::SeatbeltLamp,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Default element id on the surface.
    ///
    /// The headlights icon has no id of its own; it is found inside the
    /// headlights lamp.
    pub const fn default_id(&self) -> &'static str {
        match self {
            Target::Speed => "speed",
            Target::SpeedFill => "speed-fill",
            Target::FuelFill => "fuel-fill",
            Target::HealthFill => "health-fill",
            Target::Gear => "gear",
            Target::EngineLamp => "engine-indicator",
            Target::HeadlightsLamp | Target::HeadlightsIcon => "headlights-indicator",
            Target::LeftIndicator => "left-turn-indicator",
            Target::RightIndicator => "right-turn-indicator",
            Target::SeatbeltLamp => "seatbelt-indicator",
        }
    }

    /// Human-readable name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Target::Speed => "speed label",
            Target::SpeedFill => "speed gauge",
            Target::FuelFill => "fuel bar",
            Target::HealthFill => "health bar",
            Target::Gear => "gear label",
            Target::EngineLamp => "engine lamp",
            Target::HeadlightsLamp => "headlights lamp",
            Target::HeadlightsIcon => "headlights icon",
            Target::LeftIndicator => "left indicator",
            Target::RightIndicator => "right indicator",
            Target::SeatbeltLamp => "seatbelt lamp",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved handles, one slot per [`Target`].
#[derive(Clone, Copy, Debug)]
pub struct TargetTable<H> {
    slots: [Option<H>; Target::COUNT],
}

impl<H: Copy> TargetTable<H> {
    /// A table with nothing resolved.
    pub fn empty() -> Self {
        Self {
            slots: [None; Target::COUNT],
        }
    }

    /// Stores a handle (or records the target as absent).
    pub fn set(&mut self, target: Target, handle: Option<H>) {
        self.slots[target.index()] = handle;
    }

    /// Handle for a target, if it was resolved.
    #[inline]
    pub fn get(&self, target: Target) -> Option<H> {
        self.slots[target.index()]
    }

    /// Targets with no handle, in resolution order.
    pub fn missing(&self) -> impl Iterator<Item = Target> + '_ {
        Target::ALL
            .iter()
            .copied()
            .filter(move |t| self.slots[t.index()].is_none())
    }

    /// Whether every target resolved.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_target_in_index_order() {
        for (i, t) in Target::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn default_ids() {
        assert_eq!(Target::Speed.default_id(), "speed");
        assert_eq!(Target::SpeedFill.default_id(), "speed-fill");
        assert_eq!(Target::LeftIndicator.default_id(), "left-turn-indicator");
        assert_eq!(
            Target::HeadlightsIcon.default_id(),
            Target::HeadlightsLamp.default_id()
        );
    }

    #[test]
    fn table_tracks_missing() {
        let mut table: TargetTable<u32> = TargetTable::empty();
        assert!(!table.is_complete());
        assert_eq!(table.missing().count(), Target::COUNT);

        for (i, t) in Target::ALL.iter().enumerate() {
            if *t != Target::Gear {
                table.set(*t, Some(i as u32));
            }
        }
        assert_eq!(table.missing().collect::<Vec<_>>(), vec![Target::Gear]);
        assert_eq!(table.get(Target::Speed), Some(0));
        assert_eq!(table.get(Target::Gear), None);

        table.set(Target::Gear, Some(99));
        assert!(table.is_complete());
    }
}
