//! Host commands.
//!
//! Each [`HudCommand`] variant corresponds to one setter on
//! [`HudBinder`](crate::HudBinder); [`HudBinder::apply`](crate::HudBinder::apply)
//! dispatches them. With the `serde` feature the enum uses the host's wire
//! form, an `action` tag plus a `value`:
//!
//! ```json
//! {"action": "setSpeed", "value": 27.7}
//! {"action": "setHeadlights", "value": 2}
//! {"action": "setSpeedUnit", "value": 1}
//! ```

use crate::lamps::HeadlightState;
use crate::speed::SpeedUnit;

/// One value change pushed by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "action", content = "value", rename_all = "camelCase")
)]
pub enum HudCommand {
    /// Engine running.
    SetEngine(bool),
    /// Speed in m/s.
    SetSpeed(f64),
    /// Fuel fraction.
    SetFuel(f64),
    /// Health fraction.
    SetHealth(f64),
    /// Host gear code (`0` reverse, `-1` neutral).
    SetGear(i32),
    /// Headlights state, `0`/`1`/`2` on the wire.
    SetHeadlights(HeadlightState),
    /// Left indicator requested.
    SetLeftIndicator(bool),
    /// Right indicator requested.
    SetRightIndicator(bool),
    /// Seatbelts fastened.
    SetSeatbelts(bool),
    /// Speed display unit.
    SetSpeedUnit(SpeedUnit),
}

impl HudCommand {
    /// Wire name of the action.
    pub const fn action(&self) -> &'static str {
        match self {
            HudCommand::SetEngine(_) => "setEngine",
            HudCommand::SetSpeed(_) => "setSpeed",
            HudCommand::SetFuel(_) => "setFuel",
            HudCommand::SetHealth(_) => "setHealth",
            HudCommand::SetGear(_) => "setGear",
            HudCommand::SetHeadlights(_) => "setHeadlights",
            HudCommand::SetLeftIndicator(_) => "setLeftIndicator",
            HudCommand::SetRightIndicator(_) => "setRightIndicator",
            HudCommand::SetSeatbelts(_) => "setSeatbelts",
            HudCommand::SetSpeedUnit(_) => "setSpeedUnit",
        }
    }
}

impl From<HeadlightState> for HudCommand {
    fn from(state: HeadlightState) -> Self {
        HudCommand::SetHeadlights(state)
    }
}

impl From<SpeedUnit> for HudCommand {
    fn from(unit: SpeedUnit) -> Self {
        HudCommand::SetSpeedUnit(unit)
    }
}
