//! JSON decoding of host messages.
//!
//! The host sends one message per value change, either as a single object
//! or as an array when several values changed in the same frame. Numeric
//! values are accepted as the host sends them: `setHeadlights` takes
//! `0`/`1`/`2`, `setGear` takes an integer code.
//!
//! # Example
//!
//! ```
//! use vehicle_hud::messages::{parse_command, parse_batch};
//! use vehicle_hud::HudCommand;
//!
//! let cmd = parse_command(r#"{"action": "setGear", "value": 0}"#).unwrap();
//! assert_eq!(cmd, HudCommand::SetGear(0));
//!
//! let batch = parse_batch(r#"[
//!     {"action": "setEngine", "value": true},
//!     {"action": "setFuel", "value": 0.4}
//! ]"#).unwrap();
//! assert_eq!(batch.len(), 2);
//! ```

use serde::Deserialize;

use crate::commands::HudCommand;

/// Parse a single command.
pub fn parse_command(json: &str) -> Result<HudCommand, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a single command or an array of commands.
pub fn parse_batch(json: &str) -> Result<Vec<HudCommand>, serde_json::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<HudCommand>),
        One(HudCommand),
    }

    Ok(match serde_json::from_str(json)? {
        OneOrMany::Many(cmds) => cmds,
        OneOrMany::One(cmd) => vec![cmd],
    })
}
