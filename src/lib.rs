//! # vehicle-hud
//!
//! A vehicle heads-up display binder. The host simulation pushes speed,
//! fuel, health, gear and lamp state; the binder turns each value into
//! text, style and class-flag updates on a rendering surface.
//!
//! ## Features
//!
//! - **Surface abstraction**: A small trait for whatever owns the on-screen elements
//! - **Two-phase binding**: Elements are resolved once; setters exist only after that
//! - **Speedometer**: km/h, mph and knots with a half-turn needle
//! - **Tiered gauges**: Fuel and health bars with configurable threshold classes
//! - **Lamps**: Engine, seatbelt, headlights (off/low/high) and turn indicators
//! - **Host messages**: JSON command decoding behind the `json` feature
//!
//! ## Architecture
//!
//! - `traits` - The [`RenderSurface`] sink
//! - `binder` - [`PendingBinder`] and [`HudBinder`], the setters
//! - `speed`, `gauge`, `gear`, `lamps` - Pure value-to-presentation mapping
//! - `commands` / `messages` - Host command enum and its JSON form
//! - `hal` - Concrete surfaces (an in-memory mock)
//!
//! ## Example
//!
//! ```rust
//! use vehicle_hud::{hal::MockSurface, HeadlightState, HudConfig, SpeedUnit};
//!
//! let mut hud = vehicle_hud::create(HudConfig::default().with_speed_unit(SpeedUnit::Kmh))
//!     .initialize(MockSurface::hud())
//!     .unwrap();
//!
//! hud.set_speed(100.0).unwrap();
//! hud.set_gear(-1).unwrap();
//! hud.set_headlights(HeadlightState::Low).unwrap();
//!
//! let surface = hud.surface();
//! assert_eq!(surface.text("speed"), Some("360"));
//! assert_eq!(surface.style("speed-fill", "transform"), Some("rotate(0deg)"));
//! assert_eq!(surface.text("gear"), Some("N"));
//! ```

#![warn(missing_docs)]

/// Two-phase binder and the setters.
pub mod binder;
/// Host command enum.
pub mod commands;
/// HUD configuration with builder methods.
pub mod config;
/// Error taxonomy.
pub mod error;
/// Tiered fill gauges (fuel, health).
pub mod gauge;
/// Gear code mapping.
pub mod gear;
/// Rendering surface implementations.
pub mod hal;
/// Headlights, glyphs and indicator flags.
pub mod lamps;
/// Speed conversion and needle math.
pub mod speed;
/// Logical display targets.
pub mod targets;
/// The rendering surface trait.
pub mod traits;

/// JSON host message decoding.
#[cfg(feature = "json")]
pub mod messages;

// Re-exports for convenience
pub use binder::{HudBinder, PendingBinder};
pub use commands::HudCommand;
pub use config::{HudConfig, ResolvePolicy, TargetIds};
pub use error::{HudError, HudResult};
pub use gauge::{GaugeLevel, Tier, TierTable};
pub use gear::Gear;
pub use lamps::{Glyph, HeadlightState, IndicatorFlags, Side};
pub use speed::{SpeedReading, SpeedUnit};
pub use targets::Target;
pub use traits::{RenderSurface, Style};

#[cfg(feature = "json")]
pub use messages::{parse_batch, parse_command};

/// Starts binding: returns a [`PendingBinder`] holding `config`.
///
/// Call [`PendingBinder::initialize`] once the surface is ready.
pub fn create(config: HudConfig) -> PendingBinder {
    PendingBinder::new(config)
}
