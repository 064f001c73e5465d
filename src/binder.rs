//! The display binder: resolves HUD elements once, then maps every value
//! the host pushes onto them.
//!
//! # Lifecycle
//!
//! Binding happens in two phases. [`create`](crate::create) returns a
//! [`PendingBinder`] that holds only configuration; it has no setters.
//! [`PendingBinder::initialize`] resolves every [`Target`] on the surface
//! and yields a [`HudBinder`]. Setters therefore cannot run before
//! initialization.
//!
//! # Example
//!
//! ```rust
//! use vehicle_hud::{HeadlightState, HudConfig};
//! use vehicle_hud::hal::MockSurface;
//!
//! let mut hud = vehicle_hud::create(HudConfig::default())
//!     .initialize(MockSurface::hud())
//!     .unwrap();
//!
//! hud.set_speed(100.0 / 3.6).unwrap();
//! hud.set_fuel(0.1).unwrap();
//! hud.set_headlights(HeadlightState::High).unwrap();
//! hud.set_left_indicator(true).unwrap();
//!
//! let surface = hud.surface();
//! assert_eq!(surface.text("speed"), Some("100"));
//! assert!(surface.has_flag("fuel-fill", "fuel-critical"));
//! assert!(surface.has_flag("headlights-indicator", "high-beam"));
//! assert!(surface.has_flag("left-turn-indicator", "active"));
//! ```
//!
//! # Missing elements
//!
//! With [`ResolvePolicy::Strict`] initialization fails with
//! [`HudError::MissingTargets`]. With [`ResolvePolicy::Lenient`] the binder
//! is created anyway and every setter that needs an absent element logs a
//! warning and returns [`HudError::TargetNotResolved`]. Setters that write
//! several elements still update the ones that resolved.

use core::fmt::Write;

use heapless::String as HString;

use crate::commands::HudCommand;
use crate::config::{HudConfig, ResolvePolicy};
use crate::error::{HudError, HudResult};
use crate::gauge::{GaugeLevel, TierTable};
use crate::gear::Gear;
use crate::lamps::{HeadlightState, IndicatorFlags, Side, ACTIVE, HIGH_BEAM};
use crate::speed::{SpeedReading, SpeedUnit};
use crate::targets::{Target, TargetTable};
use crate::traits::{RenderSurface, Style};

/// A binder that has configuration but no resolved elements.
#[derive(Clone, Debug, Default)]
pub struct PendingBinder {
    config: HudConfig,
}

impl PendingBinder {
    /// Creates a pending binder.
    pub fn new(config: HudConfig) -> Self {
        Self { config }
    }

    /// The configuration that will be used at initialization.
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Resolves every display target on `surface`.
    ///
    /// # Errors
    ///
    /// - [`HudError::InvalidConfig`] if the configuration fails validation.
    /// - [`HudError::MissingTargets`] if any element is absent and the
    ///   policy is [`ResolvePolicy::Strict`].
    pub fn initialize<S: RenderSurface>(self, surface: S) -> HudResult<HudBinder<S>, S::Error> {
        self.config.validate().map_err(HudError::InvalidConfig)?;

        let mut targets = TargetTable::empty();
        for target in Target::ALL {
            let handle = match target {
                Target::HeadlightsIcon => targets
                    .get(Target::HeadlightsLamp)
                    .and_then(|lamp| surface.resolve_icon(lamp)),
                _ => surface.resolve(self.config.ids.id(target)),
            };
            match handle {
                Some(h) => log::debug!("resolved {} ({:?})", target, h),
                None => log::debug!(
                    "{} not found (element id '{}')",
                    target,
                    self.config.ids.id(target)
                ),
            }
            targets.set(target, handle);
        }

        if !targets.is_complete() {
            let missing: Vec<Target> = targets.missing().collect();
            match self.config.resolve {
                ResolvePolicy::Strict => return Err(HudError::MissingTargets(missing)),
                ResolvePolicy::Lenient => {
                    for target in &missing {
                        log::warn!("{} is missing; its updates will be skipped", target);
                    }
                }
            }
        }

        log::info!(
            "HUD bound: {} of {} targets, speed in {}",
            Target::COUNT - targets.missing().count(),
            Target::COUNT,
            self.config.speed_unit.as_str()
        );

        Ok(HudBinder {
            surface,
            targets,
            indicators: IndicatorFlags::default(),
            speed_unit: self.config.speed_unit,
            config: self.config,
        })
    }
}

/// A bound HUD.
///
/// Owns the rendering surface and the resolved handles. Every setter
/// applies its update immediately; repeated calls with the same value leave
/// the surface unchanged.
///
/// # Type Parameter
///
/// - `S`: The rendering surface ([`RenderSurface`] trait)
pub struct HudBinder<S: RenderSurface> {
    surface: S,
    targets: TargetTable<S::Handle>,
    indicators: IndicatorFlags,
    speed_unit: SpeedUnit,
    config: HudConfig,
}

impl<S: RenderSurface> HudBinder<S> {
    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Lights or clears the engine lamp.
    pub fn set_engine(&mut self, running: bool) -> HudResult<(), S::Error> {
        self.write_flag(Target::EngineLamp, ACTIVE, running)
    }

    /// Shows a speed in m/s using the current unit.
    pub fn set_speed(&mut self, speed_mps: f64) -> HudResult<SpeedReading, S::Error> {
        self.set_speed_in(speed_mps, self.speed_unit)
    }

    /// Shows a speed in m/s using an explicit unit.
    ///
    /// Writes the rounded value to the speed label and rotates the gauge.
    pub fn set_speed_in(
        &mut self,
        speed_mps: f64,
        unit: SpeedUnit,
    ) -> HudResult<SpeedReading, S::Error> {
        let reading = SpeedReading::from_mps(speed_mps, unit);
        log::trace!(
            "speed {} m/s -> {} {} (needle {}deg)",
            speed_mps,
            reading.display,
            unit.as_str(),
            reading.rotation_deg
        );

        let mut label: HString<12> = HString::new();
        // Any i32 fits.
        let _ = write!(label, "{}", reading.display);

        let text = self.write_text(Target::Speed, &label);
        let needle = self.write_style(Target::SpeedFill, Style::Rotate(reading.rotation_deg));
        text.and(needle).map(|_| reading)
    }

    /// Changes the unit used by [`set_speed`](Self::set_speed).
    ///
    /// The display is not redrawn until the next speed update.
    pub fn set_speed_unit(&mut self, unit: SpeedUnit) {
        self.speed_unit = unit;
    }

    /// Fills the fuel bar; `fuel` is a fraction, clamped to `[0, 1]`.
    pub fn set_fuel(&mut self, fuel: f64) -> HudResult<GaugeLevel, S::Error> {
        let handle = self.handle(Target::FuelFill)?;
        apply_tiers(&mut self.surface, handle, &self.config.fuel, fuel).map_err(HudError::Surface)
    }

    /// Fills the health bar; `health` is a fraction, clamped to `[0, 1]`.
    pub fn set_health(&mut self, health: f64) -> HudResult<GaugeLevel, S::Error> {
        let handle = self.handle(Target::HealthFill)?;
        apply_tiers(&mut self.surface, handle, &self.config.health, health)
            .map_err(HudError::Surface)
    }

    /// Shows a host gear code: `0` is `R`, `-1` is `N`, anything else is
    /// printed as is.
    pub fn set_gear(&mut self, code: i32) -> HudResult<Gear, S::Error> {
        let gear = Gear::from_code(code);
        self.write_text(Target::Gear, &gear.label())?;
        Ok(gear)
    }

    /// Shows the headlights state.
    ///
    /// The lamp's `active` and `high-beam` flags and the icon glyph are all
    /// written on every call, so no flag from a previous state survives.
    pub fn set_headlights(&mut self, state: HeadlightState) -> HudResult<(), S::Error> {
        let lamp = self
            .write_flag(Target::HeadlightsLamp, ACTIVE, state.is_lit())
            .and_then(|_| {
                self.write_flag(Target::HeadlightsLamp, HIGH_BEAM, state.is_high_beam())
            });
        let icon = self.handle(Target::HeadlightsIcon).and_then(|icon| {
            self.surface
                .set_glyph(icon, state.glyph())
                .map_err(HudError::Surface)
        });
        lamp.and(icon)
    }

    /// Requests the left indicator on or off.
    pub fn set_left_indicator(&mut self, on: bool) -> HudResult<(), S::Error> {
        self.set_indicator(Side::Left, on)
    }

    /// Requests the right indicator on or off.
    pub fn set_right_indicator(&mut self, on: bool) -> HudResult<(), S::Error> {
        self.set_indicator(Side::Right, on)
    }

    /// Updates one side's indicator bit and redraws both lamps.
    pub fn set_indicator(&mut self, side: Side, on: bool) -> HudResult<(), S::Error> {
        self.indicators = self.indicators.with(side, on);
        self.refresh_indicators()
    }

    /// Lights or clears the seatbelt lamp.
    pub fn set_seatbelts(&mut self, fastened: bool) -> HudResult<(), S::Error> {
        self.write_flag(Target::SeatbeltLamp, ACTIVE, fastened)
    }

    /// Dispatches a host command to its setter.
    pub fn apply(&mut self, cmd: HudCommand) -> HudResult<(), S::Error> {
        match cmd {
            HudCommand::SetEngine(on) => self.set_engine(on),
            HudCommand::SetSpeed(mps) => self.set_speed(mps).map(|_| ()),
            HudCommand::SetFuel(fuel) => self.set_fuel(fuel).map(|_| ()),
            HudCommand::SetHealth(health) => self.set_health(health).map(|_| ()),
            HudCommand::SetGear(code) => self.set_gear(code).map(|_| ()),
            HudCommand::SetHeadlights(state) => self.set_headlights(state),
            HudCommand::SetLeftIndicator(on) => self.set_left_indicator(on),
            HudCommand::SetRightIndicator(on) => self.set_right_indicator(on),
            HudCommand::SetSeatbelts(on) => self.set_seatbelts(on),
            HudCommand::SetSpeedUnit(unit) => {
                self.set_speed_unit(unit);
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Releases the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The configuration the binder was initialized with.
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Unit used by [`set_speed`](Self::set_speed).
    pub fn speed_unit(&self) -> SpeedUnit {
        self.speed_unit
    }

    /// Current indicator register.
    pub fn indicators(&self) -> IndicatorFlags {
        self.indicators
    }

    /// Whether a target resolved at initialization.
    pub fn is_resolved(&self, target: Target) -> bool {
        self.targets.get(target).is_some()
    }

    /// Targets that did not resolve (only possible with a lenient policy).
    pub fn unresolved(&self) -> Vec<Target> {
        self.targets.missing().collect()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn handle(&self, target: Target) -> HudResult<S::Handle, S::Error> {
        self.targets.get(target).ok_or_else(|| {
            log::warn!("{} not resolved; update skipped", target);
            HudError::TargetNotResolved(target)
        })
    }

    fn refresh_indicators(&mut self) -> HudResult<(), S::Error> {
        let flags = self.indicators;
        let left = self.write_flag(Target::LeftIndicator, ACTIVE, flags.is_on(Side::Left));
        let right = self.write_flag(Target::RightIndicator, ACTIVE, flags.is_on(Side::Right));
        left.and(right)
    }

    fn write_text(&mut self, target: Target, text: &str) -> HudResult<(), S::Error> {
        let handle = self.handle(target)?;
        self.surface
            .set_text(handle, text)
            .map_err(HudError::Surface)
    }

    fn write_style(&mut self, target: Target, style: Style) -> HudResult<(), S::Error> {
        let handle = self.handle(target)?;
        self.surface
            .set_style(handle, style)
            .map_err(HudError::Surface)
    }

    fn write_flag(&mut self, target: Target, class: &str, on: bool) -> HudResult<(), S::Error> {
        let handle = self.handle(target)?;
        self.surface
            .set_flag(handle, class, on)
            .map_err(HudError::Surface)
    }
}

/// Drives one tiered gauge: width first, then every tier class cleared and
/// the active one set.
fn apply_tiers<S: RenderSurface>(
    surface: &mut S,
    handle: S::Handle,
    table: &TierTable,
    value: f64,
) -> Result<GaugeLevel, S::Error> {
    let level = table.evaluate(value);
    surface.set_style(handle, Style::Width(level.percent))?;
    for tier in table.tiers() {
        surface.set_flag(handle, &tier.class, false)?;
    }
    if let Some(class) = level.class(table) {
        surface.set_flag(handle, class, true)?;
    }
    Ok(level)
}
