//! Edge case and boundary condition tests for the HUD binder

use vehicle_hud::{
    hal::{MockSurface, MockSurfaceError},
    HeadlightState, HudBinder, HudConfig, HudError, ResolvePolicy, SpeedUnit, Target, TierTable,
};

fn hud() -> HudBinder<MockSurface> {
    vehicle_hud::create(HudConfig::default())
        .initialize(MockSurface::hud())
        .unwrap()
}

fn lenient_hud(missing: &[Target]) -> HudBinder<MockSurface> {
    vehicle_hud::create(HudConfig::default().with_resolve_policy(ResolvePolicy::Lenient))
        .initialize(MockSurface::hud_without(missing))
        .unwrap()
}

// ============================================================================
// Speed boundaries
// ============================================================================

#[test]
fn negative_speed_turns_needle_past_rest() {
    let mut hud = hud();

    // 10 m/s backwards = -36 km/h, fraction -0.12
    let reading = hud.set_speed(-10.0).unwrap();
    assert_eq!(reading.display, -36);
    assert!(reading.fraction < 0.0);
    assert!(reading.rotation_deg < -180.0);
    assert_eq!(hud.surface().text("speed"), Some("-36"));
}

#[test]
fn extreme_speed_saturates_label_and_caps_needle() {
    let mut hud = hud();

    let reading = hud.set_speed(f64::MAX).unwrap();
    assert_eq!(reading.display, i32::MAX);
    assert_eq!(reading.fraction, 1.0);
    assert_eq!(
        hud.surface().style("speed-fill", "transform"),
        Some("rotate(0deg)")
    );
}

#[test]
fn nan_speed_shows_zero() {
    let mut hud = hud();

    hud.set_speed(f64::NAN).unwrap();
    assert_eq!(hud.surface().text("speed"), Some("0"));
    assert_eq!(
        hud.surface().style("speed-fill", "transform"),
        Some("rotate(-180deg)")
    );
}

#[test]
fn knots_full_scale() {
    let mut hud = hud();

    // 150 kn / 1.943844 = 77.17 m/s; anything above pins the needle
    hud.set_speed_in(80.0, SpeedUnit::Knots).unwrap();
    assert_eq!(hud.surface().text("speed"), Some("156"));
    assert_eq!(
        hud.surface().style("speed-fill", "transform"),
        Some("rotate(0deg)")
    );
}

// ============================================================================
// Gauge boundaries
// ============================================================================

#[test]
fn nan_fuel_is_empty() {
    let mut hud = hud();

    hud.set_fuel(f64::NAN).unwrap();
    assert_eq!(hud.surface().style("fuel-fill", "width"), Some("0%"));
    assert!(hud.surface().has_flag("fuel-fill", "fuel-critical"));
}

#[test]
fn health_clamped_above_one() {
    let mut hud = hud();

    let level = hud.set_health(3.0).unwrap();
    assert_eq!(level.percent, 100.0);
    assert_eq!(level.tier, None);
    assert_eq!(hud.surface().style("health-fill", "width"), Some("100%"));
}

#[test]
fn custom_tier_table() {
    let config = HudConfig::default().with_fuel_tiers(
        TierTable::new()
            .with_tier(5.0, "fuel-empty")
            .with_tier(50.0, "fuel-half"),
    );
    let mut hud = vehicle_hud::create(config)
        .initialize(MockSurface::hud())
        .unwrap();

    hud.set_fuel(0.0).unwrap();
    assert!(hud.surface().has_flag("fuel-fill", "fuel-empty"));

    hud.set_fuel(0.25).unwrap();
    assert!(!hud.surface().has_flag("fuel-fill", "fuel-empty"));
    assert!(hud.surface().has_flag("fuel-fill", "fuel-half"));
    // Default classes are never written with a custom table
    assert!(!hud.surface().has_flag("fuel-fill", "fuel-low"));
}

#[test]
fn empty_tier_table_only_sets_width() {
    let config = HudConfig::default().with_health_tiers(TierTable::new());
    let mut hud = vehicle_hud::create(config)
        .initialize(MockSurface::hud())
        .unwrap();

    hud.set_health(0.0).unwrap();
    let element = hud.surface().element("health-fill").unwrap();
    assert!(element.flags.is_empty());
    assert_eq!(element.style("width"), Some("0%"));
}

// ============================================================================
// Gear and headlights codes
// ============================================================================

#[test]
fn gear_extremes() {
    let mut hud = hud();

    hud.set_gear(i32::MIN).unwrap();
    assert_eq!(hud.surface().text("gear"), Some("-2147483648"));

    hud.set_gear(-2).unwrap();
    assert_eq!(hud.surface().text("gear"), Some("-2"));
}

#[test]
fn unknown_headlight_code_resets_lamp() {
    let mut hud = hud();

    hud.set_headlights(HeadlightState::High).unwrap();
    hud.set_headlights(HeadlightState::from_raw(5)).unwrap();

    assert!(!hud.surface().has_flag("headlights-indicator", "active"));
    assert!(!hud.surface().has_flag("headlights-indicator", "high-beam"));
}

// ============================================================================
// Resolution failures
// ============================================================================

#[test]
fn strict_binding_fails_loudly() {
    let result = vehicle_hud::create(HudConfig::default())
        .initialize(MockSurface::hud_without(&[Target::FuelFill]));

    let err = result.err().expect("binding should fail");
    assert!(err.is_setup_error());
    assert_eq!(
        err.to_string(),
        "display targets missing from surface: fuel bar"
    );
}

#[test]
fn strict_binding_on_empty_surface_lists_everything() {
    let result = vehicle_hud::create(HudConfig::default()).initialize(MockSurface::new());

    match result {
        Err(HudError::MissingTargets(missing)) => assert_eq!(missing.len(), Target::COUNT),
        _ => panic!("expected MissingTargets"),
    }
}

#[test]
fn lenient_binding_reports_only_affected_setters() {
    let mut hud = lenient_hud(&[Target::FuelFill, Target::SeatbeltLamp]);

    assert!(matches!(
        hud.set_fuel(0.5),
        Err(HudError::TargetNotResolved(Target::FuelFill))
    ));
    assert!(matches!(
        hud.set_seatbelts(true),
        Err(HudError::TargetNotResolved(Target::SeatbeltLamp))
    ));

    assert!(hud.set_health(0.5).is_ok());
    assert!(hud.set_gear(4).is_ok());
    assert!(hud.set_speed(5.0).is_ok());
    assert!(hud.set_engine(true).is_ok());
    assert!(hud.set_headlights(HeadlightState::Low).is_ok());
    assert!(hud.set_left_indicator(true).is_ok());
}

#[test]
fn lenient_binding_on_empty_surface_never_panics() {
    let mut hud =
        vehicle_hud::create(HudConfig::default().with_resolve_policy(ResolvePolicy::Lenient))
            .initialize(MockSurface::new())
            .unwrap();

    assert_eq!(hud.unresolved().len(), Target::COUNT);
    assert!(hud.set_engine(true).is_err());
    assert!(hud.set_speed(1.0).is_err());
    assert!(hud.set_fuel(1.0).is_err());
    assert!(hud.set_health(1.0).is_err());
    assert!(hud.set_gear(1).is_err());
    assert!(hud.set_headlights(HeadlightState::High).is_err());
    assert!(hud.set_left_indicator(true).is_err());
    assert!(hud.set_right_indicator(true).is_err());
    assert!(hud.set_seatbelts(true).is_err());

    // The register still tracks requests
    assert_eq!(hud.indicators().bits(), 0b11);
    assert!(hud.surface().ops().is_empty());
}

#[test]
fn read_only_surface_errors_propagate() {
    let mut hud = hud();
    hud.surface_mut().set_read_only(true);

    assert!(matches!(
        hud.set_gear(1),
        Err(HudError::Surface(MockSurfaceError::ReadOnly))
    ));
    assert!(matches!(
        hud.set_fuel(0.5),
        Err(HudError::Surface(MockSurfaceError::ReadOnly))
    ));

    hud.surface_mut().set_read_only(false);
    assert!(hud.set_gear(1).is_ok());
}
