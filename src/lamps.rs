//! Lamp state types: headlights, icon glyphs and turn indicator flags.

/// Class flag that marks a lamp as lit.
pub const ACTIVE: &str = "active";

/// Class flag that marks the headlights lamp as high beam.
pub const HIGH_BEAM: &str = "high-beam";

/// Icon glyph shown inside a lamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Glyph {
    /// Base headlights icon.
    #[default]
    Lightbulb,
    /// High-beam icon.
    Sun,
}

impl Glyph {
    /// Icon font class list for this glyph.
    ///
    /// ```
    /// use vehicle_hud::Glyph;
    ///
    /// assert_eq!(Glyph::Lightbulb.class_name(), "fa-solid fa-lightbulb");
    /// assert_eq!(Glyph::Sun.class_name(), "fa-solid fa-sun");
    /// ```
    #[inline]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Glyph::Lightbulb => "fa-solid fa-lightbulb",
            Glyph::Sun => "fa-solid fa-sun",
        }
    }
}

/// Headlights switch position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "u8"))]
pub enum HeadlightState {
    /// Lights off.
    #[default]
    Off,
    /// Dipped beam.
    Low,
    /// Main beam.
    High,
}

impl HeadlightState {
    /// Maps the host's numeric code: 0 off, 1 low, 2 high.
    ///
    /// Unknown codes map to [`Off`](Self::Off), which resets the lamp
    /// without lighting it.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            1 => HeadlightState::Low,
            2 => HeadlightState::High,
            _ => HeadlightState::Off,
        }
    }

    /// Numeric code of this state.
    #[inline]
    pub const fn as_raw(&self) -> u8 {
        match self {
            HeadlightState::Off => 0,
            HeadlightState::Low => 1,
            HeadlightState::High => 2,
        }
    }

    /// Whether the lamp shows as lit.
    #[inline]
    pub const fn is_lit(&self) -> bool {
        !matches!(self, HeadlightState::Off)
    }

    /// Whether the high-beam flag is set.
    #[inline]
    pub const fn is_high_beam(&self) -> bool {
        matches!(self, HeadlightState::High)
    }

    /// Glyph shown for this state.
    #[inline]
    pub const fn glyph(&self) -> Glyph {
        match self {
            HeadlightState::High => Glyph::Sun,
            _ => Glyph::Lightbulb,
        }
    }
}

impl From<i64> for HeadlightState {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<HeadlightState> for u8 {
    fn from(state: HeadlightState) -> Self {
        state.as_raw()
    }
}

/// Turn indicator side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Left indicator, bit 0.
    Left,
    /// Right indicator, bit 1.
    Right,
}

impl Side {
    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Side::Left => IndicatorFlags::LEFT,
            Side::Right => IndicatorFlags::RIGHT,
        }
    }
}

/// Two-bit register of requested turn indicator state.
///
/// # Example
///
/// ```
/// use vehicle_hud::{IndicatorFlags, Side};
///
/// let flags = IndicatorFlags::default()
///     .with(Side::Left, true)
///     .with(Side::Right, true)
///     .with(Side::Left, false);
///
/// assert!(!flags.is_on(Side::Left));
/// assert!(flags.is_on(Side::Right));
/// assert_eq!(flags.bits(), 0b10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IndicatorFlags(u8);

impl IndicatorFlags {
    /// Left indicator bit.
    pub const LEFT: u8 = 0b01;
    /// Right indicator bit.
    pub const RIGHT: u8 = 0b10;

    /// Raw register value.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns a copy with one side's bit replaced, the other preserved.
    #[inline]
    pub const fn with(self, side: Side, on: bool) -> Self {
        let keep = self.0 & !side.bit();
        Self(if on { keep | side.bit() } else { keep })
    }

    /// Whether a side is requested on.
    #[inline]
    pub const fn is_on(&self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }
}
