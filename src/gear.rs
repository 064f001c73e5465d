//! Gear indicator mapping.
//!
//! The host encodes gears as integers with two sentinels: `0` is reverse
//! and `-1` is neutral. Every other value, including other negatives, is
//! shown as its decimal text.

use core::fmt::{self, Write};

use heapless::String as HString;

/// Capacity of a gear label (`-2147483648` is 11 bytes).
pub const MAX_GEAR_LABEL: usize = 12;

/// Gear label text.
pub type GearLabel = HString<MAX_GEAR_LABEL>;

/// Host gear code for reverse.
pub const REVERSE_CODE: i32 = 0;

/// Host gear code for neutral.
pub const NEUTRAL_CODE: i32 = -1;

/// Decoded gear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gear {
    /// Code `0`, shown as `R`.
    Reverse,
    /// Code `-1`, shown as `N`.
    Neutral,
    /// Any other code, shown verbatim.
    Numbered(i32),
}

impl Gear {
    /// Decodes a host gear code.
    ///
    /// ```
    /// use vehicle_hud::Gear;
    ///
    /// assert_eq!(Gear::from_code(0), Gear::Reverse);
    /// assert_eq!(Gear::from_code(-1), Gear::Neutral);
    /// assert_eq!(Gear::from_code(3), Gear::Numbered(3));
    /// ```
    #[inline]
    pub const fn from_code(code: i32) -> Self {
        match code {
            REVERSE_CODE => Gear::Reverse,
            NEUTRAL_CODE => Gear::Neutral,
            n => Gear::Numbered(n),
        }
    }

    /// Text shown on the gear label.
    pub fn label(&self) -> GearLabel {
        let mut out = GearLabel::new();
        // Any i32 fits in MAX_GEAR_LABEL.
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Reverse => f.write_str("R"),
            Gear::Neutral => f.write_str("N"),
            Gear::Numbered(n) => write!(f, "{}", n),
        }
    }
}
