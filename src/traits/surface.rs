//! Rendering surface abstraction.
//!
//! This module defines the [`RenderSurface`] trait: the outbound sink the
//! HUD binder writes into. A surface owns its visual elements (labels, fill
//! bars, icons, lamps) and hands out opaque handles to them by element id.
//!
//! Implementations exist for a web page bridge on the host side, for an
//! in-memory recorder ([`crate::hal::MockSurface`]), or for anything else
//! that can set text, style properties, class flags and icon glyphs.

use core::fmt;

use heapless::String as HString;

use crate::lamps::Glyph;

/// Capacity of a rendered style value (`rotate(-180.5deg)`, `42.5%`).
pub const MAX_STYLE_VALUE: usize = 48;

/// A style property mutation.
///
/// The binder only ever writes two properties: the width of a fill bar and
/// the rotation of the speed needle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    /// Width of a fill bar as a percentage of its track (0.0 to 100.0).
    Width(f64),
    /// Rotation transform in degrees.
    Rotate(f64),
}

impl Style {
    /// CSS property name this style maps to.
    #[inline]
    pub const fn property(&self) -> &'static str {
        match self {
            Style::Width(_) => "width",
            Style::Rotate(_) => "transform",
        }
    }

    /// Renders the value as CSS text, e.g. `42%` or `rotate(-90deg)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicle_hud::traits::Style;
    ///
    /// assert_eq!(Style::Width(42.0).css_value().as_str(), "42%");
    /// assert_eq!(Style::Rotate(-90.0).css_value().as_str(), "rotate(-90deg)");
    /// ```
    pub fn css_value(&self) -> HString<MAX_STYLE_VALUE> {
        let mut out = HString::new();
        // Values that overflow the buffer are truncated, never rejected.
        let _ = match self {
            Style::Width(pct) => fmt::write(&mut out, format_args!("{}%", pct)),
            Style::Rotate(deg) => fmt::write(&mut out, format_args!("rotate({}deg)", deg)),
        };
        out
    }
}

/// Outbound display sink.
///
/// # Example
///
/// ```rust
/// use vehicle_hud::hal::MockSurface;
/// use vehicle_hud::traits::{RenderSurface, Style};
///
/// let mut surface = MockSurface::new().with_element("fuel-fill");
/// let fill = surface.resolve("fuel-fill").unwrap();
///
/// surface.set_style(fill, Style::Width(50.0)).unwrap();
/// surface.set_flag(fill, "fuel-low", true).unwrap();
///
/// let element = surface.element("fuel-fill").unwrap();
/// assert_eq!(element.style("width"), Some("50%"));
/// assert!(element.has_flag("fuel-low"));
/// ```
pub trait RenderSurface {
    /// Opaque reference to one element owned by the surface.
    type Handle: Copy + fmt::Debug;

    /// Error type for surface mutations.
    type Error: fmt::Debug;

    /// Looks up an element by id.
    ///
    /// Returns `None` if the surface has no such element.
    fn resolve(&self, id: &str) -> Option<Self::Handle>;

    /// Looks up the icon element nested inside `parent`.
    fn resolve_icon(&self, parent: Self::Handle) -> Option<Self::Handle>;

    /// Replaces the text content of an element.
    fn set_text(&mut self, target: Self::Handle, text: &str) -> Result<(), Self::Error>;

    /// Sets one style property of an element.
    fn set_style(&mut self, target: Self::Handle, style: Style) -> Result<(), Self::Error>;

    /// Adds (`on == true`) or removes a boolean style class.
    ///
    /// Adding a class that is already present, or removing one that is
    /// absent, must be a no-op.
    fn set_flag(&mut self, target: Self::Handle, class: &str, on: bool)
        -> Result<(), Self::Error>;

    /// Replaces the icon glyph of an icon element.
    fn set_glyph(&mut self, target: Self::Handle, glyph: Glyph) -> Result<(), Self::Error>;
}
