//! In-memory rendering surface for tests and desktop tools.
//!
//! [`MockSurface`] keeps every element's text, style properties, class
//! flags and glyph in memory and records each mutation, so tests can assert
//! on the final visual state as well as on what was written.
//!
//! # Example
//!
//! ```rust
//! use vehicle_hud::HudConfig;
//! use vehicle_hud::hal::MockSurface;
//!
//! let mut hud = vehicle_hud::create(HudConfig::default())
//!     .initialize(MockSurface::hud())
//!     .unwrap();
//!
//! hud.set_gear(0).unwrap();
//! hud.set_engine(true).unwrap();
//!
//! let surface = hud.surface();
//! assert_eq!(surface.text("gear"), Some("R"));
//! assert!(surface.has_flag("engine-indicator", "active"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::lamps::Glyph;
use crate::targets::Target;
use crate::traits::{RenderSurface, Style};

/// Suffix appended to a lamp id to name its icon element.
pub const ICON_SUFFIX: &str = " i";

/// Handle into a [`MockSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockHandle(usize);

/// Errors a [`MockSurface`] can be told to produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MockSurfaceError {
    /// Writes were disabled with [`MockSurface::set_read_only`].
    #[error("surface is read-only")]
    ReadOnly,
    /// The handle does not belong to this surface.
    #[error("unknown handle {0}")]
    UnknownHandle(usize),
}

/// One recorded mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// `set_text`
    Text {
        /// Element id.
        id: String,
        /// New text.
        text: String,
    },
    /// `set_style`
    Style {
        /// Element id.
        id: String,
        /// Style written.
        style: Style,
    },
    /// `set_flag`
    Flag {
        /// Element id.
        id: String,
        /// Class name.
        class: String,
        /// Added or removed.
        on: bool,
    },
    /// `set_glyph`
    Glyph {
        /// Element id.
        id: String,
        /// Glyph written.
        glyph: Glyph,
    },
}

/// Visual state of one mock element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockElement {
    /// Element id.
    pub id: String,
    /// Text content.
    pub text: String,
    /// Style properties by CSS name, rendered as CSS values.
    pub styles: BTreeMap<&'static str, String>,
    /// Class flags currently set.
    pub flags: BTreeSet<String>,
    /// Icon glyph, for icon elements.
    pub glyph: Option<Glyph>,
    icon: Option<usize>,
}

impl MockElement {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Whether a class flag is set.
    pub fn has_flag(&self, class: &str) -> bool {
        self.flags.contains(class)
    }

    /// CSS value of a style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Recording in-memory surface.
#[derive(Clone, Debug, Default)]
pub struct MockSurface {
    elements: Vec<MockElement>,
    ops: Vec<SurfaceOp>,
    read_only: bool,
}

impl MockSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface with every element of the default HUD layout,
    /// including the icon inside the headlights lamp.
    pub fn hud() -> Self {
        Self::hud_without(&[])
    }

    /// Like [`hud`](Self::hud), leaving out the listed targets.
    ///
    /// Leaving out [`Target::HeadlightsLamp`] also drops its icon.
    pub fn hud_without(missing: &[Target]) -> Self {
        let mut surface = Self::new();
        for target in Target::ALL {
            if missing.contains(&target) {
                continue;
            }
            match target {
                Target::HeadlightsIcon => {}
                Target::HeadlightsLamp => {
                    surface = surface.with_element(target.default_id());
                    if !missing.contains(&Target::HeadlightsIcon) {
                        surface = surface.with_icon(target.default_id(), Glyph::Lightbulb);
                    }
                }
                _ => surface = surface.with_element(target.default_id()),
            }
        }
        surface
    }

    /// Adds an element.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.push(MockElement::new(id));
        self
    }

    /// Adds an icon inside an existing element.
    ///
    /// Does nothing if `parent` does not exist.
    pub fn with_icon(mut self, parent: &str, glyph: Glyph) -> Self {
        if let Some(parent_idx) = self.index_of(parent) {
            let mut icon = MockElement::new(&format!("{}{}", parent, ICON_SUFFIX));
            icon.glyph = Some(glyph);
            self.elements.push(icon);
            self.elements[parent_idx].icon = Some(self.elements.len() - 1);
        }
        self
    }

    /// Makes every subsequent mutation fail with
    /// [`MockSurfaceError::ReadOnly`].
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Looks up an element by id.
    pub fn element(&self, id: &str) -> Option<&MockElement> {
        self.index_of(id).map(|i| &self.elements[i])
    }

    /// The icon element nested inside `parent`.
    pub fn icon(&self, parent: &str) -> Option<&MockElement> {
        self.element(parent)
            .and_then(|e| e.icon)
            .map(|i| &self.elements[i])
    }

    /// Text content of an element.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    /// CSS value of an element's style property.
    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.style(property))
    }

    /// Whether an element has a class flag. False for unknown elements.
    pub fn has_flag(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_flag(class))
    }

    /// All elements, in insertion order.
    pub fn elements(&self) -> &[MockElement] {
        &self.elements
    }

    /// Every mutation since creation or the last [`clear_ops`](Self::clear_ops).
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forgets recorded mutations; element state is kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    fn writable(&mut self, handle: MockHandle) -> Result<&mut MockElement, MockSurfaceError> {
        if self.read_only {
            return Err(MockSurfaceError::ReadOnly);
        }
        self.elements
            .get_mut(handle.0)
            .ok_or(MockSurfaceError::UnknownHandle(handle.0))
    }
}

impl RenderSurface for MockSurface {
    type Handle = MockHandle;
    type Error = MockSurfaceError;

    fn resolve(&self, id: &str) -> Option<MockHandle> {
        self.index_of(id).map(MockHandle)
    }

    fn resolve_icon(&self, parent: MockHandle) -> Option<MockHandle> {
        self.elements
            .get(parent.0)
            .and_then(|e| e.icon)
            .map(MockHandle)
    }

    fn set_text(&mut self, target: MockHandle, text: &str) -> Result<(), MockSurfaceError> {
        let element = self.writable(target)?;
        element.text = text.to_string();
        let id = element.id.clone();
        self.ops.push(SurfaceOp::Text {
            id,
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_style(&mut self, target: MockHandle, style: Style) -> Result<(), MockSurfaceError> {
        let element = self.writable(target)?;
        element
            .styles
            .insert(style.property(), style.css_value().as_str().to_string());
        let id = element.id.clone();
        self.ops.push(SurfaceOp::Style { id, style });
        Ok(())
    }

    fn set_flag(
        &mut self,
        target: MockHandle,
        class: &str,
        on: bool,
    ) -> Result<(), MockSurfaceError> {
        let element = self.writable(target)?;
        if on {
            element.flags.insert(class.to_string());
        } else {
            element.flags.remove(class);
        }
        let id = element.id.clone();
        self.ops.push(SurfaceOp::Flag {
            id,
            class: class.to_string(),
            on,
        });
        Ok(())
    }

    fn set_glyph(&mut self, target: MockHandle, glyph: Glyph) -> Result<(), MockSurfaceError> {
        let element = self.writable(target)?;
        element.glyph = Some(glyph);
        let id = element.id.clone();
        self.ops.push(SurfaceOp::Glyph { id, glyph });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_layout_has_every_target() {
        let surface = MockSurface::hud();
        for target in Target::ALL {
            assert!(surface.element(target.default_id()).is_some(), "{}", target);
        }
        let icon = surface.icon("headlights-indicator").unwrap();
        assert_eq!(icon.glyph, Some(Glyph::Lightbulb));
    }

    #[test]
    fn hud_without_drops_elements() {
        let surface = MockSurface::hud_without(&[Target::Gear, Target::HeadlightsIcon]);
        assert!(surface.element("gear").is_none());
        assert!(surface.element("headlights-indicator").is_some());
        assert!(surface.icon("headlights-indicator").is_none());
    }

    #[test]
    fn resolve_and_mutate() {
        let mut surface = MockSurface::new().with_element("gear");
        let gear = surface.resolve("gear").unwrap();
        assert!(surface.resolve("nope").is_none());

        surface.set_text(gear, "N").unwrap();
        surface.set_flag(gear, "active", true).unwrap();
        surface.set_flag(gear, "active", true).unwrap();

        assert_eq!(surface.text("gear"), Some("N"));
        assert_eq!(surface.element("gear").unwrap().flags.len(), 1);

        surface.set_flag(gear, "active", false).unwrap();
        assert!(!surface.has_flag("gear", "active"));
        assert_eq!(surface.ops().len(), 4);
    }

    #[test]
    fn icon_resolution() {
        let surface = MockSurface::new()
            .with_element("lamp")
            .with_icon("lamp", Glyph::Sun)
            .with_icon("ghost", Glyph::Sun);
        let lamp = surface.resolve("lamp").unwrap();
        let icon = surface.resolve_icon(lamp).unwrap();
        assert_eq!(surface.elements().len(), 2);
        assert!(surface.resolve_icon(icon).is_none());
    }

    #[test]
    fn read_only_rejects_writes() {
        let mut surface = MockSurface::new().with_element("speed");
        let speed = surface.resolve("speed").unwrap();
        surface.set_read_only(true);

        assert_eq!(surface.set_text(speed, "1"), Err(MockSurfaceError::ReadOnly));
        assert!(surface.ops().is_empty());
        assert_eq!(surface.text("speed"), Some(""));
    }

    #[test]
    fn unknown_handle_rejected() {
        let mut surface = MockSurface::new();
        assert_eq!(
            surface.set_glyph(MockHandle(3), Glyph::Sun),
            Err(MockSurfaceError::UnknownHandle(3))
        );
    }
}
