//! Trait definitions for the outbound display sink.
//!
//! # Submodules
//!
//! - `surface`: The [`RenderSurface`] trait and the [`Style`] values it accepts
//!
//! Hosts implement [`RenderSurface`] over whatever owns the on-screen
//! elements; [`crate::hal::MockSurface`] is the in-memory implementation.

pub mod surface;

pub use surface::*;
