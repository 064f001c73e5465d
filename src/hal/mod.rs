//! Rendering surface implementations.
//!
//! This module contains concrete implementations of the
//! [`RenderSurface`](crate::traits::RenderSurface) trait.
//!
//! # Available Implementations
//!
//! - `mock`: In-memory recording surface for tests and desktop tools

pub mod mock;

pub use mock::*;
