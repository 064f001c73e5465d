//! Error taxonomy for binding and updating the HUD.

use core::fmt::Debug;

use crate::targets::Target;

/// Result alias used by the binder.
pub type HudResult<T, E> = Result<T, HudError<E>>;

/// Errors from initialization and setters.
///
/// `E` is the rendering surface's own error type.
#[derive(Debug, thiserror::Error)]
pub enum HudError<E: Debug> {
    /// Strict initialization found elements absent from the surface.
    #[error("display targets missing from surface: {}", join_targets(.0))]
    MissingTargets(Vec<Target>),

    /// A setter touched a target that a lenient initialization could not
    /// resolve.
    #[error("{0} was not resolved at initialization")]
    TargetNotResolved(Target),

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The surface rejected a mutation.
    #[error("surface error: {0:?}")]
    Surface(E),
}

impl<E: Debug> HudError<E> {
    /// Whether this error points at a setup defect (missing elements or bad
    /// config) rather than a failing surface.
    pub fn is_setup_error(&self) -> bool {
        !matches!(self, HudError::Surface(_))
    }
}

fn join_targets(targets: &[Target]) -> String {
    targets
        .iter()
        .map(Target::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_targets_message_lists_names() {
        let err: HudError<()> = HudError::MissingTargets(vec![Target::Gear, Target::SeatbeltLamp]);
        assert_eq!(
            err.to_string(),
            "display targets missing from surface: gear label, seatbelt lamp"
        );
    }

    #[test]
    fn unresolved_message() {
        let err: HudError<()> = HudError::TargetNotResolved(Target::FuelFill);
        assert_eq!(err.to_string(), "fuel bar was not resolved at initialization");
        assert!(err.is_setup_error());
    }

    #[test]
    fn surface_errors_are_not_setup_errors() {
        let err: HudError<&str> = HudError::Surface("detached");
        assert_eq!(err.to_string(), "surface error: \"detached\"");
        assert!(!err.is_setup_error());
    }
}
