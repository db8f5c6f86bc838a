//! Error types for the orrery-aspect crate.

/// Error type for all fallible operations in the orrery-aspect crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AspectError {
    /// Returned when a scan is configured with no target angles.
    #[error("no target angles configured")]
    EmptyAngles,

    /// Returned when a target angle is non-finite or outside `0..=180`.
    #[error("invalid target angle: {angle} (must be finite and in 0..=180)")]
    InvalidAngle {
        /// The offending angle.
        angle: f64,
    },

    /// Returned when the orb floor is non-finite or non-positive.
    #[error("invalid orb floor: {orb_floor} (must be finite and positive)")]
    InvalidOrbFloor {
        /// The offending orb floor.
        orb_floor: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            AspectError::EmptyAngles.to_string(),
            "no target angles configured"
        );
        assert_eq!(
            AspectError::InvalidAngle { angle: 270.0 }.to_string(),
            "invalid target angle: 270 (must be finite and in 0..=180)"
        );
        assert_eq!(
            AspectError::InvalidOrbFloor { orb_floor: -1.0 }.to_string(),
            "invalid orb floor: -1 (must be finite and positive)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AspectError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AspectError>();
    }
}
