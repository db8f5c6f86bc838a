//! Configuration for aspect scans.

use crate::error::AspectError;

/// Target angles scanned by default: conjunction, square, trine,
/// opposition.
pub const DEFAULT_ANGLES: [f64; 4] = [0.0, 90.0, 120.0, 180.0];

/// Default minimum orb in degrees.
pub const DEFAULT_ORB_FLOOR: f64 = 2.0;

/// Configuration for an aspect scan.
///
/// Angle order is semantic: the detector records the first listed angle
/// whose tolerance band contains a pair's separation.
///
/// # Example
///
/// ```
/// use orrery_aspect::AspectConfig;
///
/// let config = AspectConfig::new()
///     .with_angles(vec![0.0, 60.0, 90.0, 120.0, 180.0])
///     .with_orb_floor(1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AspectConfig {
    angles: Vec<f64>,
    orb_floor: f64,
}

impl AspectConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            angles: DEFAULT_ANGLES.to_vec(),
            orb_floor: DEFAULT_ORB_FLOOR,
        }
    }

    /// Sets the target angles, scanned in the given order.
    pub fn with_angles(mut self, angles: Vec<f64>) -> Self {
        self.angles = angles;
        self
    }

    /// Sets the minimum orb in degrees.
    pub fn with_orb_floor(mut self, orb_floor: f64) -> Self {
        self.orb_floor = orb_floor;
        self
    }

    /// Returns the target angles in scan order.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Returns the minimum orb in degrees.
    pub fn orb_floor(&self) -> f64 {
        self.orb_floor
    }

    /// Validates this configuration.
    ///
    /// Returns an error if no angles are configured, an angle is outside
    /// `[0, 180]` or non-finite, or the orb floor is non-positive or
    /// non-finite.
    pub fn validate(&self) -> Result<(), AspectError> {
        if self.angles.is_empty() {
            return Err(AspectError::EmptyAngles);
        }
        for &angle in &self.angles {
            if !angle.is_finite() || !(0.0..=180.0).contains(&angle) {
                return Err(AspectError::InvalidAngle { angle });
            }
        }
        if !self.orb_floor.is_finite() || self.orb_floor <= 0.0 {
            return Err(AspectError::InvalidOrbFloor {
                orb_floor: self.orb_floor,
            });
        }
        Ok(())
    }
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AspectConfig::default();
        assert_eq!(config.angles(), &[0.0, 90.0, 120.0, 180.0]);
        assert_eq!(config.orb_floor(), 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let config = AspectConfig::new()
            .with_angles(vec![90.0])
            .with_orb_floor(3.0);
        assert_eq!(config.angles(), &[90.0]);
        assert_eq!(config.orb_floor(), 3.0);
    }

    #[test]
    fn with_angles_preserves_order() {
        let config = AspectConfig::new().with_angles(vec![180.0, 0.0, 120.0]);
        assert_eq!(config.angles(), &[180.0, 0.0, 120.0]);
    }

    #[test]
    fn validate_empty_angles() {
        let result = AspectConfig::new().with_angles(vec![]).validate();
        assert!(matches!(result, Err(AspectError::EmptyAngles)));
    }

    #[test]
    fn validate_angle_out_of_range() {
        for bad in [-1.0, 180.5, 360.0] {
            let result = AspectConfig::new().with_angles(vec![90.0, bad]).validate();
            assert!(
                matches!(result, Err(AspectError::InvalidAngle { angle }) if angle == bad),
                "expected InvalidAngle for {bad}"
            );
        }
    }

    #[test]
    fn validate_non_finite_angle() {
        let result = AspectConfig::new().with_angles(vec![f64::NAN]).validate();
        assert!(matches!(result, Err(AspectError::InvalidAngle { .. })));
    }

    #[test]
    fn validate_orb_floor() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = AspectConfig::new().with_orb_floor(bad).validate();
            assert!(
                matches!(result, Err(AspectError::InvalidOrbFloor { .. })),
                "expected InvalidOrbFloor for {bad}"
            );
        }
    }

    #[test]
    fn validate_boundary_angles_ok() {
        let config = AspectConfig::new().with_angles(vec![0.0, 180.0]);
        assert!(config.validate().is_ok());
    }
}
