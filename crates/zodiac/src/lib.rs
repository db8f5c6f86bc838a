//! Ecliptic-longitude to zodiac-sign conversion.

/// Number of zodiac signs.
pub const SIGN_COUNT: u8 = 12;

/// Width of one sign in degrees.
pub const DEGREES_PER_SIGN: f64 = 30.0;

/// A longitude split into a zodiac sign and the degrees into that sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    sign: u8,
    degrees: f64,
}

impl SignPosition {
    /// Sign index in `0..12`, Aries first.
    pub fn sign(self) -> u8 {
        self.sign
    }

    /// Degrees into the sign, rounded to 2 decimal places.
    pub fn degrees(self) -> f64 {
        self.degrees
    }
}

/// Splits an ecliptic longitude into a sign index and residual degrees.
///
/// Returns `None` when the input is not a usable longitude: non-finite,
/// or outside `[0, 360)`.
pub fn to_sign(longitude: f64) -> Option<SignPosition> {
    if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
        return None;
    }
    let sign = (longitude / DEGREES_PER_SIGN) as u8;
    let degrees = round2(longitude % DEGREES_PER_SIGN);
    Some(SignPosition { sign, degrees })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mid_sign_longitude() {
        // 95.5 degrees: fourth sign, 5.50 degrees in.
        let pos = to_sign(95.5).unwrap();
        assert_eq!(pos.sign(), 3);
        assert_relative_eq!(pos.degrees(), 5.5);
    }

    #[test]
    fn sign_boundaries() {
        let pos = to_sign(0.0).unwrap();
        assert_eq!((pos.sign(), pos.degrees()), (0, 0.0));

        let pos = to_sign(30.0).unwrap();
        assert_eq!((pos.sign(), pos.degrees()), (1, 0.0));

        let pos = to_sign(29.99).unwrap();
        assert_eq!(pos.sign(), 0);
        assert_relative_eq!(pos.degrees(), 29.99);

        let pos = to_sign(359.99).unwrap();
        assert_eq!(pos.sign(), 11);
        assert_relative_eq!(pos.degrees(), 29.99);
    }

    #[test]
    fn every_sign_is_reachable() {
        for sign in 0..SIGN_COUNT {
            let lon = f64::from(sign) * DEGREES_PER_SIGN + 15.0;
            assert_eq!(to_sign(lon).unwrap().sign(), sign);
        }
    }

    #[test]
    fn residual_rounds_to_two_places() {
        let pos = to_sign(10.125).unwrap();
        assert_relative_eq!(pos.degrees(), 10.13);

        let pos = to_sign(10.124).unwrap();
        assert_relative_eq!(pos.degrees(), 10.12);
    }

    #[test]
    fn unusable_longitudes() {
        assert_eq!(to_sign(f64::NAN), None);
        assert_eq!(to_sign(f64::INFINITY), None);
        assert_eq!(to_sign(-0.01), None);
        assert_eq!(to_sign(360.0), None);
        assert_eq!(to_sign(400.0), None);
    }
}
