//! Angular geometry helpers.

/// Shortest-arc angular distance between two ecliptic longitudes.
///
/// Inputs are degrees in `[0, 360)`; the result is in `[0, 180]`.
pub fn separation(lon_a: f64, lon_b: f64) -> f64 {
    let arc = (lon_a - lon_b).abs();
    if arc > 180.0 {
        360.0 - arc
    } else {
        arc
    }
}

/// Adaptive orb for a planet pair: half the relative longitude speed,
/// floored at `orb_floor` degrees.
pub fn orb(speed_a: f64, speed_b: f64, orb_floor: f64) -> f64 {
    let half_relative = (speed_a - speed_b).abs() / 2.0;
    if half_relative < orb_floor {
        orb_floor
    } else {
        half_relative
    }
}
