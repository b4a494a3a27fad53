use std::f64::consts::{FRAC_PI_4, PI};

/// Mean Earth radius (meters) used for rhumb-line distances.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

// Difference in isometric latitude between two latitudes (radians).
fn delta_psi(phi1: f64, phi2: f64) -> f64 {
    ((phi2 / 2.0 + FRAC_PI_4).tan() / (phi1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Rhumb-line distance in meters between two `[lon, lat]` points (degrees).
pub fn rhumb_distance_m(from: [f64; 2], to: [f64; 2]) -> f64 {
    // Take the short way around the antimeridian.
    let mut to_lon = to[0];
    if to_lon - from[0] > 180.0 {
        to_lon -= 360.0;
    } else if from[0] - to_lon > 180.0 {
        to_lon += 360.0;
    }

    let phi1 = from[1].to_radians();
    let phi2 = to[1].to_radians();
    let d_phi = phi2 - phi1;
    let mut d_lambda = (to_lon - from[0]).abs().to_radians();
    if d_lambda > PI {
        d_lambda -= 2.0 * PI;
    }

    let d_psi = delta_psi(phi1, phi2);
    let q = if d_psi.abs() > 10e-12 {
        d_phi / d_psi
    } else {
        phi1.cos()
    };

    (d_phi * d_phi + q * q * d_lambda * d_lambda).sqrt() * EARTH_RADIUS_M
}

/// Rhumb-line bearing from `from` to `to` in degrees, in (-180, 180].
pub fn rhumb_bearing_deg(from: [f64; 2], to: [f64; 2]) -> f64 {
    let phi1 = from[1].to_radians();
    let phi2 = to[1].to_radians();
    let mut d_lambda = (to[0] - from[0]).to_radians();
    if d_lambda > PI {
        d_lambda -= 2.0 * PI;
    }
    if d_lambda < -PI {
        d_lambda += 2.0 * PI;
    }

    let theta = d_lambda.atan2(delta_psi(phi1, phi2));
    let bearing = (theta.to_degrees() + 360.0) % 360.0;
    if bearing > 180.0 {
        bearing - 360.0
    } else {
        bearing
    }
}

/// Signed turn from one heading to another, normalized to [-180, 180].
pub fn turn_angle_deg(start: f64, end: f64) -> f64 {
    let mut turn = end - start;
    if turn < -180.0 {
        turn += 360.0;
    }
    if turn > 180.0 {
        turn -= 360.0;
    }
    turn
}

#[cfg(test)]
mod tests {
    use super::{EARTH_RADIUS_M, rhumb_bearing_deg, rhumb_distance_m, turn_angle_deg};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn distance_along_meridian() {
        let d = rhumb_distance_m([0.0, 0.0], [0.0, 1.0]);
        assert_close(d, EARTH_RADIUS_M * 1f64.to_radians(), 1e-6);
    }

    #[test]
    fn distance_along_equator() {
        let d = rhumb_distance_m([10.0, 0.0], [11.0, 0.0]);
        assert_close(d, EARTH_RADIUS_M * 1f64.to_radians(), 1e-6);
    }

    #[test]
    fn distance_wraps_antimeridian() {
        let d = rhumb_distance_m([179.5, 0.0], [-179.5, 0.0]);
        assert_close(d, EARTH_RADIUS_M * 1f64.to_radians(), 1e-6);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert_close(rhumb_bearing_deg([0.0, 0.0], [0.0, 1.0]), 0.0, 1e-9);
        assert_close(rhumb_bearing_deg([0.0, 0.0], [1.0, 0.0]), 90.0, 1e-9);
        assert_close(rhumb_bearing_deg([0.0, 0.0], [-1.0, 0.0]), -90.0, 1e-9);
        assert_close(rhumb_bearing_deg([0.0, 1.0], [0.0, 0.0]), 180.0, 1e-9);
    }

    #[test]
    fn turn_angle_takes_short_way() {
        assert_close(turn_angle_deg(170.0, -170.0), 20.0, 1e-9);
        assert_close(turn_angle_deg(-170.0, 170.0), -20.0, 1e-9);
        assert_close(turn_angle_deg(10.0, 40.0), 30.0, 1e-9);
    }
}
