use std::f64::consts::{FRAC_PI_2, TAU};

/// Wrap degrees into `[-180, 180)`.
pub fn wrap_degrees_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Wrap radians into `[0, 2π)`.
pub fn wrap_radians_tau(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Clamp radians into `[-π/2, π/2]`.
pub fn clamp_half_pi(rad: f64) -> f64 {
    rad.clamp(-FRAC_PI_2, FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::{clamp_half_pi, wrap_degrees_180, wrap_radians_tau};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn wraps_degrees() {
        assert_eq!(wrap_degrees_180(0.0), 0.0);
        assert_eq!(wrap_degrees_180(190.0), -170.0);
        assert_eq!(wrap_degrees_180(-190.0), 170.0);
        assert_eq!(wrap_degrees_180(180.0), -180.0);
        assert_eq!(wrap_degrees_180(540.0), -180.0);
    }

    #[test]
    fn wraps_radians() {
        assert_eq!(wrap_radians_tau(0.0), 0.0);
        assert!((wrap_radians_tau(TAU + 1.0) - 1.0).abs() < 1e-12);
        assert!((wrap_radians_tau(-PI) - PI).abs() < 1e-12);
        let tiny = wrap_radians_tau(-1e-18);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn clamps_pitch_range() {
        assert_eq!(clamp_half_pi(10.0), FRAC_PI_2);
        assert_eq!(clamp_half_pi(-10.0), -FRAC_PI_2);
        assert_eq!(clamp_half_pi(0.3), 0.3);
    }
}
