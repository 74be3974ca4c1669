use core::f32::consts::{FRAC_PI_2, PI};

use libm::fabsf;

/// Values this close to zero are treated as a degenerate (on-axis) input.
const EPSILON: f32 = 1e-5;

/// Angle of the vector `(x, y)` from the positive x-axis, in radians,
/// range `(-PI, PI]`.
///
/// Rational approximation `atan(z) ~= z / (1 + 0.28 z^2)` (complemented for
/// `|z| >= 1`) plus a sign-driven quadrant correction; worst-case error is
/// about 0.005 rad. Always finite, for every input including `(0, 0)`.
pub fn atan2_radians(y: f32, x: f32) -> f32 {
    if fabsf(x) < EPSILON {
        if y > 0.0 {
            return FRAC_PI_2;
        }
        if fabsf(y) < EPSILON {
            return 0.0;
        }
        return -FRAC_PI_2;
    }
    let z = y / x;
    if fabsf(z) < 1.0 {
        let atan = z / (1.0 + 0.28 * z * z);
        if x < 0.0 {
            // Raw result sits in the wrong half-plane; swing it by a half
            // turn toward the sign of y.
            if y < 0.0 {
                return atan - PI;
            }
            return atan + PI;
        }
        atan
    } else {
        let atan = FRAC_PI_2 - z / (z * z + 0.28);
        if y < 0.0 {
            return atan - PI;
        }
        atan
    }
}
