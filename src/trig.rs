/// Signed fixed-point trig value: real value = `v / 32768.0`.
///
/// The domain is [-32768, 32768]; note the closed upper bound, so the type
/// is one wider than a strict Q15 and must be a 32-bit integer.
pub type Fixed15 = i32;

/// Fixed-point scale factor (2^15).
pub const FIXED15_ONE: Fixed15 = 32768;

/// Right-shift amount equivalent to dividing by [`FIXED15_ONE`].
pub const FIXED15_SHIFT: u32 = 15;

/// Sine of an integer degree angle, scaled by 32768.
///
/// Any `i32` angle is accepted; it is wrapped into [0, 360) before lookup,
/// so `sin_deg(-90) == sin_deg(270)` and `sin_deg(360) == sin_deg(0)`.
#[inline]
pub fn sin_deg(angle_degrees: i32) -> Fixed15 {
    SIN_TABLE[angle_degrees.rem_euclid(360) as usize]
}

/// Cosine of an integer degree angle, scaled by 32768. Wraps like [`sin_deg`].
#[inline]
pub fn cos_deg(angle_degrees: i32) -> Fixed15 {
    COS_TABLE[angle_degrees.rem_euclid(360) as usize]
}

// Table values are frozen, never regenerated: the tool that produced them
// did not round to nearest everywhere (sin 30 is 16383, sin 210 is -16384),
// and recorded golden sequences depend on the exact bits.
#[rustfmt::skip]
const SIN_TABLE: [Fixed15; 360] = [
    0, 571, 1143, 1714, 2285, 2855, 3425, 3993, 4560, 5126,
    5690, 6252, 6812, 7371, 7927, 8480, 9032, 9580, 10125, 10668,
    11207, 11743, 12275, 12803, 13327, 13848, 14364, 14876, 15383, 15886,
    16383, 16876, 17364, 17846, 18323, 18794, 19260, 19720, 20173, 20621,
    21062, 21497, 21926, 22347, 22762, 23170, 23571, 23964, 24351, 24730,
    25101, 25465, 25821, 26169, 26509, 26841, 27165, 27481, 27788, 28087,
    28377, 28659, 28932, 29196, 29451, 29697, 29935, 30163, 30381, 30591,
    30791, 30982, 31164, 31336, 31498, 31651, 31794, 31928, 32051, 32165,
    32270, 32364, 32449, 32523, 32588, 32643, 32688, 32723, 32748, 32763,
    32768, 32763, 32748, 32723, 32688, 32643, 32588, 32523, 32449, 32364,
    32270, 32165, 32051, 31928, 31794, 31651, 31498, 31336, 31164, 30982,
    30791, 30591, 30381, 30163, 29935, 29697, 29451, 29196, 28932, 28659,
    28377, 28087, 27788, 27481, 27165, 26841, 26509, 26169, 25821, 25465,
    25101, 24730, 24351, 23964, 23571, 23170, 22762, 22347, 21926, 21497,
    21062, 20621, 20173, 19720, 19260, 18794, 18323, 17846, 17364, 16876,
    16383, 15886, 15383, 14876, 14364, 13848, 13327, 12803, 12275, 11743,
    11207, 10668, 10125, 9580, 9032, 8480, 7927, 7371, 6812, 6252,
    5690, 5126, 4560, 3993, 3425, 2855, 2285, 1714, 1143, 571,
    0, -571, -1143, -1714, -2285, -2855, -3425, -3993, -4560, -5126,
    -5690, -6252, -6812, -7371, -7927, -8480, -9032, -9580, -10125, -10668,
    -11207, -11743, -12275, -12803, -13327, -13848, -14364, -14876, -15383, -15886,
    -16384, -16876, -17364, -17846, -18323, -18794, -19260, -19720, -20173, -20621,
    -21062, -21497, -21926, -22347, -22762, -23170, -23571, -23964, -24351, -24730,
    -25101, -25465, -25821, -26169, -26509, -26841, -27165, -27481, -27788, -28087,
    -28377, -28659, -28932, -29196, -29451, -29697, -29935, -30163, -30381, -30591,
    -30791, -30982, -31164, -31336, -31498, -31651, -31794, -31928, -32051, -32165,
    -32270, -32364, -32449, -32523, -32588, -32643, -32688, -32723, -32748, -32763,
    -32768, -32763, -32748, -32723, -32688, -32643, -32588, -32523, -32449, -32364,
    -32270, -32165, -32051, -31928, -31794, -31651, -31498, -31336, -31164, -30982,
    -30791, -30591, -30381, -30163, -29935, -29697, -29451, -29196, -28932, -28659,
    -28377, -28087, -27788, -27481, -27165, -26841, -26509, -26169, -25821, -25465,
    -25101, -24730, -24351, -23964, -23571, -23170, -22762, -22347, -21926, -21497,
    -21062, -20621, -20173, -19720, -19260, -18794, -18323, -17846, -17364, -16876,
    -16384, -15886, -15383, -14876, -14364, -13848, -13327, -12803, -12275, -11743,
    -11207, -10668, -10125, -9580, -9032, -8480, -7927, -7371, -6812, -6252,
    -5690, -5126, -4560, -3993, -3425, -2855, -2285, -1714, -1143, -571,
];

#[rustfmt::skip]
const COS_TABLE: [Fixed15; 360] = [
    32768, 32763, 32748, 32723, 32688, 32643, 32588, 32523, 32449, 32364,
    32270, 32165, 32051, 31928, 31794, 31651, 31498, 31336, 31164, 30982,
    30791, 30591, 30381, 30163, 29935, 29697, 29451, 29196, 28932, 28659,
    28377, 28087, 27788, 27481, 27165, 26841, 26509, 26169, 25821, 25465,
    25101, 24730, 24351, 23964, 23571, 23170, 22762, 22347, 21926, 21497,
    21062, 20621, 20173, 19720, 19260, 18794, 18323, 17846, 17364, 16876,
    16384, 15886, 15383, 14876, 14364, 13848, 13327, 12803, 12275, 11743,
    11207, 10668, 10125, 9580, 9032, 8480, 7927, 7371, 6812, 6252,
    5690, 5126, 4560, 3993, 3425, 2855, 2285, 1714, 1143, 571,
    0, -571, -1143, -1714, -2285, -2855, -3425, -3993, -4560, -5126,
    -5690, -6252, -6812, -7371, -7927, -8480, -9032, -9580, -10125, -10668,
    -11207, -11743, -12275, -12803, -13327, -13848, -14364, -14876, -15383, -15886,
    -16383, -16876, -17364, -17846, -18323, -18794, -19260, -19720, -20173, -20621,
    -21062, -21497, -21926, -22347, -22762, -23170, -23571, -23964, -24351, -24730,
    -25101, -25465, -25821, -26169, -26509, -26841, -27165, -27481, -27788, -28087,
    -28377, -28659, -28932, -29196, -29451, -29697, -29935, -30163, -30381, -30591,
    -30791, -30982, -31164, -31336, -31498, -31651, -31794, -31928, -32051, -32165,
    -32270, -32364, -32449, -32523, -32588, -32643, -32688, -32723, -32748, -32763,
    -32768, -32763, -32748, -32723, -32688, -32643, -32588, -32523, -32449, -32364,
    -32270, -32165, -32051, -31928, -31794, -31651, -31498, -31336, -31164, -30982,
    -30791, -30591, -30381, -30163, -29935, -29697, -29451, -29196, -28932, -28659,
    -28377, -28087, -27788, -27481, -27165, -26841, -26509, -26169, -25821, -25465,
    -25101, -24730, -24351, -23964, -23571, -23170, -22762, -22347, -21926, -21497,
    -21062, -20621, -20173, -19720, -19260, -18794, -18323, -17846, -17364, -16876,
    -16384, -15886, -15383, -14876, -14364, -13848, -13327, -12803, -12275, -11743,
    -11207, -10668, -10125, -9580, -9032, -8480, -7927, -7371, -6812, -6252,
    -5690, -5126, -4560, -3993, -3425, -2855, -2285, -1714, -1143, -571,
    0, 571, 1143, 1714, 2285, 2855, 3425, 3993, 4560, 5126,
    5690, 6252, 6812, 7371, 7927, 8480, 9032, 9580, 10125, 10668,
    11207, 11743, 12275, 12803, 13327, 13848, 14364, 14876, 15383, 15886,
    16384, 16876, 17364, 17846, 18323, 18794, 19260, 19720, 20173, 20621,
    21062, 21497, 21926, 22347, 22762, 23170, 23571, 23964, 24351, 24730,
    25101, 25465, 25821, 26169, 26509, 26841, 27165, 27481, 27788, 28087,
    28377, 28659, 28932, 29196, 29451, 29697, 29935, 30163, 30381, 30591,
    30791, 30982, 31164, 31336, 31498, 31651, 31794, 31928, 32051, 32165,
    32270, 32364, 32449, 32523, 32588, 32643, 32688, 32723, 32748, 32763,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_calibration_points() {
        assert_eq!(sin_deg(0), 0);
        assert_eq!(sin_deg(90), FIXED15_ONE);
        assert_eq!(sin_deg(180), 0);
        assert_eq!(sin_deg(270), -FIXED15_ONE);
    }

    #[test]
    fn cosine_calibration_points() {
        assert_eq!(cos_deg(0), FIXED15_ONE);
        assert_eq!(cos_deg(90), 0);
        assert_eq!(cos_deg(180), -FIXED15_ONE);
        assert_eq!(cos_deg(270), 0);
    }

    #[test]
    fn wraps_out_of_range_degrees() {
        assert_eq!(sin_deg(360), sin_deg(0));
        assert_eq!(sin_deg(-90), sin_deg(270));
        assert_eq!(cos_deg(-1), cos_deg(359));
        assert_eq!(cos_deg(720 + 45), cos_deg(45));
    }

    #[test]
    fn tables_carry_source_bits() {
        // Off-by-one-from-round-to-nearest entries are intentional; note
        // sin 30 and cos 60 are asymmetric.
        assert_eq!(sin_deg(30), 16383);
        assert_eq!(sin_deg(210), -16384);
        assert_eq!(cos_deg(60), 16384);
    }

    #[test]
    fn unit_circle_identity_within_quantization() {
        let target = (FIXED15_ONE as i64) * (FIXED15_ONE as i64);
        for deg in 0..360 {
            let s = sin_deg(deg) as i64;
            let c = cos_deg(deg) as i64;
            let dev = (s * s + c * c - target).abs();
            assert!(dev <= 131072, "deg {deg}: deviation {dev}");
        }
    }
}
