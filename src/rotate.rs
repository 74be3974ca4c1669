use crate::point::Point2;
use crate::trig::{cos_deg, sin_deg, FIXED15_SHIFT};

/// Rotates `point` about `origin` by an integer degree angle,
/// counterclockwise in a y-up frame.
///
/// The displacement is multiplied by table cosine/sine in `i64`, then scaled
/// back down with an arithmetic right shift, which truncates toward negative
/// infinity on negative products. With angle 0 the input comes back exactly.
/// The angle wraps like the table lookups; coordinates up to full `i32`
/// magnitude are safe because the products are taken at 64 bits.
pub fn rotate(point: Point2, origin: Point2, angle_degrees: i32) -> Point2 {
    let d = point - origin;
    let dx = d.x as i64;
    let dy = d.y as i64;
    let cos = cos_deg(angle_degrees) as i64;
    let sin = sin_deg(angle_degrees) as i64;
    Point2::new(
        ((dx * cos >> FIXED15_SHIFT) - (dy * sin >> FIXED15_SHIFT)) as i32 + origin.x,
        ((dy * cos >> FIXED15_SHIFT) + (dx * sin >> FIXED15_SHIFT)) as i32 + origin.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_is_identity() {
        let p = Point2::new(123, -456);
        let o = Point2::new(-7, 9);
        assert_eq!(rotate(p, o, 0), p);
    }

    #[test]
    fn rotating_about_itself_is_fixed() {
        let p = Point2::new(42, 17);
        for angle in [0, 1, 45, 90, 179, 270, 359] {
            assert_eq!(rotate(p, p, angle), p);
        }
    }

    #[test]
    fn quarter_turns_about_origin() {
        let p = Point2::new(10, 0);
        assert_eq!(rotate(p, Point2::ZERO, 90), Point2::new(0, 10));
        assert_eq!(rotate(p, Point2::ZERO, 180), Point2::new(-10, 0));
        assert_eq!(rotate(p, Point2::ZERO, 270), Point2::new(0, -10));
    }

    #[test]
    fn quarter_turn_about_offset_origin() {
        let p = Point2::new(15, 5);
        let o = Point2::new(5, 5);
        assert_eq!(rotate(p, o, 90), Point2::new(5, 15));
    }

    #[test]
    fn forty_five_degrees_truncates() {
        // 10 * 23170 >> 15 = 7, not round(7.07).
        assert_eq!(rotate(Point2::new(10, 0), Point2::ZERO, 45), Point2::new(7, 7));
    }

    #[test]
    fn negative_products_floor_toward_negative_infinity() {
        // -3 * 23170 >> 15 floors -2.12 to -3; round-to-zero would give -2.
        assert_eq!(
            rotate(Point2::new(-3, 0), Point2::ZERO, 45),
            Point2::new(-3, -3)
        );
    }

    #[test]
    fn angle_wraps_like_the_tables() {
        let p = Point2::new(31, -8);
        let o = Point2::new(2, 3);
        assert_eq!(rotate(p, o, 360 + 90), rotate(p, o, 90));
        assert_eq!(rotate(p, o, -270), rotate(p, o, 90));
    }
}
