use core::ops::{Add, Neg, Sub};

/// 2D integer point in screen/world space. Plain value semantics; every
/// operation that produces a point produces a fresh copy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Self) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Self) -> Self::Output {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Self::Output {
        Point2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point2_add() {
        assert_eq!(Point2::new(1, 2) + Point2::new(3, 4), Point2::new(4, 6));
    }

    #[test]
    fn point2_sub() {
        assert_eq!(Point2::new(5, 6) - Point2::new(1, 4), Point2::new(4, 2));
    }

    #[test]
    fn point2_neg() {
        assert_eq!(-Point2::new(2, -3), Point2::new(-2, 3));
    }

    #[test]
    fn point2_zero_is_additive_identity() {
        let p = Point2::new(-7, 11);
        assert_eq!(p + Point2::ZERO, p);
    }
}
