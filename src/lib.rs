#![no_std]

pub mod atan;
pub mod error;
pub mod gcd;
pub mod isqrt;
pub mod point;
pub mod random;
pub mod rotate;
pub mod trig;

pub use atan::atan2_radians;
pub use error::SextantError;
pub use gcd::gcd;
pub use isqrt::isqrt;
pub use point::Point2;
pub use random::Lcg;
pub use rotate::rotate;
pub use trig::{cos_deg, sin_deg, Fixed15, FIXED15_ONE, FIXED15_SHIFT};
