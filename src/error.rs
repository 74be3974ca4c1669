#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SextantError {
    /// `gcd` requires strictly positive operands.
    NonPositiveOperand { value: i32 },
    /// `roll` bounds and `roll_multiple` steps must be strictly positive.
    InvalidBound { bound: i32 },
    /// LCG seeds must lie in `[1, 2^31 - 2]`.
    InvalidSeed { seed: i32 },
}
