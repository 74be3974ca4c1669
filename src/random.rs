use rand_core::{impls, Error, RngCore};

use crate::error::SextantError;

const MODULUS: i32 = 2_147_483_647; // 2^31 - 1
const MULTIPLIER: i32 = 16_807;
const QUOTIENT: i32 = MODULUS / MULTIPLIER; // 127_773
const REMAINDER: i32 = MODULUS % MULTIPLIER; // 2_836

/// Park-Miller multiplicative linear-congruential generator.
///
/// The seed recurrence `seed = (A * seed) mod M` is evaluated with Schrage
/// factorization so it never overflows 32 bits. The stream is gameplay-grade:
/// deterministic, cheap, and reproducible bit-for-bit from a given seed, not
/// statistically strong.
///
/// Each value owns its own stream state. Callers that want the historical
/// process-wide behavior hold one `Lcg` and pass it around; callers that want
/// independent streams construct one per subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: i32,
}

impl Lcg {
    /// Generator in its process-start state (seed 1).
    pub const fn new() -> Self {
        Self { seed: 1 }
    }

    /// Generator starting from an explicit seed in `[1, 2^31 - 2]`.
    ///
    /// 0 is excluded because the multiplicative recurrence fixes it forever;
    /// the modulus and anything outside the ring are excluded likewise.
    pub fn from_seed(seed: i32) -> Result<Self, SextantError> {
        if seed < 1 || seed >= MODULUS {
            return Err(SextantError::InvalidSeed { seed });
        }
        Ok(Self { seed })
    }

    /// Advances the stream and returns the raw seed, in `[1, 2^31 - 2]`.
    pub fn next_raw(&mut self) -> i32 {
        self.seed = MULTIPLIER * (self.seed % QUOTIENT) - REMAINDER * (self.seed / QUOTIENT);
        if self.seed <= 0 {
            self.seed += MODULUS;
        }
        self.seed
    }

    /// Draws a value in `[1, bound]`.
    ///
    /// The raw draw is mapped by modulo, which is slightly non-uniform when
    /// `bound` does not divide the period; kept as-is so sequences stay
    /// reproducible against recorded golden values. An invalid bound is
    /// reported without consuming a draw.
    pub fn roll(&mut self, bound: i32) -> Result<i32, SextantError> {
        if bound <= 0 {
            return Err(SextantError::InvalidBound { bound });
        }
        Ok(self.next_raw() % bound + 1)
    }

    /// Draws a value in `[1, bound]` and truncates it down to a multiple of
    /// `step` (possibly 0). Used for quantized placement, e.g. spawn grids.
    pub fn roll_multiple(&mut self, bound: i32, step: i32) -> Result<i32, SextantError> {
        if step <= 0 {
            return Err(SextantError::InvalidBound { bound: step });
        }
        Ok(self.roll(bound)? / step * step)
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

// The raw 31-bit stream doubles as an `RngCore` source so the generator can
// feed anything written against the trait seam.
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
