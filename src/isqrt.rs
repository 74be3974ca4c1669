use core::cmp::Ordering;

/// Floor of the real square root of `value`.
///
/// Binary search over `[1, value]`; squares are taken in `u64` so the whole
/// `u32` input range is safe. For every input `v` the result `r` satisfies
/// `r * r <= v < (r + 1) * (r + 1)`.
pub fn isqrt(value: u32) -> u32 {
    // 0 and 1 are fixed points of the square root.
    if value <= 1 {
        return value;
    }
    let target = value as u64;
    let mut low = 1u32;
    let mut high = value;
    let mut floor = 0u32;
    while low <= high {
        let mid = low + (high - low) / 2;
        let square = mid as u64 * mid as u64;
        match square.cmp(&target) {
            Ordering::Equal => return mid,
            Ordering::Less => {
                floor = mid;
                low = mid + 1;
            }
            Ordering::Greater => high = mid - 1,
        }
    }
    floor
}
