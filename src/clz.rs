pub use crate::arch::clz32;

/// Returns the number of leading zero bits of `x`, from 0 for values with bit
/// 63 set up to 64 for zero.
///
/// The count is composed from two 32-bit counts on the halves of `x`, so it
/// only needs a 32-bit leading zero instruction from the target.
///
/// # Examples
///
/// ```
/// use sonic_atoi::leading_zero_count_u64;
///
/// assert_eq!(leading_zero_count_u64(1), 63);
/// assert_eq!(leading_zero_count_u64(1 << 32), 31);
/// assert_eq!(leading_zero_count_u64(0), 64);
/// ```
#[inline(always)]
pub fn leading_zero_count_u64(x: u64) -> u32 {
    let hi = (x >> 32) as u32;
    if hi != 0 {
        return clz32(hi);
    }
    let lo = x as u32;
    32 + if lo != 0 { clz32(lo) } else { 32 }
}
