/// Lowers to a single `CLZ`, which returns 32 for zero.
#[inline(always)]
pub fn clz32(x: u32) -> u32 {
    x.leading_zeros()
}
