// Index of the top set bit of a smeared value `2^(k+1) - 1`, via the de Bruijn
// product's top five bits.
const DEBRUIJN_32: u32 = 0x07C4_ACDD;
const DEBRUIJN_TOP_BIT: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];

#[inline(always)]
pub fn clz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut v = x;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    let top = DEBRUIJN_TOP_BIT[(v.wrapping_mul(DEBRUIJN_32) >> 27) as usize] as u32;
    31 - top
}
