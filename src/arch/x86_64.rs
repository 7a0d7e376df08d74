cfg_if::cfg_if! {
    if #[cfg(target_feature = "lzcnt")] {
        use std::arch::x86_64::_lzcnt_u32;

        #[inline(always)]
        pub fn clz32(x: u32) -> u32 {
            // LZCNT is defined for zero and returns 32
            unsafe { _lzcnt_u32(x) }
        }
    } else {
        // BSR gives the index of the top set bit and is undefined for zero.
        #[inline(always)]
        pub fn clz32(x: u32) -> u32 {
            if x == 0 {
                return 32;
            }
            31 - x.ilog2()
        }
    }
}
