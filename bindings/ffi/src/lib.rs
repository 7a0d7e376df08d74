use std::ffi::c_char;

use log::debug;

// Literals so cbindgen can emit them; kept in sync with `ParseError::code`.
pub const SONIC_ATOI_OK: i32 = 0;
pub const SONIC_ATOI_EMPTY_INPUT: i32 = 1;
pub const SONIC_ATOI_LENGTH_OUT_OF_RANGE: i32 = 2;
pub const SONIC_ATOI_INVALID_DIGIT: i32 = 3;
pub const SONIC_ATOI_OVERFLOW: i32 = 4;

#[inline]
unsafe fn write_result(ret: sonic_atoi::Result<u64>, out: *mut u64) -> i32 {
    match ret {
        Ok(v) => {
            *out = v;
            SONIC_ATOI_OK
        }
        Err(e) => {
            // the typed error is lost past this point
            debug!("sonic_atoi: rejected input: {}", e);
            e.code()
        }
    }
}

/// Parses `len` ASCII digits at `ptr` into `*out`.
///
/// Returns `SONIC_ATOI_OK` and writes `*out` on success, or one of the
/// `SONIC_ATOI_*` error codes and leaves `*out` untouched.
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` bytes and `out` must be valid for a
/// write.
#[no_mangle]
pub unsafe extern "C" fn sonic_atoi_parse_u64(
    ptr: *const c_char,
    len: usize,
    out: *mut u64,
) -> i32 {
    let ptr = ptr as *const u8;
    let ret = sonic_atoi::parse_u64_checked_range(ptr, ptr.wrapping_add(len));
    write_result(ret, out)
}

/// Parses the ASCII digits in `[begin, end)` into `*out`.
///
/// # Safety
///
/// The range must be valid for reads and `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn sonic_atoi_parse_u64_range(
    begin: *const c_char,
    end: *const c_char,
    out: *mut u64,
) -> i32 {
    let ret = sonic_atoi::parse_u64_checked_range(begin as *const u8, end as *const u8);
    write_result(ret, out)
}

/// Parses `len` ASCII digits at `ptr` without validation.
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` bytes and `len` must be at most 20.
#[no_mangle]
pub unsafe extern "C" fn sonic_atoi_parse_u64_unchecked(ptr: *const c_char, len: usize) -> u64 {
    if len == 0 {
        return 0;
    }
    sonic_atoi::parse_u64_unchecked(std::slice::from_raw_parts(ptr as *const u8, len))
}

/// Number of leading zero bits of `x`, 64 for zero.
#[no_mangle]
pub extern "C" fn sonic_atoi_clz64(x: u64) -> u32 {
    sonic_atoi::leading_zero_count_u64(x)
}
