use core::str::FromStr;

use crate::error::{ParseError, Result};

/// The most digits a `u64` can need, and the length of [`POW10`].
pub const MAX_DIGITS: usize = 20;

/// `POW10[j] == 10^(19 - j)`.
///
/// A number of `len` digits starts at `POW10[MAX_DIGITS - len]` and walks the
/// table forward, one entry per digit, so the last digit always lands on `1`.
pub const POW10: [u64; MAX_DIGITS] = [
    10000000000000000000,
    1000000000000000000,
    100000000000000000,
    10000000000000000,
    1000000000000000,
    100000000000000,
    10000000000000,
    1000000000000,
    100000000000,
    10000000000,
    1000000000,
    100000000,
    10000000,
    1000000,
    100000,
    10000,
    1000,
    100,
    10,
    1,
];

// Bytes below b'0' wrap around, so one unsigned compare rejects both sides.
macro_rules! checked_digit {
    ($byte:expr, $index:expr) => {{
        let byte = $byte;
        let d = byte.wrapping_sub(b'0');
        if d > 9 {
            return Err(ParseError::InvalidDigit {
                index: $index,
                byte,
            });
        }
        d as u64
    }};
}

macro_rules! digit {
    ($byte:expr) => {
        $byte.wrapping_sub(b'0') as u64
    };
}

#[inline(always)]
fn check_len(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(ParseError::EmptyInput);
    }
    if len > MAX_DIGITS {
        return Err(ParseError::LengthOutOfRange { len });
    }
    Ok(len)
}

/// Parses `digits` as an unsigned base-10 integer.
///
/// The input must be 1 to 20 ASCII digits with no sign, separators or
/// surrounding whitespace. Leading zeros are allowed.
///
/// # Errors
///
/// - [`ParseError::EmptyInput`] if `digits` is empty.
/// - [`ParseError::LengthOutOfRange`] if `digits` is longer than 20 bytes.
/// - [`ParseError::InvalidDigit`] at the first byte outside `'0'..='9'`.
/// - [`ParseError::Overflow`] if 20 digits encode a value above `u64::MAX`.
///
/// # Examples
///
/// ```
/// use sonic_atoi::{parse_u64_checked, ParseError};
///
/// assert_eq!(parse_u64_checked(b"1234"), Ok(1234));
/// assert_eq!(parse_u64_checked(b"18446744073709551615"), Ok(u64::MAX));
/// assert_eq!(
///     parse_u64_checked(b"1a23"),
///     Err(ParseError::InvalidDigit { index: 1, byte: b'a' })
/// );
/// ```
#[inline]
pub fn parse_u64_checked(digits: &[u8]) -> Result<u64> {
    let len = check_len(digits.len())?;
    let table: &'static [u64; MAX_DIGITS] = &POW10;
    let pows = &table[MAX_DIGITS - len..];

    let chunks = digits.chunks_exact(4);
    let tail = chunks.remainder();
    let head = len - tail.len();
    let mut sum = 0u64;

    // four independent multiply chains per round, joined only at the end
    for (n, (c, w)) in chunks.zip(pows.chunks_exact(4)).enumerate() {
        let at = n * 4;
        let r1 = w[0].wrapping_mul(checked_digit!(c[0], at));
        let r2 = w[1].wrapping_mul(checked_digit!(c[1], at + 1));
        let r3 = w[2].wrapping_mul(checked_digit!(c[2], at + 2));
        let r4 = w[3].wrapping_mul(checked_digit!(c[3], at + 3));
        sum = sum.wrapping_add(r1.wrapping_add(r2).wrapping_add(r3.wrapping_add(r4)));
    }

    for (k, (&b, &w)) in tail.iter().zip(&pows[head..]).enumerate() {
        sum = sum.wrapping_add(w.wrapping_mul(checked_digit!(b, head + k)));
    }

    // Only 20 digits can overflow. With a leading 1 the true value is below
    // 2 * 10^19, so a wrapped sum always drops under 10^19.
    if len == MAX_DIGITS {
        let lead = digit!(digits[0]);
        if lead > 1 || (lead == 1 && sum < table[0]) {
            return Err(ParseError::Overflow);
        }
    }
    Ok(sum)
}

/// Same as [`parse_u64_checked`], with the input given as a `[begin, end)`
/// pointer pair.
///
/// An inverted range is reported as [`ParseError::LengthOutOfRange`] without
/// reading any byte.
///
/// # Safety
///
/// When `begin <= end`, the bytes in `[begin, end)` must be valid for reads and
/// belong to a single allocation.
#[inline]
pub unsafe fn parse_u64_checked_range(begin: *const u8, end: *const u8) -> Result<u64> {
    let len = (end as usize).wrapping_sub(begin as usize);
    check_len(len)?;
    parse_u64_checked(core::slice::from_raw_parts(begin, len))
}

/// Parses `digits` without validating them.
///
/// This is the throughput path for callers that have already classified the
/// bytes. Bytes outside `'0'..='9'` do not cause undefined behavior, but the
/// returned number is meaningless. Twenty-digit values above `u64::MAX` wrap.
///
/// # Safety
///
/// `digits.len()` must be at most 20. An empty slice returns 0.
///
/// # Examples
///
/// ```
/// let n = unsafe { sonic_atoi::parse_u64_unchecked(b"9876543210") };
/// assert_eq!(n, 9876543210);
/// ```
#[inline]
pub unsafe fn parse_u64_unchecked(digits: &[u8]) -> u64 {
    let len = digits.len();
    debug_assert!(len <= MAX_DIGITS, "{len} digits do not fit a u64");
    let table: &'static [u64; MAX_DIGITS] = &POW10;
    let pows = table.get_unchecked(MAX_DIGITS - len..);

    let chunks = digits.chunks_exact(4);
    let tail = chunks.remainder();
    let head = len - tail.len();
    let mut sum = 0u64;

    for (c, w) in chunks.zip(pows.chunks_exact(4)) {
        let r1 = w[0].wrapping_mul(digit!(c[0]));
        let r2 = w[1].wrapping_mul(digit!(c[1]));
        let r3 = w[2].wrapping_mul(digit!(c[2]));
        let r4 = w[3].wrapping_mul(digit!(c[3]));
        sum = sum.wrapping_add(r1.wrapping_add(r2).wrapping_add(r3.wrapping_add(r4)));
    }

    for (&b, &w) in tail.iter().zip(pows.get_unchecked(head..)) {
        sum = sum.wrapping_add(w.wrapping_mul(digit!(b)));
    }
    sum
}

/// Same as [`parse_u64_unchecked`], with the input given as a `[begin, end)`
/// pointer pair.
///
/// # Safety
///
/// `begin <= end`, the bytes in `[begin, end)` must be valid for reads and
/// belong to a single allocation, and there must be at most 20 of them.
#[inline]
pub unsafe fn parse_u64_unchecked_range(begin: *const u8, end: *const u8) -> u64 {
    debug_assert!(begin <= end);
    let len = end.offset_from(begin) as usize;
    parse_u64_unchecked(core::slice::from_raw_parts(begin, len))
}

/// Parses a `&str` of decimal digits. See [`parse_u64_checked`].
#[inline]
pub fn parse_u64_str(s: &str) -> Result<u64> {
    parse_u64_checked(s.as_bytes())
}

/// A `u64` read from plain ASCII digits, for use with [`str::parse`].
///
/// Unlike `u64::from_str`, a leading `+` is rejected and the input is capped
/// at 20 bytes.
///
/// ```
/// use sonic_atoi::AsciiU64;
///
/// let n: AsciiU64 = "00042".parse().unwrap();
/// assert_eq!(n.get(), 42);
/// assert!("+42".parse::<AsciiU64>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AsciiU64(pub u64);

impl AsciiU64 {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for AsciiU64 {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        parse_u64_str(s).map(AsciiU64)
    }
}

impl From<AsciiU64> for u64 {
    fn from(v: AsciiU64) -> Self {
        v.0
    }
}
