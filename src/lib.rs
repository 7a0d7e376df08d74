//! Numeric primitives for hot parsing loops.
//!
//! - [`parse_u64_checked`] and [`parse_u64_unchecked`] turn up to 20 ASCII
//!   digits into a `u64` with a power-of-ten table and a loop unrolled by four.
//! - [`leading_zero_count_u64`] counts the leading zero bits of a `u64` from a
//!   32-bit count primitive, [`clz32`], chosen per target.
//!
//! Every function here is pure and keeps no state, so any thread may call in
//! at any time.

mod arch;
mod atoi;
mod clz;
mod error;

pub use crate::atoi::{
    parse_u64_checked, parse_u64_checked_range, parse_u64_str, parse_u64_unchecked,
    parse_u64_unchecked_range, AsciiU64, MAX_DIGITS, POW10,
};
pub use crate::clz::{clz32, leading_zero_count_u64};
pub use crate::error::{ParseError, Result};
