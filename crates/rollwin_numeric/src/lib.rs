//! Numeric constraint declarations shared by the rollwin crates
//!
//! Each trait is a closed marker over a fixed set of primitive kinds,
//! so generic containers can name "a float" or "an integer" without
//! accepting arbitrary user types.

use num_traits::PrimInt;

/// Any signed primitive integer.
pub trait SignedInt: PrimInt + Default {}

impl SignedInt for i8 {}
impl SignedInt for i16 {}
impl SignedInt for i32 {}
impl SignedInt for i64 {}
impl SignedInt for isize {}

/// Any unsigned primitive integer.
pub trait UnsignedInt: PrimInt + Default {}

impl UnsignedInt for u8 {}
impl UnsignedInt for u16 {}
impl UnsignedInt for u32 {}
impl UnsignedInt for u64 {}
impl UnsignedInt for usize {}

/// Any primitive floating point number.
///
/// `from_count` builds a divisor from a sample count; the conversion is
/// lossy for counts beyond the mantissa but never fails.
pub trait Float: num_traits::Float + Default {
    fn from_count(count: usize) -> Self;
}

impl Float for f32 {
    fn from_count(count: usize) -> Self {
        count as f32
    }
}

impl Float for f64 {
    fn from_count(count: usize) -> Self {
        count as f64
    }
}

/// Any primitive numeric type.
pub trait Numeric: Default {}

macro_rules! impl_numeric {
    ($($t:ty),*) => { $(impl Numeric for $t {})* };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
