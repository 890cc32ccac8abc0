// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Floor Arithmetic Module
//!
//! Scalar floor division and floor modulo.
//!
//! Integer results round toward negative infinity, not toward zero, so
//! `-7 floor_div 2 == -4` where plain `/` gives `-3`. The modulo result takes
//! the sign of the divisor. Callers guarantee a non-zero divisor.

use crate::traits::type_unions::{Float, Integer, Numeric};

/// Floor division for an integer pair.
///
/// `MIN / -1` wraps to `MIN`.
#[inline]
pub fn int_floor_div<T: Integer>(lhs: T, rhs: T) -> T {
    let zero = T::zero();
    match (lhs.checked_div(&rhs), lhs.checked_rem(&rhs)) {
        (Some(q), Some(r)) => {
            if r != zero && ((r < zero) != (rhs < zero)) {
                q - T::one()
            } else {
                q
            }
        }
        // Only reachable for MIN / -1 once zero divisors are excluded.
        _ => T::min_value(),
    }
}

/// Floor modulo for an integer pair.
#[inline]
pub fn int_floor_mod<T: Integer>(lhs: T, rhs: T) -> T {
    let zero = T::zero();
    match lhs.checked_rem(&rhs) {
        Some(r) if r != zero && ((r < zero) != (rhs < zero)) => r + rhs,
        Some(r) => r,
        None => zero,
    }
}

/// `floor(lhs / rhs)`.
#[inline]
pub fn float_floor_div<T: Float>(lhs: T, rhs: T) -> T {
    (lhs / rhs).floor()
}

/// Truncated remainder shifted into the divisor's sign.
#[inline]
pub fn float_floor_mod<T: Float>(lhs: T, rhs: T) -> T {
    let zero = T::zero();
    let r = lhs % rhs;
    if r != zero && ((r < zero) != (rhs < zero)) {
        r + rhs
    } else {
        r
    }
}

/// Element types that support the floor family of kernels.
pub trait FloorArith: Numeric {
    fn floor_div(self, rhs: Self) -> Self;
    fn floor_mod(self, rhs: Self) -> Self;
}

macro_rules! impl_floor_int {
    ($($t:ty),*) => {
        $(
            impl FloorArith for $t {
                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    int_floor_div(self, rhs)
                }
                #[inline]
                fn floor_mod(self, rhs: Self) -> Self {
                    int_floor_mod(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_floor_float {
    ($($t:ty),*) => {
        $(
            impl FloorArith for $t {
                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    float_floor_div(self, rhs)
                }
                #[inline]
                fn floor_mod(self, rhs: Self) -> Self {
                    float_floor_mod(self, rhs)
                }
            }
        )*
    };
}

impl_floor_int!(i8, i16, i32, i64, u8);
impl_floor_float!(f32, f64);
