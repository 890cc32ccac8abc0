// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use num_traits::{CheckedRem, Float as NumFloat, Num, NumCast, PrimInt};

use crate::traits::element::Element;

/// Trait for types valid as numerical tensor elements.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the crate's type universe.
pub trait Numeric: Element + Num + NumCast + PartialOrd {}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}

/// Trait for types valid as float tensor elements.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: Numeric + NumFloat {}
impl Float for f32 {}
impl Float for f64 {}

/// Trait for types valid as integer tensor elements.
pub trait Integer: Numeric + PrimInt + CheckedRem {}
impl Integer for i8 {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}
impl Integer for u8 {}
