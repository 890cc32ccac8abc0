// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Dispatch Module
//!
//! Selects the monomorphised evaluation path for an operand pair from its
//! runtime [`ElementType`] tag.
//!
//! The supported set is closed, so dispatch is a plain `match` over the tag
//! rather than a trait object. No conversion or promotion ever happens here.

use log::error;

use crate::enums::element_type::ElementType;
use crate::enums::error::KernelError;
use crate::structs::tensor::Tensor;

/// Element types accepted by the floor family of kernels.
pub const FLOOR_TYPES: &[ElementType] = &[
    ElementType::Float32,
    ElementType::Int32,
    ElementType::Int16,
    ElementType::Int8,
];

/// Checks that both operands share one element type from `supported`.
///
/// A type mismatch is reported before support is checked, so a
/// `float32`/`int64` pair is a [`KernelError::TypeMismatch`].
pub fn check_operand_types(
    op: &'static str,
    supported: &[ElementType],
    lhs: &Tensor,
    rhs: &Tensor,
) -> Result<ElementType, KernelError> {
    let (lt, rt) = (lhs.element_type(), rhs.element_type());
    if lt != rt {
        error!("{}: operand types differ ({} vs {})", op, lt, rt);
        return Err(KernelError::TypeMismatch { lhs: lt, rhs: rt });
    }
    if !supported.contains(&lt) {
        error!("Type '{}' is not supported by {}.", lt, op);
        return Err(KernelError::UnsupportedType { dtype: lt, op });
    }
    Ok(lt)
}

/// Binds `$T` to the Rust type behind `$dtype` and evaluates `$body`.
///
/// Tags outside [`FLOOR_TYPES`] produce [`KernelError::UnsupportedType`] for `$op`.
///
/// ```ignore
/// dispatch_floor_type!(dtype, "floor_div", T => eval_typed::<FloorDiv, T>(state, lhs, rhs, out))
/// ```
#[macro_export]
macro_rules! dispatch_floor_type {
    ($dtype:expr, $op:expr, $T:ident => $body:expr) => {
        match $dtype {
            $crate::ElementType::Float32 => {
                type $T = f32;
                $body
            }
            $crate::ElementType::Int32 => {
                type $T = i32;
                $body
            }
            $crate::ElementType::Int16 => {
                type $T = i16;
                $body
            }
            $crate::ElementType::Int8 => {
                type $T = i8;
                $body
            }
            other => Err($crate::KernelError::UnsupportedType { dtype: other, op: $op }),
        }
    };
}
