// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Floor Modulo Kernel
//!
//! Companion of [`crate::kernels::ops::floor_div`]: the remainder whose sign
//! follows the divisor, so that `floor_div(a, b) * b + floor_mod(a, b) == a`.

use crate::enums::error::KernelError;
use crate::kernels::arithmetic::floor::FloorArith;
use crate::kernels::ops::binary::{self, BinaryKernel, reject_zero_divisor};
use crate::kernels::ops::registration::Registration;
use crate::kernels::ops::state::{KernelOptions, OpState};
use crate::structs::allocator::HeapAllocator;
use crate::structs::tensor::Tensor;
use crate::traits::allocate::TensorAllocator;

pub const NAME: &str = "floor_mod";

/// Floor modulo marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorMod;

impl BinaryKernel for FloorMod {
    const NAME: &'static str = NAME;

    fn check_domain<T: FloorArith>(rhs: &[T]) -> Result<(), KernelError> {
        reject_zero_divisor(NAME, rhs)
    }

    #[inline]
    fn apply<T: FloorArith>(lhs: T, rhs: T) -> T {
        lhs.floor_mod(rhs)
    }
}

pub fn create_state() -> OpState {
    binary::create_state()
}

pub fn create_state_with(options: KernelOptions) -> OpState {
    binary::create_state_with(options)
}

pub fn destroy_state(state: OpState) {
    binary::destroy_state(state)
}

pub fn resolve_shapes<A: TensorAllocator + ?Sized>(
    state: &mut OpState,
    alloc: &mut A,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &mut Tensor,
) -> Result<(), KernelError> {
    binary::resolve_shapes::<FloorMod, A>(state, alloc, lhs, rhs, out)
}

pub fn evaluate(state: &OpState, lhs: &Tensor, rhs: &Tensor, out: &mut Tensor) -> Result<(), KernelError> {
    binary::evaluate::<FloorMod>(state, lhs, rhs, out)
}

pub fn registration() -> Registration {
    Registration::of::<FloorMod>()
}

/// One-shot floor modulo into a freshly allocated tensor.
pub fn floor_mod(lhs: &Tensor, rhs: &Tensor) -> Result<Tensor, KernelError> {
    let mut state = create_state();
    let mut out = Tensor::empty(lhs.element_type());
    resolve_shapes(&mut state, &mut HeapAllocator, lhs, rhs, &mut out)?;
    evaluate(&state, lhs, rhs, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_signs() {
        let a = Tensor::from_vec([4], vec![-7i32, 7, -7, 7]).unwrap();
        let b = Tensor::from_vec([4], vec![2i32, -2, -2, 2]).unwrap();
        let out = floor_mod(&a, &b).unwrap();
        assert_eq!(out.to_vec::<i32>(), Some(vec![1, -1, -1, 1]));
    }

    #[test]
    fn test_floor_mod_broadcast_column() {
        let a = Tensor::from_vec([2, 3], vec![5i8, 6, 7, -5, -6, -7]).unwrap();
        let b = Tensor::from_vec([2, 1], vec![3i8, -4]).unwrap();
        let out = floor_mod(&a, &b).unwrap();
        assert_eq!(out.to_vec::<i8>(), Some(vec![2, 0, 1, -1, -2, -3]));
    }

    #[test]
    fn test_floor_mod_float() {
        let a = Tensor::from_vec([2], vec![-7.5f32, 7.5]).unwrap();
        let b = Tensor::from_vec([2], vec![2.0f32, -2.0]).unwrap();
        let out = floor_mod(&a, &b).unwrap();
        assert_eq!(out.to_vec::<f32>(), Some(vec![0.5, -0.5]));
    }

    #[test]
    fn test_floor_mod_zero_divisor() {
        let a = Tensor::full([3], 4i16);
        let b = Tensor::from_vec([3], vec![1i16, 0, 2]).unwrap();
        assert!(matches!(floor_mod(&a, &b), Err(KernelError::DomainError { op: "floor_mod", .. })));
    }
}
