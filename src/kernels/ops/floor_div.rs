// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Floor Division Kernel
//!
//! `out = floor(lhs / rhs)` with broadcasting, over `float32`, `int32`,
//! `int16` and `int8` operands of the same type.
//!
//! Integer results round toward negative infinity. Any zero in `rhs` fails
//! the call with a domain error before anything is written.

use crate::enums::error::KernelError;
use crate::kernels::arithmetic::floor::FloorArith;
use crate::kernels::ops::binary::{self, BinaryKernel, reject_zero_divisor};
use crate::kernels::ops::registration::Registration;
use crate::kernels::ops::state::{KernelOptions, OpState};
use crate::structs::allocator::HeapAllocator;
use crate::structs::tensor::Tensor;
use crate::traits::allocate::TensorAllocator;

/// Registered operator name.
pub const NAME: &str = "floor_div";

/// Floor division marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorDiv;

impl BinaryKernel for FloorDiv {
    const NAME: &'static str = NAME;

    fn check_domain<T: FloorArith>(rhs: &[T]) -> Result<(), KernelError> {
        reject_zero_divisor(NAME, rhs)
    }

    #[inline]
    fn apply<T: FloorArith>(lhs: T, rhs: T) -> T {
        lhs.floor_div(rhs)
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
    binary::resolve_shapes::<FloorDiv, A>(state, alloc, lhs, rhs, out)
}

pub fn evaluate(state: &OpState, lhs: &Tensor, rhs: &Tensor, out: &mut Tensor) -> Result<(), KernelError> {
    binary::evaluate::<FloorDiv>(state, lhs, rhs, out)
}

pub fn registration() -> Registration {
    Registration::of::<FloorDiv>()
}

/// One-shot floor division into a freshly allocated tensor.
///
/// Uses default options, so broadcasting is limited to rank 4.
pub fn floor_div(lhs: &Tensor, rhs: &Tensor) -> Result<Tensor, KernelError> {
    let mut state = create_state();
    let mut out = Tensor::empty(lhs.element_type());
    resolve_shapes(&mut state, &mut HeapAllocator, lhs, rhs, &mut out)?;
    evaluate(&state, lhs, rhs, &mut out)?;
    Ok(out)
}
