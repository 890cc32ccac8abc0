// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Registration Module
//!
//! The hook set a host stores in its operator table, one per operator kind.

use std::fmt;

use crate::enums::error::KernelError;
use crate::kernels::ops::binary::{self, BinaryKernel};
use crate::kernels::ops::state::{KernelOptions, OpState};
use crate::structs::tensor::Tensor;
use crate::traits::allocate::TensorAllocator;

pub type CreateStateFn = fn(KernelOptions) -> OpState;
pub type DestroyStateFn = fn(OpState);
pub type ResolveShapesFn = fn(
    &mut OpState,
    &mut dyn TensorAllocator,
    &Tensor,
    &Tensor,
    &mut Tensor,
) -> Result<(), KernelError>;
pub type EvaluateFn = fn(&OpState, &Tensor, &Tensor, &mut Tensor) -> Result<(), KernelError>;

/// # Registration
///
/// Name plus lifecycle hooks of one binary operator kind.
///
/// ## Example
/// ```rust
/// use mintensor::{HeapAllocator, KernelOptions, Tensor};
/// use mintensor::kernels::ops::floor_div;
///
/// let reg = floor_div::registration();
/// let lhs = Tensor::from_vec([2], vec![-7i32, 7]).unwrap();
/// let rhs = Tensor::from_vec([2], vec![2i32, -2]).unwrap();
/// let mut out = Tensor::empty(lhs.element_type());
///
/// let mut state = (reg.create_state)(KernelOptions::default());
/// (reg.resolve_shapes)(&mut state, &mut HeapAllocator, &lhs, &rhs, &mut out).unwrap();
/// (reg.evaluate)(&state, &lhs, &rhs, &mut out).unwrap();
/// (reg.destroy_state)(state);
///
/// assert_eq!(out.to_vec::<i32>(), Some(vec![-4, -4]));
/// ```
#[derive(Clone, Copy)]
pub struct Registration {
    pub name: &'static str,
    pub create_state: CreateStateFn,
    pub destroy_state: DestroyStateFn,
    pub resolve_shapes: ResolveShapesFn,
    pub evaluate: EvaluateFn,
}

impl Registration {
    /// Hook set for kernel `K`.
    pub fn of<K: BinaryKernel>() -> Self {
        Registration {
            name: K::NAME,
            create_state: binary::create_state_with,
            destroy_state: binary::destroy_state,
            resolve_shapes: resolve_hook::<K>,
            evaluate: binary::evaluate::<K>,
        }
    }
}

fn resolve_hook<K: BinaryKernel>(
    state: &mut OpState,
    alloc: &mut dyn TensorAllocator,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &mut Tensor,
) -> Result<(), KernelError> {
    binary::resolve_shapes::<K, _>(state, alloc, lhs, rhs, out)
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("name", &self.name).finish_non_exhaustive()
    }
}
