// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Binary Operator Module
//!
//! Lifecycle shared by every broadcasting elementwise binary kernel.
//!
//! ## Pipeline
//! 1. [`resolve_shapes`] - once per shape change. Checks operand types,
//!    resolves the broadcast output shape, and asks the host allocator to
//!    size the output.
//! 2. [`evaluate`] - once per invocation. Re-checks types, dispatches on the
//!    element type, scans the right-hand operand for domain violations, then
//!    runs the flat or broadcast loop.
//!
//! Every check completes before the first write, so a failed call leaves
//! the output untouched.

use log::{debug, error};
use num_traits::Zero;

use crate::dispatch_floor_type;
use crate::enums::element_type::ElementType;
use crate::enums::error::KernelError;
use crate::kernels::arithmetic::floor::FloorArith;
use crate::kernels::broadcast::{BroadcastPlan, resolve_output_shape};
use crate::kernels::ops::state::{KernelOptions, OpState, Resolution};
use crate::kernels::routing::{
    FLOOR_TYPES, binary_function, broadcast_binary_function, check_operand_types,
};
use crate::structs::tensor::Tensor;
use crate::traits::allocate::TensorAllocator;

/// A scalar binary operation lifted over tensors by this module.
///
/// Implementors are zero-sized markers; the element type is chosen per call
/// by the dispatcher.
pub trait BinaryKernel {
    /// Operator name used in logs and errors.
    const NAME: &'static str;

    /// Element types the kernel evaluates. Must be a subset of the floor
    /// dispatch set.
    const SUPPORTED: &'static [ElementType] = FLOOR_TYPES;

    /// Rejects right-hand operands outside the operation's domain.
    ///
    /// Runs over the whole operand before any output is written.
    fn check_domain<T: FloorArith>(_rhs: &[T]) -> Result<(), KernelError> {
        Ok(())
    }

    fn apply<T: FloorArith>(lhs: T, rhs: T) -> T;
}

/// Fails with [`KernelError::DomainError`] if any element of `rhs` is zero.
pub fn reject_zero_divisor<T: FloorArith>(op: &'static str, rhs: &[T]) -> Result<(), KernelError> {
    if let Some(pos) = rhs.iter().position(|v| v.is_zero()) {
        error!("{}: Division by 0 (divisor element {})", op, pos);
        return Err(KernelError::DomainError {
            op,
            message: format!("division by zero at divisor element {}", pos),
        });
    }
    Ok(())
}

/// Creates state with default options.
pub fn create_state() -> OpState {
    OpState::new(KernelOptions::default())
}

/// Creates state with explicit options.
pub fn create_state_with(options: KernelOptions) -> OpState {
    OpState::new(options)
}

/// Releases per-instance state.
pub fn destroy_state(state: OpState) {
    drop(state);
}

/// Resolves the output shape for `lhs` and `rhs` and sizes `out` through `alloc`.
///
/// On success `out` has the operands' element type and the broadcast shape,
/// and `state` records the shapes for [`evaluate`]. On failure `state` is
/// left unresolved.
pub fn resolve_shapes<K, A>(
    state: &mut OpState,
    alloc: &mut A,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &mut Tensor,
) -> Result<(), KernelError>
where
    K: BinaryKernel,
    A: TensorAllocator + ?Sized,
{
    state.invalidate();

    let dtype = check_operand_types(K::NAME, K::SUPPORTED, lhs, rhs)?;
    let resolved = resolve_output_shape(lhs.shape(), rhs.shape(), state.options().max_rank)
        .inspect_err(|e| error!("{}: {}", K::NAME, e))?;

    alloc
        .allocate_or_resize(out, dtype, &resolved.output)
        .inspect_err(|e| error!("{}: {}", K::NAME, e))?;

    debug!(
        "{}: resolved {} x {} -> {} as {} (broadcast: {})",
        K::NAME,
        lhs.shape(),
        rhs.shape(),
        resolved.output,
        dtype,
        resolved.requires_broadcast
    );
    state.record(
        Resolution {
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
            output: resolved.output,
            dtype,
        },
        resolved.requires_broadcast,
    );
    Ok(())
}

/// Computes `out = K(lhs, rhs)` elementwise.
///
/// Requires a prior successful [`resolve_shapes`] for the current operand
/// shapes and an output sized by it.
pub fn evaluate<K: BinaryKernel>(
    state: &OpState,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &mut Tensor,
) -> Result<(), KernelError> {
    let dtype = check_operand_types(K::NAME, K::SUPPORTED, lhs, rhs)?;
    check_resolution(K::NAME, state, lhs, rhs, out)?;
    if out.element_type() != dtype {
        return Err(KernelError::TypeMismatch {
            lhs: dtype,
            rhs: out.element_type(),
        });
    }
    dispatch_floor_type!(dtype, K::NAME, T => eval_typed::<K, T>(state, lhs, rhs, out))
}

/// Confirms `state` was resolved for exactly these shapes.
fn check_resolution(
    op: &'static str,
    state: &OpState,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &Tensor,
) -> Result<(), KernelError> {
    let Some(resolution) = state.resolution() else {
        error!("{}: evaluate called before shapes were resolved", op);
        return Err(KernelError::shape_mismatch(
            lhs.shape(),
            rhs.shape(),
            "shapes have not been resolved for this operator",
        ));
    };
    if &resolution.lhs != lhs.shape() || &resolution.rhs != rhs.shape() {
        error!("{}: input shapes changed since resolution", op);
        return Err(KernelError::shape_mismatch(
            lhs.shape(),
            rhs.shape(),
            format!(
                "inputs were resolved as {} and {}; resolve shapes again",
                resolution.lhs, resolution.rhs
            ),
        ));
    }
    if &resolution.output != out.shape() {
        return Err(KernelError::shape_mismatch(
            lhs.shape(),
            rhs.shape(),
            format!("output has shape {}, expected {}", out.shape(), resolution.output),
        ));
    }
    debug_assert_eq!(resolution.dtype, lhs.element_type());
    Ok(())
}

fn eval_typed<K: BinaryKernel, T: FloorArith>(
    state: &OpState,
    lhs: &Tensor,
    rhs: &Tensor,
    out: &mut Tensor,
) -> Result<(), KernelError> {
    let mismatch = |found: &Tensor| KernelError::TypeMismatch {
        lhs: T::DTYPE,
        rhs: found.element_type(),
    };
    let l = lhs.as_slice::<T>().ok_or_else(|| mismatch(lhs))?;
    let r = rhs.as_slice::<T>().ok_or_else(|| mismatch(rhs))?;

    K::check_domain(r)?;
    if out.is_empty() {
        return Ok(());
    }

    let plan = if state.requires_broadcast() {
        Some(BroadcastPlan::new(lhs.shape(), rhs.shape(), out.shape())?)
    } else {
        None
    };

    let out_type = out.element_type();
    let o = out.as_mut_slice::<T>().ok_or(KernelError::TypeMismatch {
        lhs: T::DTYPE,
        rhs: out_type,
    })?;
    match plan {
        Some(plan) => broadcast_binary_function(&plan, l, r, o, K::apply::<T>),
        None => binary_function(l, r, o, K::apply::<T>),
    }
    Ok(())
}
