// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Broadcast Shape Resolution
//!
//! NumPy-style shape rules:
//! 1. Align shapes from the right
//! 2. Each aligned pair must be equal, or one of them `1`
//! 3. Missing leading axes are treated as `1`
//!
//! The output extent of each pair is the larger of the two, so a `(0, 1)`
//! pair yields `0`.

use crate::enums::error::KernelError;
use crate::structs::shape::Shape;

/// Result of resolving two operand shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShape {
    pub output: Shape,
    pub requires_broadcast: bool,
}

/// `true` when both shapes have the same rank and extents.
#[inline]
pub fn have_same_shapes(lhs: &Shape, rhs: &Shape) -> bool {
    lhs.dims() == rhs.dims()
}

/// Computes the broadcast output shape of `lhs` and `rhs`.
///
/// Errors with [`KernelError::ShapeMismatch`] on the first incompatible axis pair.
pub fn broadcast_shape(lhs: &Shape, rhs: &Shape) -> Result<Shape, KernelError> {
    let rank = lhs.rank().max(rhs.rank());
    let l = lhs.padded(rank);
    let r = rhs.padded(rank);

    let mut dims = Vec::with_capacity(rank);
    for axis in 0..rank {
        let (a, b) = (l[axis], r[axis]);
        let extent = if a == b || b == 1 {
            a
        } else if a == 1 {
            b
        } else {
            return Err(KernelError::shape_mismatch(
                lhs,
                rhs,
                format!("axis {} has extents {} and {}", axis, a, b),
            ));
        };
        dims.push(extent);
    }
    Ok(Shape::new(dims))
}

/// Resolves the output shape and whether evaluation must broadcast.
///
/// Identical shapes short-circuit to the flat path at any rank. A broadcast
/// output of rank above `max_rank`, or whose element count overflows `usize`,
/// is rejected with [`KernelError::ShapeMismatch`].
pub fn resolve_output_shape(
    lhs: &Shape,
    rhs: &Shape,
    max_rank: usize,
) -> Result<ResolvedShape, KernelError> {
    if have_same_shapes(lhs, rhs) {
        return Ok(ResolvedShape {
            output: lhs.clone(),
            requires_broadcast: false,
        });
    }
    let output = broadcast_shape(lhs, rhs)?;
    if output.num_elements().is_none() {
        return Err(KernelError::shape_mismatch(
            lhs,
            rhs,
            format!("element count of broadcast shape {} overflows usize", output),
        ));
    }
    if output.rank() > max_rank {
        return Err(KernelError::shape_mismatch(
            lhs,
            rhs,
            format!(
                "broadcast rank {} exceeds the supported maximum of {}",
                output.rank(),
                max_rank
            ),
        ));
    }
    Ok(ResolvedShape {
        output,
        requires_broadcast: true,
    })
}
