// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Broadcast Plan
//!
//! Maps an output multi-index to a linear offset in each operand.
//!
//! Each operand is padded to the output rank and given row-major strides,
//! with the stride zeroed along any axis where its extent is `1`. Reading at
//! `sum(index[axis] * stride[axis])` then repeats the operand's data along
//! those axes without copying.

use crate::enums::error::KernelError;
use crate::structs::shape::Shape;

/// Output extents plus per-operand broadcast strides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastPlan {
    dims: Vec<usize>,
    lhs_strides: Vec<usize>,
    rhs_strides: Vec<usize>,
}

impl BroadcastPlan {
    /// Builds the plan for reading `lhs` and `rhs` into `output`.
    ///
    /// Every operand axis must match the output extent or be `1`.
    pub fn new(lhs: &Shape, rhs: &Shape, output: &Shape) -> Result<Self, KernelError> {
        if lhs.rank() > output.rank() || rhs.rank() > output.rank() {
            return Err(KernelError::shape_mismatch(
                lhs,
                rhs,
                format!("operand rank exceeds output rank {}", output.rank()),
            ));
        }
        let lhs_strides = broadcast_strides(lhs, output).ok_or_else(|| {
            KernelError::shape_mismatch(lhs, rhs, format!("lhs does not broadcast to {}", output))
        })?;
        let rhs_strides = broadcast_strides(rhs, output).ok_or_else(|| {
            KernelError::shape_mismatch(lhs, rhs, format!("rhs does not broadcast to {}", output))
        })?;
        Ok(BroadcastPlan {
            dims: output.dims().to_vec(),
            lhs_strides,
            rhs_strides,
        })
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn lhs_strides(&self) -> &[usize] {
        &self.lhs_strides
    }

    #[inline]
    pub fn rhs_strides(&self) -> &[usize] {
        &self.rhs_strides
    }

    /// Linear `(lhs, rhs)` offsets for an output multi-index.
    pub fn source_offsets(&self, index: &[usize]) -> (usize, usize) {
        debug_assert_eq!(index.len(), self.rank());
        let mut l = 0usize;
        let mut r = 0usize;
        for axis in 0..self.rank() {
            l += index[axis] * self.lhs_strides[axis];
            r += index[axis] * self.rhs_strides[axis];
        }
        (l, r)
    }
}

/// Row-major strides of `operand` padded to `output`'s rank, zero on repeated axes.
///
/// `None` if some axis is neither `1` nor the output extent, or the strides
/// overflow.
fn broadcast_strides(operand: &Shape, output: &Shape) -> Option<Vec<usize>> {
    let padded = Shape::new(operand.padded(output.rank()));
    let mut strides = padded.strides()?;
    for axis in 0..output.rank() {
        if padded[axis] == 1 {
            strides[axis] = 0;
        } else if padded[axis] != output[axis] {
            return None;
        }
    }
    Some(strides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_vector_strides() {
        let plan =
            BroadcastPlan::new(&Shape::from([2, 3]), &Shape::from([1, 3]), &Shape::from([2, 3]))
                .unwrap();
        assert_eq!(plan.lhs_strides(), &[3, 1]);
        assert_eq!(plan.rhs_strides(), &[0, 1]);
        assert_eq!(plan.source_offsets(&[1, 2]), (5, 2));
    }

    #[test]
    fn test_padded_rank_strides() {
        let plan =
            BroadcastPlan::new(&Shape::from([4, 1]), &Shape::from([5]), &Shape::from([4, 5]))
                .unwrap();
        assert_eq!(plan.lhs_strides(), &[1, 0]);
        assert_eq!(plan.rhs_strides(), &[0, 1]);
        assert_eq!(plan.source_offsets(&[3, 4]), (3, 4));
    }

    #[test]
    fn test_rejects_operand_that_does_not_fit_output() {
        let err =
            BroadcastPlan::new(&Shape::from([2, 3]), &Shape::from([3]), &Shape::from([2, 4]))
                .unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { .. }));
    }
}
