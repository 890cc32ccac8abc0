// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Shape Module
//!
//! Ordered per-axis extents of a tensor.
//!
//! Shapes carry an explicit rank that may differ between two operands.
//! For broadcasting they are compared right-aligned, with missing leading
//! axes treated as extent `1`.

use std::fmt::{Display, Formatter};
use std::ops::Index;

/// # Shape
///
/// Row-major axis extents.
///
/// ### Description
/// - Rank `0` is a scalar holding exactly one element.
/// - An extent of `0` is valid and yields an empty tensor, however large the
/// other extents are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Constructs a shape from its extents, outermost first.
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape { dims: dims.into() }
    }

    /// Rank-0 shape.
    #[inline]
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total element count, the product of all extents.
    ///
    /// `None` when the product overflows `usize`. Any zero extent gives
    /// `Some(0)` without multiplying the rest.
    pub fn num_elements(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Row-major strides, in elements. `None` on overflow.
    pub fn strides(&self) -> Option<Vec<usize>> {
        let mut strides = vec![0usize; self.rank()];
        let mut acc = 1usize;
        for axis in (0..self.rank()).rev() {
            strides[axis] = acc;
            acc = acc.checked_mul(self.dims[axis])?;
        }
        Some(strides)
    }

    /// Extents right-aligned to `rank`, padded with leading `1`s.
    ///
    /// `rank` must be at least `self.rank()`.
    pub fn padded(&self, rank: usize) -> Vec<usize> {
        debug_assert!(rank >= self.rank(), "cannot pad to a smaller rank");
        let mut out = vec![1usize; rank - self.rank()];
        out.extend_from_slice(&self.dims);
        out
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape { dims: dims.to_vec() }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape { dims: dims.to_vec() }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape() {
        let s = Shape::scalar();
        assert_eq!(s.rank(), 0);
        assert_eq!(s.num_elements(), Some(1));
        assert_eq!(s.strides(), Some(vec![]));
    }

    #[test]
    fn test_strides_row_major() {
        let s = Shape::from([2, 3, 4]);
        assert_eq!(s.strides(), Some(vec![12, 4, 1]));
        assert_eq!(s.num_elements(), Some(24));
    }

    #[test]
    fn test_padded() {
        let s = Shape::from([3]);
        assert_eq!(s.padded(3), vec![1, 1, 3]);
    }

    #[test]
    fn test_zero_extent_is_empty() {
        let s = Shape::from([2, 0, 5]);
        assert!(s.is_empty());
        assert_eq!(s.num_elements(), Some(0));
    }

    #[test]
    fn test_zero_extent_short_circuits_overflow() {
        let big = usize::MAX / 2 + 1;
        let s = Shape::from([big, big, 0]);
        assert_eq!(s.num_elements(), Some(0));
        assert!(s.is_empty());
        assert_eq!(Shape::from([0, big, big]).num_elements(), Some(0));
    }

    #[test]
    fn test_overflowing_extents() {
        let big = usize::MAX / 2 + 1;
        let s = Shape::from([big, 4]);
        assert_eq!(s.num_elements(), None);
        assert!(!s.is_empty());
        assert_eq!(s.strides(), None);
        assert_eq!(Shape::from([0, big, big]).strides(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::from([1, 3]).to_string(), "[1, 3]");
        assert_eq!(Shape::scalar().to_string(), "[]");
    }
}
