// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Tensor Module - *Host-Owned N-Dimensional Array*
//!
//! The unit of data exchanged between a host graph and the kernels.
//!
//! The host owns every tensor. Kernels borrow inputs immutably and the output
//! mutably for the duration of one call, and only ever resize storage through
//! the host's [`crate::TensorAllocator`].

use std::fmt;

use crate::enums::element_type::ElementType;
use crate::enums::error::KernelError;
use crate::enums::tensor_data::TensorData;
use crate::structs::shape::Shape;
use crate::traits::element::Element;

/// # Tensor
///
/// Shape plus homogeneous, row-major typed storage.
///
/// ### Properties
/// - `name`: Optional tensor name, used in logs and diagnostics.
/// - `shape`: Axis extents.
/// - `data`: Typed storage whose length always equals `shape.num_elements()`.
///
/// ## Example
/// ```rust
/// use mintensor::{Shape, Tensor};
///
/// let t = Tensor::from_vec([2, 2], vec![1i32, 2, 3, 4]).unwrap();
/// assert_eq!(t.len(), 4);
/// assert_eq!(t.get::<i32>(3), Some(4));
/// ```
pub struct Tensor {
    name: Option<String>,
    shape: Shape,
    data: TensorData,
    charge: Option<Charge>,
}

/// Bytes an allocator has charged against its budget for a tensor's storage.
///
/// Not carried over by `Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Charge {
    pub(crate) allocator: u64,
    pub(crate) bytes: usize,
}

impl Tensor {
    /// Constructs a tensor, validating that `data` fills `shape` exactly.
    ///
    /// A shape whose element count overflows `usize` reports `expected` as
    /// `usize::MAX`.
    pub fn new(shape: impl Into<Shape>, data: TensorData) -> Result<Self, KernelError> {
        let shape = shape.into();
        let expected = shape.num_elements().unwrap_or(usize::MAX);
        if expected != data.len() {
            return Err(KernelError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Tensor { name: None, shape, data, charge: None })
    }

    /// Constructs a tensor from a typed vector.
    pub fn from_vec<T: Element>(shape: impl Into<Shape>, values: Vec<T>) -> Result<Self, KernelError> {
        Tensor::new(shape, TensorData::from(values))
    }

    /// Constructs a tensor of `shape` where every element is `value`.
    ///
    /// # Panics
    /// Like `vec!`, if the element count exceeds what can be allocated.
    pub fn full<T: Element>(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        let values = vec![value; shape.num_elements().unwrap_or(usize::MAX)];
        Tensor { name: None, data: TensorData::from(values), shape, charge: None }
    }

    /// Rank-0 tensor holding one value.
    pub fn scalar<T: Element>(value: T) -> Self {
        Tensor::full(Shape::scalar(), value)
    }

    /// Unsized placeholder of `dtype`, typically an output awaiting shape resolution.
    pub fn empty(dtype: ElementType) -> Self {
        Tensor {
            name: None,
            shape: Shape::new([0]),
            data: TensorData::zeros(dtype, 0),
            charge: None,
        }
    }

    /// Attaches a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    /// Element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Typed view of the elements, `None` when `T` is not the stored type.
    #[inline]
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        self.data.as_slice::<T>()
    }

    /// Mutable typed view of the elements, `None` when `T` is not the stored type.
    #[inline]
    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        self.data.as_mut_slice::<T>()
    }

    /// Element at linear index `idx`.
    #[inline]
    pub fn get<T: Element>(&self, idx: usize) -> Option<T> {
        self.as_slice::<T>().and_then(|s| s.get(idx).copied())
    }

    /// Copies the elements out into a `Vec`.
    pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
        self.as_slice::<T>().map(|s| s.to_vec())
    }

    /// Replaces shape and storage in one step.
    ///
    /// Reserved for [`crate::TensorAllocator`] implementations, which own the
    /// decision of how storage is sized.
    ///
    /// Fails with [`KernelError::AllocationFailure`], leaving the tensor
    /// untouched, when the element count of `shape` overflows `usize`.
    pub fn reset(&mut self, dtype: ElementType, shape: Shape) -> Result<(), KernelError> {
        let len = shape.num_elements().ok_or_else(|| KernelError::AllocationFailure {
            requested: usize::MAX,
            message: Some(format!("element count of {} overflows usize", shape)),
        })?;
        if self.element_type() != dtype || self.len() != len {
            self.data = TensorData::zeros(dtype, len);
        }
        self.shape = shape;
        Ok(())
    }

    #[inline]
    pub(crate) fn charge(&self) -> Option<Charge> {
        self.charge
    }

    #[inline]
    pub(crate) fn set_charge(&mut self, charge: Option<Charge>) {
        self.charge = charge;
    }

    /// Label used in log lines.
    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

impl Clone for Tensor {
    fn clone(&self) -> Self {
        Tensor {
            name: self.name.clone(),
            shape: self.shape.clone(),
            data: self.data.clone(),
            charge: None,
        }
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.shape == other.shape && self.data == other.data
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("name", &self.label())
            .field("shape", &self.shape)
            .field("dtype", &format_args!("{}", self.element_type()))
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = Tensor::from_vec([2, 3], vec![1i32; 5]).unwrap_err();
        assert_eq!(err, KernelError::LengthMismatch { expected: 6, found: 5 });
    }

    #[test]
    fn test_scalar() {
        let t = Tensor::scalar(3.5f32);
        assert_eq!(t.shape().rank(), 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get::<f32>(0), Some(3.5));
    }

    #[test]
    fn test_reset_keeps_storage_when_size_matches() {
        let mut t = Tensor::from_vec([2, 3], vec![1i16, 2, 3, 4, 5, 6]).unwrap();
        t.reset(ElementType::Int16, Shape::from([3, 2])).unwrap();
        assert_eq!(t.shape(), &Shape::from([3, 2]));
        assert_eq!(t.to_vec::<i16>(), Some(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_reset_changes_type() {
        let mut t = Tensor::empty(ElementType::Float32);
        t.reset(ElementType::Int8, Shape::from([4])).unwrap();
        assert_eq!(t.element_type(), ElementType::Int8);
        assert_eq!(t.to_vec::<i8>(), Some(vec![0; 4]));
    }

    #[test]
    fn test_zero_extent_with_huge_axes() {
        let big = usize::MAX / 2 + 1;
        let t = Tensor::from_vec([big, big, 0], Vec::<i32>::new()).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.shape(), &Shape::from([big, big, 0]));
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let big = usize::MAX / 2 + 1;
        let err = Tensor::from_vec([big, 4], vec![1i32; 3]).unwrap_err();
        assert_eq!(err, KernelError::LengthMismatch { expected: usize::MAX, found: 3 });
    }

    #[test]
    fn test_reset_overflow_leaves_tensor_untouched() {
        let big = usize::MAX / 2 + 1;
        let mut t = Tensor::full([2], 7i32);
        let err = t.reset(ElementType::Int32, Shape::from([big, 4])).unwrap_err();
        assert!(matches!(err, KernelError::AllocationFailure { .. }));
        assert_eq!(t.shape(), &Shape::from([2]));
        assert_eq!(t.to_vec::<i32>(), Some(vec![7, 7]));
    }

    #[test]
    fn test_clone_drops_charge() {
        let mut t = Tensor::full([2], 1i8);
        t.set_charge(Some(Charge { allocator: 1, bytes: 2 }));
        let copy = t.clone();
        assert_eq!(copy.charge(), None);
        assert_eq!(copy, t);
    }

    #[test]
    fn test_debug_uses_name() {
        let t = Tensor::full([2], 1i32).with_name("lhs");
        let dbg = format!("{:?}", t);
        assert!(dbg.contains("lhs"));
        assert!(dbg.contains("int32"));
    }
}
