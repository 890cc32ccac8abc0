// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # TensorAllocator Trait Module
//!
//! The seam through which kernels ask the host to size an output tensor.

use crate::enums::element_type::ElementType;
use crate::enums::error::KernelError;
use crate::structs::shape::Shape;
use crate::structs::tensor::Tensor;

/// Host-side output allocation.
///
/// Called once per successful shape resolution. Implementations must leave
/// `tensor` with element type `dtype`, shape `shape` and exactly
/// `shape.num_elements()` elements, or return
/// [`KernelError::AllocationFailure`] and leave it untouched.
pub trait TensorAllocator {
    fn allocate_or_resize(
        &mut self,
        tensor: &mut Tensor,
        dtype: ElementType,
        shape: &Shape,
    ) -> Result<(), KernelError>;
}

impl<A: TensorAllocator + ?Sized> TensorAllocator for &mut A {
    fn allocate_or_resize(
        &mut self,
        tensor: &mut Tensor,
        dtype: ElementType,
        shape: &Shape,
    ) -> Result<(), KernelError> {
        (**self).allocate_or_resize(tensor, dtype, shape)
    }
}
