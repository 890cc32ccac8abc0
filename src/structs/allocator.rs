// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Allocator Module
//!
//! Ready-made [`TensorAllocator`] implementations for hosts that do not
//! manage an arena of their own.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::enums::element_type::ElementType;
use crate::enums::error::KernelError;
use crate::structs::shape::Shape;
use crate::structs::tensor::{Charge, Tensor};
use crate::traits::allocate::TensorAllocator;

/// Sizes outputs on the heap without limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl TensorAllocator for HeapAllocator {
    fn allocate_or_resize(
        &mut self,
        tensor: &mut Tensor,
        dtype: ElementType,
        shape: &Shape,
    ) -> Result<(), KernelError> {
        debug!("allocating {} as {} {}", tensor.label(), dtype, shape);
        tensor.reset(dtype, shape.clone())
    }
}

static NEXT_ALLOCATOR_ID: AtomicU64 = AtomicU64::new(1);

/// # BoundedAllocator
///
/// Heap allocator with a byte budget shared across every tensor it sizes.
///
/// ### Description
/// Models the fixed arena of an embedded interpreter. Each tensor it sizes
/// is stamped with the bytes charged for it. Resizing a stamped tensor
/// releases those bytes back to the budget before charging the new size, so
/// repeated resolution of the same node does not leak budget. Tensors built
/// by the host or sized by another allocator carry no stamp from this one
/// and release nothing.
#[derive(Debug)]
pub struct BoundedAllocator {
    id: u64,
    capacity_bytes: usize,
    used_bytes: usize,
}

impl BoundedAllocator {
    pub fn new(capacity_bytes: usize) -> Self {
        BoundedAllocator {
            id: NEXT_ALLOCATOR_ID.fetch_add(1, Ordering::Relaxed),
            capacity_bytes,
            used_bytes: 0,
        }
    }

    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }

    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    #[inline]
    pub fn remaining_bytes(&self) -> usize {
        self.capacity_bytes - self.used_bytes
    }

    /// Returns the bytes charged for `tensor` to the budget.
    ///
    /// For hosts dropping a tensor this allocator sized. A no-op for any
    /// other tensor.
    pub fn release(&mut self, tensor: &mut Tensor) {
        if tensor.charge().is_some_and(|c| c.allocator == self.id) {
            let released = self.charged_for(tensor);
            debug!("releasing {} ({} bytes)", tensor.label(), released);
            self.used_bytes -= released;
            tensor.set_charge(None);
        }
    }

    /// Bytes this allocator charged for `tensor`, `0` if it never sized it.
    fn charged_for(&self, tensor: &Tensor) -> usize {
        match tensor.charge() {
            Some(Charge { allocator, bytes }) if allocator == self.id => bytes.min(self.used_bytes),
            _ => 0,
        }
    }
}

impl TensorAllocator for BoundedAllocator {
    fn allocate_or_resize(
        &mut self,
        tensor: &mut Tensor,
        dtype: ElementType,
        shape: &Shape,
    ) -> Result<(), KernelError> {
        let requested = shape.num_elements().ok_or_else(|| KernelError::AllocationFailure {
            requested: usize::MAX,
            message: Some(format!("element count of {} overflows usize", shape)),
        })?;
        let requested_bytes = requested
            .checked_mul(dtype.size_of())
            .ok_or(KernelError::AllocationFailure {
                requested,
                message: Some("byte size overflows usize".to_string()),
            })?;
        let released = self.charged_for(tensor);
        let available = self.capacity_bytes - (self.used_bytes - released);
        if requested_bytes > available {
            return Err(KernelError::AllocationFailure {
                requested,
                message: Some(format!(
                    "{} bytes requested, {} of {} available",
                    requested_bytes, available, self.capacity_bytes
                )),
            });
        }
        tensor.reset(dtype, shape.clone())?;
        debug!("allocating {} as {} {} ({} bytes)", tensor.label(), dtype, shape, requested_bytes);
        self.used_bytes = self.used_bytes - released + requested_bytes;
        tensor.set_charge(Some(Charge {
            allocator: self.id,
            bytes: requested_bytes,
        }));
        Ok(())
    }
}
