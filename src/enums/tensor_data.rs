// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **TensorData Module** - *Typed Tensor Storage for Unified Signature Dispatch*
//!
//! `TensorData` unifies the typed buffers a host can hand to a kernel
//! into a single enum.
//!
//! ## Features
//! - one variant per [`ElementType`], so the runtime tag and the storage never disagree
//! - typed slice access through the [`Element`] trait, zero-cost when the type is known
//! - centralises dispatch for the kernels under [`crate::kernels`]

use crate::enums::element_type::ElementType;
use crate::structs::buffer::{Buffer, filled};
use crate::traits::element::Element;

/// # TensorData
///
/// Unified typed tensor storage.
///
/// ## Usage
/// - Hosts construct it through `From<Vec<T>>` or [`TensorData::zeros`].
/// - Kernels reach the typed slice with [`Element::slice`] once the element
///   type has been dispatched, so no conversion ever happens on the hot path.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Float32(Buffer<f32>),
    Float64(Buffer<f64>),
    Int8(Buffer<i8>),
    Int16(Buffer<i16>),
    Int32(Buffer<i32>),
    Int64(Buffer<i64>),
    UInt8(Buffer<u8>),
    Bool(Buffer<bool>),
}

/// Applies `$body` to the buffer of whichever variant `$data` holds.
macro_rules! with_buffer {
    ($data:expr, $buf:ident => $body:expr) => {
        match $data {
            TensorData::Float32($buf) => $body,
            TensorData::Float64($buf) => $body,
            TensorData::Int8($buf) => $body,
            TensorData::Int16($buf) => $body,
            TensorData::Int32($buf) => $body,
            TensorData::Int64($buf) => $body,
            TensorData::UInt8($buf) => $body,
            TensorData::Bool($buf) => $body,
        }
    };
}

impl TensorData {
    /// Default-filled storage of `dtype` holding `len` elements.
    pub fn zeros(dtype: ElementType, len: usize) -> Self {
        match dtype {
            ElementType::Float32 => TensorData::Float32(filled(len, 0.0)),
            ElementType::Float64 => TensorData::Float64(filled(len, 0.0)),
            ElementType::Int8 => TensorData::Int8(filled(len, 0)),
            ElementType::Int16 => TensorData::Int16(filled(len, 0)),
            ElementType::Int32 => TensorData::Int32(filled(len, 0)),
            ElementType::Int64 => TensorData::Int64(filled(len, 0)),
            ElementType::UInt8 => TensorData::UInt8(filled(len, 0)),
            ElementType::Bool => TensorData::Bool(filled(len, false)),
        }
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        with_buffer!(self, buf => buf.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runtime type tag of the stored elements.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        match self {
            TensorData::Float32(_) => ElementType::Float32,
            TensorData::Float64(_) => ElementType::Float64,
            TensorData::Int8(_) => ElementType::Int8,
            TensorData::Int16(_) => ElementType::Int16,
            TensorData::Int32(_) => ElementType::Int32,
            TensorData::Int64(_) => ElementType::Int64,
            TensorData::UInt8(_) => ElementType::UInt8,
            TensorData::Bool(_) => ElementType::Bool,
        }
    }

    /// Size of the stored elements in bytes.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.len() * self.element_type().size_of()
    }

    /// Typed view of the storage, `None` when `T` is not the stored type.
    #[inline]
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::slice(self)
    }

    /// Mutable typed view of the storage, `None` when `T` is not the stored type.
    #[inline]
    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        T::slice_mut(self)
    }
}

impl<T: Element> From<Vec<T>> for TensorData {
    fn from(values: Vec<T>) -> Self {
        T::wrap(values)
    }
}
