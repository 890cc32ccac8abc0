// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ElementType Enum Module
//!
//! Runtime type tag carried by every [`crate::Tensor`].
//!
//! Kernels select their monomorphised evaluation path by matching on this tag.

use std::fmt::{Display, Formatter};

/// Element type of a tensor buffer.
///
/// Covers everything a host may store. Each kernel declares the subset it
/// accepts and rejects the rest with [`crate::KernelError::UnsupportedType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementType {
    #[default]
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    Bool,
}

impl ElementType {
    /// Lower-case type name, as used in kernel log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Int8 => "int8",
            ElementType::Int16 => "int16",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::UInt8 => "uint8",
            ElementType::Bool => "bool",
        }
    }

    /// Width of one element in bytes.
    #[inline]
    pub fn size_of(&self) -> usize {
        match self {
            ElementType::Float32 | ElementType::Int32 => 4,
            ElementType::Float64 | ElementType::Int64 => 8,
            ElementType::Int16 => 2,
            ElementType::Int8 | ElementType::UInt8 | ElementType::Bool => 1,
        }
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, ElementType::Float32 | ElementType::Float64)
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
