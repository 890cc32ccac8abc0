// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *Mintensor* Error Type
//!
//! Defines the unified error type returned by every kernel lifecycle hook.
//!
//! ## Features
//! - Covers broadcast shape mismatches, operand type mismatches, unsupported
//! element types, numeric domain violations and host allocation failures.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

use crate::enums::element_type::ElementType;
use crate::structs::shape::Shape;

/// Catch all error type for `Mintensor` kernels.
///
/// Every variant is terminal for the call that produced it.
/// On error the output tensor has not been written.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Axes are not broadcast-compatible, the broadcast rank is above the
    /// configured ceiling, or the shapes no longer match the resolved ones.
    ShapeMismatch {
        lhs: Shape,
        rhs: Shape,
        message: Option<String>,
    },
    /// The two operands carry different element types.
    TypeMismatch {
        lhs: ElementType,
        rhs: ElementType,
    },
    /// The element type is outside the kernel's supported set.
    UnsupportedType {
        dtype: ElementType,
        op: &'static str,
    },
    /// An operand value lies outside the operation's domain, e.g., a zero divisor.
    DomainError {
        op: &'static str,
        message: String,
    },
    /// The host could not size the output tensor.
    AllocationFailure {
        requested: usize,
        message: Option<String>,
    },
    /// Buffer length disagrees with the element count of the shape.
    LengthMismatch {
        expected: usize,
        found: usize,
    },
}

impl KernelError {
    /// Shorthand for a [`KernelError::ShapeMismatch`] with a message.
    pub(crate) fn shape_mismatch(lhs: &Shape, rhs: &Shape, message: impl Into<String>) -> Self {
        KernelError::ShapeMismatch {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ShapeMismatch { lhs, rhs, message } => {
                if let Some(msg) = message {
                    write!(f, "Shape mismatch between {} and {}: {}", lhs, rhs, msg)
                } else {
                    write!(f, "Shape mismatch: {} and {} are not broadcast-compatible.", lhs, rhs)
                }
            }
            KernelError::TypeMismatch { lhs, rhs } => {
                write!(f, "Type mismatch: operands have types '{}' and '{}'.", lhs, rhs)
            }
            KernelError::UnsupportedType { dtype, op } => {
                write!(f, "Type '{}' is not supported by {}.", dtype, op)
            }
            KernelError::DomainError { op, message } => {
                write!(f, "Domain error in {}: {}", op, message)
            }
            KernelError::AllocationFailure { requested, message } => {
                if let Some(msg) = message {
                    write!(f, "Allocation failure for {} elements: {}", requested, msg)
                } else {
                    write!(f, "Allocation failure: could not size output for {} elements.", requested)
                }
            }
            KernelError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: shape requires {} elements, buffer has {}.", expected, found)
            }
        }
    }
}

impl Error for KernelError {}
