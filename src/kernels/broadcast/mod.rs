// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Broadcasting Module
//!
//! Shape-level broadcasting: deciding whether two operand shapes combine,
//! what the output shape is, and how each output position maps back to an
//! element of each operand.
//!
//! ```rust
//! use mintensor::Shape;
//! use mintensor::kernels::broadcast::{broadcast_shape, BroadcastPlan};
//!
//! let lhs = Shape::from([2, 3]);
//! let rhs = Shape::from([1, 3]);
//! let out = broadcast_shape(&lhs, &rhs).unwrap();
//! assert_eq!(out, Shape::from([2, 3]));
//!
//! let plan = BroadcastPlan::new(&lhs, &rhs, &out).unwrap();
//! assert_eq!(plan.source_offsets(&[1, 2]), (5, 2));
//! ```

pub mod plan;
pub mod shape;

pub use plan::BroadcastPlan;
pub use shape::{ResolvedShape, broadcast_shape, have_same_shapes, resolve_output_shape};
