// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Type dispatch and elementwise application for kernel operations.

pub mod binary_map;
pub mod dispatch;

pub use binary_map::{binary_function, broadcast_binary_function};
pub use dispatch::{FLOOR_TYPES, check_operand_types};
