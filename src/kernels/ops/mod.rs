// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators Module
//!
//! Tensor-level operators and their host lifecycle hooks.

pub mod binary;
pub mod floor_div;
pub mod floor_mod;
pub mod registration;
pub mod state;

pub use binary::BinaryKernel;
pub use floor_div::FloorDiv;
pub use floor_mod::FloorMod;
pub use registration::Registration;
pub use state::{DEFAULT_MAX_BROADCAST_RANK, KernelOptions, OpState};
