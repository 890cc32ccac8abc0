//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # Mintensor
//!
//! Broadcasting elementwise binary kernels for tensor execution engines.
//!
//! A host graph owns the tensors, creates one [`OpState`] per operator node,
//! resolves shapes whenever its inputs change, and evaluates on every run.
//! The kernels here cover the middle of that loop: NumPy-style broadcast
//! shape resolution, output sizing through the host's [`TensorAllocator`],
//! closed-set type dispatch, and the broadcast-aware elementwise loop.
//!
//! ```rust
//! use mintensor::{Tensor, kernels::ops::floor_div::floor_div};
//!
//! let lhs = Tensor::full([2, 3], 8i32);
//! let rhs = Tensor::from_vec([1, 3], vec![2i32, 4, 8]).unwrap();
//! let out = floor_div(&lhs, &rhs).unwrap();
//! assert_eq!(out.to_vec::<i32>(), Some(vec![4, 2, 1, 4, 2, 1]));
//! ```

pub mod enums {
    pub mod element_type;
    pub mod error;
    pub mod tensor_data;
}

pub mod structs {
    pub mod allocator;
    pub mod buffer;
    pub mod shape;
    pub mod tensor;
}

pub mod traits {
    pub mod allocate;
    pub mod element;
    pub mod type_unions;
}

pub mod kernels {
    pub mod arithmetic {
        pub mod floor;
    }
    pub mod broadcast;
    pub mod ops;
    pub mod routing;
}

pub use enums::element_type::ElementType;
pub use enums::error::KernelError;
pub use enums::tensor_data::TensorData;

pub use structs::allocator::{BoundedAllocator, HeapAllocator};
pub use structs::shape::Shape;
pub use structs::tensor::Tensor;

pub use traits::allocate::TensorAllocator;
pub use traits::element::Element;
pub use traits::type_unions::{Float, Integer, Numeric};

pub use kernels::arithmetic::floor::FloorArith;
pub use kernels::broadcast::BroadcastPlan;
pub use kernels::ops::{
    BinaryKernel, FloorDiv, FloorMod, KernelOptions, OpState, Registration,
};
