// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Element Trait Module
//!
//! Connects a Rust primitive to its [`ElementType`] tag and its
//! [`TensorData`] variant, so generic kernels can move between the runtime tag
//! and typed slices without conversion.

use std::fmt::Debug;

use crate::enums::element_type::ElementType;
use crate::enums::tensor_data::TensorData;
use crate::structs::buffer::from_vec;

/// Trait for types storable in a [`crate::Tensor`].
///
/// Useful when specifying `my_fn::<T: Element>() {}`.
pub trait Element: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Runtime tag for `Self`.
    const DTYPE: ElementType;

    /// Typed view, `None` if `data` holds another type.
    fn slice(data: &TensorData) -> Option<&[Self]>;

    /// Mutable typed view, `None` if `data` holds another type.
    fn slice_mut(data: &mut TensorData) -> Option<&mut [Self]>;

    /// Wraps an owned vector into the matching variant.
    fn wrap(values: Vec<Self>) -> TensorData;
}

macro_rules! impl_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: ElementType = ElementType::$variant;

                #[inline]
                fn slice(data: &TensorData) -> Option<&[Self]> {
                    match data {
                        TensorData::$variant(buf) => Some(&buf[..]),
                        _ => None,
                    }
                }

                #[inline]
                fn slice_mut(data: &mut TensorData) -> Option<&mut [Self]> {
                    match data {
                        TensorData::$variant(buf) => Some(&mut buf[..]),
                        _ => None,
                    }
                }

                #[inline]
                fn wrap(values: Vec<Self>) -> TensorData {
                    TensorData::$variant(from_vec(values))
                }
            }
        )*
    };
}

impl_element!(
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    bool => Bool,
);
