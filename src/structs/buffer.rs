// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Buffer Module
//!
//! Backing storage for tensor elements.
//!
//! With the `aligned_storage` feature the buffer is a 64-byte aligned
//! `Vec64<T>`, otherwise a plain `Vec<T>`. Both deref to `[T]`, which is the
//! only surface the kernels touch.

#[cfg(feature = "aligned_storage")]
pub type Buffer<T> = vec64::Vec64<T>;

#[cfg(not(feature = "aligned_storage"))]
pub type Buffer<T> = Vec<T>;

/// Builds a buffer of `len` copies of `value`.
#[inline]
pub fn filled<T: Copy>(len: usize, value: T) -> Buffer<T> {
    std::iter::repeat(value).take(len).collect()
}

/// Builds a buffer from a `Vec`, moving it when no realignment is needed.
#[inline]
pub fn from_vec<T: Copy>(values: Vec<T>) -> Buffer<T> {
    #[cfg(feature = "aligned_storage")]
    {
        values.into_iter().collect()
    }
    #[cfg(not(feature = "aligned_storage"))]
    {
        values
    }
}
