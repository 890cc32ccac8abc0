// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Binary Map Module
//!
//! Elementwise application of a binary function over typed slices, with and
//! without broadcasting.
//!
//! Callers have already validated lengths against the shapes, so these loops
//! carry no checks beyond debug assertions.

use crate::kernels::broadcast::BroadcastPlan;
use crate::traits::element::Element;

/// Applies `f` at every linear index: `out[i] = f(lhs[i], rhs[i])`.
///
/// All three slices share one shape. Under `parallel_proc` the work is split
/// across the rayon pool.
pub fn binary_function<T, F>(lhs: &[T], rhs: &[T], out: &mut [T], f: F)
where
    T: Element,
    F: Fn(T, T) -> T + Send + Sync,
{
    debug_assert_eq!(lhs.len(), out.len());
    debug_assert_eq!(rhs.len(), out.len());

    #[cfg(feature = "parallel_proc")]
    {
        use rayon::prelude::*;
        out.par_iter_mut()
            .zip(lhs.par_iter())
            .zip(rhs.par_iter())
            .for_each(|((o, &a), &b)| *o = f(a, b));
    }

    #[cfg(not(feature = "parallel_proc"))]
    {
        for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
            *o = f(a, b);
        }
    }
}

/// Applies `f` over the output index space of `plan`, in row-major order.
///
/// Walks the innermost axis as a strided run and carries the outer axes
/// with an odometer, so no per-element index arithmetic is repeated.
pub fn broadcast_binary_function<T, F>(
    plan: &BroadcastPlan,
    lhs: &[T],
    rhs: &[T],
    out: &mut [T],
    f: F,
) where
    T: Element,
    F: Fn(T, T) -> T,
{
    if plan.dims().contains(&0) {
        return;
    }
    debug_assert_eq!(
        Some(out.len()),
        plan.dims().iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    );
    let rank = plan.rank();
    if rank == 0 {
        out[0] = f(lhs[0], rhs[0]);
        return;
    }

    let dims = plan.dims();
    let ls = plan.lhs_strides();
    let rs = plan.rhs_strides();
    let inner = dims[rank - 1];
    let (ls_inner, rs_inner) = (ls[rank - 1], rs[rank - 1]);

    // Outer multi-index and the operand offsets it maps to.
    let mut index = vec![0usize; rank - 1];
    let mut l_base = 0usize;
    let mut r_base = 0usize;

    for row in out.chunks_exact_mut(inner) {
        let mut l = l_base;
        let mut r = r_base;
        for o in row.iter_mut() {
            *o = f(lhs[l], rhs[r]);
            l += ls_inner;
            r += rs_inner;
        }

        for axis in (0..rank - 1).rev() {
            index[axis] += 1;
            l_base += ls[axis];
            r_base += rs[axis];
            if index[axis] < dims[axis] {
                break;
            }
            l_base -= ls[axis] * dims[axis];
            r_base -= rs[axis] * dims[axis];
            index[axis] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn plan(lhs: &[usize], rhs: &[usize], out: &[usize]) -> BroadcastPlan {
        BroadcastPlan::new(&Shape::from(lhs), &Shape::from(rhs), &Shape::from(out)).unwrap()
    }

    #[test]
    fn test_binary_function_flat() {
        let a = [1i32, 2, 3];
        let b = [10i32, 20, 30];
        let mut out = [0i32; 3];
        binary_function(&a, &b, &mut out, |x, y| x + y);
        assert_eq!(out, [11, 22, 33]);
    }

    #[test]
    fn test_broadcast_row() {
        let a = [8i32; 6];
        let b = [2i32, 4, 8];
        let mut out = [0i32; 6];
        broadcast_binary_function(&plan(&[2, 3], &[1, 3], &[2, 3]), &a, &b, &mut out, |x, y| x / y);
        assert_eq!(out, [4, 2, 1, 4, 2, 1]);
    }

    #[test]
    fn test_broadcast_column_against_row() {
        let a = [1i32, 2, 3];
        let b = [10i32, 20];
        let mut out = [0i32; 6];
        broadcast_binary_function(&plan(&[3, 1], &[2], &[3, 2]), &a, &b, &mut out, |x, y| x + y);
        assert_eq!(out, [11, 21, 12, 22, 13, 23]);
    }

    #[test]
    fn test_broadcast_scalar_rank0() {
        let a = [5.0f32];
        let b = [2.0f32];
        let mut out = [0.0f32];
        broadcast_binary_function(&plan(&[], &[], &[]), &a, &b, &mut out, |x, y| x * y);
        assert_eq!(out, [10.0]);
    }

    #[test]
    fn test_broadcast_matches_naive_mapping_rank4() {
        let lhs_shape = [2usize, 1, 3, 1];
        let rhs_shape = [4usize, 1, 2];
        let out_shape = [2usize, 4, 3, 2];
        let p = plan(&lhs_shape, &rhs_shape, &out_shape);
        let a: Vec<i32> = (0..6).collect();
        let b: Vec<i32> = (0..8).map(|v| v * 100).collect();
        let mut out = vec![0i32; 48];
        broadcast_binary_function(&p, &a, &b, &mut out, |x, y| x + y);

        let mut k = 0;
        for i0 in 0..2 {
            for i1 in 0..4 {
                for i2 in 0..3 {
                    for i3 in 0..2 {
                        let (l, r) = p.source_offsets(&[i0, i1, i2, i3]);
                        assert_eq!(out[k], a[l] + b[r]);
                        k += 1;
                    }
                }
            }
        }
    }

    #[test]
    fn test_broadcast_empty_output_is_noop() {
        let a: [i32; 0] = [];
        let b = [1i32, 2, 3];
        let mut out: [i32; 0] = [];
        broadcast_binary_function(&plan(&[0, 3], &[1, 3], &[0, 3]), &a, &b, &mut out, |x, y| x + y);
    }
}
