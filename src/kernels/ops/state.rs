// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operator State Module
//!
//! Per-instance state for a binary operator node.
//!
//! The host creates one [`OpState`] when it attaches the operator to its
//! graph, keeps it in its operator table, and passes it by reference into
//! every resolve and evaluate call. Dropping it is the destroy hook.

use crate::enums::element_type::ElementType;
use crate::structs::shape::Shape;

/// Broadcast rank ceiling applied when no options are given.
pub const DEFAULT_MAX_BROADCAST_RANK: usize = 4;

/// Construction-time options for an operator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelOptions {
    /// Highest output rank the broadcast path accepts. Same-shape operands
    /// take the flat path and are not subject to it.
    pub max_rank: usize,
}

impl Default for KernelOptions {
    fn default() -> Self {
        KernelOptions {
            max_rank: DEFAULT_MAX_BROADCAST_RANK,
        }
    }
}

impl KernelOptions {
    /// Options with no broadcast rank ceiling.
    pub fn unbounded() -> Self {
        KernelOptions { max_rank: usize::MAX }
    }

    pub fn with_max_rank(mut self, max_rank: usize) -> Self {
        self.max_rank = max_rank;
        self
    }
}

/// Shapes and type captured by the last successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) lhs: Shape,
    pub(crate) rhs: Shape,
    pub(crate) output: Shape,
    pub(crate) dtype: ElementType,
}

/// # OpState
///
/// Mutable per-instance data.
///
/// ### Lifecycle
/// `Created` → resolved (possibly many times as inputs change) → evaluated
/// (any number of times) → dropped. Evaluation is only reachable after a
/// successful resolution for the current input shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct OpState {
    options: KernelOptions,
    requires_broadcast: bool,
    resolution: Option<Resolution>,
}

impl OpState {
    pub fn new(options: KernelOptions) -> Self {
        OpState {
            options,
            requires_broadcast: false,
            resolution: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &KernelOptions {
        &self.options
    }

    /// Whether the last resolution requires the broadcast path.
    #[inline]
    pub fn requires_broadcast(&self) -> bool {
        self.requires_broadcast
    }

    /// `true` once shapes have been resolved successfully and not invalidated since.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Output shape of the last successful resolution.
    pub fn output_shape(&self) -> Option<&Shape> {
        self.resolution.as_ref().map(|r| &r.output)
    }

    pub(crate) fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    pub(crate) fn record(&mut self, resolution: Resolution, requires_broadcast: bool) {
        self.requires_broadcast = requires_broadcast;
        self.resolution = Some(resolution);
    }

    pub(crate) fn invalidate(&mut self) {
        self.requires_broadcast = false;
        self.resolution = None;
    }
}

impl Default for OpState {
    fn default() -> Self {
        OpState::new(KernelOptions::default())
    }
}
