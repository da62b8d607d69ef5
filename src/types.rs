//! Various types related to label propagation.

/// The vertex id type.
pub type VId = usize;

/// The label id type.
///
/// A label is seeded as the id of one vertex and keeps that value while it
/// propagates through the graph.
pub type Label = VId;

/// The occurrence count type.
pub type Count = u64;
