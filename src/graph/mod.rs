//! The undirected graph and the per-vertex label memories.

pub use self::error::{Err, Result};
pub use self::graph::Graph;
pub use self::memory::Memory;

mod error;
mod graph;
mod memory;
