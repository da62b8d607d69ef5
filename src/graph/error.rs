//! Error management.

use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "declared {} edges but inserted {}", declared, inserted)]
    EdgeCountMismatch { declared: usize, inserted: usize },
    #[display(fmt = "self loop at vertex {}", _0)]
    SelfLoop(VId),
    #[display(fmt = "duplicate edge ({}, {})", _0, _1)]
    DuplicateEdge(VId, VId),
    #[display(fmt = "vertex {} out of range (declared {} vertices)", _0, _1)]
    VertexOutOfRange(VId, usize),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
