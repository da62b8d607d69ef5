//! The edge-list front end.

pub use self::error::Result;
pub use self::parser::{parse, EdgeList, EdgeListRule};

mod error;
mod parser;
