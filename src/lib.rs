//! Overlapping community detection by speaker-listener label propagation.

pub mod community;
pub mod front_end;
pub mod graph;
pub mod propagation;
pub mod types;
