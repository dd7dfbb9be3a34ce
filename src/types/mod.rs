//! Shared data structures for the crop recommendation service
//!
//! - `recommendation`: the resolved record and the per-endpoint responses
//! - `catalog`: agro-zone and model metadata entries served verbatim

mod catalog;
mod recommendation;

pub use catalog::*;
pub use recommendation::*;
