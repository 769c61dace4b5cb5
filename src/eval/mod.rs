//! Position evaluation

pub mod heuristic;

pub use heuristic::{flip_gain, heuristic};
